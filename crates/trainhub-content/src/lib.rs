//! Domain core for the bilingual training portal.
//!
//! Holds the content model and its built-in seed data, path addressing into
//! the JSON form of a bundle, and the draft editing state machine. Nothing
//! here touches the network or the filesystem; the backend crate owns
//! persistence and translation requests and drives
//! [`editor::DraftEditor`] through its transitions.

pub mod defaults;
pub mod editor;
pub mod model;
pub mod path;
