//! Backend service handlers for frontend-driven requests.
//!
//! This module groups async request handlers that operate on the shared
//! `AppContext`, perform side effects (network, filesystem), and emit state
//! updates back to the frontend.

pub mod access_service;
pub mod content_service;
pub mod editor_service;
pub mod translation_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::app::AppContext>;

#[cfg(test)]
pub(crate) mod testutil {
    use std::sync::Arc;

    use tokio::sync::{RwLock, mpsc};
    use trainhub_bridge::MessageFromBackend;
    use trainhub_content::editor::DraftEditor;
    use trainhub_content::model::ContentBundle;

    use crate::app::AppContext;
    use crate::config::Config;
    use crate::state::State;

    use super::AppContextHandle;

    /// Context wired to an in-memory channel, for driving handlers directly.
    pub(crate) fn test_context() -> (AppContextHandle, mpsc::Receiver<MessageFromBackend>) {
        let (tx, rx) = mpsc::channel(16);
        let state = Arc::new(RwLock::new(State {
            config: Config::default(),
            content_path: std::env::temp_dir().join("trainhub-test-content.json"),
            editor: DraftEditor::new(ContentBundle::default()),
            request_client: reqwest::Client::new(),
        }));
        (Arc::new(AppContext { state, tx }), rx)
    }

    /// Same as [`test_context`], with the editor already unlocked.
    pub(crate) async fn open_test_context() -> (AppContextHandle, mpsc::Receiver<MessageFromBackend>)
    {
        let (context, rx) = test_context();
        context.state.write().await.editor.open();
        (context, rx)
    }
}
