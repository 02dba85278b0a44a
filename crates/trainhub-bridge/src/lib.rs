//! Communication bridge between frontend and backend.
//!
//! This crate defines the protocol that connects a presentational frontend
//! with the asynchronous backend responsible for content persistence, the
//! live editor's draft state, and machine translation.
//!
//! The design is deliberately lightweight and unidirectional:
//! - The frontend sends commands (e.g., unlock the editor, edit a field,
//!   request a translation, save).
//! - The backend pushes events (e.g., the committed content, draft updates,
//!   translation progress).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`], providing back-pressure, async compatibility, and
//! clean separation of concerns.

use tokio::sync::mpsc::{self, Receiver, Sender};
use trainhub_content::editor::TranslationKey;
use trainhub_content::model::ContentBundle;
use trainhub_content::path::ContentPath;

/// Messages emitted by the backend to inform the frontend of state updates.
///
/// These are typically sent in response to frontend commands or to push the
/// settled half of an asynchronous operation (e.g., a finished translation).
#[derive(Debug, Clone)]
pub enum MessageFromBackend {
    /// The committed content bundle, sent on request and after each save.
    ContentResponse(ContentBundle),
    /// The passcode was accepted; carries the fresh clean draft.
    EditorOpened(ContentBundle),
    /// The passcode was rejected; carries the user-facing message.
    UnlockRejected { message: String },
    /// The draft changed; carries the new draft and the dirty flag.
    DraftStateUpdate { draft: ContentBundle, dirty: bool },
    /// A translation request was accepted and its field is now busy.
    TranslationStarted(TranslationKey),
    /// A translation settled and its field is no longer busy.
    TranslationFinished { key: TranslationKey, ok: bool },
    /// The editor left edit mode.
    EditorClosed,
}

/// Commands issued by the frontend to control or query the backend.
///
/// These messages drive the core functionality of the application.
#[derive(Debug, Clone)]
pub enum MessageToBackend {
    /// Request for the committed content bundle.
    ContentRequest,
    /// Attempt to unlock the live editor with a passcode.
    UnlockRequest(String),
    /// Overwrite the string leaf at a path in the draft.
    EditField { path: ContentPath, value: String },
    /// Append a new training process with placeholder content.
    AddProcess,
    /// Remove the process at a position.
    DeleteProcess(usize),
    /// Append a placeholder video to the process at a position.
    AddVideo(usize),
    /// Remove one video from a process's list.
    DeleteVideo { process: usize, video: usize },
    /// Translate the Vietnamese text of one bilingual field into Thai.
    TranslateField(TranslationKey),
    /// Commit the draft and persist it.
    SaveRequest,
    /// Drop all draft changes and close the editor.
    DiscardRequest,
    /// Close the editor without committing the draft.
    CloseEditorRequest,
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// frontend and backend.
pub struct BridgeChannels {
    /// Receiver used by the frontend to get messages from the backend.
    pub frontend_rx: Receiver<MessageFromBackend>,
    /// Sender used by the frontend to send commands to the backend.
    pub frontend_tx: Sender<MessageToBackend>,

    /// Receiver used by the backend to get commands from the frontend.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the backend to send events/responses to the frontend.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_frontend_tx, to_frontend_rx) = mpsc::channel(buffer);
        Self {
            frontend_tx: to_backend_tx,
            frontend_rx: to_frontend_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_frontend_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(64)
    }
}
