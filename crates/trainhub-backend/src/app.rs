//! Application context and message dispatching utilities.
//!
//! The context contains the shared state and provides helpers for sending
//! responses back to the frontend bridge.

use std::sync::Arc;

use tokio::sync::mpsc::{Receiver, Sender};
use trainhub_bridge::{MessageFromBackend, MessageToBackend};

use crate::services;
use crate::state::SharedState;

/// Shared application context passed to services and message handlers.
pub(crate) struct AppContext {
    /// Mutable runtime application state shared across services.
    pub state: SharedState,
    /// Outbound channel to the frontend bridge.
    pub tx: Sender<MessageFromBackend>,
}

impl AppContext {
    /// Read and dispatch messages from the frontend bridge until it closes.
    pub async fn consume_bridge_messages(self: &Arc<Self>, mut rx: Receiver<MessageToBackend>) {
        while let Some(message) = rx.recv().await {
            log::debug!("Got a frontend message: {message:?}");
            self.dispatch_message(message).await;
        }
    }

    /// Dispatches the received message from frontend down to individual
    /// service handlers.
    async fn dispatch_message(self: &Arc<Self>, message: MessageToBackend) {
        match message {
            MessageToBackend::ContentRequest => {
                services::content_service::handle_content_request(self.clone()).await;
            }
            MessageToBackend::UnlockRequest(passcode) => {
                services::access_service::handle_unlock_request(self.clone(), passcode).await;
            }
            MessageToBackend::EditField { path, value } => {
                services::editor_service::handle_edit_field(self.clone(), path, value).await;
            }
            MessageToBackend::AddProcess => {
                services::editor_service::handle_add_process(self.clone()).await;
            }
            MessageToBackend::DeleteProcess(index) => {
                services::editor_service::handle_delete_process(self.clone(), index).await;
            }
            MessageToBackend::AddVideo(process) => {
                services::editor_service::handle_add_video(self.clone(), process).await;
            }
            MessageToBackend::DeleteVideo { process, video } => {
                services::editor_service::handle_delete_video(self.clone(), process, video).await;
            }
            MessageToBackend::TranslateField(key) => {
                services::translation_service::handle_translate_request(self.clone(), key).await;
            }
            MessageToBackend::SaveRequest => {
                services::editor_service::handle_save_request(self.clone()).await;
            }
            MessageToBackend::DiscardRequest => {
                services::editor_service::handle_discard_request(self.clone()).await;
            }
            MessageToBackend::CloseEditorRequest => {
                services::editor_service::handle_close_request(self.clone()).await;
            }
        }
    }

    /// Send a message to the frontend bridge.
    pub async fn send(&self, message: MessageFromBackend) {
        self.tx
            .send(message)
            .await
            .expect("failed to send message to frontend");
    }
}
