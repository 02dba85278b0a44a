//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, the persisted content, shared
//! state, and the message dispatch loop that listens to frontend bridge
//! requests.

use std::{sync::Arc, thread};

use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
};
use trainhub_bridge::{MessageFromBackend, MessageToBackend};
use trainhub_content::editor::DraftEditor;

use crate::app::AppContext;
use crate::services::content_service;
use crate::state::State;

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    let (config, data_dir) = crate::config::load_config()
        .await
        .expect("failed to load config");

    let content_path = config
        .content_path
        .clone()
        .unwrap_or_else(|| data_dir.join(content_service::CONTENT_FILE_NAME));
    let committed = content_service::load_content(&content_path)
        .await
        .unwrap_or_default();

    let state = Arc::new(RwLock::new(State {
        config,
        content_path,
        editor: DraftEditor::new(committed),
        request_client: reqwest::Client::new(),
    }));

    let context = Arc::new(AppContext { state, tx });
    context.consume_bridge_messages(rx).await;
}

/// Spawn the backend runtime and begin processing bridge messages.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to build tokio runtime");
        runtime.block_on(async { setup_backend(rx, tx).await });
    });
}
