//! Draft mutation handlers for the live editor.
//!
//! Every accepted mutation answers with a fresh
//! [`MessageFromBackend::DraftStateUpdate`]; rejected mutations (closed
//! editor, unresolvable path, out-of-range position) stay silent apart from
//! a log line, leaving the frontend's last draft snapshot untouched.

use trainhub_bridge::MessageFromBackend;
use trainhub_content::editor::DraftEditor;
use trainhub_content::path::ContentPath;

use crate::services::content_service;

/// Runs one mutation against the editor and pushes the updated draft to the
/// frontend when the editor accepted it.
async fn apply_mutation<F>(context: super::AppContextHandle, mutate: F)
where
    F: FnOnce(&mut DraftEditor) -> bool,
{
    let update = {
        let mut state = context.state.write().await;
        if mutate(&mut state.editor) {
            Some((state.editor.draft().clone(), state.editor.is_dirty()))
        } else {
            None
        }
    };
    if let Some((draft, dirty)) = update {
        context
            .send(MessageFromBackend::DraftStateUpdate { draft, dirty })
            .await;
    }
}

/// Handles a field edit (see
/// [`trainhub_bridge::MessageToBackend::EditField`]).
pub async fn handle_edit_field(context: super::AppContextHandle, path: ContentPath, value: String) {
    apply_mutation(context, move |editor| editor.set_field(&path, &value)).await;
}

/// Handles a process insertion (see
/// [`trainhub_bridge::MessageToBackend::AddProcess`]).
pub async fn handle_add_process(context: super::AppContextHandle) {
    apply_mutation(context, |editor| editor.add_process()).await;
}

/// Handles a process removal (see
/// [`trainhub_bridge::MessageToBackend::DeleteProcess`]).
pub async fn handle_delete_process(context: super::AppContextHandle, index: usize) {
    apply_mutation(context, move |editor| editor.delete_process(index)).await;
}

/// Handles a video insertion (see
/// [`trainhub_bridge::MessageToBackend::AddVideo`]).
pub async fn handle_add_video(context: super::AppContextHandle, process: usize) {
    apply_mutation(context, move |editor| editor.add_video(process)).await;
}

/// Handles a video removal (see
/// [`trainhub_bridge::MessageToBackend::DeleteVideo`]).
pub async fn handle_delete_video(context: super::AppContextHandle, process: usize, video: usize) {
    apply_mutation(context, move |editor| editor.delete_video(process, video)).await;
}

/// Handles a save request (see
/// [`trainhub_bridge::MessageToBackend::SaveRequest`]).
///
/// Commits the draft, announces the new content and the now-clean draft, and
/// persists the bundle. A persistence failure is logged and does not roll
/// back the in-memory commit; the next successful save writes everything.
pub async fn handle_save_request(context: super::AppContextHandle) {
    let saved = {
        let mut state = context.state.write().await;
        let content_path = state.content_path.clone();
        state.editor.save().map(|bundle| (bundle, content_path))
    };
    let Some((bundle, content_path)) = saved else {
        return;
    };

    log::info!("Draft saved");
    context
        .send(MessageFromBackend::ContentResponse(bundle.clone()))
        .await;
    context
        .send(MessageFromBackend::DraftStateUpdate {
            draft: bundle.clone(),
            dirty: false,
        })
        .await;

    if let Err(error) = content_service::save_content(&content_path, &bundle).await {
        log::error!("Saved content was not persisted to {content_path:?}: {error}");
    }
}

/// Handles a discard request (see
/// [`trainhub_bridge::MessageToBackend::DiscardRequest`]).
pub async fn handle_discard_request(context: super::AppContextHandle) {
    let discarded = {
        let mut state = context.state.write().await;
        if state.editor.is_open() {
            state.editor.discard();
            true
        } else {
            false
        }
    };
    if discarded {
        log::info!("Draft discarded");
        context.send(MessageFromBackend::EditorClosed).await;
    }
}

/// Handles a close request (see
/// [`trainhub_bridge::MessageToBackend::CloseEditorRequest`]).
///
/// Leaves edit mode without committing; unsaved draft changes do not reach
/// the committed bundle and a later unlock starts from a fresh draft.
pub async fn handle_close_request(context: super::AppContextHandle) {
    let closed = {
        let mut state = context.state.write().await;
        if state.editor.is_open() {
            state.editor.close();
            true
        } else {
            false
        }
    };
    if closed {
        log::info!("Live editor closed");
        context.send(MessageFromBackend::EditorClosed).await;
    }
}
