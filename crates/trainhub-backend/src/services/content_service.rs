//! Persistence of the content bundle in a single JSON slot.

use std::path::Path;

use tokio::fs;
use tokio::io::AsyncWriteExt;
use trainhub_bridge::MessageFromBackend;
use trainhub_content::model::ContentBundle;

/// Well-known file name of the content slot inside the data directory.
pub(crate) const CONTENT_FILE_NAME: &str = "training_portal_data.json";

/// Errors that can occur while writing the content slot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// An I/O error occurred while creating, writing, or replacing the slot.
    #[error("failed to write content slot: {0}")]
    IoError(#[from] std::io::Error),
    /// The bundle could not be serialized to JSON.
    #[error("failed to serialize content: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Loads the persisted content bundle from `path`.
///
/// An absent slot, an unreadable slot, and a slot that fails to parse all
/// report `None`; the caller falls back to the built-in defaults.
pub async fn load_content(path: &Path) -> Option<ContentBundle> {
    let contents = match fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No saved content at {path:?}; using built-in defaults");
            return None;
        }
        Err(error) => {
            log::warn!("Failed to read content slot {path:?}: {error}");
            return None;
        }
    };
    match serde_json::from_str(&contents) {
        Ok(bundle) => {
            log::info!("Loaded content from {path:?}");
            Some(bundle)
        }
        Err(error) => {
            log::warn!("Discarding corrupt content slot {path:?}: {error}");
            None
        }
    }
}

/// Serializes `bundle` and overwrites the slot at `path`.
///
/// The bundle goes to a temporary file first and is moved into place, so the
/// slot never holds a partial write.
pub async fn save_content(path: &Path, bundle: &ContentBundle) -> Result<(), StorageError> {
    let contents = serde_json::to_string_pretty(bundle)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .await?;
    file.write_all(contents.as_bytes()).await?;
    file.sync_all().await?;
    fs::rename(&temp_path, path).await?;

    Ok(())
}

/// Handles an incoming content request (see
/// [`trainhub_bridge::MessageToBackend::ContentRequest`]).
pub async fn handle_content_request(context: super::AppContextHandle) {
    let bundle = {
        let state = context.state.read().await;
        state.editor.committed().clone()
    };
    context
        .send(MessageFromBackend::ContentResponse(bundle))
        .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testutil::test_context;

    #[tokio::test]
    async fn saved_content_loads_back_identically() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(CONTENT_FILE_NAME);

        let bundle = ContentBundle::default();
        save_content(&path, &bundle).await.expect("save content");
        let loaded = load_content(&path).await.expect("slot exists");
        assert_eq!(loaded, bundle);
    }

    #[tokio::test]
    async fn an_absent_slot_reports_none() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(CONTENT_FILE_NAME);
        assert!(load_content(&path).await.is_none());
    }

    #[tokio::test]
    async fn a_corrupt_slot_reports_none() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(CONTENT_FILE_NAME);
        fs::write(&path, b"{ not json").await.expect("write garbage");
        assert!(load_content(&path).await.is_none());
    }

    #[tokio::test]
    async fn saving_replaces_an_existing_slot() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(CONTENT_FILE_NAME);

        let mut bundle = ContentBundle::default();
        save_content(&path, &bundle).await.expect("save content");

        bundle.site_config.title.vi = "Cổng Mới".to_string();
        save_content(&path, &bundle).await.expect("save content again");

        let loaded = load_content(&path).await.expect("slot exists");
        assert_eq!(loaded.site_config.title.vi, "Cổng Mới");
    }

    #[tokio::test]
    async fn content_requests_answer_with_the_committed_bundle() {
        let (context, mut rx) = test_context();
        handle_content_request(context.clone()).await;
        match rx.recv().await {
            Some(MessageFromBackend::ContentResponse(bundle)) => {
                assert_eq!(&bundle, context.state.read().await.editor.committed());
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
