//! Shared-passcode gate in front of the live editor.

use trainhub_bridge::MessageFromBackend;

/// Inline message shown when the passcode does not match.
const WRONG_PASSCODE_MESSAGE: &str = "Mật khẩu không đúng. Vui lòng thử lại.";

/// Handles an unlock attempt (see
/// [`trainhub_bridge::MessageToBackend::UnlockRequest`]).
///
/// A single verbatim comparison against the configured access code. There is
/// no lockout and no attempt tracking; a rejection only carries the message
/// the frontend shows inline.
pub async fn handle_unlock_request(context: super::AppContextHandle, passcode: String) {
    let opened = {
        let mut state = context.state.write().await;
        if passcode == state.config.access_code {
            state.editor.open();
            Some(state.editor.draft().clone())
        } else {
            None
        }
    };

    match opened {
        Some(draft) => {
            log::info!("Live editor unlocked");
            context.send(MessageFromBackend::EditorOpened(draft)).await;
        }
        None => {
            log::warn!("Rejected an unlock attempt");
            context
                .send(MessageFromBackend::UnlockRejected {
                    message: WRONG_PASSCODE_MESSAGE.to_string(),
                })
                .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testutil::test_context;

    #[tokio::test]
    async fn the_configured_passcode_opens_a_clean_editor() {
        let (context, mut rx) = test_context();
        handle_unlock_request(context.clone(), "483759".to_string()).await;

        match rx.recv().await {
            Some(MessageFromBackend::EditorOpened(draft)) => {
                let state = context.state.read().await;
                assert!(state.editor.is_open());
                assert!(!state.editor.is_dirty());
                assert_eq!(&draft, state.editor.committed());
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test]
    async fn a_wrong_passcode_is_rejected_with_a_message() {
        let (context, mut rx) = test_context();
        handle_unlock_request(context.clone(), "000000".to_string()).await;

        match rx.recv().await {
            Some(MessageFromBackend::UnlockRejected { message }) => {
                assert_eq!(message, WRONG_PASSCODE_MESSAGE);
            }
            other => panic!("unexpected message: {other:?}"),
        }
        assert!(!context.state.read().await.editor.is_open());
    }

    #[tokio::test]
    async fn unlocking_again_discards_the_previous_draft() {
        let (context, mut rx) = test_context();
        handle_unlock_request(context.clone(), "483759".to_string()).await;
        let _ = rx.recv().await;

        {
            let mut state = context.state.write().await;
            let path = trainhub_content::path::ContentPath::parse("siteConfig.title.vi");
            assert!(state.editor.set_field(&path, "Cổng Tạm"));
        }

        handle_unlock_request(context.clone(), "483759".to_string()).await;
        match rx.recv().await {
            Some(MessageFromBackend::EditorOpened(draft)) => {
                let state = context.state.read().await;
                assert!(!state.editor.is_dirty());
                assert_eq!(&draft, state.editor.committed());
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
