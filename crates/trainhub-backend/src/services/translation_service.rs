//! Field-level machine translation for the live editor.
//!
//! Requests go to a Gemini-style `generateContent` endpoint: the outbound
//! body wraps a natural-language instruction embedding the source text, and
//! the first candidate of the response is expected to carry nothing but the
//! translated string.
//!
//! The draft editor tracks one outstanding request per field key. The
//! request itself runs on a spawned task so the dispatch loop stays
//! responsive; the settled result is resolved against the draft as it is by
//! then, not as it was when the request started.

use serde::Deserialize;
use trainhub_bridge::MessageFromBackend;
use trainhub_content::editor::{TranslationKey, TranslationOutcome, TranslationStart};
use trainhub_content::model::Lang;

use crate::config::TranslationConfig;

/// Errors that can occur while requesting a translation.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// No API key in the environment or the configuration.
    #[error("no translation API key configured")]
    MissingApiKey,
    /// The HTTP request failed or returned a non-success status.
    #[error("translation request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    /// The response decoded but carried no usable text.
    #[error("translation response carried no text")]
    EmptyResponse,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Phrases the instruction sent to the text-generation service.
fn build_prompt(text: &str, from: Lang, to: Lang) -> String {
    format!(
        "Translate this {} text to {}, keeping the meaning and tone as close as possible. \
         Do not add any extra text or explanations. Text: \"{text}\"",
        from.english_name(),
        to.english_name(),
    )
}

/// Full endpoint URL for the configured model.
fn endpoint_url(config: &TranslationConfig) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent",
        config.api_base.trim_end_matches('/'),
        config.model
    )
}

/// The environment variable named by the config wins over the config file
/// entry, so deployments can avoid keys on disk.
fn resolve_api_key(config: &TranslationConfig) -> Option<String> {
    std::env::var(&config.api_key_env)
        .ok()
        .filter(|key| !key.is_empty())
        .or_else(|| config.api_key.clone())
}

/// Joins the candidate parts and trims the result; a blank translation of a
/// non-blank source counts as no text at all.
fn extract_translation(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text = content
        .parts
        .iter()
        .map(|part| part.text.as_str())
        .collect::<String>();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Performs one Vietnamese-to-Thai translation call.
async fn translate_text(
    client: &reqwest::Client,
    config: &TranslationConfig,
    text: &str,
) -> Result<String, TranslateError> {
    let api_key = resolve_api_key(config).ok_or(TranslateError::MissingApiKey)?;
    let body = serde_json::json!({
        "contents": [{
            "parts": [{ "text": build_prompt(text, Lang::Vi, Lang::Th) }]
        }]
    });

    let response = client
        .post(endpoint_url(config))
        .header("x-goog-api-key", api_key)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;
    let decoded: GenerateContentResponse = response.json().await?;

    extract_translation(&decoded).ok_or(TranslateError::EmptyResponse)
}

/// Handles a translation request for one bilingual field (see
/// [`trainhub_bridge::MessageToBackend::TranslateField`]).
///
/// Marks the key busy, runs the request on its own task, and resolves the
/// result into the draft. A failed request writes the failure marker into
/// the target field so the editor shows something actionable instead of
/// silently keeping stale text.
pub async fn handle_translate_request(context: super::AppContextHandle, key: TranslationKey) {
    let started = {
        let mut state = context.state.write().await;
        match state.editor.begin_translation(&key) {
            TranslationStart::Started { generation, source } => Some((
                generation,
                source,
                state.config.translation.clone(),
                state.request_client.clone(),
            )),
            TranslationStart::AlreadyPending => {
                log::debug!("Translation for {key} already in flight");
                None
            }
            TranslationStart::EmptySource => {
                log::warn!("No text to translate for {key}");
                None
            }
            TranslationStart::SourceMissing => {
                log::warn!("Translation source {key} does not resolve in the draft");
                None
            }
            TranslationStart::Closed => {
                log::warn!("Ignoring translation request for {key}: editor is not open");
                None
            }
        }
    };
    let Some((generation, source, translation_config, client)) = started else {
        return;
    };

    context
        .send(MessageFromBackend::TranslationStarted(key.clone()))
        .await;

    let context = context.clone();
    tokio::spawn(async move {
        let translated = match translate_text(&client, &translation_config, &source).await {
            Ok(text) => Some(text),
            Err(error) => {
                log::error!("Translation error for {key}: {error}");
                None
            }
        };

        let update = {
            let mut state = context.state.write().await;
            match state.editor.resolve_translation(&key, generation, translated) {
                TranslationOutcome::Applied => {
                    Some((true, Some((state.editor.draft().clone(), state.editor.is_dirty()))))
                }
                TranslationOutcome::MarkedFailed => {
                    Some((false, Some((state.editor.draft().clone(), state.editor.is_dirty()))))
                }
                TranslationOutcome::TargetMissing => {
                    log::debug!("Translation target {key} vanished from the draft; dropping result");
                    Some((false, None))
                }
                TranslationOutcome::Stale => {
                    log::debug!("Dropping superseded translation result for {key}");
                    None
                }
            }
        };
        let Some((ok, draft_update)) = update else {
            return;
        };

        context
            .send(MessageFromBackend::TranslationFinished { key, ok })
            .await;
        if let Some((draft, dirty)) = draft_update {
            context
                .send(MessageFromBackend::DraftStateUpdate { draft, dirty })
                .await;
        }
    });
}
