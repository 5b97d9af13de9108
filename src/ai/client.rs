//! Thin client for the hosted generate-content endpoint.
//!
//! One POST per advisory task. Request bodies are assembled with
//! `serde_json::json!`; only the response envelope gets typed structs. The
//! response text itself is free-form and belongs to the parser.

use base64::Engine as _;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, instrument, trace, warn};

use crate::ai::config::AiConfig;
use crate::error::AiError;

pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Per-task generation settings. Structured tasks run cold, open chat runs
/// warmer; tasks needing live data request the search augmentation tool.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOpts {
    pub system: &'static str,
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub web_search: bool,
}

pub fn text_part(text: &str) -> Value {
    json!({ "text": text })
}

pub fn inline_data_part(mime_type: &str, bytes: &[u8]) -> Value {
    let data = base64::engine::general_purpose::STANDARD.encode(bytes);
    json!({ "inlineData": { "mimeType": mime_type, "data": data } })
}

pub fn user_turn(parts: Vec<Value>) -> Value {
    json!({ "role": "user", "parts": parts })
}

pub fn model_turn(text: &str) -> Value {
    json!({ "role": "model", "parts": [ { "text": text } ] })
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    parts: Option<Vec<ResponsePart>>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Send one generate-content request and return the reply text.
///
/// Network failures map to [`AiError::Transport`]; error payloads, bodies
/// that do not decode, and empty candidates map to [`AiError::Model`].
#[instrument(level = "trace", skip(config, contents))]
pub async fn generate_content(
    config: &AiConfig,
    opts: &GenerateOpts,
    contents: Vec<Value>,
) -> Result<String, AiError> {
    let base = config.api_url.as_deref().unwrap_or(GEMINI_API_URL);
    let url = format!(
        "{}/models/{}:generateContent",
        base.trim_end_matches('/'),
        config.model
    );

    let mut body = json!({
        "contents": contents,
        "systemInstruction": { "parts": [ { "text": opts.system } ] },
        "generationConfig": {
            "temperature": opts.temperature,
            "maxOutputTokens": opts.max_output_tokens,
        },
    });
    if opts.web_search {
        body["tools"] = json!([ { "google_search": {} } ]);
    }

    debug!(url, "sending generate request");

    let client = reqwest::Client::new();
    let resp = client
        .post(&url)
        .header("x-goog-api-key", &config.api_key)
        .json(&body)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let err_text = resp.text().await.unwrap_or_default();
        let snippet: String = err_text.chars().take(200).collect();
        warn!(%status, "generate endpoint error");
        return Err(AiError::Model(format!("endpoint error {status}: {snippet}")));
    }

    let raw = resp.text().await?;
    let snippet: String = raw.chars().take(200).collect();
    debug!(snippet = %snippet, "generate response body");
    trace!(raw = %raw, "generate response");

    let parsed: GenerateResponse = serde_json::from_str(&raw)
        .map_err(|err| AiError::Model(format!("undecodable response: {err}")))?;

    let text = parsed
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect::<Vec<_>>()
        .join("");

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AiError::Model("empty response".to_string()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_data_part_is_base64() {
        let part = inline_data_part("image/jpeg", b"hi");
        assert_eq!(part["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(part["inlineData"]["data"], "aGk=");
    }

    #[test]
    fn turns_carry_roles() {
        assert_eq!(user_turn(vec![text_part("q")])["role"], "user");
        assert_eq!(model_turn("a")["role"], "model");
        assert_eq!(model_turn("a")["parts"][0]["text"], "a");
    }
}
