use tracing::instrument;

use crate::ai::client::{generate_content, inline_data_part, text_part, user_turn, GenerateOpts};
use crate::ai::config::AiConfig;
use crate::ai::prompts;
use crate::error::AiError;
use crate::types::Language;

const STT_OPTS: GenerateOpts = GenerateOpts {
    system: "You are a precise transcription service.",
    temperature: 0.1,
    max_output_tokens: 256,
    web_search: false,
};

/// Transcribe a voice note by sending the audio as an inline part.
///
/// Best effort: callers log and drop the turn on failure, the user is never
/// shown a transcription error.
#[instrument(level = "trace", skip(config, bytes))]
pub async fn transcribe_voice(
    config: &AiConfig,
    lang: Language,
    mime_type: &str,
    bytes: &[u8],
) -> Result<String, AiError> {
    let parts = vec![
        inline_data_part(mime_type, bytes),
        text_part(&prompts::transcribe(lang)),
    ];
    generate_content(config, &STT_OPTS, vec![user_turn(parts)]).await
}
