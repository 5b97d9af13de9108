use anyhow::Result;
use teloxide::prelude::*;

use super::{chat, download_telegram_file};
use crate::ai::config::AiConfig;
use crate::ai::stt::transcribe_voice;
use crate::insights::Advisor;
use crate::session::SessionStore;

/// Voice notes are transcribed and fed into the chat flow. Best effort:
/// without a configured key, or when transcription fails, the note is
/// silently ignored.
pub async fn chat_from_voice(
    bot: Bot,
    msg: Message,
    store: SessionStore,
    ai_config: Option<AiConfig>,
) -> Result<()> {
    let Some(config) = ai_config else {
        return Ok(());
    };
    let Some(voice) = msg.voice() else {
        return Ok(());
    };

    let chat_id = msg.chat.id;
    let lang = store.language(chat_id).await;
    let audio = download_telegram_file(&bot, &voice.file.id).await?;
    let mime = voice
        .mime_type
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| "audio/ogg".to_string());

    match transcribe_voice(&config, lang, &mime, &audio).await {
        Ok(text) if text.trim().is_empty() => {
            tracing::debug!("voice transcription empty; ignoring");
        }
        Ok(text) => {
            tracing::debug!(transcript = %text, "voice transcribed");
            chat::respond(bot, chat_id, &store, Advisor::new(Some(config)), &text).await?;
        }
        Err(err) => {
            tracing::warn!("transcription failed: {}", err);
        }
    }
    Ok(())
}
