pub mod chat;
pub mod guidance;
pub mod insight;
pub mod language;
pub mod location;
pub mod mandi;
pub mod photo;
pub mod render;
pub mod voice;
pub mod weather;

pub use render::{format_insight, format_quotes, format_weather};

use anyhow::Result;
use futures_util::StreamExt;
use teloxide::{net::Download, prelude::*};

/// Fetch a Telegram file by its `file_id` and return the raw bytes.
pub async fn download_telegram_file(bot: &Bot, file_id: &str) -> Result<Vec<u8>> {
    let file = bot.get_file(file_id).await?;
    let mut bytes = Vec::new();
    let mut stream = bot.download_file_stream(&file.path);
    while let Some(chunk) = stream.next().await {
        bytes.extend_from_slice(&chunk?);
    }
    tracing::trace!(size = bytes.len(), "downloaded telegram file");
    Ok(bytes)
}
