use anyhow::Result;
use teloxide::{prelude::*, types::ParseMode, utils::html::escape};

use super::download_telegram_file;
use crate::ai::config::AiConfig;
use crate::insights::Advisor;
use crate::messages;
use crate::session::SessionStore;
use crate::text_utils::truncate_reply;

/// A crop photo triggers the diagnosis flow.
pub async fn diagnose_from_photo(
    bot: Bot,
    msg: Message,
    store: SessionStore,
    ai_config: Option<AiConfig>,
) -> Result<()> {
    let Some(photo_sizes) = msg.photo() else {
        return Ok(());
    };
    let Some(file_id) = photo_sizes
        .iter()
        .max_by_key(|p| p.file.size)
        .map(|p| &p.file.id)
    else {
        tracing::debug!("photo had no usable sizes");
        return Ok(());
    };

    let chat = msg.chat.id;
    let ctx = store.context(chat).await;
    let bytes = download_telegram_file(&bot, file_id).await?;

    let report = Advisor::new(ai_config)
        .diagnose_crop(&ctx, &bytes, "image/jpeg")
        .await;

    let text = format!(
        "🔬 <b>{}</b>\n\n{}",
        messages::diagnosis_header(ctx.lang),
        escape(&truncate_reply(&report, 3800)),
    );
    bot.send_message(chat, text)
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}
