use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{ChatId, ParseMode},
};

use super::render::format_quotes;
use crate::insights::Advisor;
use crate::session::{SessionStore, TaskKind};

/// Fetch and show the price list for the chat's district.
pub async fn send_mandi(
    bot: Bot,
    chat: ChatId,
    store: &SessionStore,
    advisor: &Advisor,
) -> Result<()> {
    let ctx = store.context(chat).await;
    let generation = store.begin(chat, TaskKind::Mandi).await;

    let quotes = advisor.mandi_prices(&ctx).await;

    if !store.is_current(chat, TaskKind::Mandi, generation).await {
        tracing::debug!(chat_id = chat.0, generation, "discarding superseded price list");
        return Ok(());
    }

    bot.send_message(chat, format_quotes(&quotes, ctx.lang))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}
