use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{ChatId, ParseMode},
};

use super::render::format_weather;
use crate::insights::Advisor;
use crate::session::{SessionStore, TaskKind};

/// Fetch and show the weather snapshot for the chat's coordinates.
pub async fn send_weather(
    bot: Bot,
    chat: ChatId,
    store: &SessionStore,
    advisor: &Advisor,
) -> Result<()> {
    let ctx = store.context(chat).await;
    let generation = store.begin(chat, TaskKind::Weather).await;

    let snapshot = advisor.weather_snapshot(&ctx).await;

    if !store.is_current(chat, TaskKind::Weather, generation).await {
        tracing::debug!(chat_id = chat.0, generation, "discarding superseded weather");
        return Ok(());
    }

    bot.send_message(chat, format_weather(&snapshot, ctx.lang))
        .parse_mode(ParseMode::Html)
        .await?;
    Ok(())
}
