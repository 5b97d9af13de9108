use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{ChatId, ParseMode},
};

use super::render::format_insight;
use crate::insights::Advisor;
use crate::session::{SessionStore, TaskKind};

/// Fetch and show the verdict card, replacing the previous one.
///
/// The generation counter makes this latest-request-wins: if the farmer
/// changes district or crop while a fetch is in flight, the superseded
/// result is dropped instead of overwriting the newer card.
pub async fn send_insight(
    bot: Bot,
    chat: ChatId,
    store: &SessionStore,
    advisor: &Advisor,
) -> Result<()> {
    let ctx = store.context(chat).await;
    let generation = store.begin(chat, TaskKind::Insight).await;

    let insight = advisor.dashboard_insight(&ctx).await;

    if !store.is_current(chat, TaskKind::Insight, generation).await {
        tracing::debug!(chat_id = chat.0, generation, "discarding superseded insight");
        return Ok(());
    }

    if let Some(old) = store.insight_message(chat).await {
        let _ = bot.delete_message(chat, old).await;
    }
    let sent = bot
        .send_message(chat, format_insight(&insight, ctx.lang))
        .parse_mode(ParseMode::Html)
        .await?;
    store.set_insight_message(chat, sent.id).await;
    Ok(())
}
