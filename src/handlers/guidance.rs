use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{ChatId, ParseMode},
    utils::html::escape,
};

use crate::insights::Advisor;
use crate::messages;
use crate::session::SessionStore;
use crate::text_utils::truncate_reply;

/// Free-text scheme guidance. The optional profile comes from the command
/// arguments, e.g. `/schemes tenant farmer with 2 acres`.
pub async fn send_schemes(
    bot: Bot,
    chat: ChatId,
    store: &SessionStore,
    advisor: &Advisor,
    profile: &str,
) -> Result<()> {
    let ctx = store.context(chat).await;
    let text = advisor.scheme_recommendation(&ctx, profile).await;
    bot.send_message(
        chat,
        format!(
            "🏛 <b>{}</b>\n\n{}",
            messages::schemes_header(ctx.lang),
            escape(&truncate_reply(&text, 3800)),
        ),
    )
    .parse_mode(ParseMode::Html)
    .await?;
    Ok(())
}

/// Free-text market advisory for the chat's district and crop.
pub async fn send_advisory(
    bot: Bot,
    chat: ChatId,
    store: &SessionStore,
    advisor: &Advisor,
) -> Result<()> {
    let ctx = store.context(chat).await;
    let text = advisor.market_advisory(&ctx).await;
    bot.send_message(
        chat,
        format!(
            "📊 <b>{}</b>\n\n{}",
            messages::advisory_header(ctx.lang),
            escape(&truncate_reply(&text, 3800)),
        ),
    )
    .parse_mode(ParseMode::Html)
    .await?;
    Ok(())
}
