use anyhow::Result;
use teloxide::{prelude::*, types::ChatAction};

use crate::ai::config::AiConfig;
use crate::insights::Advisor;
use crate::messages;
use crate::session::SessionStore;
use crate::text_utils::{truncate_reply, TELEGRAM_MESSAGE_LIMIT};
use crate::types::ChatMessage;

/// Plain text messages go to the assistant.
pub async fn chat_message(
    bot: Bot,
    msg: Message,
    store: SessionStore,
    ai_config: Option<AiConfig>,
) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    respond(bot, msg.chat.id, &store, Advisor::new(ai_config), text).await
}

/// Shared chat turn, also used by the voice flow after transcription.
///
/// The reply is appended to the session transcript even when it is the
/// connectivity-error string, so the conversation never loses a turn.
pub async fn respond(
    bot: Bot,
    chat: ChatId,
    store: &SessionStore,
    advisor: Advisor,
    text: &str,
) -> Result<()> {
    let ctx = store.context(chat).await;
    let _ = bot.send_chat_action(chat, ChatAction::Typing).await;

    let mut history = store.history(chat).await;
    if history.is_empty() {
        // Seed the conversation the way the assistant would open it.
        let greeting = ChatMessage::assistant(messages::chat_greeting(ctx.lang));
        store.push_message(chat, greeting.clone()).await;
        history.push(greeting);
    }
    store.push_message(chat, ChatMessage::user(text)).await;

    let reply = advisor.chat_reply(&ctx, &history, text).await;
    store
        .push_message(chat, ChatMessage::assistant(reply.clone()))
        .await;

    bot.send_message(chat, truncate_reply(&reply, TELEGRAM_MESSAGE_LIMIT))
        .await?;
    Ok(())
}
