use anyhow::Result;
use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup},
};

use crate::messages;
use crate::session::SessionStore;
use crate::types::Language;

/// One row per language, each naming itself in its own script.
pub fn language_keyboard() -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = Language::ALL
        .iter()
        .map(|lang| {
            vec![InlineKeyboardButton::callback(
                lang.native_name(),
                format!("lang:{}", lang.code()),
            )]
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

pub async fn send_language_keyboard(bot: Bot, chat: ChatId, lang: Language) -> Result<()> {
    bot.send_message(chat, messages::language_prompt(lang))
        .reply_markup(language_keyboard())
        .await?;
    Ok(())
}

/// Handles the selector's callback query and confirms in the new language.
pub async fn language_callback(bot: Bot, q: CallbackQuery, store: SessionStore) -> Result<()> {
    if let (Some(data), Some(message)) = (q.data.as_deref(), q.message.as_ref()) {
        if let Some(lang) = data.strip_prefix("lang:").and_then(Language::from_code) {
            let chat = message.chat().id;
            store.set_language(chat, lang).await;
            let _ = bot
                .edit_message_text(chat, message.id(), messages::language_set(lang))
                .await;
        }
    }
    bot.answer_callback_query(q.id).await?;
    Ok(())
}
