use anyhow::Result;
use teloxide::prelude::*;

use crate::messages;
use crate::session::SessionStore;

/// A shared location pins weather and price lookups to the farmer's field.
pub async fn save_location(bot: Bot, msg: Message, store: SessionStore) -> Result<()> {
    let Some(location) = msg.location() else {
        return Ok(());
    };
    let chat = msg.chat.id;
    store
        .set_coords(chat, (location.latitude, location.longitude))
        .await;
    let lang = store.language(chat).await;
    bot.send_message(chat, messages::location_saved(lang)).await?;
    Ok(())
}
