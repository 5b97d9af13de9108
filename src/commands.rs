use anyhow::Result;
use teloxide::{prelude::*, types::ParseMode, utils::command::BotCommands};

use crate::ai::config::AiConfig;
use crate::handlers::{guidance, insight, language, mandi, weather};
use crate::insights::Advisor;
use crate::messages;
use crate::session::SessionStore;

#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "start and show what I can do.")]
    Start,
    #[command(description = "display this text.")]
    Help,
    #[command(description = "switch app language.")]
    Language,
    #[command(description = "set your district, e.g. /district Mandya.")]
    District(String),
    #[command(description = "set your crop, e.g. /crop Sugarcane.")]
    Crop(String),
    #[command(description = "today's sell or hold verdict for your crop.")]
    Insight,
    #[command(description = "latest mandi prices.")]
    Mandi,
    #[command(description = "weather outlook and field advisory.")]
    Weather,
    #[command(description = "scheme guidance; optionally describe your situation.")]
    Schemes(String),
    #[command(description = "market advisory for your district.")]
    Advisory,
}

impl Command {
    pub async fn dispatch(
        self,
        bot: Bot,
        msg: Message,
        store: SessionStore,
        ai_config: Option<AiConfig>,
    ) -> Result<()> {
        let chat = msg.chat.id;
        let lang = store.language(chat).await;
        let advisor = Advisor::new(ai_config);
        match self {
            Command::Start | Command::Help => {
                bot.send_message(chat, messages::help_text(lang))
                    .parse_mode(ParseMode::Html)
                    .await?;
            }
            Command::Language => language::send_language_keyboard(bot, chat, lang).await?,
            Command::District(arg) => {
                let arg = arg.trim();
                if arg.is_empty() {
                    bot.send_message(chat, messages::district_usage(lang)).await?;
                } else {
                    store.set_district(chat, arg.to_string()).await;
                    bot.send_message(chat, messages::district_set(lang, arg)).await?;
                }
            }
            Command::Crop(arg) => {
                let arg = arg.trim();
                if arg.is_empty() {
                    bot.send_message(chat, messages::crop_usage(lang)).await?;
                } else {
                    store.set_crop(chat, arg.to_string()).await;
                    bot.send_message(chat, messages::crop_set(lang, arg)).await?;
                }
            }
            Command::Insight => insight::send_insight(bot, chat, &store, &advisor).await?,
            Command::Mandi => mandi::send_mandi(bot, chat, &store, &advisor).await?,
            Command::Weather => weather::send_weather(bot, chat, &store, &advisor).await?,
            Command::Schemes(profile) => {
                guidance::send_schemes(bot, chat, &store, &advisor, &profile).await?
            }
            Command::Advisory => guidance::send_advisory(bot, chat, &store, &advisor).await?,
        }
        Ok(())
    }
}
