use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;

pub mod ai;
pub mod commands;
mod config;
pub mod error;
pub mod handlers;
pub mod insights;
pub mod messages;
pub mod parse;
pub mod session;
pub mod text_utils;
pub mod types;

pub use config::Config;

// ──────────────────────────────────────────────────────────────
// Main application setup
// ──────────────────────────────────────────────────────────────

pub async fn run() -> Result<()> {
    // Load .env file if it exists (for local development)
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting KisanSathi bot...");

    let bot = Bot::from_env();
    let config = Config::from_env();
    if config.ai.is_none() {
        tracing::warn!("GEMINI_API_KEY not set; advisory calls will degrade to offline defaults");
    }
    let store = session::SessionStore::new();

    // --- Handler Setup ---
    let handler = dptree::entry()
        .branch(
            Update::filter_callback_query().endpoint(handlers::language::language_callback),
        )
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter(|msg: Message| msg.voice().is_some())
                        .endpoint(handlers::voice::chat_from_voice),
                )
                .branch(
                    dptree::entry()
                        .filter(|msg: Message| msg.photo().is_some())
                        .endpoint(handlers::photo::diagnose_from_photo),
                )
                .branch(
                    dptree::entry()
                        .filter(|msg: Message| msg.location().is_some())
                        .endpoint(handlers::location::save_location),
                )
                .branch(
                    dptree::entry()
                        .filter_command::<commands::Command>()
                        .endpoint(
                            |bot: Bot,
                             msg: Message,
                             cmd: commands::Command,
                             store: session::SessionStore,
                             ai_config: Option<ai::config::AiConfig>| async move {
                                cmd.dispatch(bot, msg, store, ai_config).await
                            },
                        ),
                )
                .branch(dptree::endpoint(handlers::chat::chat_message)),
        );

    // --- Dispatcher ---
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![store, config.ai])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
