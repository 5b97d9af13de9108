use crate::ai::config::AiConfig;

#[derive(Clone)]
pub struct Config {
    pub ai: Option<AiConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            ai: AiConfig::from_env(),
        }
    }
}
