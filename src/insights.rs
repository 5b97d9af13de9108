//! The advisory service: build prompt, invoke the model, parse, and degrade
//! to a safe default on any failure.
//!
//! Public methods never return an error. Transport, model, and parse
//! failures are logged and absorbed into static language-appropriate
//! records, so handlers always have something plausible to show. The
//! fallible `fetch_*` variants are exposed for tests that need to observe
//! the error taxonomy.

use chrono::Local;
use tracing::{instrument, warn};

use crate::ai::client::{
    generate_content, inline_data_part, model_turn, text_part, user_turn, GenerateOpts,
};
use crate::ai::config::AiConfig;
use crate::ai::prompts;
use crate::error::AiError;
use crate::messages;
use crate::parse;
use crate::types::{
    fallback_quotes, ChatMessage, ChatRole, Insight, PriceQuote, QueryContext, WeatherSnapshot,
};

/// How many prior turns of the session transcript travel with a chat call.
const CHAT_HISTORY_WINDOW: usize = 12;

const CHAT_OPTS: GenerateOpts = GenerateOpts {
    system: prompts::PERSONA,
    temperature: 0.7,
    max_output_tokens: 500,
    web_search: false,
};

const INSIGHT_OPTS: GenerateOpts = GenerateOpts {
    system: prompts::PERSONA,
    temperature: 0.2,
    max_output_tokens: 256,
    web_search: true,
};

const MANDI_OPTS: GenerateOpts = GenerateOpts {
    system: prompts::PERSONA,
    temperature: 0.2,
    max_output_tokens: 512,
    web_search: true,
};

const WEATHER_OPTS: GenerateOpts = GenerateOpts {
    system: prompts::PERSONA,
    temperature: 0.2,
    max_output_tokens: 160,
    web_search: true,
};

const GUIDANCE_OPTS: GenerateOpts = GenerateOpts {
    system: prompts::PERSONA,
    temperature: 0.4,
    max_output_tokens: 500,
    web_search: true,
};

const DIAGNOSE_OPTS: GenerateOpts = GenerateOpts {
    system: prompts::PERSONA,
    temperature: 0.4,
    max_output_tokens: 500,
    web_search: false,
};

pub struct Advisor {
    config: Option<AiConfig>,
}

impl Advisor {
    pub fn new(config: Option<AiConfig>) -> Self {
        Self { config }
    }

    fn config(&self) -> Result<&AiConfig, AiError> {
        self.config
            .as_ref()
            .ok_or_else(|| AiError::Model("API key not configured".to_string()))
    }

    /// Free text in, free text out. On failure the reply is the fixed
    /// connectivity-error string, never an exception.
    pub async fn chat_reply(
        &self,
        ctx: &QueryContext,
        history: &[ChatMessage],
        question: &str,
    ) -> String {
        match self.fetch_chat_reply(ctx, history, question).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "chat reply failed");
                messages::connectivity_error(ctx.lang).to_string()
            }
        }
    }

    #[instrument(level = "trace", skip(self, history))]
    pub async fn fetch_chat_reply(
        &self,
        ctx: &QueryContext,
        history: &[ChatMessage],
        question: &str,
    ) -> Result<String, AiError> {
        let config = self.config()?;
        let tail = history
            .iter()
            .skip(history.len().saturating_sub(CHAT_HISTORY_WINDOW));
        let mut contents: Vec<_> = tail
            .map(|msg| match msg.role {
                ChatRole::User => user_turn(vec![text_part(&msg.text)]),
                ChatRole::Assistant => model_turn(&msg.text),
            })
            .collect();
        contents.push(user_turn(vec![text_part(&prompts::chat(
            ctx.lang, question,
        ))]));
        generate_content(config, &CHAT_OPTS, contents).await
    }

    pub async fn dashboard_insight(&self, ctx: &QueryContext) -> Insight {
        match self.fetch_dashboard_insight(ctx).await {
            Ok(insight) => insight,
            Err(err) => {
                warn!(error = %err, crop = %ctx.crop, "dashboard insight degraded to default");
                Insight::fallback(ctx.lang)
            }
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub async fn fetch_dashboard_insight(&self, ctx: &QueryContext) -> Result<Insight, AiError> {
        let config = self.config()?;
        let prompt = prompts::dashboard_insight(ctx);
        let raw =
            generate_content(config, &INSIGHT_OPTS, vec![user_turn(vec![text_part(&prompt)])])
                .await?;
        parse::parse_insight(&raw)
    }

    pub async fn mandi_prices(&self, ctx: &QueryContext) -> Vec<PriceQuote> {
        match self.fetch_mandi_prices(ctx).await {
            Ok(quotes) => quotes,
            Err(err) => {
                warn!(error = %err, district = %ctx.district, "price list degraded to default");
                fallback_quotes(Local::now().date_naive())
            }
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub async fn fetch_mandi_prices(
        &self,
        ctx: &QueryContext,
    ) -> Result<Vec<PriceQuote>, AiError> {
        let config = self.config()?;
        let prompt = prompts::mandi_prices(ctx);
        let raw =
            generate_content(config, &MANDI_OPTS, vec![user_turn(vec![text_part(&prompt)])])
                .await?;
        parse::parse_price_lines(&raw, Local::now().date_naive())
    }

    pub async fn weather_snapshot(&self, ctx: &QueryContext) -> WeatherSnapshot {
        match self.fetch_weather_snapshot(ctx).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "weather snapshot degraded to default");
                WeatherSnapshot::fallback(ctx.lang)
            }
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub async fn fetch_weather_snapshot(
        &self,
        ctx: &QueryContext,
    ) -> Result<WeatherSnapshot, AiError> {
        let config = self.config()?;
        let prompt = prompts::weather(ctx);
        let raw =
            generate_content(config, &WEATHER_OPTS, vec![user_turn(vec![text_part(&prompt)])])
                .await?;
        parse::parse_weather(&raw)
    }

    /// Free-text scheme guidance for a farmer profile. No parsing.
    pub async fn scheme_recommendation(&self, ctx: &QueryContext, profile: &str) -> String {
        let prompt = prompts::schemes(ctx, profile);
        self.guidance(ctx, prompt).await
    }

    /// Free-text market advisory for the current district and crop.
    pub async fn market_advisory(&self, ctx: &QueryContext) -> String {
        let prompt = prompts::market_advisory(ctx);
        self.guidance(ctx, prompt).await
    }

    async fn guidance(&self, ctx: &QueryContext, prompt: String) -> String {
        match self.fetch_guidance(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "guidance request failed");
                messages::advisory_apology(ctx.lang).to_string()
            }
        }
    }

    #[instrument(level = "trace", skip(self, prompt))]
    pub async fn fetch_guidance(&self, prompt: &str) -> Result<String, AiError> {
        let config = self.config()?;
        generate_content(config, &GUIDANCE_OPTS, vec![user_turn(vec![text_part(prompt)])]).await
    }

    /// Image-bearing diagnosis request. The reply is shown verbatim.
    pub async fn diagnose_crop(
        &self,
        ctx: &QueryContext,
        image: &[u8],
        mime_type: &str,
    ) -> String {
        match self.fetch_diagnosis(ctx, image, mime_type).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "crop diagnosis failed");
                messages::connectivity_error(ctx.lang).to_string()
            }
        }
    }

    #[instrument(level = "trace", skip(self, image))]
    pub async fn fetch_diagnosis(
        &self,
        ctx: &QueryContext,
        image: &[u8],
        mime_type: &str,
    ) -> Result<String, AiError> {
        let config = self.config()?;
        let parts = vec![
            inline_data_part(mime_type, image),
            text_part(&prompts::diagnose(ctx.lang)),
        ];
        generate_content(config, &DIAGNOSE_OPTS, vec![user_turn(parts)]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    fn ctx() -> QueryContext {
        QueryContext {
            lang: Language::English,
            district: "Mandya".to_string(),
            crop: "Sugarcane".to_string(),
            coords: (12.97, 77.59),
        }
    }

    #[tokio::test]
    async fn missing_key_degrades_every_task() {
        let advisor = Advisor::new(None);
        let c = ctx();

        let insight = advisor.dashboard_insight(&c).await;
        assert_eq!(insight, Insight::fallback(c.lang));

        let weather = advisor.weather_snapshot(&c).await;
        assert_eq!(weather, WeatherSnapshot::fallback(c.lang));

        let quotes = advisor.mandi_prices(&c).await;
        assert_eq!(quotes.len(), 4);

        let reply = advisor.chat_reply(&c, &[], "price of onion?").await;
        assert_eq!(reply, messages::connectivity_error(c.lang));

        let schemes = advisor.scheme_recommendation(&c, "").await;
        assert_eq!(schemes, messages::advisory_apology(c.lang));
    }

    #[tokio::test]
    async fn missing_key_is_a_model_error() {
        let advisor = Advisor::new(None);
        let err = advisor.fetch_guidance("hello").await.unwrap_err();
        assert!(matches!(err, AiError::Model(_)));
    }
}
