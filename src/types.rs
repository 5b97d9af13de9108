//! Typed records produced by the advisory service.
//!
//! Every model-derived record here has a static fallback constructor so a
//! failed request degrades to a plausible default instead of an error. Enum
//! coercion is lenient: unknown wire values map to a documented fallback
//! member, never to a failure.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::messages;

/// App language, cycled by the `/language` toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Kannada,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Kannada];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Kannada => "kn",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::English),
            "hi" => Some(Language::Hindi),
            "kn" => Some(Language::Kannada),
            _ => None,
        }
    }

    /// Locale tag passed to speech transcription.
    pub fn stt_locale(&self) -> &'static str {
        match self {
            Language::English => "en-IN",
            Language::Hindi => "hi-IN",
            Language::Kannada => "kn-IN",
        }
    }

    /// How the language names itself on the selector keyboard.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Kannada => "ಕನ್ನಡ",
        }
    }
}

/// Display tag for the verdict card. Only affects presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionColor {
    Green,
    Red,
    #[default]
    Yellow,
    Blue,
}

impl DecisionColor {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "green" => DecisionColor::Green,
            "red" => DecisionColor::Red,
            "blue" => DecisionColor::Blue,
            "yellow" => DecisionColor::Yellow,
            _ => DecisionColor::default(),
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            DecisionColor::Green => "🟢",
            DecisionColor::Red => "🔴",
            DecisionColor::Yellow => "🟡",
            DecisionColor::Blue => "🔵",
        }
    }
}

/// Direction of the multi-day price outlook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlookTrend {
    Rising,
    Falling,
    #[default]
    Stable,
}

impl OutlookTrend {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "rising" | "up" => OutlookTrend::Rising,
            "falling" | "down" => OutlookTrend::Falling,
            "stable" => OutlookTrend::Stable,
            _ => OutlookTrend::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutlookTrend::Rising => "rising",
            OutlookTrend::Falling => "falling",
            OutlookTrend::Stable => "stable",
        }
    }
}

/// Day-over-day movement of a single quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl Trend {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "up" | "rising" => Trend::Up,
            "down" | "falling" => Trend::Down,
            "stable" => Trend::Stable,
            _ => Trend::default(),
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Stable => "→",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    #[default]
    Medium,
    High,
}

impl Confidence {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Confidence::Low,
            "medium" => Confidence::Medium,
            "high" => Confidence::High,
            _ => Confidence::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// Arrival volume at the mandi gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrivalVolume {
    Low,
    #[default]
    Medium,
    High,
}

impl ArrivalVolume {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => ArrivalVolume::Low,
            "medium" => ArrivalVolume::Medium,
            "high" => ArrivalVolume::High,
            _ => ArrivalVolume::default(),
        }
    }
}

/// Four-point price outlook shown on the verdict card.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceOutlook {
    pub yesterday: i64,
    pub today: i64,
    pub tomorrow_low: i64,
    pub tomorrow_high: i64,
    pub trend: OutlookTrend,
    pub confidence: Confidence,
}

/// The dashboard verdict for one crop in one district.
///
/// `decision` stays free text: the model phrases it as "SELL NOW", "HOLD"
/// and similar, and the card shows it verbatim. The constrained display
/// semantics live in [`DecisionColor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub decision: String,
    pub color: DecisionColor,
    pub reason: String,
    pub outlook: PriceOutlook,
    pub weather_impact: String,
    pub news_headline: String,
}

impl Insight {
    /// Static default shown when the request or parse fails.
    pub fn fallback(lang: Language) -> Self {
        Self {
            decision: messages::fallback_decision(lang).to_string(),
            color: DecisionColor::Yellow,
            reason: messages::fallback_reason(lang).to_string(),
            outlook: PriceOutlook {
                confidence: Confidence::Low,
                ..PriceOutlook::default()
            },
            weather_impact: messages::fallback_weather_impact(lang).to_string(),
            news_headline: messages::fallback_news(lang).to_string(),
        }
    }
}

/// One wholesale price row from a mandi.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub crop: String,
    pub variety: String,
    pub market: String,
    /// Rupees per quintal.
    pub price: i64,
    pub change_pct: f64,
    pub trend: Trend,
    pub arrival_volume: ArrivalVolume,
    pub date: NaiveDate,
}

/// Indicative quotes shown when no live list could be fetched.
pub fn fallback_quotes(today: NaiveDate) -> Vec<PriceQuote> {
    let rows: [(&str, &str, &str, i64, f64); 4] = [
        ("Onion", "Red", "Lasalgaon", 2400, 5.2),
        ("Soybean", "Yellow", "Latur", 4800, -1.5),
        ("Cotton", "Medium Staple", "Akola", 6900, 0.8),
        ("Wheat", "Lokwan", "Indore", 2150, -0.5),
    ];
    rows.into_iter()
        .map(|(crop, variety, market, price, change_pct)| PriceQuote {
            crop: crop.to_string(),
            variety: variety.to_string(),
            market: market.to_string(),
            price,
            change_pct,
            trend: if change_pct > 0.0 {
                Trend::Up
            } else if change_pct < 0.0 {
                Trend::Down
            } else {
                Trend::Stable
            },
            arrival_volume: ArrivalVolume::Medium,
            date: today,
        })
        .collect()
}

/// One-shot weather reading with a field advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temp_c: i64,
    pub condition: String,
    pub humidity_pct: i64,
    pub wind_kmh: i64,
    pub advisory: String,
    pub rain_chance_pct: Option<i64>,
}

impl WeatherSnapshot {
    pub fn fallback(lang: Language) -> Self {
        Self {
            temp_c: 30,
            condition: messages::fallback_weather_condition(lang).to_string(),
            humidity_pct: 65,
            wind_kmh: 8,
            advisory: messages::fallback_weather_advisory(lang).to_string(),
            rain_chance_pct: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One turn of the in-session conversation. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Explicit request context. Handlers build it from the session so the
/// service layer never reads ambient state.
#[derive(Debug, Clone)]
pub struct QueryContext {
    pub lang: Language,
    pub district: String,
    pub crop: String,
    /// Latitude and longitude, already defaulted when unshared.
    pub coords: (f64, f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn enum_coercion_falls_back() {
        assert_eq!(DecisionColor::parse("purple"), DecisionColor::Yellow);
        assert_eq!(OutlookTrend::parse("sideways"), OutlookTrend::Stable);
        assert_eq!(Confidence::parse(""), Confidence::Medium);
        assert_eq!(ArrivalVolume::parse("HUGE"), ArrivalVolume::Medium);
        assert_eq!(Trend::parse("plummeting"), Trend::Stable);
    }

    #[test]
    fn enum_coercion_is_case_insensitive() {
        assert_eq!(DecisionColor::parse(" GREEN "), DecisionColor::Green);
        assert_eq!(OutlookTrend::parse("Rising"), OutlookTrend::Rising);
        assert_eq!(Confidence::parse("HIGH"), Confidence::High);
    }

    #[test]
    fn insight_fallback_has_low_confidence() {
        let insight = Insight::fallback(Language::English);
        assert_eq!(insight.color, DecisionColor::Yellow);
        assert_eq!(insight.outlook.confidence, Confidence::Low);
        assert_eq!(insight.outlook.trend, OutlookTrend::Stable);
        assert!(!insight.decision.is_empty());
        assert!(!insight.news_headline.is_empty());
    }

    #[test]
    fn fallback_quotes_trend_matches_change_sign() {
        let today = NaiveDate::from_ymd_opt(2024, 10, 24).unwrap();
        let quotes = fallback_quotes(today);
        assert_eq!(quotes.len(), 4);
        for q in &quotes {
            if q.change_pct > 0.0 {
                assert_eq!(q.trend, Trend::Up);
            } else {
                assert_eq!(q.trend, Trend::Down);
            }
            assert_eq!(q.date, today);
        }
    }
}
