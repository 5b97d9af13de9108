//! Positional pipe-schema parsing of model replies.
//!
//! Each record type has one parse function with a declared field count.
//! Single records are all or nothing: fewer segments than the schema fails
//! the whole parse and the caller substitutes the full static default, never
//! a half-populated record. The price list is the one exception, where each
//! line stands alone and short lines are dropped.
//!
//! All functions are pure. Coercion never panics: unparseable numbers fall
//! back to per-field constants, unknown enum values to their documented
//! default member.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::AiError;
use crate::text_utils::clean_model_text;
use crate::types::{
    ArrivalVolume, Confidence, DecisionColor, Insight, OutlookTrend, PriceOutlook, PriceQuote,
    Trend, WeatherSnapshot,
};

/// `DECISION|COLOR|REASON|YESTERDAY|TODAY|TOMORROW_LOW|TOMORROW_HIGH|TREND|CONFIDENCE|WEATHER|NEWS`
pub const INSIGHT_FIELDS: usize = 11;
/// `TEMP_C|CONDITION|HUMIDITY_PCT|WIND_KMH|ADVISORY[|RAIN_PCT]`
pub const WEATHER_FIELDS: usize = 5;
/// `CROP|VARIETY|MARKET|PRICE|CHANGE_PCT|TREND[|ARRIVALS[|DATE]]`
pub const QUOTE_FIELDS: usize = 6;

const PRICE_FALLBACK: i64 = 0;
const TEMP_FALLBACK: i64 = 30;
const HUMIDITY_FALLBACK: i64 = 50;
const WIND_FALLBACK: i64 = 5;

/// Parse the leading numeral of a field, ignoring rupee signs, thousands
/// commas, and trailing prose like "per quintal".
fn leading_i64(field: &str, fallback: i64) -> i64 {
    let cleaned = field.trim().trim_start_matches('₹').replace(',', "");
    let s = cleaned.trim();
    let mut end = 0;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() || (c == '-' && i == 0) {
            end = i + 1;
        } else {
            break;
        }
    }
    s[..end].parse().unwrap_or(fallback)
}

/// Like [`leading_i64`] but allows a sign and one decimal point.
fn leading_f64(field: &str, fallback: f64) -> f64 {
    let cleaned = field.trim().trim_start_matches('+').replace(',', "");
    let s = cleaned.trim();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() || (c == '-' && i == 0) {
            end = i + 1;
        } else if c == '.' && !seen_dot && end > 0 {
            seen_dot = true;
            end = i + 1;
        } else {
            break;
        }
    }
    s[..end].parse().unwrap_or(fallback)
}

/// Parse the 11-field dashboard verdict line.
pub fn parse_insight(raw: &str) -> Result<Insight, AiError> {
    let text = clean_model_text(raw);
    let fields: Vec<&str> = text.split('|').map(str::trim).collect();
    if fields.len() < INSIGHT_FIELDS {
        return Err(AiError::Parse(format!(
            "insight needs {INSIGHT_FIELDS} fields, got {}",
            fields.len()
        )));
    }
    Ok(Insight {
        decision: fields[0].to_string(),
        color: DecisionColor::parse(fields[1]),
        reason: fields[2].to_string(),
        outlook: PriceOutlook {
            yesterday: leading_i64(fields[3], PRICE_FALLBACK),
            today: leading_i64(fields[4], PRICE_FALLBACK),
            tomorrow_low: leading_i64(fields[5], PRICE_FALLBACK),
            tomorrow_high: leading_i64(fields[6], PRICE_FALLBACK),
            trend: OutlookTrend::parse(fields[7]),
            confidence: Confidence::parse(fields[8]),
        },
        weather_impact: fields[9].to_string(),
        news_headline: fields[10].to_string(),
    })
}

/// Parse the 5-field weather line. A 6th field, when present, is the rain
/// chance in percent.
pub fn parse_weather(raw: &str) -> Result<WeatherSnapshot, AiError> {
    let text = clean_model_text(raw);
    let fields: Vec<&str> = text.split('|').map(str::trim).collect();
    if fields.len() < WEATHER_FIELDS {
        return Err(AiError::Parse(format!(
            "weather needs {WEATHER_FIELDS} fields, got {}",
            fields.len()
        )));
    }
    Ok(WeatherSnapshot {
        temp_c: leading_i64(fields[0], TEMP_FALLBACK),
        condition: fields[1].to_string(),
        humidity_pct: leading_i64(fields[2], HUMIDITY_FALLBACK),
        wind_kmh: leading_i64(fields[3], WIND_FALLBACK),
        advisory: fields[4].to_string(),
        rain_chance_pct: fields.get(5).map(|f| leading_i64(f, 0)),
    })
}

/// Parse one quote per line. Lines with fewer than [`QUOTE_FIELDS`] fields
/// are skipped, so a shorter list is still useful; zero surviving lines
/// counts as a failed parse. Order of surviving quotes matches input order.
pub fn parse_price_lines(raw: &str, today: NaiveDate) -> Result<Vec<PriceQuote>, AiError> {
    let text = clean_model_text(raw);
    let mut quotes = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() < QUOTE_FIELDS {
            debug!(line, "skipping short price line");
            continue;
        }
        quotes.push(PriceQuote {
            crop: fields[0].to_string(),
            variety: fields[1].to_string(),
            market: fields[2].to_string(),
            price: leading_i64(fields[3], PRICE_FALLBACK),
            change_pct: leading_f64(fields[4], 0.0),
            trend: Trend::parse(fields[5]),
            arrival_volume: fields
                .get(6)
                .map(|f| ArrivalVolume::parse(f))
                .unwrap_or_default(),
            date: fields
                .get(7)
                .and_then(|f| NaiveDate::parse_from_str(f, "%Y-%m-%d").ok())
                .unwrap_or(today),
        });
    }
    if quotes.is_empty() {
        return Err(AiError::Parse("no usable price lines".to_string()));
    }
    Ok(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 24).unwrap()
    }

    #[test]
    fn insight_scenario_parses_exactly() {
        let raw = "SELL NOW|green|Prices peaking|2100|2200|2150|2300|rising|high|Clear skies|Good demand";
        let insight = parse_insight(raw).unwrap();
        assert_eq!(insight.decision, "SELL NOW");
        assert_eq!(insight.color, DecisionColor::Green);
        assert_eq!(insight.reason, "Prices peaking");
        assert_eq!(insight.outlook.yesterday, 2100);
        assert_eq!(insight.outlook.today, 2200);
        assert_eq!(insight.outlook.tomorrow_low, 2150);
        assert_eq!(insight.outlook.tomorrow_high, 2300);
        assert_eq!(insight.outlook.trend, OutlookTrend::Rising);
        assert_eq!(insight.outlook.confidence, Confidence::High);
        assert_eq!(insight.weather_impact, "Clear skies");
        assert_eq!(insight.news_headline, "Good demand");
    }

    #[test]
    fn insight_with_too_few_fields_fails_whole_parse() {
        assert!(parse_insight("SELL|green|ok").is_err());
        assert!(parse_insight("").is_err());
        assert!(parse_insight("free text answer with no pipes at all").is_err());
    }

    #[test]
    fn insight_coerces_bad_fields_to_defaults() {
        let raw = "HOLD|neon|wait|n/a|2200|soon|high|sideways|certain|humid|";
        let insight = parse_insight(raw).unwrap();
        assert_eq!(insight.color, DecisionColor::Yellow);
        assert_eq!(insight.outlook.yesterday, 0);
        assert_eq!(insight.outlook.today, 2200);
        assert_eq!(insight.outlook.tomorrow_low, 0);
        assert_eq!(insight.outlook.tomorrow_high, 0);
        assert_eq!(insight.outlook.trend, OutlookTrend::Stable);
        assert_eq!(insight.outlook.confidence, Confidence::Medium);
        assert_eq!(insight.news_headline, "");
    }

    #[test]
    fn insight_strips_rupees_and_commas() {
        let raw = "SELL|green|ok|₹2,100|₹2,200 per quintal|2150|2300|rising|high|clear|news";
        let insight = parse_insight(raw).unwrap();
        assert_eq!(insight.outlook.yesterday, 2100);
        assert_eq!(insight.outlook.today, 2200);
    }

    #[test]
    fn quote_round_trip() {
        let quotes = parse_price_lines("Onion|Red|Lasalgaon|2400|5|up", today()).unwrap();
        assert_eq!(quotes.len(), 1);
        let q = &quotes[0];
        assert_eq!(q.crop, "Onion");
        assert_eq!(q.variety, "Red");
        assert_eq!(q.market, "Lasalgaon");
        assert_eq!(q.price, 2400);
        assert_eq!(q.change_pct, 5.0);
        assert_eq!(q.trend, Trend::Up);
        assert_eq!(q.arrival_volume, ArrivalVolume::Medium);
        assert_eq!(q.date, today());
    }

    #[test]
    fn short_price_lines_are_dropped_in_order() {
        let raw = "Onion|Red|Lasalgaon|2400|5.2|up\n\
                   Soybean|Yellow|Latur\n\
                   Wheat|Lokwan|Indore|2150|-0.5|down";
        let quotes = parse_price_lines(raw, today()).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].crop, "Onion");
        assert_eq!(quotes[1].crop, "Wheat");
        assert_eq!(quotes[1].change_pct, -0.5);
        assert_eq!(quotes[1].trend, Trend::Down);
    }

    #[test]
    fn optional_quote_fields_are_honored() {
        let raw = "Cotton|Medium Staple|Akola|6900|0.8|up|high|2024-10-23";
        let q = &parse_price_lines(raw, today()).unwrap()[0];
        assert_eq!(q.arrival_volume, ArrivalVolume::High);
        assert_eq!(q.date, NaiveDate::from_ymd_opt(2024, 10, 23).unwrap());
    }

    #[test]
    fn unparseable_quote_date_falls_back_to_today() {
        let raw = "Cotton|Medium Staple|Akola|6900|0.8|up|low|yesterday";
        let q = &parse_price_lines(raw, today()).unwrap()[0];
        assert_eq!(q.date, today());
    }

    #[test]
    fn all_short_lines_fail_the_list_parse() {
        assert!(parse_price_lines("a|b|c\nd|e", today()).is_err());
        assert!(parse_price_lines("", today()).is_err());
    }

    #[test]
    fn fenced_output_still_parses() {
        let raw = "```\nOnion|Red|Lasalgaon|2400|5|up\n```";
        assert_eq!(parse_price_lines(raw, today()).unwrap().len(), 1);
    }

    #[test]
    fn weather_parses_with_and_without_rain() {
        let snap = parse_weather("31|Sunny|48|12|Spray in the morning").unwrap();
        assert_eq!(snap.temp_c, 31);
        assert_eq!(snap.condition, "Sunny");
        assert_eq!(snap.humidity_pct, 48);
        assert_eq!(snap.wind_kmh, 12);
        assert_eq!(snap.rain_chance_pct, None);

        let snap = parse_weather("28 C|Light rain|80|10|Delay harvest|60").unwrap();
        assert_eq!(snap.temp_c, 28);
        assert_eq!(snap.rain_chance_pct, Some(60));
    }

    #[test]
    fn weather_coercion_uses_task_fallbacks() {
        let snap = parse_weather("warm|Cloudy|humid|breezy|Take care").unwrap();
        assert_eq!(snap.temp_c, 30);
        assert_eq!(snap.humidity_pct, 50);
        assert_eq!(snap.wind_kmh, 5);
    }

    #[test]
    fn weather_too_few_fields_fails() {
        assert!(parse_weather("31|Sunny|48").is_err());
    }

    #[test]
    fn parsing_is_idempotent() {
        let raw = "SELL NOW|green|Prices peaking|2100|2200|2150|2300|rising|high|Clear skies|Good demand";
        assert_eq!(parse_insight(raw).unwrap(), parse_insight(raw).unwrap());

        let list = "Onion|Red|Lasalgaon|2400|5|up\nshort|line";
        assert_eq!(
            parse_price_lines(list, today()).unwrap(),
            parse_price_lines(list, today()).unwrap()
        );
    }

    #[test]
    fn negative_change_with_percent_sign() {
        let q = &parse_price_lines("Soybean|Yellow|Latur|4800|-1.5%|down", today()).unwrap()[0];
        assert_eq!(q.change_pct, -1.5);
    }

    proptest! {
        #[test]
        fn prop_insight_never_panics(raw in ".{0,400}") {
            let _ = parse_insight(&raw);
        }

        #[test]
        fn prop_price_lines_never_panic(raw in ".{0,400}") {
            let _ = parse_price_lines(&raw, today());
        }

        #[test]
        fn prop_weather_is_idempotent(raw in ".{0,200}") {
            let a = parse_weather(&raw).ok();
            let b = parse_weather(&raw).ok();
            prop_assert_eq!(a, b);
        }
    }
}
