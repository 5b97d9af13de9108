//! HTML rendering of the typed records. Dynamic model text is always
//! escaped before it goes into a formatted message.

use teloxide::utils::html::escape;

use crate::messages;
use crate::types::{Insight, Language, PriceQuote, WeatherSnapshot};

pub fn format_insight(insight: &Insight, lang: Language) -> String {
    let o = &insight.outlook;
    let mut text = format!(
        "{emoji} <b>{label}: {decision}</b>\n{reason}\n\n\
         📈 <b>{flow}</b>\n₹{yesterday} → <b>₹{today}</b> → ₹{lo}–₹{hi} ({trend})\n\
         {conf_label}: {confidence}\n\n\
         ☁️ {weather}",
        emoji = insight.color.emoji(),
        label = messages::verdict_label(lang),
        decision = escape(&insight.decision),
        reason = escape(&insight.reason),
        flow = messages::price_flow_label(lang),
        yesterday = o.yesterday,
        today = o.today,
        lo = o.tomorrow_low,
        hi = o.tomorrow_high,
        trend = o.trend.as_str(),
        conf_label = messages::confidence_label(lang),
        confidence = o.confidence.as_str().to_uppercase(),
        weather = escape(&insight.weather_impact),
    );
    if !insight.news_headline.is_empty() {
        text.push_str(&format!("\n📰 {}", escape(&insight.news_headline)));
    }
    text
}

pub fn format_quotes(quotes: &[PriceQuote], lang: Language) -> String {
    let mut text = format!("🏪 <b>{}</b>\n", messages::mandi_header(lang));
    for q in quotes {
        text.push_str(&format!(
            "\n<b>{crop}</b> ({variety}) — {market}\n₹{price}/qtl  {arrow} {change:.1}%\n",
            crop = escape(&q.crop),
            variety = escape(&q.variety),
            market = escape(&q.market),
            price = q.price,
            arrow = q.trend.arrow(),
            change = q.change_pct.abs(),
        ));
    }
    text.push_str(&format!("\n<i>{}</i>", messages::mandi_disclaimer(lang)));
    text
}

pub fn format_weather(snapshot: &WeatherSnapshot, lang: Language) -> String {
    let mut text = format!(
        "⛅️ <b>{header}</b>\n🌡 {temp}°C, {condition}\n💧 {humidity}%  💨 {wind} km/h",
        header = messages::weather_header(lang),
        temp = snapshot.temp_c,
        condition = escape(&snapshot.condition),
        humidity = snapshot.humidity_pct,
        wind = snapshot.wind_kmh,
    );
    if let Some(rain) = snapshot.rain_chance_pct {
        text.push_str(&format!("  ☔ {rain}%"));
    }
    text.push_str(&format!("\n\n{}", escape(&snapshot.advisory)));
    text
}
