//! Prompt templates for every advisory task.
//!
//! Centralizing these strings makes it easy to tune how the assistant
//! answers without digging through the service layer. Structured tasks spell
//! out the exact pipe-separated field order the parser expects.

use crate::types::{Language, QueryContext};

/// Persona sent as the system instruction on every request.
pub const PERSONA: &str = "You are 'KisanSathi', an expert agricultural advisor for Indian \
farmers. Your goal is to help small and marginal farmers increase income and reduce risk. \
Answers must be practical, concise, and culturally relevant to India. Use the Rupee symbol \
(₹) and local units like quintal, bigha, or acre where relevant. If asked about prices, \
clarify these are estimates. If asked about schemes, focus on PM-KISAN, KCC, Fasal Bima \
Yojana, Raitha Siri, and similar programs. Always be encouraging and respectful. Answer in \
the requested language.";

/// Instruction for transcription requests.
pub const TRANSCRIBE: &str = "Transcribe the spoken words in this audio exactly, without \
commentary or translation. Use digits for quantities.";

/// How the reply language is requested inside the user prompt.
pub fn language_instruction(lang: Language) -> &'static str {
    match lang {
        Language::English => "Answer in simple English for a rural audience.",
        Language::Hindi => {
            "Answer in Hindi (Devanagari script). Keep it simple for a rural audience."
        }
        Language::Kannada => {
            "Answer in Kannada (Kannada script). Keep it simple for a rural audience."
        }
    }
}

pub fn chat(lang: Language, question: &str) -> String {
    format!("{} {}", language_instruction(lang), question)
}

pub fn dashboard_insight(ctx: &QueryContext) -> String {
    let (lat, lon) = ctx.coords;
    format!(
        "{lang} Act as a market analyst for a farmer growing {crop} in {district} district \
         (near {lat:.2}, {lon:.2}), India. Considering current mandi prices, weather, and \
         agricultural news, reply with EXACTLY one line of 11 fields separated by '|', in \
         this order and nothing else:\n\
         DECISION|COLOR|REASON|YESTERDAY_PRICE|TODAY_PRICE|TOMORROW_LOW|TOMORROW_HIGH|TREND|CONFIDENCE|WEATHER_IMPACT|NEWS_HEADLINE\n\
         DECISION is a short verdict like SELL NOW, HOLD, HARVEST or PROTECT. COLOR is one \
         of green, red, yellow, blue. Prices are whole rupees per quintal. TREND is one of \
         rising, falling, stable. CONFIDENCE is one of low, medium, high. REASON, \
         WEATHER_IMPACT and NEWS_HEADLINE are single short sentences.",
        lang = language_instruction(ctx.lang),
        crop = ctx.crop,
        district = ctx.district,
    )
}

pub fn mandi_prices(ctx: &QueryContext) -> String {
    format!(
        "{lang} List current wholesale prices for the main crops traded around {district} \
         district, India, including {crop}. Reply with up to 8 lines, one market quote per \
         line, each line EXACTLY these fields separated by '|':\n\
         CROP|VARIETY|MARKET|PRICE|CHANGE_PCT|TREND\n\
         PRICE is whole rupees per quintal. CHANGE_PCT is the percent change since \
         yesterday, negative when falling. TREND is one of up, down, stable. No headers, \
         no extra text.",
        lang = language_instruction(ctx.lang),
        district = ctx.district,
        crop = ctx.crop,
    )
}

pub fn weather(ctx: &QueryContext) -> String {
    let (lat, lon) = ctx.coords;
    format!(
        "{lang} Give the current farm weather for coordinates {lat:.2}, {lon:.2} \
         ({district} district, India). Reply with EXACTLY one line of fields separated by \
         '|':\n\
         TEMP_C|CONDITION|HUMIDITY_PCT|WIND_KMH|ADVISORY|RAIN_CHANCE_PCT\n\
         Numbers are plain integers. ADVISORY is one short sentence of field advice for a \
         farmer growing {crop}. No extra text.",
        lang = language_instruction(ctx.lang),
        district = ctx.district,
        crop = ctx.crop,
    )
}

pub fn schemes(ctx: &QueryContext, profile: &str) -> String {
    let profile = if profile.trim().is_empty() {
        format!(
            "a small farmer in {} district growing {}",
            ctx.district, ctx.crop
        )
    } else {
        profile.trim().to_string()
    };
    format!(
        "{lang} Recommend Indian government schemes for {profile}. Cover central schemes \
         like PM-KISAN, KCC and Fasal Bima Yojana plus relevant Karnataka schemes like \
         Raitha Siri. For each, give one line on the benefit and one on eligibility. Keep \
         the whole answer under 200 words.",
        lang = language_instruction(ctx.lang),
    )
}

pub fn market_advisory(ctx: &QueryContext) -> String {
    format!(
        "{lang} Give a short market advisory for a farmer growing {crop} in {district} \
         district, India: where demand is heading this week, whether to sell at the local \
         mandi or wait, and one risk to watch. Under 120 words.",
        lang = language_instruction(ctx.lang),
        crop = ctx.crop,
        district = ctx.district,
    )
}

/// Text part sent alongside the crop photo.
pub fn diagnose(lang: Language) -> String {
    format!(
        "{} Analyze this crop image. Identify the disease or pest if any. Suggest low-cost \
         Indian remedies, both chemical and organic.",
        language_instruction(lang)
    )
}

/// Text part sent alongside the voice note.
pub fn transcribe(lang: Language) -> String {
    format!("{} The speaker's locale is {}.", TRANSCRIBE, lang.stt_locale())
}
