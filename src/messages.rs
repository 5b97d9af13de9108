//! All user-facing static text, in the three supported languages.
//!
//! Keep every string the bot sends in this module so translations stay in
//! one place. Each function must return non-empty text for every language.

use crate::types::Language;

pub fn help_text(lang: Language) -> &'static str {
    match lang {
        Language::English => {
            "🌾 Namaskara! I am <b>KisanSathi</b>, your farming companion.\n\
             Ask me anything about farming, weather, mandi prices, or government schemes.\n\n\
             <b>Commands:</b>\n\
             /insight - Today's sell or hold verdict for your crop.\n\
             /mandi - Latest mandi prices.\n\
             /weather - Weather outlook and field advisory.\n\
             /schemes - Government schemes you may be eligible for.\n\
             /advisory - Market advisory for your district.\n\
             /district - Set your district, e.g. /district Mandya.\n\
             /crop - Set your crop, e.g. /crop Sugarcane.\n\
             /language - Switch language.\n\n\
             You can also send a crop photo for diagnosis, a voice note, or share\n\
             your location for local weather."
        }
        Language::Hindi => {
            "🌾 नमस्कार! मैं <b>किसानसाथी</b> हूँ, आपका खेती सहायक।\n\
             खेती, मौसम, मंडी भाव या सरकारी योजनाओं के बारे में कुछ भी पूछें।\n\n\
             <b>कमांड:</b>\n\
             /insight - आज की बेचें या रोकें सलाह।\n\
             /mandi - ताज़ा मंडी भाव।\n\
             /weather - मौसम और खेत सलाह।\n\
             /schemes - आपके लिए सरकारी योजनाएं।\n\
             /advisory - आपके जिले की बाजार सलाह।\n\
             /district - अपना जिला सेट करें, जैसे /district Mandya।\n\
             /crop - अपनी फसल सेट करें, जैसे /crop Sugarcane।\n\
             /language - भाषा बदलें।\n\n\
             आप फसल की फोटो, वॉइस संदेश या अपनी लोकेशन भी भेज सकते हैं।"
        }
        Language::Kannada => {
            "🌾 ನಮಸ್ಕಾರ! ನಾನು <b>ಕಿಸಾನ್‌ಸಾಥಿ</b>, ನಿಮ್ಮ ಕೃಷಿ ಸಂಗಾತಿ.\n\
             ಕೃಷಿ, ಹವಾಮಾನ, ಮಂಡಿ ಬೆಲೆ ಅಥವಾ ಸರ್ಕಾರಿ ಯೋಜನೆಗಳ ಬಗ್ಗೆ ಏನನ್ನಾದರೂ ಕೇಳಿ.\n\n\
             <b>ಆದೇಶಗಳು:</b>\n\
             /insight - ಇಂದು ಮಾರಬೇಕೆ ಅಥವಾ ಕಾಯಬೇಕೆ ಸಲಹೆ.\n\
             /mandi - ಇತ್ತೀಚಿನ ಮಂಡಿ ಬೆಲೆಗಳು.\n\
             /weather - ಹವಾಮಾನ ಮತ್ತು ಹೊಲದ ಸಲಹೆ.\n\
             /schemes - ನಿಮಗೆ ಸಿಗಬಹುದಾದ ಸರ್ಕಾರಿ ಯೋಜನೆಗಳು.\n\
             /advisory - ನಿಮ್ಮ ಜಿಲ್ಲೆಯ ಮಾರುಕಟ್ಟೆ ಸಲಹೆ.\n\
             /district - ನಿಮ್ಮ ಜಿಲ್ಲೆ ಹೊಂದಿಸಿ, ಉದಾ. /district Mandya.\n\
             /crop - ನಿಮ್ಮ ಬೆಳೆ ಹೊಂದಿಸಿ, ಉದಾ. /crop Sugarcane.\n\
             /language - ಭಾಷೆ ಬದಲಾಯಿಸಿ.\n\n\
             ಬೆಳೆ ಫೋಟೋ, ಧ್ವನಿ ಸಂದೇಶ ಅಥವಾ ನಿಮ್ಮ ಸ್ಥಳವನ್ನೂ ಕಳುಹಿಸಬಹುದು."
        }
    }
}

pub fn chat_greeting(lang: Language) -> &'static str {
    match lang {
        Language::English => {
            "Namaste! I am KisanSathi. Ask me about farming, weather, prices, or schemes."
        }
        Language::Hindi => {
            "नमस्ते! मैं आपका किसानसाथी हूँ। खेती, मौसम, मंडी भाव या सरकारी योजनाओं के बारे में कुछ भी पूछें।"
        }
        Language::Kannada => {
            "ನಮಸ್ಕಾರ! ನಾನು ಕಿಸಾನ್‌ಸಾಥಿ. ಕೃಷಿ, ಹವಾಮಾನ, ಬೆಲೆ ಅಥವಾ ಯೋಜನೆಗಳ ಬಗ್ಗೆ ಕೇಳಿ."
        }
    }
}

/// Shown whenever a model call fails, in chat and diagnosis flows.
pub fn connectivity_error(lang: Language) -> &'static str {
    match lang {
        Language::English => {
            "Error connecting to KisanSathi server. Please check your internet."
        }
        Language::Hindi => {
            "किसानसाथी सर्वर से संपर्क नहीं हो पा रहा है। कृपया अपना इंटरनेट जांचें।"
        }
        Language::Kannada => {
            "ಕಿಸಾನ್‌ಸಾಥಿ ಸರ್ವರ್‌ಗೆ ಸಂಪರ್ಕಿಸಲು ಆಗುತ್ತಿಲ್ಲ. ದಯವಿಟ್ಟು ನಿಮ್ಮ ಇಂಟರ್ನೆಟ್ ಪರಿಶೀಲಿಸಿ."
        }
    }
}

/// Apology for failed scheme or advisory requests.
pub fn advisory_apology(lang: Language) -> &'static str {
    match lang {
        Language::English => {
            "Sorry, this guidance is unavailable right now. Please try again later."
        }
        Language::Hindi => {
            "क्षमा करें, यह सलाह अभी उपलब्ध नहीं है। कृपया बाद में पुनः प्रयास करें।"
        }
        Language::Kannada => {
            "ಕ್ಷಮಿಸಿ, ಈ ಸಲಹೆ ಸದ್ಯ ಲಭ್ಯವಿಲ್ಲ. ದಯವಿಟ್ಟು ಸ್ವಲ್ಪ ಸಮಯದ ನಂತರ ಪ್ರಯತ್ನಿಸಿ."
        }
    }
}

pub fn fallback_decision(lang: Language) -> &'static str {
    match lang {
        Language::English => "HOLD",
        Language::Hindi => "रुकें",
        Language::Kannada => "ಹಿಡಿದಿಡಿ",
    }
}

pub fn fallback_reason(lang: Language) -> &'static str {
    match lang {
        Language::English => {
            "Market signals are unclear right now. Hold until a trend is confirmed."
        }
        Language::Hindi => {
            "बाजार के संकेत अभी स्पष्ट नहीं हैं। रुझान साफ होने तक प्रतीक्षा करें।"
        }
        Language::Kannada => {
            "ಮಾರುಕಟ್ಟೆ ಸೂಚನೆಗಳು ಸದ್ಯ ಸ್ಪಷ್ಟವಾಗಿಲ್ಲ. ಪ್ರವೃತ್ತಿ ಖಚಿತವಾಗುವವರೆಗೆ ಕಾಯಿರಿ."
        }
    }
}

pub fn fallback_weather_impact(lang: Language) -> &'static str {
    match lang {
        Language::English => "No weather alerts for your field today.",
        Language::Hindi => "आज आपके खेत के लिए कोई मौसम चेतावनी नहीं है।",
        Language::Kannada => "ಇಂದು ನಿಮ್ಮ ಹೊಲಕ್ಕೆ ಯಾವುದೇ ಹವಾಮಾನ ಎಚ್ಚರಿಕೆ ಇಲ್ಲ.",
    }
}

pub fn fallback_news(lang: Language) -> &'static str {
    match lang {
        Language::English => "Markets stable across Karnataka mandis.",
        Language::Hindi => "कर्नाटक की मंडियों में बाजार स्थिर हैं।",
        Language::Kannada => "ಕರ್ನಾಟಕದ ಮಂಡಿಗಳಲ್ಲಿ ಮಾರುಕಟ್ಟೆ ಸ್ಥಿರವಾಗಿದೆ.",
    }
}

pub fn fallback_weather_condition(lang: Language) -> &'static str {
    match lang {
        Language::English => "Partly cloudy",
        Language::Hindi => "आंशिक बादल",
        Language::Kannada => "ಭಾಗಶಃ ಮೋಡ",
    }
}

pub fn fallback_weather_advisory(lang: Language) -> &'static str {
    match lang {
        Language::English => {
            "Normal field work can continue. Irrigate in the evening if soil is dry."
        }
        Language::Hindi => {
            "सामान्य खेती का काम जारी रख सकते हैं। मिट्टी सूखी हो तो शाम को सिंचाई करें।"
        }
        Language::Kannada => {
            "ಸಾಮಾನ್ಯ ಕೃಷಿ ಕೆಲಸ ಮುಂದುವರಿಸಬಹುದು. ಮಣ್ಣು ಒಣಗಿದ್ದರೆ ಸಂಜೆ ನೀರು ಹಾಯಿಸಿ."
        }
    }
}

pub fn verdict_label(lang: Language) -> &'static str {
    match lang {
        Language::English => "The Verdict",
        Language::Hindi => "मुख्य सलाह",
        Language::Kannada => "ಮುಖ್ಯ ಸಲಹೆ",
    }
}

pub fn confidence_label(lang: Language) -> &'static str {
    match lang {
        Language::English => "Confidence",
        Language::Hindi => "भरोसा",
        Language::Kannada => "ಭರವಸೆ",
    }
}

pub fn price_flow_label(lang: Language) -> &'static str {
    match lang {
        Language::English => "Price Flow (₹/quintal)",
        Language::Hindi => "कीमत का बहाव (₹/क्विंटल)",
        Language::Kannada => "ಬೆಲೆ ಏರಿಳಿತ (₹/ಕ್ವಿಂಟಲ್)",
    }
}

pub fn mandi_header(lang: Language) -> &'static str {
    match lang {
        Language::English => "Mandi Prices",
        Language::Hindi => "मंडी भाव",
        Language::Kannada => "ಮಂಡಿ ಬೆಲೆಗಳು",
    }
}

pub fn mandi_disclaimer(lang: Language) -> &'static str {
    match lang {
        Language::English => "Prices are indicative. Confirm with your local mandi.",
        Language::Hindi => "कीमतें सांकेतिक हैं। अपनी स्थानीय मंडी से पुष्टि करें।",
        Language::Kannada => "ಬೆಲೆಗಳು ಸೂಚಕ ಮಾತ್ರ. ನಿಮ್ಮ ಸ್ಥಳೀಯ ಮಂಡಿಯಲ್ಲಿ ಖಚಿತಪಡಿಸಿಕೊಳ್ಳಿ.",
    }
}

pub fn weather_header(lang: Language) -> &'static str {
    match lang {
        Language::English => "Weather Outlook",
        Language::Hindi => "मौसम का हाल",
        Language::Kannada => "ಹವಾಮಾನ ಮುನ್ನೋಟ",
    }
}

pub fn diagnosis_header(lang: Language) -> &'static str {
    match lang {
        Language::English => "Diagnosis Report",
        Language::Hindi => "निदान रिपोर्ट",
        Language::Kannada => "ರೋಗ ಪತ್ತೆ ವರದಿ",
    }
}

pub fn schemes_header(lang: Language) -> &'static str {
    match lang {
        Language::English => "Scheme Guidance",
        Language::Hindi => "योजना सलाह",
        Language::Kannada => "ಯೋಜನೆ ಮಾರ್ಗದರ್ಶನ",
    }
}

pub fn advisory_header(lang: Language) -> &'static str {
    match lang {
        Language::English => "Market Advisory",
        Language::Hindi => "बाजार सलाह",
        Language::Kannada => "ಮಾರುಕಟ್ಟೆ ಸಲಹೆ",
    }
}

pub fn language_prompt(lang: Language) -> &'static str {
    match lang {
        Language::English => "Choose your language:",
        Language::Hindi => "अपनी भाषा चुनें:",
        Language::Kannada => "ನಿಮ್ಮ ಭಾಷೆಯನ್ನು ಆರಿಸಿ:",
    }
}

/// Confirmation after the selector, phrased in the language just chosen.
pub fn language_set(lang: Language) -> &'static str {
    match lang {
        Language::English => "Language set to English.",
        Language::Hindi => "भाषा हिंदी पर सेट कर दी गई है।",
        Language::Kannada => "ಭಾಷೆ ಕನ್ನಡಕ್ಕೆ ಹೊಂದಿಸಲಾಗಿದೆ.",
    }
}

pub fn district_usage(lang: Language) -> &'static str {
    match lang {
        Language::English => "Send your district after the command, e.g. /district Mandya.",
        Language::Hindi => "कमांड के बाद अपना जिला लिखें, जैसे /district Mandya।",
        Language::Kannada => "ಆದೇಶದ ನಂತರ ನಿಮ್ಮ ಜಿಲ್ಲೆ ಬರೆಯಿರಿ, ಉದಾ. /district Mandya.",
    }
}

pub fn crop_usage(lang: Language) -> &'static str {
    match lang {
        Language::English => "Send your crop after the command, e.g. /crop Sugarcane.",
        Language::Hindi => "कमांड के बाद अपनी फसल लिखें, जैसे /crop Sugarcane।",
        Language::Kannada => "ಆದೇಶದ ನಂತರ ನಿಮ್ಮ ಬೆಳೆ ಬರೆಯಿರಿ, ಉದಾ. /crop Sugarcane.",
    }
}

pub fn district_set(lang: Language, district: &str) -> String {
    match lang {
        Language::English => format!("District set to {district}."),
        Language::Hindi => format!("जिला {district} सेट कर दिया गया है।"),
        Language::Kannada => format!("ಜಿಲ್ಲೆ {district} ಎಂದು ಹೊಂದಿಸಲಾಗಿದೆ."),
    }
}

pub fn crop_set(lang: Language, crop: &str) -> String {
    match lang {
        Language::English => format!("Crop set to {crop}."),
        Language::Hindi => format!("फसल {crop} सेट कर दी गई है।"),
        Language::Kannada => format!("ಬೆಳೆ {crop} ಎಂದು ಹೊಂದಿಸಲಾಗಿದೆ."),
    }
}

pub fn location_saved(lang: Language) -> &'static str {
    match lang {
        Language::English => "Location saved. Weather and prices will use it from now on.",
        Language::Hindi => "लोकेशन सहेज ली गई है। अब मौसम और भाव इसी के अनुसार मिलेंगे।",
        Language::Kannada => "ಸ್ಥಳ ಉಳಿಸಲಾಗಿದೆ. ಇನ್ನು ಮುಂದೆ ಹವಾಮಾನ ಮತ್ತು ಬೆಲೆ ಇದರಂತೆ ಸಿಗುತ್ತವೆ.",
    }
}
