use std::env;

/// Settings for the hosted generate-content endpoint.
///
/// `api_url` overrides the default base URL and exists for tests that point
/// the client at a local mock server.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub model: String,
    pub api_url: Option<String>,
}

impl AiConfig {
    /// Returns `None` when no API key is configured. Every advisory call
    /// then degrades to its static default.
    pub fn from_env() -> Option<Self> {
        let api_key = match env::var("GEMINI_API_KEY") {
            Ok(k) => k,
            Err(_) => return None,
        };
        Some(Self {
            api_key,
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            api_url: env::var("GEMINI_API_URL").ok(),
        })
    }
}
