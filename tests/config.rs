use kisansathi::ai::config::AiConfig;
use kisansathi::Config;
use serial_test::serial;

#[test]
#[serial]
fn ai_config_from_env_missing_key() {
    std::env::remove_var("GEMINI_API_KEY");
    std::env::remove_var("GEMINI_MODEL");
    std::env::remove_var("GEMINI_API_URL");
    assert!(AiConfig::from_env().is_none());
}

#[test]
#[serial]
fn ai_config_from_env_defaults() {
    std::env::set_var("GEMINI_API_KEY", "k");
    std::env::remove_var("GEMINI_MODEL");
    std::env::remove_var("GEMINI_API_URL");
    let cfg = AiConfig::from_env().unwrap();
    assert_eq!(cfg.api_key, "k");
    assert_eq!(cfg.model, "gemini-2.5-flash");
    assert!(cfg.api_url.is_none());
}

#[test]
#[serial]
fn ai_config_from_env_overrides() {
    std::env::set_var("GEMINI_API_KEY", "k");
    std::env::set_var("GEMINI_MODEL", "gemini-2.5-pro");
    std::env::set_var("GEMINI_API_URL", "http://localhost:9000");
    let cfg = AiConfig::from_env().unwrap();
    assert_eq!(cfg.model, "gemini-2.5-pro");
    assert_eq!(cfg.api_url.as_deref(), Some("http://localhost:9000"));
    std::env::remove_var("GEMINI_MODEL");
    std::env::remove_var("GEMINI_API_URL");
}

#[test]
#[serial]
fn config_from_env_carries_ai_section() {
    std::env::set_var("GEMINI_API_KEY", "k");
    std::env::remove_var("GEMINI_MODEL");
    let cfg = Config::from_env();
    let ai = cfg.ai.unwrap();
    assert_eq!(ai.api_key, "k");
    std::env::remove_var("GEMINI_API_KEY");
}
