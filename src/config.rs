use anyhow::Result;

#[derive(Debug, Clone)]
pub struct Config {
    // External image services (URL templates only, never fetched here)
    pub screenshot_provider: String,
    pub social_card_provider: String,

    // Persisted preference store
    pub prefs_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Screenshot service (Microlink-compatible API)
            screenshot_provider: std::env::var("PORTFOLIO_SCREENSHOT_PROVIDER")
                .unwrap_or_else(|_| "https://api.microlink.io".to_string()),

            // Social-card service (GitHub OpenGraph-compatible API)
            social_card_provider: std::env::var("PORTFOLIO_SOCIAL_CARD_PROVIDER")
                .unwrap_or_else(|_| "https://opengraph.githubassets.com".to_string()),

            // Preference store
            prefs_path: std::env::var("PORTFOLIO_PREFS_PATH")
                .unwrap_or_else(|_| "data/preferences.json".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("PORTFOLIO_SCREENSHOT_PROVIDER");
        std::env::remove_var("PORTFOLIO_SOCIAL_CARD_PROVIDER");
        std::env::remove_var("PORTFOLIO_PREFS_PATH");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("Should succeed with defaults");
        assert_eq!(config.screenshot_provider, "https://api.microlink.io");
        assert_eq!(
            config.social_card_provider,
            "https://opengraph.githubassets.com"
        );
        assert_eq!(config.prefs_path, "data/preferences.json");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("PORTFOLIO_SCREENSHOT_PROVIDER", "https://shots.example");
        std::env::set_var("PORTFOLIO_PREFS_PATH", "/tmp/prefs.json");

        let config = Config::from_env().expect("Should succeed");
        assert_eq!(config.screenshot_provider, "https://shots.example");
        assert_eq!(config.prefs_path, "/tmp/prefs.json");

        clear_env();
    }
}
