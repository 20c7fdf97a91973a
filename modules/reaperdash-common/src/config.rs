use std::env;

/// Hardcoded fallback when no base URL is configured anywhere.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the fbreaper scraping backend.
    pub api_base_url: String,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables. Every setting has a
    /// local-development default; only a malformed port panics.
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("FBREAPER_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
        }
    }
}
