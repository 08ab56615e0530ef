use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the append-only event journal.
    pub journal_path: String,

    // Web server
    pub host: String,
    pub port: u16,

    /// Directory served as static content at the router fallback.
    pub static_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Every variable has a default; nothing is required.
    pub fn from_env() -> Self {
        Self {
            journal_path: env::var("JOURNAL_PATH")
                .unwrap_or_else(|_| "data/events.jsonl".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a number"),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
        }
    }
}
