use anyhow::{Context, Result};

const DEFAULT_CONTACT_FORM_ACTION: &str = "/api/contact";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base endpoint of the spreadsheet-backed content source. Topics are
    /// requested as `?tab=<topic>` against this URL.
    pub content_source_url: String,
    /// Postgres connection string. When absent, submissions are kept in memory.
    pub database_url: Option<String>,
    pub contact_form_action: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            content_source_url: require_env("CONTENT_SOURCE_URL")?,
            database_url: optional_env("DATABASE_URL"),
            contact_form_action: optional_env("CONTACT_FORM_ACTION")
                .unwrap_or_else(|| DEFAULT_CONTACT_FORM_ACTION.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
