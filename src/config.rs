//! Application configuration, read from the environment (and `.env` via dotenvy).
//!
//! Every setting has a default so the server starts with zero configuration;
//! without `DATABASE_URL` presentations live in memory only.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Env: `BIND_ADDR`. Default: `127.0.0.1:8080`
    pub bind_addr: String,

    /// Env: `DATABASE_URL`. Default: unset (in-memory store).
    pub database_url: Option<String>,

    /// Env: `DATABASE_MAX_CONNECTIONS`. Default: `8`
    pub database_max_connections: u32,

    /// Env: `GROQ_API_URL`. Default: Groq's OpenAI-compatible endpoint.
    pub groq_api_url: String,

    /// Env: `GROQ_API_KEY`. Default: empty (generation calls fail and fall back).
    pub groq_api_key: String,

    /// Env: `GROQ_MODEL`. Default: `llama3-70b-8192`
    pub groq_model: String,

    /// Env: `UNSPLASH_API_URL`. Default: `https://api.unsplash.com`
    pub unsplash_api_url: String,

    /// Env: `UNSPLASH_ACCESS_KEY`. Default: empty.
    pub unsplash_access_key: String,

    /// Env: `MODELS_DIR`. Default: `./public/models`
    pub models_dir: PathBuf,

    /// Upper bound on every outbound generation request.
    /// Env: `GENERATION_TIMEOUT_SECS`. Default: `30`
    pub generation_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            database_url: None,
            database_max_connections: 8,
            groq_api_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            groq_api_key: String::new(),
            groq_model: "llama3-70b-8192".to_string(),
            unsplash_api_url: "https://api.unsplash.com".to_string(),
            unsplash_access_key: String::new(),
            models_dir: PathBuf::from("./public/models"),
            generation_timeout: Duration::from_secs(30),
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Could not load .env: {e}");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unparseable numbers keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(addr) = lookup("BIND_ADDR") {
            config.bind_addr = addr;
        }

        config.database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        if let Some(val) = lookup("DATABASE_MAX_CONNECTIONS") {
            match val.parse::<u32>() {
                Ok(n) if n > 0 => config.database_max_connections = n,
                _ => log::warn!("Invalid DATABASE_MAX_CONNECTIONS '{val}', using default"),
            }
        }

        if let Some(url) = lookup("GROQ_API_URL") {
            config.groq_api_url = url;
        }
        if let Some(key) = lookup("GROQ_API_KEY") {
            config.groq_api_key = key;
        }
        if let Some(model) = lookup("GROQ_MODEL") {
            config.groq_model = model;
        }
        if let Some(url) = lookup("UNSPLASH_API_URL") {
            config.unsplash_api_url = url;
        }
        if let Some(key) = lookup("UNSPLASH_ACCESS_KEY") {
            config.unsplash_access_key = key;
        }
        if let Some(dir) = lookup("MODELS_DIR") {
            config.models_dir = PathBuf::from(dir);
        }

        if let Some(val) = lookup("GENERATION_TIMEOUT_SECS") {
            match val.parse::<u64>() {
                Ok(secs) if secs > 0 => config.generation_timeout = Duration::from_secs(secs),
                _ => log::warn!("Invalid GENERATION_TIMEOUT_SECS '{val}', using default"),
            }
        }

        config
    }
}
