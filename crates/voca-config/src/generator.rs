use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Enable the analysis feature
    pub enabled: bool,
    /// Generative language API key
    pub api_key: String,
    /// Base URL of the generative language API
    pub api_url: String,
    /// Model identifier
    pub model: String,
    /// Maximum senses requested per headword
    pub max_senses: u8,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        let max_senses = env::var("MAX_SENSES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        Self {
            enabled: true,
            api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            max_senses,
        }
    }
}
