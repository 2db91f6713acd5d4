use std::env;

use serde::{Deserialize, Serialize};

use self::format::FormatConfig;
use self::generator::GeneratorConfig;
use self::store::StoreConfig;

pub mod format;
pub mod generator;
pub mod store;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub store: StoreConfig,
    pub format: FormatConfig,

    /// Event channel capacity between the shell and the app loop
    pub channel_capacity: usize,
    /// Default target file for table exports
    pub export_path: String,
}

impl Config {
    pub fn new() -> Self {
        let channel_capacity = env::var("CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(64); // UI interactions only, stays small

        let export_path =
            env::var("EXPORT_PATH").unwrap_or_else(|_| "vocab_export.csv".to_string());

        Config {
            generator: GeneratorConfig::new(),
            store: StoreConfig::new(),
            format: FormatConfig::new(),

            channel_capacity,
            export_path,
        }
    }
}
