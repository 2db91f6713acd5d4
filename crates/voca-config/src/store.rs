use std::env;

use serde::{Deserialize, Serialize};

#[derive(Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Use the remote spreadsheet; entries stay in memory when disabled
    pub enabled: bool,
    /// Sheets API key
    pub api_key: String,
    /// Base URL of the Sheets API
    pub base_url: String,
    /// Spreadsheet identifier
    pub spreadsheet_id: String,
    /// Worksheet (tab) holding the vocabulary table
    pub worksheet: String,
}

impl StoreConfig {
    pub fn new() -> Self {
        let spreadsheet_id = env::var("SHEETS_SPREADSHEET_ID").unwrap_or_default();

        Self {
            enabled: !spreadsheet_id.is_empty(),
            api_key: env::var("SHEETS_API_KEY").unwrap_or_default(),
            base_url: env::var("SHEETS_API_URL")
                .unwrap_or_else(|_| "https://sheets.googleapis.com".to_string()),
            spreadsheet_id,
            worksheet: env::var("SHEETS_WORKSHEET").unwrap_or_else(|_| "Sheet1".to_string()),
        }
    }
}
