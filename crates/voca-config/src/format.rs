use std::env;

use serde::{Deserialize, Serialize};
use voca_core::parser::{CORRECTION_HEADER, Delimiter, LineFormat};

#[derive(Default, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Field separator the model is told to emit
    pub delimiter: Delimiter,
    /// Ask the model for a spelling-corrected headword header line
    pub correction_header: bool,
    /// Re-number senses for display
    pub number_senses: bool,
}

impl FormatConfig {
    pub fn new() -> Self {
        let delimiter = match env::var("RESPONSE_DELIMITER").as_deref() {
            Ok("@@@") | Ok("triple-at") => Delimiter::TripleAt,
            _ => Delimiter::Pipe,
        };

        Self {
            delimiter,
            correction_header: true,
            number_senses: true,
        }
    }

    /// Parser-side view of this format
    pub fn line_format(&self) -> LineFormat {
        LineFormat {
            delimiter: self.delimiter,
            header_prefix: self
                .correction_header
                .then(|| CORRECTION_HEADER.to_string()),
            number_senses: self.number_senses,
        }
    }
}
