use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Header prefix carrying a spelling correction proposed by the model
pub const CORRECTION_HEADER: &str = "CORRECT_WORD:";

/// Field separator the model is instructed to emit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Delimiter {
    #[default]
    Pipe,
    TripleAt,
}

impl Delimiter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Pipe => "|",
            Delimiter::TripleAt => "@@@",
        }
    }
}

/// Expected line shape of the generated text
#[derive(Debug, Clone)]
pub struct LineFormat {
    pub delimiter: Delimiter,
    /// Recognized header prefix, e.g. `CORRECT_WORD:`
    pub header_prefix: Option<String>,
    /// Strip model-emitted enumeration and re-number pairs for display
    pub number_senses: bool,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::Pipe,
            header_prefix: Some(CORRECTION_HEADER.to_string()),
            number_senses: true,
        }
    }
}

/// One meaning/example pair taken from a data line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensePair {
    pub meaning: String,
    pub example: String,
}

#[derive(Debug, Clone, Default)]
pub struct ParsedResponse {
    pub corrected_word: Option<String>,
    pub senses: Vec<SensePair>,
}

// Leading enumeration the model tends to add: "1.", "2)", "3 -"
static ENUM_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\s*[.)\-]\s*").expect("enumeration prefix pattern"));

/// Best-effort split of raw model output into meaning/example pairs.
///
/// Never fails: lines without the delimiter are dropped, and a line
/// matching the recognized header prefix feeds the corrected-headword
/// side channel instead of the pair list. The delimiter is split on its
/// first occurrence only, so a meaning or example containing the
/// delimiter character corrupts that line's split.
pub fn parse_response(raw: &str, format: &LineFormat) -> ParsedResponse {
    let mut parsed = ParsedResponse::default();

    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(prefix) = &format.header_prefix {
            if let Some(rest) = line.strip_prefix(prefix.as_str()) {
                let rest = rest.trim();
                if !rest.is_empty() {
                    parsed.corrected_word = Some(rest.to_string());
                }
                continue;
            }
        }

        let Some((meaning, example)) = line.split_once(format.delimiter.as_str()) else {
            continue;
        };

        let index = parsed.senses.len() + 1;
        parsed.senses.push(SensePair {
            meaning: clean_part(meaning, index, format.number_senses),
            example: clean_part(example, index, format.number_senses),
        });
    }

    parsed
}

fn clean_part(part: &str, index: usize, number: bool) -> String {
    let part = part.trim();
    if !number {
        return part.to_string();
    }
    let stripped = ENUM_PREFIX.replace(part, "");
    format!("{index}. {}", stripped.trim())
}
