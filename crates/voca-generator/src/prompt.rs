use voca_core::parser::{CORRECTION_HEADER, Delimiter};

/// Prompt sent to the generation provider for one headword.
///
/// The format instructions and the parser's `LineFormat` have to agree;
/// both are derived from the same delimiter configuration.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: String) -> Self {
        Self { template }
    }

    /// Numbered delimiter-separated sense list, no correction header
    pub fn sense_list(max_senses: u8, delimiter: Delimiter) -> Self {
        let delim = delimiter.as_str();
        Self::new(format!(
            "Find up to {max_senses} of the most commonly used core meanings of the \
             English word '{{word}}'.\n\
             Write one matching English example sentence for each meaning.\n\
             \n\
             Output strictly in this format, one meaning per line, fields \
             separated by '{delim}':\n\
             1. first meaning {delim} first example\n\
             2. second meaning {delim} second example"
        ))
    }

    /// Sense list preceded by a spelling-correction header line
    pub fn with_correction(max_senses: u8, delimiter: Delimiter) -> Self {
        let base = Self::sense_list(max_senses, delimiter);
        Self::new(format!(
            "If '{{word}}' looks misspelled, start your answer with this single \
             line, then continue as instructed below:\n\
             {CORRECTION_HEADER} <the corrected word>\n\
             \n\
             {}",
            base.template
        ))
    }

    /// Substitute the headword into the template
    pub fn render(&self, word: &str) -> String {
        self.template.replace("{word}", word)
    }
}
