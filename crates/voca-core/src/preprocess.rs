use unicode_normalization::UnicodeNormalization;

/// Cleanup applied to user search input before any lookup or generation call
pub trait Preprocessor {
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC)
        let text: String = text.nfkc().collect();

        // A headword is a single line; collapse pasted newlines and runs
        // of whitespace into single spaces
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_collapses_whitespace() {
        assert_eq!(DefaultPreprocessor.process("  hold \n on  "), "hold on");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(DefaultPreprocessor.process("   \n "), "");
    }

    #[test]
    fn fullwidth_forms_are_normalized() {
        // NFKC folds fullwidth latin into ASCII
        assert_eq!(DefaultPreprocessor.process("ｈｏｌｄ"), "hold");
    }
}
