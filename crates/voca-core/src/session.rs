use std::collections::HashSet;

/// Transient per-session analysis staging. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedEntry {
    pub input_word: String,
    pub corrected_word: Option<String>,
    pub raw_text: String,
    pub meaning: String,
    pub example: String,
}

impl StagedEntry {
    /// Headword a save will use: the model's correction when present
    pub fn headword(&self) -> &str {
        self.corrected_word.as_deref().unwrap_or(&self.input_word)
    }
}

/// Analysis staging lifecycle: Idle -> Analyzed -> (committed | discarded) -> Idle
#[derive(Debug, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Analyzed(StagedEntry),
}

impl SessionState {
    /// Enter Analyzed, silently overwriting whatever was pending
    pub fn stage(&mut self, staged: StagedEntry) {
        *self = SessionState::Analyzed(staged);
    }

    pub fn staged(&self) -> Option<&StagedEntry> {
        match self {
            SessionState::Analyzed(staged) => Some(staged),
            SessionState::Idle => None,
        }
    }

    /// Replace staged fields while the user edits; false when nothing is staged
    pub fn edit_staged(&mut self, meaning: Option<String>, example: Option<String>) -> bool {
        match self {
            SessionState::Analyzed(staged) => {
                if let Some(meaning) = meaning {
                    staged.meaning = meaning;
                }
                if let Some(example) = example {
                    staged.example = example;
                }
                true
            }
            SessionState::Idle => false,
        }
    }

    /// Clear staging on commit or cancel; false when nothing was staged
    pub fn discard(&mut self) -> bool {
        matches!(std::mem::take(self), SessionState::Analyzed(_))
    }
}

/// Two-step delete confirmation, tracked independently per rendered row.
///
/// Indices are positional at render time, so the set is cleared on every
/// table refresh.
#[derive(Debug, Default)]
pub struct DeleteConfirmations {
    armed: HashSet<usize>,
}

impl DeleteConfirmations {
    /// Arm the row; true if it was not already awaiting confirmation
    pub fn request(&mut self, index: usize) -> bool {
        self.armed.insert(index)
    }

    pub fn is_armed(&self, index: usize) -> bool {
        self.armed.contains(&index)
    }

    /// Consume the armed flag; true only if the row was awaiting confirmation
    pub fn confirm(&mut self, index: usize) -> bool {
        self.armed.remove(&index)
    }

    /// Disarm without mutating anything else; true if the row was armed
    pub fn cancel(&mut self, index: usize) -> bool {
        self.armed.remove(&index)
    }

    pub fn clear(&mut self) {
        self.armed.clear();
    }
}
