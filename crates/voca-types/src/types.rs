use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A confirmed vocabulary record as persisted in the backing table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub headword: String,
    /// May hold several newline-separated sub-senses
    pub meaning: String,
    /// Newline-aligned with the meaning's sub-senses by convention
    pub example: String,
}

impl VocabEntry {
    pub fn new(
        headword: impl Into<String>,
        meaning: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            headword: headword.into(),
            meaning: meaning.into(),
            example: example.into(),
        }
    }
}

/// Staged analysis result shown to the user for editing before save
#[derive(Debug, Clone)]
pub struct StagedView {
    pub input_word: String,
    pub corrected_word: Option<String>,
    pub meaning: String,
    pub example: String,
}

/// Editable column of a stored row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Headword,
    Meaning,
    Example,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    Analyze {
        word: String,
    },
    StagingReady(StagedView),
    EditStaging {
        meaning: Option<String>,
        example: Option<String>,
    },
    SaveStaged,
    DiscardStaged,
    EditRow {
        index: usize,
        field: RowField,
        value: String,
    },
    RequestDelete {
        index: usize,
    },
    DeletePrompt {
        index: usize,
        headword: String,
    },
    ConfirmDelete {
        index: usize,
    },
    CancelDelete {
        index: usize,
    },
    RefreshTable,
    FilterTable {
        query: String,
    },
    ShowTable(Vec<VocabEntry>),
    ExportTable {
        path: Option<PathBuf>,
    },
    StatusUpdate {
        message: String,
        is_error: bool,
    },
}
