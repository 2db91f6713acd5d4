pub mod types;

pub use types::{AppEvent, RowField, StagedView, VocabEntry};
