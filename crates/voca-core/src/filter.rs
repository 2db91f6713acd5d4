use voca_types::VocabEntry;

/// Free-text filter over the displayed table.
///
/// Case-insensitive substring match against any of the three columns;
/// an empty or whitespace-only query keeps every row. Display-only: the
/// backing table is never reordered or reduced.
pub fn filter_entries(entries: &[VocabEntry], query: &str) -> Vec<VocabEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| {
            entry.headword.to_lowercase().contains(&query)
                || entry.meaning.to_lowercase().contains(&query)
                || entry.example.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}
