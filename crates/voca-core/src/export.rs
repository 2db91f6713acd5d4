use voca_types::VocabEntry;

pub const EXPORT_HEADER: [&str; 3] = ["headword", "meaning", "example"];

/// Serialize the whole table as delimited text for a one-click backup.
///
/// Fields containing the delimiter, quotes, or line breaks are quoted
/// CSV-style, so multi-sense meanings survive the round trip.
pub fn to_delimited(entries: &[VocabEntry], delimiter: char) -> String {
    let sep = delimiter.to_string();
    let mut lines = Vec::with_capacity(entries.len() + 1);

    lines.push(
        EXPORT_HEADER
            .iter()
            .map(|field| quote_field(field, delimiter))
            .collect::<Vec<_>>()
            .join(&sep),
    );

    for entry in entries {
        lines.push(
            [
                entry.headword.as_str(),
                entry.meaning.as_str(),
                entry.example.as_str(),
            ]
            .iter()
            .map(|field| quote_field(field, delimiter))
            .collect::<Vec<_>>()
            .join(&sep),
        );
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn quote_field(field: &str, delimiter: char) -> String {
    if field.contains(delimiter)
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r')
    {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
