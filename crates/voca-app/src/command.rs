use std::path::PathBuf;

use voca_types::{AppEvent, RowField};

/// One parsed shell input line
#[derive(Debug)]
pub enum Command {
    Event(AppEvent),
    Help,
    Quit,
}

/// Map a raw input line to a command; None for anything unrecognized
pub fn parse_line(line: &str) -> Option<Command> {
    let line = line.trim();

    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    match cmd {
        "help" | "h" => Some(Command::Help),
        "quit" | "q" | "exit" => Some(Command::Quit),
        "analyze" | "a" if !rest.is_empty() => Some(Command::Event(AppEvent::Analyze {
            word: rest.to_string(),
        })),
        "meaning" => Some(Command::Event(AppEvent::EditStaging {
            meaning: Some(unescape(rest)),
            example: None,
        })),
        "example" => Some(Command::Event(AppEvent::EditStaging {
            meaning: None,
            example: Some(unescape(rest)),
        })),
        "save" | "s" => Some(Command::Event(AppEvent::SaveStaged)),
        "cancel" | "c" => Some(Command::Event(AppEvent::DiscardStaged)),
        "list" | "l" => Some(Command::Event(AppEvent::RefreshTable)),
        "filter" | "f" => Some(Command::Event(AppEvent::FilterTable {
            query: rest.to_string(),
        })),
        "edit" => parse_edit(rest),
        "delete" | "d" => rest
            .parse()
            .ok()
            .map(|index| Command::Event(AppEvent::RequestDelete { index })),
        "yes" | "y" => rest
            .parse()
            .ok()
            .map(|index| Command::Event(AppEvent::ConfirmDelete { index })),
        "no" | "n" => rest
            .parse()
            .ok()
            .map(|index| Command::Event(AppEvent::CancelDelete { index })),
        "export" | "x" => Some(Command::Event(AppEvent::ExportTable {
            path: (!rest.is_empty()).then(|| PathBuf::from(rest)),
        })),
        _ => None,
    }
}

fn parse_edit(rest: &str) -> Option<Command> {
    let mut parts = rest.splitn(3, char::is_whitespace);
    let index = parts.next()?.parse().ok()?;
    let field = match parts.next()? {
        "headword" | "word" => RowField::Headword,
        "meaning" => RowField::Meaning,
        "example" => RowField::Example,
        _ => return None,
    };
    let value = unescape(parts.next().unwrap_or("").trim());
    Some(Command::Event(AppEvent::EditRow {
        index,
        field,
        value,
    }))
}

/// Multi-sense fields are typed on one line with literal `\n` breaks
fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}

pub fn help_text() -> &'static str {
    "commands:\n\
     \x20 analyze <word>           look up meanings and stage them\n\
     \x20 meaning <text>           replace the staged meaning (\\n for line breaks)\n\
     \x20 example <text>           replace the staged example\n\
     \x20 save                     append the staged entry to the notebook\n\
     \x20 cancel                   discard the staged entry\n\
     \x20 list                     show the notebook\n\
     \x20 filter <query>           show matching rows only\n\
     \x20 edit <n> <field> <text>  change one field of row n\n\
     \x20 delete <n>               ask to delete row n\n\
     \x20 yes <n> | no <n>         confirm or cancel the delete\n\
     \x20 export [path]            back up the table as delimited text\n\
     \x20 quit"
}
