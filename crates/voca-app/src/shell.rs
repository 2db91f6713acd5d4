use std::io::Write;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use voca_types::{AppEvent, StagedView, VocabEntry};

use crate::command::{self, Command};

/// Line-oriented stand-in for the interaction surface: turns stdin
/// commands into events and prints incoming events as plain text.
/// Rendering stays deliberately minimal.
pub async fn shell_loop(
    app_to_shell_rx: AsyncReceiver<AppEvent>,
    shell_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    if interactive {
        println!("voca — type 'help' for commands");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // Initial table render
    shell_to_app_tx.send(AppEvent::RefreshTable).await?;

    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush().ok();
        }

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Shell loop stopping");
                return Ok(());
            }
            event = app_to_shell_rx.recv() => {
                render_event(event?);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("stdin closed, shutting down shell");
                    return Ok(());
                };
                if line.trim().is_empty() {
                    continue;
                }
                match command::parse_line(&line) {
                    Some(Command::Quit) => {
                        return Ok(());
                    }
                    Some(Command::Help) => println!("{}", command::help_text()),
                    Some(Command::Event(event)) => shell_to_app_tx.send(event).await?,
                    None => println!("Unknown command; type 'help'"),
                }
            }
        }
    }
}

fn render_event(event: AppEvent) {
    match event {
        AppEvent::ShowTable(rows) => render_table(&rows),
        AppEvent::StagingReady(view) => render_staging(&view),
        AppEvent::DeletePrompt { index, headword } => {
            println!(
                "Delete row {index} ('{headword}')? Confirm with 'yes {index}' or 'no {index}'."
            );
        }
        AppEvent::StatusUpdate { message, is_error } => {
            if is_error {
                println!("! {message}");
            } else {
                println!("{message}");
            }
        }
        _ => {}
    }
}

fn render_table(rows: &[VocabEntry]) {
    if rows.is_empty() {
        println!("(no entries)");
        return;
    }
    for (index, entry) in rows.iter().enumerate() {
        println!("[{index}] {}", entry.headword);
        for line in entry.meaning.lines() {
            println!("      {line}");
        }
        for line in entry.example.lines() {
            println!("      {line}");
        }
    }
}

fn render_staging(view: &StagedView) {
    match &view.corrected_word {
        Some(corrected) if *corrected != view.input_word => {
            println!("Staged '{corrected}' (corrected from '{}'):", view.input_word);
        }
        _ => println!("Staged '{}':", view.input_word),
    }
    println!("meaning:");
    for line in view.meaning.lines() {
        println!("  {line}");
    }
    println!("example:");
    for line in view.example.lines() {
        println!("  {line}");
    }
    println!("Edit with 'meaning <text>' / 'example <text>', then 'save' or 'cancel'.");
}
