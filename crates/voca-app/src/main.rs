use std::future::Future;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use voca_config::Config;
use voca_core::parser::Delimiter;
use voca_gemini::GeminiClient;
use voca_generator::Generator;
use voca_sheets::SheetsClient;
use voca_store::{MemoryConnector, TableConnector, VocabStore};

mod command;
mod controller;
mod events;
mod shell;
mod state;
#[cfg(test)]
mod tests;

use crate::controller::AppController;
use crate::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "voca", about = "AI-assisted personal vocabulary notebook", version)]
struct Cli {
    /// Worksheet (tab) name override
    #[arg(long)]
    worksheet: Option<String>,

    /// Response format: "pipe" or "triple-at"
    #[arg(long)]
    delimiter: Option<String>,

    /// Keep entries in memory instead of the spreadsheet
    #[arg(long, default_value_t = false)]
    offline: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::new();
    if let Some(worksheet) = cli.worksheet {
        config.store.worksheet = worksheet;
    }
    if let Some(delimiter) = cli.delimiter.as_deref() {
        config.format.delimiter = match delimiter {
            "@@@" | "triple-at" => Delimiter::TripleAt,
            _ => Delimiter::Pipe,
        };
    }
    if cli.offline {
        config.store.enabled = false;
    }

    let generator = build_generator(&config);
    let use_sheets = config.store.enabled && !config.store.spreadsheet_id.is_empty();
    let state = Arc::new(AppState::new(config));

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    if use_sheets {
        let client = {
            let config = state.config.read().await;
            SheetsClient::new(
                config.store.base_url.clone(),
                config.store.spreadsheet_id.clone(),
                config.store.worksheet.clone(),
                config.store.api_key.clone(),
            )
        };
        run(state, VocabStore::new(client), generator, shutdown).await
    } else {
        tracing::warn!("No spreadsheet configured; entries will not survive exit");
        run(
            state,
            VocabStore::new(MemoryConnector::new()),
            generator,
            shutdown,
        )
        .await
    }
}

/// Missing generator credentials disable analysis only; the rest of the
/// app stays usable
fn build_generator(config: &Config) -> Option<Box<dyn Generator>> {
    if !config.generator.enabled {
        tracing::warn!("Generator disabled by configuration");
        return None;
    }
    if config.generator.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY not set; analysis is disabled");
        return None;
    }
    Some(Box::new(GeminiClient::new(
        config.generator.api_key.clone(),
        config.generator.api_url.clone(),
        config.generator.model.clone(),
    )))
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run<C>(
    state: Arc<AppState>,
    store: VocabStore<C>,
    generator: Option<Box<dyn Generator>>,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()>
where
    C: TableConnector + 'static,
{
    let channel_capacity = state.config.read().await.channel_capacity;
    let controller = AppController::new(state, channel_capacity);
    let mut tasks = controller.spawn_tasks(store, generator);

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    Ok(())
}
