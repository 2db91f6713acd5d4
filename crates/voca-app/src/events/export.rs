use std::path::PathBuf;
use std::sync::Arc;

use kanal::AsyncSender;
use voca_core::export;
use voca_store::{TableConnector, VocabStore};
use voca_types::AppEvent;

use crate::events::send_status;
use crate::state::AppState;

pub async fn handle_export<C: TableConnector>(
    state: &Arc<AppState>,
    store: &VocabStore<C>,
    tx: &AsyncSender<AppEvent>,
    path: Option<PathBuf>,
) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path,
        None => PathBuf::from(state.config.read().await.export_path.clone()),
    };

    let rows = match store.read().await {
        Ok(rows) => rows,
        Err(e) => return send_status(tx, &format!("Could not read the table: {e}"), true).await,
    };

    let text = export::to_delimited(&rows, ',');
    match tokio::fs::write(&path, text).await {
        Ok(()) => {
            tracing::info!("Exported {} rows to {}", rows.len(), path.display());
            send_status(
                tx,
                &format!("Exported {} rows to {}", rows.len(), path.display()),
                false,
            )
            .await
        }
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            send_status(tx, &format!("Export failed: {e}"), true).await
        }
    }
}
