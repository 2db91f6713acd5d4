use std::sync::Arc;

use kanal::AsyncSender;
use voca_core::filter;
use voca_store::{TableConnector, VocabStore};
use voca_types::AppEvent;

use crate::events::send_status;
use crate::state::AppState;

pub async fn handle_refresh<C: TableConnector>(
    state: &Arc<AppState>,
    store: &VocabStore<C>,
    tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    // Positional indices are about to change
    state.deletes.write().await.clear();

    let rows = match store.read().await {
        Ok(rows) => rows,
        Err(e) => {
            // An unreadable store shows as an empty table; the session
            // stays usable for the next action
            tracing::warn!("Could not read the table: {}", e);
            send_status(tx, &format!("Could not read the table: {e}"), true).await?;
            Vec::new()
        }
    };

    tx.send(AppEvent::ShowTable(rows)).await?;
    Ok(())
}

pub async fn handle_filter<C: TableConnector>(
    state: &Arc<AppState>,
    store: &VocabStore<C>,
    tx: &AsyncSender<AppEvent>,
    query: String,
) -> anyhow::Result<()> {
    state.deletes.write().await.clear();

    let rows = match store.read().await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!("Could not read the table: {}", e);
            send_status(tx, &format!("Could not read the table: {e}"), true).await?;
            Vec::new()
        }
    };

    // Display-only view; row indices shown here may not match the
    // stored positions, so edits and deletes go through a full list
    let filtered = filter::filter_entries(&rows, &query);
    tx.send(AppEvent::ShowTable(filtered)).await?;
    Ok(())
}
