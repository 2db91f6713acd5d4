use std::sync::Arc;

use kanal::AsyncSender;
use voca_store::{TableConnector, VocabStore};
use voca_types::AppEvent;

use crate::events::send_status;
use crate::state::AppState;

pub async fn handle_request_delete<C: TableConnector>(
    state: &Arc<AppState>,
    store: &VocabStore<C>,
    tx: &AsyncSender<AppEvent>,
    index: usize,
) -> anyhow::Result<()> {
    let rows = match store.read().await {
        Ok(rows) => rows,
        Err(e) => return send_status(tx, &format!("Could not read the table: {e}"), true).await,
    };

    let Some(headword) = rows.get(index).map(|entry| entry.headword.clone()) else {
        return send_status(tx, &format!("No row {index}"), true).await;
    };

    state.deletes.write().await.request(index);
    tx.send(AppEvent::DeletePrompt { index, headword }).await?;

    Ok(())
}

pub async fn handle_confirm_delete<C: TableConnector>(
    state: &Arc<AppState>,
    store: &VocabStore<C>,
    tx: &AsyncSender<AppEvent>,
    index: usize,
) -> anyhow::Result<()> {
    if !state.deletes.write().await.confirm(index) {
        return send_status(tx, &format!("No delete pending for row {index}"), true).await;
    }

    match store.delete_row(index).await {
        Ok(rows) => {
            tracing::info!("Deleted row {} ({} rows left)", index, rows.len());
            tx.send(AppEvent::ShowTable(rows)).await?;
            send_status(tx, &format!("Row {index} deleted"), false).await
        }
        Err(e) => {
            tracing::error!("Delete failed: {}", e);
            send_status(tx, &format!("Delete failed: {e}"), true).await
        }
    }
}

pub async fn handle_cancel_delete(
    state: &Arc<AppState>,
    tx: &AsyncSender<AppEvent>,
    index: usize,
) -> anyhow::Result<()> {
    if state.deletes.write().await.cancel(index) {
        send_status(tx, &format!("Delete of row {index} cancelled"), false).await
    } else {
        send_status(tx, &format!("No delete pending for row {index}"), true).await
    }
}
