use kanal::AsyncSender;
use voca_store::{TableConnector, VocabStore};
use voca_types::{AppEvent, RowField};

use crate::events::send_status;

pub async fn handle_edit_row<C: TableConnector>(
    store: &VocabStore<C>,
    tx: &AsyncSender<AppEvent>,
    index: usize,
    field: RowField,
    value: String,
) -> anyhow::Result<()> {
    let rows = match store.read().await {
        Ok(rows) => rows,
        Err(e) => return send_status(tx, &format!("Could not read the table: {e}"), true).await,
    };

    let Some(current) = rows.get(index) else {
        return send_status(tx, &format!("No row {index}"), true).await;
    };

    let mut entry = current.clone();
    match field {
        RowField::Headword => entry.headword = value.trim().to_string(),
        RowField::Meaning => entry.meaning = value,
        RowField::Example => entry.example = value,
    }

    // replace_row re-reads before writing; the index may still be stale
    // if another session mutated the table since this render
    match store.replace_row(index, entry).await {
        Ok(rows) => {
            tx.send(AppEvent::ShowTable(rows)).await?;
            send_status(tx, &format!("Row {index} updated"), false).await
        }
        Err(e) => {
            tracing::error!("Update failed: {}", e);
            send_status(tx, &format!("Update failed: {e}"), true).await
        }
    }
}
