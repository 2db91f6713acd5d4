use std::sync::Arc;

use kanal::AsyncSender;
use voca_core::guard;
use voca_store::{TableConnector, VocabStore};
use voca_types::{AppEvent, VocabEntry};

use crate::events::send_status;
use crate::state::AppState;

pub async fn handle_save<C: TableConnector>(
    state: &Arc<AppState>,
    store: &VocabStore<C>,
    tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let staged = {
        let session = state.session.read().await;
        match session.staged() {
            Some(staged) => staged.clone(),
            None => return send_status(tx, "Nothing staged; analyze a word first", true).await,
        }
    };

    let headword = staged.headword().to_string();

    // Commit-time re-check: another save may have landed since analysis
    let known = match store.headwords().await {
        Ok(words) => words,
        Err(e) => {
            tracing::warn!("Could not re-read stored headwords: {}", e);
            Vec::new()
        }
    };
    if guard::is_duplicate(&headword, known.iter().map(String::as_str)) {
        // Staging is retained so the user can edit the headword or cancel
        return send_status(
            tx,
            &format!("'{headword}' is already in the notebook; edit or cancel"),
            true,
        )
        .await;
    }

    let entry = VocabEntry::new(headword.clone(), staged.meaning, staged.example);

    match store.append(entry).await {
        Ok(rows) => {
            state.session.write().await.discard();
            state.deletes.write().await.clear();
            tracing::info!("Saved '{}' ({} rows total)", headword, rows.len());
            tx.send(AppEvent::ShowTable(rows)).await?;
            send_status(tx, &format!("'{headword}' saved"), false).await
        }
        Err(e) => {
            tracing::error!("Save failed: {}", e);
            send_status(tx, &format!("Save failed: {e}"), true).await
        }
    }
}
