use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use voca_generator::Generator;
use voca_store::{TableConnector, VocabStore};
use voca_types::AppEvent;

use crate::state::AppState;

pub mod analyze;
pub mod delete_row;
pub mod edit_row;
pub mod export;
pub mod save_entry;
pub mod table;

use analyze::handle_analyze;
use delete_row::{handle_cancel_delete, handle_confirm_delete, handle_request_delete};
use edit_row::handle_edit_row;
use export::handle_export;
use save_entry::handle_save;
use table::{handle_filter, handle_refresh};

/// App's main loop
pub async fn event_loop<C: TableConnector>(
    state: Arc<AppState>,
    shell_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_shell_tx: AsyncSender<AppEvent>,
    store: VocabStore<C>,
    generator: Option<Box<dyn Generator>>,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");

    loop {
        let event = shell_to_app_rx.recv().await?;

        tracing::debug!(
            "[EVENT_LOOP] Event received: {:?}",
            std::mem::discriminant(&event)
        );
        handle_events(
            &state,
            &store,
            generator.as_deref(),
            &app_to_shell_tx,
            event,
        )
        .await?;
    }
}

pub(crate) async fn handle_events<C: TableConnector>(
    state: &Arc<AppState>,
    store: &VocabStore<C>,
    generator: Option<&dyn Generator>,
    tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Analyze { word } => {
            handle_analyze(state, store, generator, tx, word).await?;
        }
        AppEvent::EditStaging { meaning, example } => {
            let edited = state.session.write().await.edit_staged(meaning, example);
            if edited {
                send_status(tx, "Staging updated", false).await?;
            } else {
                send_status(tx, "Nothing staged; analyze a word first", true).await?;
            }
        }
        AppEvent::SaveStaged => {
            handle_save(state, store, tx).await?;
        }
        AppEvent::DiscardStaged => {
            if state.session.write().await.discard() {
                send_status(tx, "Staged analysis discarded", false).await?;
            } else {
                send_status(tx, "Nothing staged", true).await?;
            }
        }
        AppEvent::EditRow {
            index,
            field,
            value,
        } => {
            handle_edit_row(store, tx, index, field, value).await?;
        }
        AppEvent::RequestDelete { index } => {
            handle_request_delete(state, store, tx, index).await?;
        }
        AppEvent::ConfirmDelete { index } => {
            handle_confirm_delete(state, store, tx, index).await?;
        }
        AppEvent::CancelDelete { index } => {
            handle_cancel_delete(state, tx, index).await?;
        }
        AppEvent::RefreshTable => {
            handle_refresh(state, store, tx).await?;
        }
        AppEvent::FilterTable { query } => {
            handle_filter(state, store, tx, query).await?;
        }
        AppEvent::ExportTable { path } => {
            handle_export(state, store, tx, path).await?;
        }
        // Shell-bound events, nothing to do on this side
        AppEvent::StagingReady(_)
        | AppEvent::ShowTable(_)
        | AppEvent::DeletePrompt { .. }
        | AppEvent::StatusUpdate { .. } => {}
    }

    Ok(())
}

pub(crate) async fn send_status(
    tx: &AsyncSender<AppEvent>,
    message: &str,
    is_error: bool,
) -> anyhow::Result<()> {
    tx.send(AppEvent::StatusUpdate {
        message: message.to_string(),
        is_error,
    })
    .await?;
    Ok(())
}
