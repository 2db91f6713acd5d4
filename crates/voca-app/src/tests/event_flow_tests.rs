use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::time::timeout;
use voca_config::Config;
use voca_core::session::StagedEntry;
use voca_generator::{GenerateError, Generator, ProviderMetadata};
use voca_store::{MemoryConnector, TableConnector, VocabStore};
use voca_types::{AppEvent, RowField, VocabEntry};

use crate::events::handle_events;
use crate::state::AppState;

struct StubGenerator {
    text: &'static str,
}

#[async_trait::async_trait]
impl Generator for StubGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
        Ok(self.text.to_string())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "stub".to_string(),
            requires_api_key: false,
        }
    }
}

/// Fails the test if the generation call is ever issued
struct PanicGenerator;

#[async_trait::async_trait]
impl Generator for PanicGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
        panic!("generation should not have been called");
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "panic".to_string(),
            requires_api_key: false,
        }
    }
}

fn entry(headword: &str) -> VocabEntry {
    VocabEntry::new(headword, "뜻", "예문")
}

fn channels() -> (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>) {
    kanal::bounded_async(16)
}

async fn recv(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("channel closed")
}

type Harness = (
    Arc<AppState>,
    VocabStore<Arc<MemoryConnector>>,
    Arc<MemoryConnector>,
);

fn harness(rows: Vec<VocabEntry>) -> Harness {
    let connector = Arc::new(MemoryConnector::with_rows(rows));
    let store = VocabStore::new(connector.clone());
    let state = Arc::new(AppState::new(Config::new()));
    (state, store, connector)
}

#[tokio::test]
async fn analyze_stages_and_save_appends() {
    let (state, store, connector) = harness(vec![]);
    let (tx, rx) = channels();
    let stub = StubGenerator {
        text: "CORRECT_WORD: hold\n잡다 | Hold my hand.",
    };

    handle_events(
        &state,
        &store,
        Some(&stub),
        &tx,
        AppEvent::Analyze {
            word: "holf".to_string(),
        },
    )
    .await
    .unwrap();

    match recv(&rx).await {
        AppEvent::StagingReady(view) => {
            assert_eq!(view.input_word, "holf");
            assert_eq!(view.corrected_word.as_deref(), Some("hold"));
            assert_eq!(view.meaning, "1. 잡다");
            assert_eq!(view.example, "1. Hold my hand.");
        }
        other => panic!("unexpected event: {other:?}"),
    }

    handle_events(&state, &store, Some(&stub), &tx, AppEvent::SaveStaged)
        .await
        .unwrap();

    match recv(&rx).await {
        AppEvent::ShowTable(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].headword, "hold");
        }
        other => panic!("unexpected event: {other:?}"),
    }
    match recv(&rx).await {
        AppEvent::StatusUpdate { is_error, .. } => assert!(!is_error),
        other => panic!("unexpected event: {other:?}"),
    }

    // Staging consumed on commit
    assert!(state.session.read().await.staged().is_none());
    assert_eq!(connector.read_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn known_headword_short_circuits_before_generation() {
    let (state, store, _connector) = harness(vec![entry("hold")]);
    let (tx, rx) = channels();

    handle_events(
        &state,
        &store,
        Some(&PanicGenerator),
        &tx,
        AppEvent::Analyze {
            word: " hold ".to_string(),
        },
    )
    .await
    .unwrap();

    match recv(&rx).await {
        AppEvent::StatusUpdate { is_error, .. } => assert!(is_error),
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(state.session.read().await.staged().is_none());
}

#[tokio::test]
async fn save_without_staging_is_rejected() {
    let (state, store, connector) = harness(vec![]);
    let (tx, rx) = channels();

    handle_events(&state, &store, None, &tx, AppEvent::SaveStaged)
        .await
        .unwrap();

    match recv(&rx).await {
        AppEvent::StatusUpdate { is_error, .. } => assert!(is_error),
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(connector.read_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_at_commit_rejects_and_retains_staging() {
    let (state, store, connector) = harness(vec![entry("hold")]);
    let (tx, rx) = channels();

    state.session.write().await.stage(StagedEntry {
        input_word: "hold".to_string(),
        corrected_word: None,
        raw_text: String::new(),
        meaning: "잡다".to_string(),
        example: "Hold on.".to_string(),
    });

    handle_events(&state, &store, None, &tx, AppEvent::SaveStaged)
        .await
        .unwrap();

    match recv(&rx).await {
        AppEvent::StatusUpdate { is_error, .. } => assert!(is_error),
        other => panic!("unexpected event: {other:?}"),
    }
    // Rejected, never overwritten: staging kept, table unchanged
    assert!(state.session.read().await.staged().is_some());
    assert_eq!(connector.read_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn confirm_needs_exactly_one_prior_request() {
    let (state, store, connector) = harness(vec![entry("hold"), entry("run")]);
    let (tx, rx) = channels();

    handle_events(&state, &store, None, &tx, AppEvent::ConfirmDelete { index: 0 })
        .await
        .unwrap();
    match recv(&rx).await {
        AppEvent::StatusUpdate { is_error, .. } => assert!(is_error),
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(connector.read_all().await.unwrap().len(), 2);

    handle_events(&state, &store, None, &tx, AppEvent::RequestDelete { index: 0 })
        .await
        .unwrap();
    match recv(&rx).await {
        AppEvent::DeletePrompt { index, headword } => {
            assert_eq!(index, 0);
            assert_eq!(headword, "hold");
        }
        other => panic!("unexpected event: {other:?}"),
    }

    handle_events(&state, &store, None, &tx, AppEvent::ConfirmDelete { index: 0 })
        .await
        .unwrap();
    match recv(&rx).await {
        AppEvent::ShowTable(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].headword, "run");
        }
        other => panic!("unexpected event: {other:?}"),
    }
    match recv(&rx).await {
        AppEvent::StatusUpdate { is_error, .. } => assert!(!is_error),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn saying_no_leaves_the_store_untouched() {
    let (state, store, connector) = harness(vec![entry("hold")]);
    let (tx, rx) = channels();

    handle_events(&state, &store, None, &tx, AppEvent::RequestDelete { index: 0 })
        .await
        .unwrap();
    recv(&rx).await; // DeletePrompt

    handle_events(&state, &store, None, &tx, AppEvent::CancelDelete { index: 0 })
        .await
        .unwrap();
    match recv(&rx).await {
        AppEvent::StatusUpdate { is_error, .. } => assert!(!is_error),
        other => panic!("unexpected event: {other:?}"),
    }

    // The cancelled confirmation is fully disarmed
    handle_events(&state, &store, None, &tx, AppEvent::ConfirmDelete { index: 0 })
        .await
        .unwrap();
    match recv(&rx).await {
        AppEvent::StatusUpdate { is_error, .. } => assert!(is_error),
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(connector.read_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn edit_row_patches_one_field() {
    let (state, store, connector) = harness(vec![entry("hold")]);
    let (tx, rx) = channels();

    handle_events(
        &state,
        &store,
        None,
        &tx,
        AppEvent::EditRow {
            index: 0,
            field: RowField::Meaning,
            value: "움켜쥐다".to_string(),
        },
    )
    .await
    .unwrap();

    match recv(&rx).await {
        AppEvent::ShowTable(rows) => {
            assert_eq!(rows[0].meaning, "움켜쥐다");
            assert_eq!(rows[0].example, "예문");
        }
        other => panic!("unexpected event: {other:?}"),
    }
    recv(&rx).await; // status
    assert_eq!(connector.read_all().await.unwrap()[0].meaning, "움켜쥐다");
}

#[tokio::test]
async fn spawned_command_sends_reach_the_loop() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    let button_press = move || {
        let tx = tx.clone();
        tokio::spawn(async move {
            tx.send(AppEvent::Analyze {
                word: "hold".to_string(),
            })
            .await
            .expect("send failed");
        });
    };

    button_press();

    let result = timeout(Duration::from_secs(2), rx.recv()).await;
    match result {
        Ok(Ok(AppEvent::Analyze { word })) => assert_eq!(word, "hold"),
        Ok(Ok(_)) => panic!("Wrong event type"),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - event never arrived!"),
    }
}
