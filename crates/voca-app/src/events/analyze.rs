use std::sync::Arc;

use kanal::AsyncSender;
use voca_core::guard;
use voca_core::parser;
use voca_core::preprocess::{DefaultPreprocessor, Preprocessor};
use voca_core::session::StagedEntry;
use voca_generator::{Generator, PromptTemplate};
use voca_store::{TableConnector, VocabStore};
use voca_types::{AppEvent, StagedView};

use crate::events::send_status;
use crate::state::AppState;

pub async fn handle_analyze<C: TableConnector>(
    state: &Arc<AppState>,
    store: &VocabStore<C>,
    generator: Option<&dyn Generator>,
    tx: &AsyncSender<AppEvent>,
    word: String,
) -> anyhow::Result<()> {
    let word = DefaultPreprocessor.process(&word);
    if word.is_empty() {
        return send_status(tx, "Enter a word first", true).await;
    }

    // Point-in-time scan; skips a generation call the save would reject
    // anyway. An unreadable store degrades to an empty known set.
    let known = match store.headwords().await {
        Ok(words) => words,
        Err(e) => {
            tracing::warn!("Could not read stored headwords: {}", e);
            Vec::new()
        }
    };
    if guard::is_duplicate(&word, known.iter().map(String::as_str)) {
        return send_status(tx, &format!("'{word}' is already in the notebook"), true).await;
    }

    let Some(generator) = generator else {
        return send_status(tx, "Analysis is disabled: no generator configured", true).await;
    };

    let (template, line_format) = {
        let config = state.config.read().await;
        let template = if config.format.correction_header {
            PromptTemplate::with_correction(config.generator.max_senses, config.format.delimiter)
        } else {
            PromptTemplate::sense_list(config.generator.max_senses, config.format.delimiter)
        };
        (template, config.format.line_format())
    };

    tracing::info!("Analyzing '{}' via {}", word, generator.metadata().name);
    let raw = match generator.generate(&template.render(&word)).await {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Generation failed: {}", e);
            return send_status(tx, &format!("Analysis failed: {e}"), true).await;
        }
    };

    let parsed = parser::parse_response(&raw, &line_format);
    if parsed.corrected_word.is_none() && parsed.senses.is_empty() {
        tracing::warn!("Unparseable model output for '{}': {:?}", word, raw);
        return send_status(tx, "The model returned nothing usable; try again", true).await;
    }

    let meaning = parsed
        .senses
        .iter()
        .map(|s| s.meaning.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let example = parsed
        .senses
        .iter()
        .map(|s| s.example.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let staged = StagedEntry {
        input_word: word,
        corrected_word: parsed.corrected_word,
        raw_text: raw,
        meaning,
        example,
    };

    let view = StagedView {
        input_word: staged.input_word.clone(),
        corrected_word: staged.corrected_word.clone(),
        meaning: staged.meaning.clone(),
        example: staged.example.clone(),
    };

    state.session.write().await.stage(staged);
    tx.send(AppEvent::StagingReady(view)).await?;

    Ok(())
}
