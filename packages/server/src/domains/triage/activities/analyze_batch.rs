//! Batch triage pipeline
//!
//! Per message: extract -> score -> resolve location -> match resource ->
//! record. Extraction calls for the batch run concurrently; everything after
//! that runs in input order so results are recorded deterministically.

use futures::future::join_all;
use tracing::{debug, info, instrument};

use crate::domains::triage::activities::Extractor;
use crate::domains::triage::error::{TriageError, TriageResult};
use crate::domains::triage::models::{sort_by_urgency, AnalyzedMessage, ExtractionResult, Resource};
use crate::domains::triage::utils::{match_resource, score_urgency, LocationResolver};
use crate::kernel::ServerDeps;

/// Turn one message and its extraction into an [`AnalyzedMessage`].
///
/// Scoring uses the raw message text, not the extraction.
pub fn triage_message(
    message: &str,
    extraction: ExtractionResult,
    resources: &[Resource],
    resolver: &LocationResolver,
) -> AnalyzedMessage {
    let score = score_urgency(extraction.urgency_level, message);
    let position = resolver.resolve(&extraction.location);
    let matched = match_resource(&extraction.need, position, resources);

    debug!(
        score,
        need = %extraction.need,
        matched = matched.as_ref().map(|r| r.id.as_str()).unwrap_or("none"),
        "Triaged message"
    );

    AnalyzedMessage::new(message, extraction, score, Some(position), matched)
}

/// Analyze a batch of raw messages.
///
/// Blank lines are skipped. Every analyzed message is recorded in the store
/// before the batch is returned sorted by urgency score, highest first.
///
/// A store failure aborts the batch; messages already recorded stay in the
/// log but no partial batch is returned.
#[instrument(skip_all, fields(batch_size = messages.len()))]
pub async fn analyze_batch(messages: &[String], deps: &ServerDeps) -> TriageResult<Vec<AnalyzedMessage>> {
    let resources = deps
        .store
        .list_resources()
        .await
        .map_err(TriageError::LoadResources)?;

    let pending: Vec<&str> = messages
        .iter()
        .map(String::as_str)
        .filter(|m| !m.trim().is_empty())
        .collect();

    let extractor: &dyn Extractor = deps.extractor.as_ref();
    let extractions = join_all(pending.iter().map(|m| extractor.extract(m))).await;

    let mut results = Vec::with_capacity(pending.len());
    for (message, extraction) in pending.into_iter().zip(extractions) {
        let analyzed = triage_message(message, extraction, &resources, &deps.resolver);

        deps.store
            .record_result(&analyzed)
            .await
            .map_err(|source| TriageError::RecordResult {
                id: analyzed.id,
                source,
            })?;

        results.push(analyzed);
    }

    sort_by_urgency(&mut results);

    info!(
        analyzed = results.len(),
        skipped = messages.len() - results.len(),
        unmatched = results.iter().filter(|m| !m.is_matched()).count(),
        "Batch triaged"
    );

    Ok(results)
}
