use thiserror::Error;

use crate::common::MessageId;

/// Failures that abort a triage batch.
///
/// Extraction problems never show up here; they are absorbed into the
/// fallback extraction.
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("failed to load resources: {0}")]
    LoadResources(#[source] anyhow::Error),

    #[error("failed to record result {id}: {source}")]
    RecordResult {
        id: MessageId,
        #[source]
        source: anyhow::Error,
    },
}

pub type TriageResult<T> = std::result::Result<T, TriageError>;
