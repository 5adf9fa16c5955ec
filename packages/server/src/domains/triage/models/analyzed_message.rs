//! AnalyzedMessage - the terminal record produced for each triaged message

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ExtractionResult, Resource};
use crate::common::utils::Coordinate;
use crate::common::MessageId;

/// A triaged message: extraction, score, position and matched resource.
///
/// Created once per message and never modified afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedMessage {
    pub id: MessageId,
    pub original_content: String,

    #[serde(flatten)]
    pub extraction: ExtractionResult,

    /// 0..=100
    pub urgency_score: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_resource_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_resource: Option<Resource>,

    pub analyzed_at: DateTime<Utc>,
}

impl AnalyzedMessage {
    pub fn new(
        original_content: impl Into<String>,
        extraction: ExtractionResult,
        urgency_score: u8,
        coordinates: Option<Coordinate>,
        matched_resource: Option<Resource>,
    ) -> Self {
        Self {
            id: MessageId::new(),
            original_content: original_content.into(),
            extraction,
            urgency_score: urgency_score.min(100),
            coordinates,
            matched_resource_id: matched_resource.as_ref().map(|r| r.id.clone()),
            matched_resource,
            analyzed_at: Utc::now(),
        }
    }

    pub fn is_matched(&self) -> bool {
        self.matched_resource.is_some()
    }
}

/// Sort by urgency score, highest first. Stable, so equal scores keep their
/// input order.
pub fn sort_by_urgency(messages: &mut [AnalyzedMessage]) {
    messages.sort_by(|a, b| b.urgency_score.cmp(&a.urgency_score));
}
