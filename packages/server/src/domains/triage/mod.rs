//! Triage domain: extraction, urgency scoring, location resolution and
//! resource matching for incoming emergency messages.

pub mod activities;
pub mod error;
pub mod models;
pub mod utils;

pub use activities::{analyze_batch, Extractor, FallbackExtractor, LlmExtractor};
pub use error::{TriageError, TriageResult};
