//! Triage domain models

pub mod analyzed_message;
pub mod extraction;
pub mod resource;

pub use analyzed_message::{sort_by_urgency, AnalyzedMessage};
pub use extraction::{ExtractionResult, UrgencyLevel};
pub use resource::{Resource, ResourceStatus, ResourceType};
