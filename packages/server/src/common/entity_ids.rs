//! Typed ID definitions for triage entities.
//!
//! ```rust
//! use triage_core::common::MessageId;
//!
//! let id = MessageId::new();
//! assert!(!id.is_nil());
//! ```

pub use super::id::Id;

/// Marker type for analyzed messages.
pub struct AnalyzedMessage;

/// Typed ID for analyzed messages. Random (v4), unique per process lifetime.
pub type MessageId = Id<AnalyzedMessage>;
