//! Pure triage functions: scoring, location resolution, matching

pub mod location;
pub mod matching;
pub mod scoring;

pub use location::LocationResolver;
pub use matching::match_resource;
pub use scoring::score_urgency;
