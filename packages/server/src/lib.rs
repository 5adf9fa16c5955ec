// Emergency message triage - API core
//
// Turns free-text distress messages into structured, prioritized records:
// LLM extraction, urgency scoring, approximate geocoding and nearest
// compatible resource matching.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
