// Business domains
pub mod triage;
