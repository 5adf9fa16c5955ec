pub mod analyze_batch;
pub mod extract;

pub use analyze_batch::{analyze_batch, triage_message};
pub use extract::{build_extraction_prompt, parse_extraction, Extractor, FallbackExtractor, LlmExtractor};
