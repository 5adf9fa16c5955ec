//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod deps;
pub mod memory_store;
pub mod test_dependencies;
pub mod traits;

pub use ai::OpenAIBackend;
pub use deps::ServerDeps;
pub use memory_store::MemoryStore;
pub use test_dependencies::TestDependencies;
pub use traits::*;
