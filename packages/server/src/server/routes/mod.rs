// HTTP routes
pub mod analyze;
pub mod health;
pub mod resources;

pub use analyze::*;
pub use health::*;
pub use resources::*;
