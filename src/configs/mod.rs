pub mod base;
pub mod engine;
pub mod logging;
pub mod project;

pub use base::*;
pub use engine::*;
pub use logging::*;
pub use project::*;
