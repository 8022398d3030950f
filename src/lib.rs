//! Rote - a small declarative target runner
//!
//! Rote maps named build targets (`build`, `run`, `lint`, `doc`) to ordered
//! sequences of external commands, executed sequentially and fail-fast with a
//! process-wide environment overlay merged into every spawned command.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;

// Re-export commonly used types
pub use error::{Result, RoteError};

/// Current version of Rote
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
