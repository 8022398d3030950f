//! CLI interface and argument parsing
//!
//! This module handles command-line parsing and help generation for the
//! registered targets.

pub mod app;

// Re-export main types
pub use app::*;
