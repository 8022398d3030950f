//! Manifest parsing
//!
//! This module handles the declarative rule source: the embedded built-in
//! manifest and optional rote.yml files on disk.

pub mod parse;
pub mod types;

// Re-export main types
pub use parse::*;
pub use types::*;
