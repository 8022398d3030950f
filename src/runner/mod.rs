//! Target execution engine
//!
//! This module handles the execution of targets: host fact detection,
//! environment overlay propagation, command running, and dispatch.

pub mod command;
pub mod context;
pub mod dispatch;
pub mod host;
pub mod interpolate;
pub mod registry;

// Re-export main types
pub use command::*;
pub use context::*;
pub use dispatch::*;
pub use host::*;
pub use interpolate::*;
pub use registry::*;
