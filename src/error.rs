//! Error types for Rote

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Rote operations
pub type Result<T> = std::result::Result<T, RoteError>;

/// Main error type for Rote
#[derive(Error, Debug)]
pub enum RoteError {
    /// Manifest parsing and validation errors
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Target registration and lookup errors
    #[error("Target error: {0}")]
    Registry(#[from] RegistryError),

    /// Command dispatch errors
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Manifest parsing and validation errors
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to find manifest file (searched: {0})")]
    NotFound(String),

    #[error("Invalid manifest: {0}")]
    Invalid(String),

    #[error("Failed to read manifest file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Target registration and lookup errors
///
/// The registry is populated once at startup from the manifest, so both
/// variants are configuration defects rather than steady-state failures.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Target '{0}' is already defined")]
    DuplicateTarget(String),

    #[error("Target '{0}' is not defined")]
    UnknownTarget(String),
}

/// Command dispatch errors
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The command ran and exited non-zero, or was terminated by a signal
    /// (in which case no exit code is available).
    #[error("Command `{command}` failed with {}", exit_status_label(.status))]
    CommandFailed {
        command: String,
        status: Option<i32>,
    },

    /// The command could not be started at all.
    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        source: io::Error,
    },
}

impl DispatchError {
    /// The command line the failure is attributable to
    pub fn command(&self) -> &str {
        match self {
            DispatchError::CommandFailed { command, .. } => command,
            DispatchError::Spawn { command, .. } => command,
        }
    }
}

fn exit_status_label(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {code}"),
        None => "signal termination".to_string(),
    }
}

/// Specialized result type for manifest operations
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;

/// Specialized result type for registry operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Specialized result type for dispatch operations
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;
