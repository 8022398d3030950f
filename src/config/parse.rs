//! Manifest loading and discovery

use crate::config::types::Manifest;
use crate::error::{ManifestError, ManifestResult, RoteError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest file names to search for
const MANIFEST_FILE_NAMES: &[&str] = &["rote.yml", "rote.yaml"];

/// The built-in rule set, used when no manifest file is present.
///
/// Four targets wrapping the Rust toolchain, plus the logging verbosity
/// export honored by the built application and any tool that reads it.
const BUILTIN_MANIFEST: &str = r#"
environment:
  RUST_LOG: info

targets:
  build:
    usage: Compile the project
    run: cargo build
  run:
    usage: Compile and execute the application
    run:
      - cargo build
      - cargo run
  lint:
    usage: Run static analysis over the sources
    run: cargo clippy --all-targets
  doc:
    usage: Generate documentation, including non-public items
    run: cargo doc --document-private-items
"#;

/// Parse the built-in manifest
pub fn builtin_manifest() -> Manifest {
    // The built-in document is a compile-time constant; a parse failure here
    // is a defect in the binary itself, not a user error.
    serde_yaml::from_str(BUILTIN_MANIFEST).expect("built-in manifest must parse")
}

/// Find a manifest file by searching the current and parent directories
pub fn find_manifest_file() -> ManifestResult<PathBuf> {
    find_manifest_file_from(env::current_dir().map_err(|e| {
        ManifestError::Invalid(format!("Failed to get current directory: {}", e))
    })?)
}

/// Find a manifest file starting from a specific directory
pub fn find_manifest_file_from(start_dir: PathBuf) -> ManifestResult<PathBuf> {
    let mut current_dir = start_dir;
    let mut searched_paths = Vec::new();

    loop {
        for file_name in MANIFEST_FILE_NAMES {
            let manifest_path = current_dir.join(file_name);
            searched_paths.push(manifest_path.display().to_string());

            if manifest_path.is_file() {
                return Ok(manifest_path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                // Reached root without finding a manifest
                return Err(ManifestError::NotFound(searched_paths.join(", ")));
            }
        }
    }
}

/// Parse a manifest file from a path
pub fn parse_manifest_file(path: &Path) -> Result<Manifest, RoteError> {
    let contents = fs::read_to_string(path).map_err(|e| ManifestError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_manifest(&contents)
}

/// Parse a manifest from a string
pub fn parse_manifest(yaml: &str) -> Result<Manifest, RoteError> {
    let manifest: Manifest = serde_yaml::from_str(yaml)?;
    validate_manifest(&manifest)?;
    Ok(manifest)
}

/// Validate a parsed manifest
pub fn validate_manifest(manifest: &Manifest) -> ManifestResult<()> {
    for (name, target) in &manifest.targets {
        if name.trim().is_empty() {
            return Err(ManifestError::Invalid(
                "target names must be non-empty".to_string(),
            ));
        }
        for line in &target.run {
            if line.trim().is_empty() {
                return Err(ManifestError::Invalid(format!(
                    "target '{}' has an empty command line",
                    name
                )));
            }
        }
    }

    if let Some(interpreter) = &manifest.interpreter {
        if interpreter.is_empty() {
            return Err(ManifestError::Invalid(
                "interpreter must name an executable".to_string(),
            ));
        }
    }

    Ok(())
}

/// Load a manifest with automatic file discovery, falling back to the
/// built-in rule set when no file exists
pub fn load_manifest_auto() -> Result<(Manifest, Option<PathBuf>), RoteError> {
    match find_manifest_file() {
        Ok(path) => {
            let manifest = parse_manifest_file(&path)?;
            Ok((manifest, Some(path)))
        }
        Err(ManifestError::NotFound(_)) => Ok((builtin_manifest(), None)),
        Err(e) => Err(e.into()),
    }
}
