//! Host environment resolution
//!
//! This module owns the two host facts every dispatch depends on: the
//! detected platform string and the environment overlay exported into every
//! spawned command.

use std::collections::BTreeMap;
use std::process::{Command as StdCommand, Stdio};
use std::sync::OnceLock;

/// Sentinel platform value used when the host query is unavailable.
///
/// Target definitions must tolerate this value; detection failure is not an
/// error.
pub const UNKNOWN_PLATFORM: &str = "unknown";

/// Detect the host platform, probing at most once per process.
///
/// The probe is the kernel name query (`uname -s`, e.g. "Linux" or "Darwin").
/// Any failure (missing binary, non-zero exit, unreadable output) degrades to
/// [`UNKNOWN_PLATFORM`].
pub fn detect_platform() -> &'static str {
    static PLATFORM: OnceLock<String> = OnceLock::new();
    PLATFORM.get_or_init(probe_platform)
}

fn probe_platform() -> String {
    let output = match StdCommand::new("uname")
        .arg("-s")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
    {
        Ok(output) => output,
        Err(_) => return UNKNOWN_PLATFORM.to_string(),
    };

    if !output.status.success() {
        return UNKNOWN_PLATFORM.to_string();
    }

    match String::from_utf8(output.stdout) {
        Ok(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => UNKNOWN_PLATFORM.to_string(),
    }
}

/// Resolved host facts: the platform string and the environment overlay.
///
/// Computed once per process and read-only thereafter. The overlay is applied
/// on top of the inherited process environment at spawn time, so a `HostEnv`
/// never needs to mutate ambient state itself.
#[derive(Debug, Clone)]
pub struct HostEnv {
    platform: &'static str,
    overlay: BTreeMap<String, String>,
}

impl HostEnv {
    /// Resolve host facts with the given environment overlay
    pub fn resolve(overlay: BTreeMap<String, String>) -> Self {
        HostEnv {
            platform: detect_platform(),
            overlay,
        }
    }

    /// The detected platform string, or [`UNKNOWN_PLATFORM`]
    pub fn platform(&self) -> &str {
        self.platform
    }

    /// The environment overlay exported into every spawned command.
    ///
    /// Never fails; an empty overlay is valid.
    pub fn overlay(&self) -> &BTreeMap<String, String> {
        &self.overlay
    }
}

impl Default for HostEnv {
    fn default() -> Self {
        Self::resolve(BTreeMap::new())
    }
}
