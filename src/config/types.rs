//! Manifest types
//!
//! This module defines the data structures that represent a rote.yml manifest.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Top-level manifest structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Manifest {
    /// Application name shown in help output (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Application usage description (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Environment overlay exported into every spawned command
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,

    /// Targets defined in the manifest
    #[serde(default)]
    pub targets: HashMap<String, TargetSpec>,

    /// Interpreter used to run command lines (e.g., ["sh", "-c"])
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<Vec<String>>,
}

/// A target definition
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetSpec {
    /// Usage description for help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    /// Longer description for help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Command lines to execute, in order
    #[serde(default, deserialize_with = "deserialize_command_lines")]
    pub run: Vec<String>,
}

/// Custom deserializer for command lines that handles both a single string
/// and an array of strings
fn deserialize_command_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;

    match value {
        // Single command line
        Value::String(s) => Ok(vec![s]),
        // Array of command lines
        Value::Sequence(seq) => {
            let mut lines = Vec::new();
            for item in seq {
                match item {
                    Value::String(s) => lines.push(s),
                    _ => return Err(D::Error::custom("run entries must be strings")),
                }
            }
            Ok(lines)
        }
        // Null or not present
        Value::Null => Ok(Vec::new()),
        _ => Err(D::Error::custom("run must be a string or array of strings")),
    }
}
