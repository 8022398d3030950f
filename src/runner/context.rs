//! Execution context for target dispatch
//!
//! The context carries the settings every spawned command shares: working
//! directory, interpreter, resolved host facts, and output verbosity.

use crate::runner::HostEnv;
use colored::Colorize;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Execution context shared by all commands of a dispatch
pub struct Context {
    /// Current working directory
    pub working_dir: PathBuf,

    /// Interpreter used to run command lines (e.g., ["sh", "-c"])
    pub interpreter: Vec<String>,

    /// Resolved host facts: platform string and environment overlay
    pub host: HostEnv,

    /// Verbosity level
    pub verbosity: Verbosity,
}

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent = 0,
    Quiet = 1,
    Normal = 2,
    Verbose = 3,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            interpreter: vec!["sh".to_string(), "-c".to_string()],
            host: HostEnv::default(),
            verbosity: Verbosity::Normal,
        }
    }

    /// Create a context with a specific working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set the resolved host facts
    pub fn with_host(mut self, host: HostEnv) -> Self {
        self.host = host;
        self
    }

    /// Set the interpreter
    pub fn with_interpreter(mut self, interpreter: Vec<String>) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Variables visible to command-line interpolation
    pub fn vars(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert("platform".to_string(), self.host.platform().to_string());
        vars
    }

    /// Print an executed command line
    pub fn print_command(&self, line: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "[run]".green().bold(), line);
        }
    }

    /// Print an info message
    pub fn print_info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "[info]".cyan().bold(), message);
        }
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        if self.verbosity >= Verbosity::Quiet {
            eprintln!("{} {}", "[error]".red().bold(), message);
        }
    }

    /// Print a debug message (only in verbose mode)
    pub fn print_debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{} {}", "[debug]".dimmed(), message);
        }
    }

    /// Print a target start message
    pub fn print_target_start(&self, target_name: &str) {
        self.print_info(&format!("Running target: {}", target_name));
    }

    /// Print a target complete message
    pub fn print_target_complete(&self, target_name: &str) {
        self.print_debug(&format!("Target completed: {}", target_name));
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_context_new() {
        let ctx = Context::new();
        assert_eq!(ctx.verbosity, Verbosity::Normal);
        assert_eq!(ctx.interpreter, vec!["sh", "-c"]);
        assert!(ctx.host.overlay().is_empty());
    }

    #[test]
    fn test_context_with_host() {
        let mut overlay = BTreeMap::new();
        overlay.insert("RUST_LOG".to_string(), "info".to_string());

        let ctx = Context::new().with_host(HostEnv::resolve(overlay));
        assert_eq!(
            ctx.host.overlay().get("RUST_LOG"),
            Some(&"info".to_string())
        );
    }

    #[test]
    fn test_context_vars_expose_platform() {
        let ctx = Context::new();
        let vars = ctx.vars();
        assert_eq!(vars.get("platform").map(String::as_str), Some(ctx.host.platform()));
    }

    #[test]
    fn test_verbosity_levels() {
        assert!(Verbosity::Verbose > Verbosity::Normal);
        assert!(Verbosity::Normal > Verbosity::Quiet);
        assert!(Verbosity::Quiet > Verbosity::Silent);
    }

    #[test]
    fn test_with_interpreter() {
        let ctx = Context::new().with_interpreter(vec!["bash".to_string(), "-c".to_string()]);
        assert_eq!(ctx.interpreter, vec!["bash", "-c"]);
    }

    #[test]
    fn test_with_verbosity() {
        let ctx = Context::new().with_verbosity(Verbosity::Verbose);
        assert_eq!(ctx.verbosity, Verbosity::Verbose);
    }
}
