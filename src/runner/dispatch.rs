//! Target dispatch
//!
//! Resolves a target name against the registry and executes its command
//! lines sequentially, stopping on the first failure.

use crate::error::Result;
use crate::runner::{execute_command, Context, Registry};

/// Executes targets against an immutable registry.
///
/// Sequential and fail-fast: later commands may depend on side effects of
/// earlier ones, so nothing past a failed command is spawned. The dispatcher
/// holds no other state; callers serialize concurrent runs externally.
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    /// Create a dispatcher over a populated registry
    pub fn new(registry: Registry) -> Self {
        Dispatcher { registry }
    }

    /// The registry this dispatcher resolves against
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run a target by name.
    ///
    /// An unregistered name fails before any command is spawned. A command
    /// that exits non-zero or dies to a signal stops the sequence and is
    /// reported with its identity and exit status.
    pub fn run(&self, target_name: &str, ctx: &Context) -> Result<()> {
        let target = self.registry.resolve(target_name)?;

        ctx.print_target_start(target.name());

        for line in target.commands() {
            execute_command(line, ctx)?;
        }

        ctx.print_target_complete(target.name());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DispatchError, RegistryError, RoteError};
    use crate::runner::{Target, Verbosity};
    use std::fs;
    use tempfile::TempDir;

    fn quiet_ctx(dir: &TempDir) -> Context {
        Context::new()
            .with_working_dir(dir.path().to_path_buf())
            .with_verbosity(Verbosity::Quiet)
    }

    #[test]
    fn test_run_single_command_target() {
        let mut registry = Registry::new();
        registry
            .register(Target::new("build", vec!["true".to_string()]))
            .unwrap();

        let temp_dir = TempDir::new().unwrap();
        let dispatcher = Dispatcher::new(registry);
        assert!(dispatcher.run("build", &quiet_ctx(&temp_dir)).is_ok());
    }

    #[test]
    fn test_run_reports_failing_command() {
        let mut registry = Registry::new();
        registry
            .register(Target::new("lint", vec!["exit 2".to_string()]))
            .unwrap();

        let temp_dir = TempDir::new().unwrap();
        let dispatcher = Dispatcher::new(registry);
        let result = dispatcher.run("lint", &quiet_ctx(&temp_dir));

        match result {
            Err(RoteError::Dispatch(DispatchError::CommandFailed { command, status })) => {
                assert_eq!(command, "exit 2");
                assert_eq!(status, Some(2));
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_run_unknown_target_spawns_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let marker = temp_dir.path().join("ran.txt");

        let mut registry = Registry::new();
        registry
            .register(Target::new(
                "build",
                vec![format!("touch {}", marker.display())],
            ))
            .unwrap();

        let dispatcher = Dispatcher::new(registry);
        let result = dispatcher.run("package", &quiet_ctx(&temp_dir));

        assert!(matches!(
            result,
            Err(RoteError::Registry(RegistryError::UnknownTarget(name))) if name == "package"
        ));
        assert!(!marker.exists());
    }

    #[test]
    fn test_failure_stops_remaining_commands() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.txt");
        let third = temp_dir.path().join("third.txt");

        let mut registry = Registry::new();
        registry
            .register(Target::new(
                "check",
                vec![
                    format!("touch {}", first.display()),
                    "false".to_string(),
                    format!("touch {}", third.display()),
                ],
            ))
            .unwrap();

        let dispatcher = Dispatcher::new(registry);
        let result = dispatcher.run("check", &quiet_ctx(&temp_dir));

        match result {
            Err(RoteError::Dispatch(DispatchError::CommandFailed { command, status })) => {
                assert_eq!(command, "false");
                assert_eq!(status, Some(1));
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }

        assert!(first.exists());
        assert!(!third.exists());
    }

    #[test]
    fn test_commands_run_in_declared_order() {
        let temp_dir = TempDir::new().unwrap();
        let log = temp_dir.path().join("order.txt");

        let mut registry = Registry::new();
        registry
            .register(Target::new(
                "ordered",
                vec![
                    format!("echo one >> {}", log.display()),
                    format!("echo two >> {}", log.display()),
                    format!("echo three >> {}", log.display()),
                ],
            ))
            .unwrap();

        let dispatcher = Dispatcher::new(registry);
        dispatcher.run("ordered", &quiet_ctx(&temp_dir)).unwrap();

        assert_eq!(fs::read_to_string(&log).unwrap(), "one\ntwo\nthree\n");
    }
}
