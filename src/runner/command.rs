//! Command execution
//!
//! This module spawns a single command line through the interpreter with the
//! environment overlay merged into the inherited process environment.

use crate::error::{DispatchError, DispatchResult};
use crate::runner::{interpolate, Context};
use std::process::{Command as StdCommand, Stdio};

/// Execute one command line in the given context, blocking until it exits.
///
/// The overlay is merged on top of the inherited environment; overlay keys
/// win on collision. A non-zero exit or signal termination is an error.
pub fn execute_command(line: &str, ctx: &Context) -> DispatchResult<()> {
    let vars = ctx.vars();
    let exec_str = interpolate(line, &vars);

    ctx.print_command(&exec_str);

    // Build the command
    let mut command = StdCommand::new(&ctx.interpreter[0]);

    // Add interpreter args (e.g., "-c" for sh/bash)
    if ctx.interpreter.len() > 1 {
        command.args(&ctx.interpreter[1..]);
    }

    // Add the actual command line to execute
    command.arg(&exec_str);

    // Set working directory
    command.current_dir(&ctx.working_dir);

    // Set up stdio
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    // Merge the overlay; Command::env overrides inherited values per key
    for (key, value) in ctx.host.overlay() {
        command.env(key, interpolate(value, &vars));
    }

    // Execute the command
    let status = command.status().map_err(|e| DispatchError::Spawn {
        command: exec_str.clone(),
        source: e,
    })?;

    // Check exit status; code() is None for signal termination
    if !status.success() {
        return Err(DispatchError::CommandFailed {
            command: exec_str,
            status: status.code(),
        });
    }

    Ok(())
}
