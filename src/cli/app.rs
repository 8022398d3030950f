//! Main CLI application

use crate::config::{load_manifest_auto, parse_manifest_file, Manifest};
use crate::runner::{Context, Dispatcher, HostEnv, Registry, Verbosity};
use anyhow::Context as _;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::env;
use std::path::PathBuf;

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
    /// Parsed manifest
    manifest: Manifest,
    /// Manifest file path; `None` when running on the built-in rule set
    manifest_path: Option<PathBuf>,
    /// Target registry built from the manifest
    dispatcher: Dispatcher,
}

impl App {
    /// Create a new app, discovering a manifest file or falling back to the
    /// built-in rule set
    pub fn new() -> anyhow::Result<Self> {
        let (manifest, manifest_path) =
            load_manifest_auto().context("failed to load manifest")?;
        Self::from_manifest(manifest, manifest_path)
    }

    /// Create an app from a specific manifest file
    pub fn with_manifest_file(path: PathBuf) -> anyhow::Result<Self> {
        let manifest = parse_manifest_file(&path)
            .with_context(|| format!("failed to load manifest '{}'", path.display()))?;
        Self::from_manifest(manifest, Some(path))
    }

    fn from_manifest(manifest: Manifest, manifest_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let registry = Registry::from_manifest(&manifest)
            .context("failed to register manifest targets")?;
        let dispatcher = Dispatcher::new(registry);
        let command = build_command(&manifest, &dispatcher);

        Ok(App {
            command,
            manifest,
            manifest_path,
            dispatcher,
        })
    }

    /// Run the application with command line arguments
    pub fn run(mut self) -> anyhow::Result<()> {
        let matches = self.command.clone().get_matches();

        let verbosity = get_verbosity(&matches);

        // Check if a target was specified
        let target_name = match matches.subcommand() {
            Some((name, _)) => name.to_string(),
            None => {
                // No target specified, show help
                self.command.print_help()?;
                println!();
                return Ok(());
            }
        };

        let ctx = self.build_context(verbosity);

        self.dispatcher
            .run(&target_name, &ctx)
            .with_context(|| format!("target '{}' failed", target_name))
    }

    /// Build the execution context from the manifest and host facts
    fn build_context(&self, verbosity: Verbosity) -> Context {
        // Recipes run relative to the manifest, not wherever it was found from
        let working_dir = self
            .manifest_path
            .as_ref()
            .and_then(|p| p.parent())
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        // A .env next to the manifest feeds the inherited environment; the
        // overlay still wins per key at spawn time
        let _ = dotenvy::from_path(working_dir.join(".env"));

        let host = HostEnv::resolve(self.manifest.environment.clone());

        let mut ctx = Context::new()
            .with_working_dir(working_dir)
            .with_host(host)
            .with_verbosity(verbosity);

        if let Some(interpreter) = &self.manifest.interpreter {
            ctx = ctx.with_interpreter(interpreter.clone());
        }

        ctx
    }
}

/// Build the clap command from the manifest and registry
fn build_command(manifest: &Manifest, dispatcher: &Dispatcher) -> Command {
    let mut cmd = Command::new(manifest.name.clone().unwrap_or_else(|| "rote".to_string()))
        .version(env!("CARGO_PKG_VERSION"))
        // Unknown names must reach the registry, which owns the
        // unknown-target error, rather than die in clap's parser
        .allow_external_subcommands(true)
        .about(
            manifest
                .usage
                .clone()
                .unwrap_or_else(|| "A small declarative target runner".to_string()),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Path to rote.yml manifest file")
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print command output and errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        );

    // Add a subcommand for each registered target
    for target in dispatcher.registry().targets() {
        let mut target_cmd =
            Command::new(target.name().to_string()).about(target.usage().unwrap_or("").to_string());

        if let Some(desc) = target.description() {
            target_cmd = target_cmd.long_about(desc.to_string());
        }

        cmd = cmd.subcommand(target_cmd);
    }

    cmd
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("silent") {
        Verbosity::Silent
    } else if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Run the CLI application with provided arguments
pub fn run() -> anyhow::Result<()> {
    // Check if --file flag is provided before clap parsing, since the
    // command tree itself is built from the manifest
    let args: Vec<String> = env::args().collect();
    let file_path = extract_file_arg(&args);

    let app = if let Some(path) = file_path {
        App::with_manifest_file(path)?
    } else {
        App::new()?
    };

    app.run()
}

/// Extract --file argument before clap parsing
fn extract_file_arg(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if (args[i] == "--file" || args[i] == "-f") && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}
