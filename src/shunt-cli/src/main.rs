//! Operator console for shunt switches.
//!
//! `shunt list` shows every defined shunt with its status, `shunt status`
//! answers for one shunt, and `shunt enable` / `shunt disable` run the
//! ordinary change protocol: unknown names are reported and skipped,
//! repeated requests warn. State lives in a TOML variable store under the
//! data directory (`SHUNT_DATA_DIR` overrides the platform default).

mod commands;
mod sink;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use shunt_core::{DefinitionRegistry, ShuntController};
use shunt_store::{FileStore, StorePaths};

#[derive(Parser, Debug)]
#[command(
    name = "shunt",
    version,
    about = "Inspect and toggle site degradation switches"
)]
struct Cli {
    /// Output machine-readable JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Data directory holding shunt state. Defaults to SHUNT_DATA_DIR or
    /// the platform data dir.
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Extra definitions file merged over the data-dir one.
    #[arg(long, global = true, value_name = "FILE")]
    definitions: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List shunt definitions and their status.
    List {
        /// Only currently enabled shunts.
        #[arg(long, conflicts_with = "disabled")]
        enabled: bool,

        /// Only currently disabled shunts.
        #[arg(long)]
        disabled: bool,
    },
    /// Show one shunt's status.
    Status {
        /// Shunt machine name.
        name: String,
    },
    /// Enable the named shunts, or every shunt when none are named.
    Enable {
        /// Shunt machine names.
        names: Vec<String>,

        /// Suppress already-enabled warnings.
        #[arg(long)]
        quiet: bool,
    },
    /// Disable the named shunts, or every shunt when none are named.
    Disable {
        /// Shunt machine names.
        names: Vec<String>,

        /// Suppress already-disabled warnings.
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let paths = match &cli.data_dir {
        Some(root) => StorePaths::from_root(root.clone()),
        None => StorePaths::new()?,
    };
    paths.ensure_dirs()?;
    debug!(data_dir = %paths.data_dir().display(), "using data directory");

    let store = FileStore::open(paths.variables_file())?;

    let mut registry = DefinitionRegistry::new();
    registry.register(shunt_store::default_definitions);

    let declared = shunt_store::load_definitions(&paths.definitions_file())?;
    registry.register(move || declared.clone());

    if let Some(extra) = &cli.definitions {
        if !extra.exists() {
            bail!("definitions file not found: {}", extra.display());
        }
        let defs = shunt_store::load_definitions(extra)
            .with_context(|| format!("loading {}", extra.display()))?;
        registry.register(move || defs.clone());
    }

    let mut controller = ShuntController::new(registry, Box::new(store));

    match cli.command {
        Commands::List { enabled, disabled } => {
            commands::list(&controller, enabled, disabled, cli.json)
        }
        Commands::Status { name } => commands::status(&controller, &name, cli.json),
        Commands::Enable { names, quiet } => {
            commands::toggle(&mut controller, &names, true, quiet, cli.json)
        }
        Commands::Disable { names, quiet } => {
            commands::toggle(&mut controller, &names, false, quiet, cli.json)
        }
    }
}
