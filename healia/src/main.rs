//! healia - herbal & mental wellness check-in companion
//!
//! Runs one in-memory session as a line-oriented shell over stdin/stdout.

mod command;
mod render;
mod shell;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use healia_core::{Config, RandomSource, RemedyCatalog, SeededRandom, Session, ThreadRandom};

use crate::shell::Shell;

#[derive(Parser, Debug)]
#[command(name = "healia")]
#[command(about = "Herbal & mental wellness check-in companion")]
#[command(version)]
struct Args {
    /// Config file to use instead of ~/.config/healia/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for remedy, quote and prompt selection (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory `export` writes mood_log.csv to (overrides config)
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    Config::ensure_xdg_env();

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    // Initialize logging (to file; stdout is the shell)
    let _log_guard =
        healia_core::logging::init(&config.logging).context("failed to initialize logging")?;

    let catalog = RemedyCatalog::standard().context("invalid remedy catalog")?;

    let seed = args.seed.or(config.session.seed);
    let rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };
    tracing::info!(seed = ?seed, "healia starting up");

    let export_dir = args.export_dir.unwrap_or(config.export.directory);
    let mut shell = Shell::new(Session::new(catalog, rng), export_dir);

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout().lock();
    shell
        .run(stdin.lock(), &mut stdout, interactive)
        .context("shell I/O failed")?;

    tracing::info!(
        session_id = %shell.session().id(),
        started_at = %shell.session().started_at(),
        "healia shutting down"
    );

    Ok(())
}
