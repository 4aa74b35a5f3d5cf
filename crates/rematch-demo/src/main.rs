//! Runs a pattern script and prints one line per result.
//!
//! Usage: `rematch-demo [SCRIPT]`
//!
//! With no argument the built-in script is run. Configuration is read from
//! the file named by `REMATCH_CONFIG`, if set, and then from `REMATCH_*`
//! variables.

mod logging;
mod runner;
mod script;

use std::path::PathBuf;
use std::process::ExitCode;

use rust_rematch::{EnvConfig, PatternCache, RematchConfig, RematchError, Result, load_config};

use crate::runner::Runner;
use crate::script::Script;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run() -> Result<()> {
    let env = EnvConfig::default();

    let mut config = match env.config_path() {
        Some(path) => load_config(&path)?,
        None => RematchConfig::default(),
    };
    env.apply(&mut config)?;

    if let Err(err) = logging::init(&config.logging) {
        eprintln!("warning: {err}");
    }

    let script = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading script");
            Script::load(&path)?
        }
        None => Script::builtin(),
    };

    let cache = PatternCache::from_config(&config.cache, config.compile);
    let stdout = std::io::stdout();
    Runner::new(&cache).run(&script, &mut stdout.lock())?;

    tracing::debug!(stats = ?cache.stats(), "finished");
    Ok(())
}

fn exit_code(err: &RematchError) -> u8 {
    if err.is_invalid_pattern() { 2 } else { 1 }
}
