//! Command-line configuration and logging setup for the terminal binary.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use env_logger::{Env, Target};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::{GridEngine, RandomSource, SimpleRng};
use crate::session::GameSession;
use crate::types::{GameError, DEFAULT_SIZE};

/// Largest board the terminal binary accepts.
pub const MAX_BOARD_SIZE: u64 = 32;

/// Play 2048 in the terminal.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tui-2048", version, about)]
pub struct Args {
    /// Board side length (2 to 32)
    #[arg(
        long,
        env = "TUI_2048_SIZE",
        default_value_t = DEFAULT_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(..=MAX_BOARD_SIZE)
    )]
    pub size: usize,

    /// Seed for a reproducible game; omitted means a fresh random game
    #[arg(long, env = "TUI_2048_SEED")]
    pub seed: Option<u32>,

    /// Write logs to this file (filter with RUST_LOG, default "info")
    #[arg(long, env = "TUI_2048_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// The deterministic LCG when seeded, an entropy-seeded generator otherwise.
    pub fn random_source(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(SimpleRng::new(seed)),
            None => Box::new(StdRng::from_entropy()),
        }
    }

    pub fn build_session(&self) -> Result<GameSession<Box<dyn RandomSource>>, GameError> {
        let engine = GridEngine::new(self.size, self.random_source())?;
        Ok(GameSession::new(engine))
    }
}

/// Route `log` output to `path`.
///
/// Without a path nothing is installed: stderr shares the terminal with the
/// game screen.
pub fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialized")?;
    Ok(())
}
