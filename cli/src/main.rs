//! Rotaphrase CLI - prints one phrase per run.
//!
//! ```text
//! main() -> init_tracing() -> Command::parse() -- help --> usage
//!                                    |
//!                                    v
//!                   RotaphraseConfig::load() -> Command::run(): next | status | reset
//! ```
//!
//! Any error returned from `main` exits with status 1.
//!
//! stdout carries only command output; logs go to
//! `~/.rotaphrase/logs/rotaphrase.log` (or stderr if no log file can be opened).

mod command;

use std::env;
use std::fs::{self, File, OpenOptions};
use std::io::{stderr, stdout};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use rotaphrase_config::{RotaphraseConfig, app_dir};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use command::Command;

fn init_tracing() {
    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::debug!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // No log file: keep stderr quiet unless asked.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(stderr))
        .with(env_filter)
        .init();
    for warning in init_warnings {
        tracing::warn!("{warning}");
    }
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => warnings.push(format!(
                "Failed to open log file {}: {e}",
                candidate.display()
            )),
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    vec![
        // Primary: ~/.rotaphrase/logs/rotaphrase.log
        app_dir().join("logs").join("rotaphrase.log"),
        // Fallback for environments without a writable home.
        PathBuf::from(".rotaphrase").join("logs").join("rotaphrase.log"),
    ]
}

fn main() -> Result<()> {
    init_tracing();

    let Some(command) = Command::parse(env::args().skip(1))? else {
        print!("{}", command::USAGE);
        return Ok(());
    };

    let config = RotaphraseConfig::load().context("loading configuration")?;
    command.run(&config, &mut stdout().lock(), &mut stderr())
}
