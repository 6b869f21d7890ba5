use std::io::Write;

use anyhow::{Context, Result, bail};
use rotaphrase_config::RotaphraseConfig;
use rotaphrase_core::{Persistence, rotator_from_config};

pub const USAGE: &str = "\
Usage: rotaphrase [COMMAND]

Commands:
  next     Print the next phrase (default)
  status   Show how many phrases remain in this cycle
  reset    Start a new cycle with every phrase
  help     Show this message

Configuration: ~/.rotaphrase/config.toml, or the file named by ROTAPHRASE_CONFIG.
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Status,
    Reset,
}

impl Command {
    /// `Ok(None)` means help was requested.
    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Option<Self>> {
        let command = match args.next().as_deref() {
            None | Some("next") => Some(Command::Next),
            Some("status") => Some(Command::Status),
            Some("reset") => Some(Command::Reset),
            Some("help" | "-h" | "--help") => None,
            Some(other) => bail!("unknown command '{other}'\n\n{USAGE}"),
        };
        if let Some(extra) = args.next() {
            bail!("unexpected argument '{extra}'\n\n{USAGE}");
        }
        Ok(command)
    }

    /// Command output goes to `out`; warnings that don't fail the command go
    /// to `err`.
    pub fn run(
        self,
        config: &RotaphraseConfig,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<()> {
        let mut rotator = rotator_from_config(config);

        match self {
            Command::Next => {
                let selection = rotator.next_phrase()?;
                if let Persistence::Failed(e) = &selection.persistence {
                    writeln!(err, "warning: rotation state not saved: {e}")?;
                }
                writeln!(out, "{}", selection.phrase)?;
            }
            Command::Status => {
                let status = rotator.status().context("reading rotation status")?;
                writeln!(out, "{}/{}", status.remaining, status.total)?;
            }
            Command::Reset => {
                let total = rotator.reset().context("resetting rotation")?;
                writeln!(out, "reset: {total} phrases available")?;
            }
        }
        Ok(())
    }
}
