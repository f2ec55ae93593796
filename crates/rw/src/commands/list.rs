//! `rw list` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::load_registry;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Path to configuration file (default: auto-discover rw.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ListArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let registry = load_registry(self.config.as_deref(), None)?;
        for name in registry.names() {
            output.write(name)?;
        }
        Ok(())
    }
}
