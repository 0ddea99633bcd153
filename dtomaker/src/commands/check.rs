use std::path::PathBuf;

use clap::Args;
use dtomaker_manifest::DtomakerToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to dtomaker.toml (defaults to ./dtomaker.toml)
    #[arg(short, long, default_value = "dtomaker.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = DtomakerToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(config.manifest(), config.path());
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
