use std::path::PathBuf;

use clap::Args;
use dtomaker_manifest::{DtomakerToml, OutputKind};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to dtomaker.toml (defaults to ./dtomaker.toml)
    #[arg(short, long, default_value = "dtomaker.toml")]
    pub config: PathBuf,

    /// Only run profiles of this output type (dto, create, sqlite)
    #[arg(long = "type")]
    pub kind: Option<OutputKind>,

    /// Only run the profile with this label
    #[arg(short, long)]
    pub label: Option<String>,

    /// Print generated content without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = DtomakerToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            config.manifest(),
            GenerateOptions {
                kind: self.kind,
                label: self.label.as_deref(),
                dry_run: self.dry_run,
            },
        );
        report.render(&mut TerminalOutput::new());

        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }
}
