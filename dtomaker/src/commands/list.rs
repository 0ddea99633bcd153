use std::path::PathBuf;

use clap::Args;
use dtomaker_manifest::DtomakerToml;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to dtomaker.toml (defaults to ./dtomaker.toml)
    #[arg(short, long, default_value = "dtomaker.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let config = DtomakerToml::open(&self.config).unwrap_or_exit();
        let manifest = config.manifest();

        println!("Profiles:");
        for profile in &manifest.profiles {
            println!("  {}", profile.summary());
            if !profile.tables.is_empty() {
                println!("    tables: {}", profile.tables.join(", "));
            }
        }

        Ok(())
    }
}
