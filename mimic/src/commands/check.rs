use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mimic_params::MimicToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to mimic.toml (defaults to ./mimic.toml)
    #[arg(short, long, default_value = "mimic.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let mimic_toml = MimicToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(&mimic_toml);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
