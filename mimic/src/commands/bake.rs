use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mimic_params::MimicToml;

use super::{EmitArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to mimic.toml (defaults to ./mimic.toml)
    #[arg(short, long, default_value = "mimic.toml")]
    pub config: PathBuf,

    #[command(flatten)]
    pub emit: EmitArgs,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let mimic_toml = MimicToml::open(&self.config).unwrap_or_exit();

        if mimic_toml.config().is_empty() {
            println!("No mocks configured in {}", self.config.display());
            return Ok(());
        }

        let report = ops::bake(&mimic_toml, &self.emit.options());
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
