use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{ListReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Interface descriptor file (JSON)
    #[arg(short, long)]
    pub descriptor: PathBuf,
}

impl ListCommand {
    /// Run the list command
    pub fn run(&self) -> Result<()> {
        let file = ops::read_descriptor(&self.descriptor)?;
        ListReport::from(&file).render(&mut TerminalOutput::new());
        Ok(())
    }
}
