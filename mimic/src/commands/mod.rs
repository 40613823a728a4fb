mod bake;
mod check;
mod completions;
mod generate;
mod list;

use std::path::PathBuf;

use bake::BakeCommand;
use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;
use mimic_core::Overwrite;

use crate::{gofmt, logging, ops::EmitOptions};

/// Print a boxed library error as a miette report and exit with status 1.
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: miette::Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_else(|e| {
            eprintln!("{:?}", miette::Report::new(*e));
            std::process::exit(1)
        })
    }
}

#[derive(Parser)]
#[command(name = "mimic")]
#[command(version)]
#[command(about = "Generate Go testify mocks from interface descriptors")]
pub(crate) struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log events as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init(self.verbose, self.log_json);

        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Bake(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one mock from a descriptor
    Generate(GenerateCommand),

    /// Generate every mock listed in mimic.toml
    Bake(BakeCommand),

    /// Validate mimic.toml and its descriptors without generating code
    Check(CheckCommand),

    /// List the interfaces in a descriptor
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Flags shared by the commands that write mocks.
#[derive(Args)]
pub struct EmitArgs {
    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Pipe generated code through gofmt
    #[arg(long)]
    pub gofmt: bool,

    /// Leave mocks that already exist on disk untouched
    #[arg(long)]
    pub keep_existing: bool,
}

impl EmitArgs {
    pub fn options(&self) -> EmitOptions {
        EmitOptions {
            output_dir: self.output.clone(),
            dry_run: self.dry_run,
            overwrite: if self.keep_existing {
                Overwrite::IfMissing
            } else {
                Overwrite::Always
            },
            formatter: gofmt::formatter(self.gofmt),
        }
    }
}
