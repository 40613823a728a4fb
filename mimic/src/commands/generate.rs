use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use mimic_codegen_go::Generator;
use mimic_ir::InterfaceFile;
use mimic_params::GeneratorParams;

use super::{EmitArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{GenerateReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Interface descriptor file (JSON)
    #[arg(short, long)]
    pub descriptor: PathBuf,

    /// Generator parameters file (JSON), used instead of the flags below
    #[arg(
        short,
        long,
        conflicts_with_all = [
            "interface",
            "out_path_template",
            "source_package",
            "target_package",
            "mock_name_template",
        ]
    )]
    pub params: Option<PathBuf>,

    /// Interface to mock
    #[arg(short, long, required_unless_present = "params")]
    pub interface: Option<String>,

    /// Output path template; %s receives the interface name in snake_case
    #[arg(long, default_value = "%s_mock.go")]
    pub out_path_template: String,

    /// Import path of the interface's package (defaults to the descriptor's package)
    #[arg(long)]
    pub source_package: Option<String>,

    /// Import path of the mock's package (defaults to the source package)
    #[arg(long)]
    pub target_package: Option<String>,

    /// Mock struct name template; %s receives the interface name
    #[arg(long, default_value = "")]
    pub mock_name_template: String,

    #[command(flatten)]
    pub emit: EmitArgs,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = ops::read_descriptor(&self.descriptor)?;
        let params = self.params(&file)?;

        let result = Generator::new(params).generate(&file).unwrap_or_exit();
        let outcomes = ops::emit(result, &self.emit.options())?;

        let report = GenerateReport { outcomes };
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }

    fn params(&self, file: &InterfaceFile) -> Result<GeneratorParams> {
        if let Some(path) = &self.params {
            let blob = std::fs::read(path)
                .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
            return Ok(
                GeneratorParams::from_json_with_filename(&blob, &path.display().to_string())
                    .unwrap_or_exit(),
            );
        }

        let source = self
            .source_package
            .clone()
            .unwrap_or_else(|| file.package_path.clone());
        let target = self.target_package.clone().unwrap_or_else(|| source.clone());

        Ok(GeneratorParams {
            interface_name: self.interface.clone().unwrap_or_default(),
            out_path_template: self.out_path_template.clone(),
            source_package_path: source,
            target_package_path: target,
            mock_struct_name_template: self.mock_name_template.clone(),
        })
    }
}
