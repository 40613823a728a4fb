//! Bake operation - batch generation from mimic.toml.

use eyre::{Result, eyre};
use mimic_codegen_go::Generator;
use mimic_params::{MimicToml, MockEntry};

use super::{EmitOptions, describe, emit, read_descriptor};
use crate::reports::{GenerateReport, MockOutcome};

/// Execute the bake operation.
///
/// Entries are independent: a failing entry is recorded in the report and
/// the remaining entries are still generated.
pub fn bake(mimic_toml: &MimicToml, options: &EmitOptions) -> GenerateReport {
    let mut outcomes = Vec::new();

    for (i, entry) in mimic_toml.config().mocks.iter().enumerate() {
        let label = format!("mocks[{}] {}", i, entry.params.interface_name);
        match bake_entry(mimic_toml, entry, options) {
            Ok(mut entry_outcomes) => outcomes.append(&mut entry_outcomes),
            Err(err) => {
                let message = format!("{:#}", err);
                tracing::warn!(mock = %label, error = %message, "mock generation failed");
                outcomes.push(MockOutcome::Failed { label, message });
            }
        }
    }

    GenerateReport { outcomes }
}

fn bake_entry(
    mimic_toml: &MimicToml,
    entry: &MockEntry,
    options: &EmitOptions,
) -> Result<Vec<MockOutcome>> {
    let file = read_descriptor(&mimic_toml.resolve(&entry.descriptor))?;
    let result = Generator::new(entry.params.clone())
        .generate(&file)
        .map_err(|e| eyre!(describe(&e)))?;
    emit(result, options)
}
