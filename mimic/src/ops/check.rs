//! Check operation - config and descriptor validation.

use mimic_codegen::Severity;
use mimic_codegen_go::{Error, validate};
use mimic_params::MimicToml;

use super::{describe, read_descriptor};
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Decodes every descriptor referenced by the config, looks up the
/// configured interface and collects its diagnostics. Nothing is written.
pub fn check(mimic_toml: &MimicToml) -> CheckReport {
    let mocks = &mimic_toml.config().mocks;
    let mut report = CheckReport::new(mimic_toml.path(), mocks.len());

    for (i, entry) in mocks.iter().enumerate() {
        let scope = format!("mocks[{}]", i);

        let file = match read_descriptor(&mimic_toml.resolve(&entry.descriptor)) {
            Ok(file) => file,
            Err(err) => {
                report.push(Severity::Error, format!("{:#}", err), scope);
                continue;
            }
        };

        let name = &entry.params.interface_name;
        let Some(interface) = file.find_interface(name) else {
            let err = Error::interface_not_found(name, file.interface_names());
            report.push(Severity::Error, describe(&err), scope);
            continue;
        };

        for diag in validate(interface) {
            let location = match &diag.location {
                Some(location) => format!("{}: {}", scope, location),
                None => scope.clone(),
            };
            report.push(diag.severity, diag.message, location);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const CONFIG: &str = r#"
        [defaults]
        target_package_path = "example.com/svc"
        out_path_template = "%s_mock.go"

        [[mocks]]
        descriptor = "svc.json"
        interface_name = "Clock"

        [[mocks]]
        descriptor = "svc.json"
        interface_name = "Empty"

        [[mocks]]
        descriptor = "svc.json"
        interface_name = "Broken"
    "#;

    const DESCRIPTOR: &str = r#"{
        "package_path": "example.com/svc",
        "interfaces": [
            {"name": "Clock", "methods": [{"name": "Now"}]},
            {"name": "Empty"},
            {"name": "Broken", "methods": [
                {"name": "Get", "results": [
                    {"name": "n", "type": {"kind": "builtin", "name": "int"}},
                    {"type": {"kind": "named", "package": "example.com/svc", "name": ""}}
                ]}
            ]}
        ]
    }"#;

    fn open(config: &str, descriptor: Option<&str>) -> (TempDir, MimicToml) {
        let dir = TempDir::new().unwrap();
        if let Some(descriptor) = descriptor {
            std::fs::write(dir.path().join("svc.json"), descriptor).unwrap();
        }
        std::fs::write(dir.path().join("mimic.toml"), config).unwrap();
        let mimic_toml = MimicToml::open(dir.path().join("mimic.toml")).unwrap();
        (dir, mimic_toml)
    }

    fn found(report: &CheckReport, severity: Severity) -> Vec<String> {
        report
            .findings
            .iter()
            .filter(|f| f.severity == severity)
            .map(|f| format!("{} @ {}", f.message, f.location))
            .collect()
    }

    #[test]
    fn test_check_collects_diagnostics() {
        let (_dir, mimic_toml) = open(CONFIG, Some(DESCRIPTOR));
        let report = check(&mimic_toml);

        assert_eq!(report.mocks, 3);
        assert!(!report.is_valid());
        assert_eq!(
            found(&report, Severity::Error),
            vec!["named type has an empty name @ mocks[2]: Broken.Get.results[1]"]
        );
        assert_eq!(report.count(Severity::Warning), 1);
        assert!(found(&report, Severity::Warning)[0].starts_with("results mix named and unnamed"));
        assert_eq!(
            found(&report, Severity::Info),
            vec!["interface has no methods @ mocks[1]: Empty"]
        );
    }

    #[test]
    fn test_check_reports_missing_interface() {
        let (_dir, mimic_toml) = open(
            r#"
            [[mocks]]
            descriptor = "svc.json"
            interface_name = "Nope"
            target_package_path = "example.com/svc"
            out_path_template = "%s_mock.go"
            "#,
            Some(DESCRIPTOR),
        );
        let report = check(&mimic_toml);
        assert_eq!(
            found(&report, Severity::Error),
            vec![
                "interface 'Nope' not found (available interfaces: Clock, Empty, Broken) @ mocks[0]"
            ]
        );
    }

    #[test]
    fn test_check_reports_unreadable_descriptor() {
        let (_dir, mimic_toml) = open(CONFIG, None);
        let report = check(&mimic_toml);
        let errors = found(&report, Severity::Error);
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("svc.json"));
    }

    #[test]
    fn test_check_valid_config() {
        let (_dir, mimic_toml) = open(
            r#"
            [[mocks]]
            descriptor = "svc.json"
            interface_name = "Clock"
            target_package_path = "example.com/svc"
            out_path_template = "%s_mock.go"
            "#,
            Some(DESCRIPTOR),
        );
        let report = check(&mimic_toml);
        assert!(report.is_valid());
        assert!(report.findings.is_empty());
    }
}
