//! List command report data structures.

use mimic_ir::InterfaceFile;

use super::output::{Marker, Output, Report};

/// One interface in a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceSummary {
    pub name: String,
    pub methods: usize,
}

/// Interfaces declared by a descriptor file.
#[derive(Debug)]
pub struct ListReport {
    pub package_path: String,
    pub interfaces: Vec<InterfaceSummary>,
}

impl From<&InterfaceFile> for ListReport {
    fn from(file: &InterfaceFile) -> Self {
        Self {
            package_path: file.package_path.clone(),
            interfaces: file
                .interfaces
                .iter()
                .map(|iface| InterfaceSummary {
                    name: iface.name.clone(),
                    methods: iface.methods.len(),
                })
                .collect(),
        }
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Package", &self.package_path);
        out.newline();
        out.section(&format!("Interfaces ({})", self.interfaces.len()));
        for iface in &self.interfaces {
            let plural = if iface.methods == 1 { "" } else { "s" };
            out.item(
                Marker::Bullet,
                &format!("{} ({} method{})", iface.name, iface.methods, plural),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use mimic_ir::{InterfaceDescriptor, MethodDescriptor};

    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_list_report() {
        let file = InterfaceFile::new("example.com/svc")
            .interface(InterfaceDescriptor::new("Clock").method(MethodDescriptor::new("Now")))
            .interface(InterfaceDescriptor::new("Noop"));

        let mut out = RecordingOutput::default();
        ListReport::from(&file).render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "Package: example.com/svc",
                "",
                "Interfaces (2):",
                "  - Clock (1 method)",
                "  - Noop (0 methods)",
            ]
        );
    }
}
