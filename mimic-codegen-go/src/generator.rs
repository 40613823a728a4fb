use mimic_codegen::{Diagnostic, GenerateResult, GeneratedFile};
use mimic_core::Version;
use mimic_ir::{InterfaceDescriptor, InterfaceFile};
use mimic_params::GeneratorParams;

use crate::{
    GoFile,
    error::{Error, Result},
    imports::package_name,
    naming::{mock_struct_name, output_path},
    structure::synthesize_structure,
    type_renderer::TypeRenderer,
    validate::validate,
};

/// Name stamped into the provenance header.
pub const GENERATOR_NAME: &str = "mimic";
/// Version stamped into the provenance header.
pub const GENERATOR_VERSION: Version = Version::new(1, 0, 0);

/// Comment placed above the package clause of every generated file.
pub fn provenance_header() -> String {
    format!(
        "Code generated by {} v{}. DO NOT EDIT.",
        GENERATOR_NAME, GENERATOR_VERSION
    )
}

/// Decode a JSON interface descriptor file.
pub fn decode_descriptor(bytes: &[u8]) -> Result<InterfaceFile> {
    serde_json::from_slice(bytes).map_err(Error::descriptor)
}

/// Go testify mock generator.
///
/// Generation is a pure function of the parameters and the descriptor:
/// the same input always yields byte-identical output.
#[derive(Debug, Clone)]
pub struct Generator {
    params: GeneratorParams,
}

impl Generator {
    pub fn new(params: GeneratorParams) -> Self {
        Self { params }
    }

    /// Create a generator from a JSON parameter blob.
    pub fn from_json(blob: &[u8]) -> Result<Self> {
        GeneratorParams::decode(blob)
            .map(Self::new)
            .map_err(Error::params)
    }

    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    /// Generate the mock for the configured interface of `file`.
    pub fn generate(&self, file: &InterfaceFile) -> Result<GenerateResult> {
        self.params.validate().map_err(Error::params)?;

        let interface = file
            .find_interface(&self.params.interface_name)
            .ok_or_else(|| {
                Error::interface_not_found(&self.params.interface_name, file.interface_names())
            })?;

        let unit = self.unit(interface)?;
        let path = output_path(&self.params);
        tracing::debug!(path = %path, "generated mock");

        Ok(GenerateResult {
            files: vec![GeneratedFile::new(path, unit.render())],
        })
    }

    /// Build the generation unit for `interface` without serializing it.
    pub fn unit(&self, interface: &InterfaceDescriptor) -> Result<GoFile> {
        self.check(interface)?;

        let mock_name = mock_struct_name(&self.params);
        tracing::debug!(
            interface = %interface.name,
            mock = %mock_name,
            methods = interface.methods.len(),
            "synthesizing mock"
        );

        let mut renderer = TypeRenderer::new(
            &self.params.source_package_path,
            &self.params.target_package_path,
        );
        let decls = synthesize_structure(&mut renderer, interface, &mock_name);
        let imports = renderer.into_imports();

        Ok(GoFile::new(package_name(&self.params.target_package_path))
            .header(provenance_header())
            .imports(imports.specs())
            .decls(decls))
    }

    /// Validate `interface`, logging findings.
    ///
    /// Returns the non-fatal diagnostics, or the first error as
    /// [`Error::MalformedTypeGraph`].
    pub fn check(&self, interface: &InterfaceDescriptor) -> Result<Vec<Diagnostic>> {
        let diags = validate(interface);

        if let Some(err) = diags.iter().find(|d| d.severity.is_error()) {
            return Err(Error::malformed(
                err.location.as_deref().unwrap_or(interface.name.as_str()),
                &err.message,
            ));
        }

        for diag in &diags {
            let location = diag.location.as_deref().unwrap_or_default();
            if diag.severity.is_warning() {
                tracing::warn!(location, "{}", diag.message);
            } else {
                tracing::debug!(location, "{}", diag.message);
            }
        }

        Ok(diags)
    }
}

#[cfg(test)]
mod tests {
    use mimic_ir::{MethodDescriptor, ParamDescriptor, TypeDescriptor};

    use super::*;

    const PKG: &str = "example.com/stringsvc";

    fn params() -> GeneratorParams {
        GeneratorParams {
            interface_name: "StringService".into(),
            out_path_template: "./generated/%s_mock.go".into(),
            source_package_path: PKG.into(),
            target_package_path: PKG.into(),
            mock_struct_name_template: String::new(),
        }
    }

    fn string_service() -> InterfaceFile {
        InterfaceFile::new(PKG).interface(
            InterfaceDescriptor::new("StringService").method(
                MethodDescriptor::new("Concat")
                    .param(ParamDescriptor::new("a", TypeDescriptor::string()))
                    .param(ParamDescriptor::new("b", TypeDescriptor::string()))
                    .result(ParamDescriptor::unnamed(TypeDescriptor::string())),
            ),
        )
    }

    fn content(result: &GenerateResult) -> String {
        assert_eq!(result.files.len(), 1);
        result.files[0].content_str().into_owned()
    }

    #[test]
    fn test_string_service_end_to_end() {
        let result = Generator::new(params()).generate(&string_service()).unwrap();
        assert_eq!(result.files[0].path, "./generated/string_service_mock.go");
        assert_eq!(
            content(&result),
            "\
// Code generated by mimic v1.0.0. DO NOT EDIT.

package stringsvc

import (
\t\"github.com/stretchr/testify/mock\"
)

// StringServiceMock is an autogenerated mock type for the StringService interface.
type StringServiceMock struct {
\tmock.Mock
}

// Concat provides a mock function for method Concat of interface StringService.
func (_m *StringServiceMock) Concat(a string, b string) string {
\tret := _m.Called(a, b)

\tvar r0 string
\tif rf, ok := ret.Get(0).(func(string, string) string); ok {
\t\tr0 = rf(a, b)
\t} else {
\t\tr0 = ret.Get(0).(string)
\t}

\treturn r0
}
"
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = Generator::new(params());
        let first = generator.generate(&string_service()).unwrap();
        let second = generator.generate(&string_service()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_methods() {
        let file = InterfaceFile::new(PKG).interface(InterfaceDescriptor::new("StringService"));
        let text = content(&Generator::new(params()).generate(&file).unwrap());
        assert!(text.ends_with("type StringServiceMock struct {\n\tmock.Mock\n}\n"));
        assert!(!text.contains("func "));
    }

    #[test]
    fn test_custom_struct_name() {
        let mut p = params();
        p.mock_struct_name_template = "Fake%s".into();
        let text = content(&Generator::new(p).generate(&string_service()).unwrap());
        assert!(text.contains("type FakeStringService struct {"));
        assert!(text.contains("func (_m *FakeStringService) Concat("));
    }

    #[test]
    fn test_mock_in_other_package_qualifies_source_types() {
        let mut p = params();
        p.target_package_path = format!("{}/mocks", PKG);
        let file = InterfaceFile::new(PKG).interface(
            InterfaceDescriptor::new("StringService").method(
                MethodDescriptor::new("Get")
                    .result(ParamDescriptor::unnamed(TypeDescriptor::pointer(
                        TypeDescriptor::named(PKG, "Entry"),
                    )))
                    .result(ParamDescriptor::unnamed(TypeDescriptor::named(
                        format!("{}/mocks", PKG),
                        "Local",
                    ))),
            ),
        );
        let text = content(&Generator::new(p).generate(&file).unwrap());
        assert!(text.contains("package mocks\n"));
        assert!(text.contains("\t\"example.com/stringsvc\"\n"));
        assert!(text.contains("func (_m *StringServiceMock) Get() (*stringsvc.Entry, Local) {"));
    }

    #[test]
    fn test_interface_not_found() {
        let mut p = params();
        p.interface_name = "Missing".into();
        let err = Generator::new(p).generate(&string_service()).unwrap_err();
        assert!(matches!(
            *err,
            Error::InterfaceNotFound { ref name, ref available }
                if name == "Missing" && available == "StringService"
        ));
    }

    #[test]
    fn test_malformed_descriptor_rejected() {
        let file = InterfaceFile::new(PKG).interface(
            InterfaceDescriptor::new("StringService").method(
                MethodDescriptor::new("Get")
                    .result(ParamDescriptor::unnamed(TypeDescriptor::named(PKG, ""))),
            ),
        );
        let err = Generator::new(params()).generate(&file).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed type graph at StringService.Get.results[0]: named type has an empty name"
        );
    }

    #[test]
    fn test_invalid_params_rejected() {
        let mut p = params();
        p.out_path_template = "mock.go".into();
        let err = Generator::new(p).generate(&string_service()).unwrap_err();
        assert!(matches!(*err, Error::Params(_)));
    }

    #[test]
    fn test_from_json() {
        let generator = Generator::from_json(
            br#"{
                "interface_name": "StringService",
                "out_path_template": "%s.go",
                "target_package_path": "example.com/stringsvc"
            }"#,
        )
        .unwrap();
        assert_eq!(generator.params().interface_name, "StringService");

        let err = Generator::from_json(b"{not json").unwrap_err();
        assert!(matches!(*err, Error::Params(mimic_params::Error::Decode { .. })));
    }

    #[test]
    fn test_decode_descriptor() {
        let file = decode_descriptor(
            br#"{
                "package_path": "example.com/stringsvc",
                "interfaces": [{"name": "StringService", "methods": []}]
            }"#,
        )
        .unwrap();
        assert_eq!(file.interface_names(), vec!["StringService"]);

        for bad in [&br#"{"interfaces": 7}"#[..], &b"{"[..]] {
            let err = decode_descriptor(bad).unwrap_err();
            assert!(matches!(*err, Error::Descriptor { .. }));
        }
    }

    #[test]
    fn test_check_returns_warnings() {
        let iface = InterfaceDescriptor::new("Svc").method(
            MethodDescriptor::new("Get")
                .result(ParamDescriptor::new("n", TypeDescriptor::builtin("int")))
                .result(ParamDescriptor::unnamed(TypeDescriptor::error())),
        );
        let diags = Generator::new(params()).check(&iface).unwrap();
        assert_eq!(diags.len(), 1);
        assert!(diags[0].severity.is_warning());
    }
}
