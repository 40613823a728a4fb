//! Per-invocation generator parameters.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Mock struct name template used when none is configured.
pub const DEFAULT_MOCK_STRUCT_NAME_TEMPLATE: &str = "%sMock";

/// Parameters for generating one mock.
///
/// Missing keys decode to empty strings; [`GeneratorParams::validate`]
/// rejects the ones that must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    /// Name of the interface to mock, e.g. `StringService`.
    pub interface_name: String,

    /// Output path template. `%s` receives the interface name in snake_case,
    /// e.g. `./generated/%s_mock.go`.
    pub out_path_template: String,

    /// Import path of the package declaring the interface.
    pub source_package_path: String,

    /// Import path of the package the mock is generated into.
    pub target_package_path: String,

    /// Mock struct name template. `%s` receives the interface name.
    /// Empty means [`DEFAULT_MOCK_STRUCT_NAME_TEMPLATE`].
    pub mock_struct_name_template: String,
}

impl GeneratorParams {
    /// Decode a JSON parameter blob without validating it.
    pub fn from_json(blob: &[u8]) -> Result<Self> {
        Self::from_json_with_filename(blob, "params")
    }

    /// Decode a JSON parameter blob, naming its source in error reports.
    pub fn from_json_with_filename(blob: &[u8], filename: &str) -> Result<Self> {
        serde_json::from_slice(blob)
            .map_err(|e| Error::decode(e, &String::from_utf8_lossy(blob), filename))
    }

    /// Decode and validate a JSON parameter blob.
    pub fn decode(blob: &[u8]) -> Result<Self> {
        let params = Self::from_json(blob)?;
        params.validate()?;
        Ok(params)
    }

    /// The mock struct name template, falling back to the default.
    pub fn mock_struct_name_template(&self) -> &str {
        if self.mock_struct_name_template.is_empty() {
            DEFAULT_MOCK_STRUCT_NAME_TEMPLATE
        } else {
            &self.mock_struct_name_template
        }
    }

    /// Check that every required field is set and templates are usable.
    pub fn validate(&self) -> Result<()> {
        if self.interface_name.trim().is_empty() {
            return Err(Error::validation("interface_name must not be empty"));
        }
        if self.target_package_path.trim().is_empty() {
            return Err(Error::validation("target_package_path must not be empty"));
        }
        if self.out_path_template.trim().is_empty() {
            return Err(Error::validation("out_path_template must not be empty"));
        }
        if !self.out_path_template.contains("%s") {
            return Err(Error::validation(format!(
                "out_path_template '{}' must contain a %s placeholder",
                self.out_path_template
            )));
        }
        if !self.mock_struct_name_template.is_empty()
            && !self.mock_struct_name_template.contains("%s")
        {
            return Err(Error::validation(format!(
                "mock_struct_name_template '{}' must contain a %s placeholder",
                self.mock_struct_name_template
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> GeneratorParams {
        GeneratorParams {
            interface_name: "StringService".into(),
            out_path_template: "./generated/%s_mock.go".into(),
            source_package_path: "example.com/stringsvc".into(),
            target_package_path: "example.com/stringsvc".into(),
            mock_struct_name_template: String::new(),
        }
    }

    #[test]
    fn test_decode_full_blob() {
        let blob = br#"{
            "interface_name": "StringService",
            "out_path_template": "./generated/%s_mock.go",
            "source_package_path": "example.com/stringsvc",
            "target_package_path": "example.com/stringsvc",
            "mock_struct_name_template": ""
        }"#;
        assert_eq!(GeneratorParams::decode(blob).unwrap(), valid());
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let params = GeneratorParams::from_json(br#"{"interface_name": "Foo"}"#).unwrap();
        assert_eq!(params.interface_name, "Foo");
        assert!(params.out_path_template.is_empty());
        assert!(params.mock_struct_name_template.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let params =
            GeneratorParams::from_json(br#"{"interface_name": "Foo", "extra": true}"#).unwrap();
        assert_eq!(params.interface_name, "Foo");
    }

    #[test]
    fn test_malformed_blob_is_decode_error() {
        let err = GeneratorParams::decode(b"{not json").unwrap_err();
        assert!(matches!(*err, Error::Decode { .. }));
    }

    #[test]
    fn test_wrong_type_is_decode_error() {
        let err = GeneratorParams::decode(br#"{"interface_name": 7}"#).unwrap_err();
        assert!(matches!(*err, Error::Decode { .. }));
    }

    #[test]
    fn test_default_mock_struct_name_template() {
        assert_eq!(valid().mock_struct_name_template(), "%sMock");

        let custom = GeneratorParams {
            mock_struct_name_template: "My%sDouble".into(),
            ..valid()
        };
        assert_eq!(custom.mock_struct_name_template(), "My%sDouble");
    }

    #[test]
    fn test_validate_requires_interface_name() {
        let params = GeneratorParams {
            interface_name: " ".into(),
            ..valid()
        };
        let err = params.validate().unwrap_err();
        assert_eq!(err.to_string(), "interface_name must not be empty");
    }

    #[test]
    fn test_validate_requires_placeholder_in_out_path() {
        let params = GeneratorParams {
            out_path_template: "./mock.go".into(),
            ..valid()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_requires_placeholder_in_custom_name() {
        let params = GeneratorParams {
            mock_struct_name_template: "FakeService".into(),
            ..valid()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_allows_empty_source_package() {
        let params = GeneratorParams {
            source_package_path: String::new(),
            ..valid()
        };
        assert!(params.validate().is_ok());
    }
}
