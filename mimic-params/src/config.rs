//! Batch configuration (`mimic.toml`).
//!
//! ```toml
//! [defaults]
//! source_package_path = "example.com/svc"
//! target_package_path = "example.com/svc/mocks"
//! out_path_template = "./mocks/%s_mock.go"
//!
//! [[mocks]]
//! descriptor = "descriptors/svc.json"
//! interface_name = "StringService"
//! ```

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{Error, GeneratorParams, Result};

/// Generator parameters where every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialParams {
    interface_name: Option<String>,
    out_path_template: Option<String>,
    source_package_path: Option<String>,
    target_package_path: Option<String>,
    mock_struct_name_template: Option<String>,
}

impl PartialParams {
    /// Fill unset fields from `defaults`.
    fn or(self, defaults: &PartialParams) -> GeneratorParams {
        let pick = |own: Option<String>, fallback: &Option<String>| {
            own.or_else(|| fallback.clone()).unwrap_or_default()
        };
        GeneratorParams {
            interface_name: pick(self.interface_name, &defaults.interface_name),
            out_path_template: pick(self.out_path_template, &defaults.out_path_template),
            source_package_path: pick(self.source_package_path, &defaults.source_package_path),
            target_package_path: pick(self.target_package_path, &defaults.target_package_path),
            mock_struct_name_template: pick(
                self.mock_struct_name_template,
                &defaults.mock_struct_name_template,
            ),
        }
    }
}

// Fields are spelled out rather than flattened: serde ignores
// `deny_unknown_fields` through `flatten`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMock {
    descriptor: PathBuf,
    interface_name: Option<String>,
    out_path_template: Option<String>,
    source_package_path: Option<String>,
    target_package_path: Option<String>,
    mock_struct_name_template: Option<String>,
}

impl RawMock {
    fn split(self) -> (PathBuf, PartialParams) {
        let params = PartialParams {
            interface_name: self.interface_name,
            out_path_template: self.out_path_template,
            source_package_path: self.source_package_path,
            target_package_path: self.target_package_path,
            mock_struct_name_template: self.mock_struct_name_template,
        };
        (self.descriptor, params)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    defaults: PartialParams,
    #[serde(default)]
    mocks: Vec<RawMock>,
}

/// One mock to generate: where its descriptor lives and how to generate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockEntry {
    /// Descriptor path, as written in the config.
    pub descriptor: PathBuf,
    /// Fully resolved parameters (defaults applied, validated).
    pub params: GeneratorParams,
}

/// Parsed `mimic.toml` content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchConfig {
    pub mocks: Vec<MockEntry>,
}

impl BatchConfig {
    /// Parse a config, naming its source in error reports.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let raw: RawConfig =
            toml::from_str(content).map_err(|e| Error::config(e, content, filename))?;

        let mut mocks = Vec::with_capacity(raw.mocks.len());
        for (i, mock) in raw.mocks.into_iter().enumerate() {
            let (descriptor, params) = mock.split();
            let params = params.or(&raw.defaults);
            params.validate().map_err(|e| {
                Error::validation(format!("{}: mocks[{}]: {}", filename, i, e))
            })?;
            mocks.push(MockEntry { descriptor, params });
        }

        Ok(Self { mocks })
    }

    /// Returns true if no mocks are configured.
    pub fn is_empty(&self) -> bool {
        self.mocks.is_empty()
    }
}

impl FromStr for BatchConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "mimic.toml")
    }
}

/// A mimic.toml file and its parsed config.
pub struct MimicToml {
    path: PathBuf,
    config: BatchConfig,
}

impl MimicToml {
    /// Open and parse a mimic.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = BatchConfig::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, config })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed config.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Resolve a descriptor path relative to the directory of this file.
    pub fn resolve(&self, descriptor: &Path) -> PathBuf {
        if descriptor.is_absolute() {
            return descriptor.to_path_buf();
        }
        match self.path.parent() {
            Some(dir) => dir.join(descriptor),
            None => descriptor.to_path_buf(),
        }
    }
}
