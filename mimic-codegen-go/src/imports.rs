//! Import resolution for qualified type references.

use indexmap::IndexMap;
use mimic_codegen::builder::{CodeFragment, Renderable};

use crate::naming::GO_NAMING;

/// Import path of the testify mock package every mock embeds.
pub const MOCK_PACKAGE: &str = "github.com/stretchr/testify/mock";

/// Derive a package identifier from an import path.
///
/// Uses the last path segment, skipping a trailing `vN` major-version
/// segment. A `go-` prefix and a `.vN` suffix are dropped, the result is
/// lower-cased and everything but ASCII letters and digits is removed.
///
/// ```
/// use mimic_codegen_go::package_name;
///
/// assert_eq!(package_name("github.com/stretchr/testify/mock"), "mock");
/// assert_eq!(package_name("github.com/go-redis/redis/v9"), "redis");
/// assert_eq!(package_name("gopkg.in/yaml.v3"), "yaml");
/// ```
pub fn package_name(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let segment = match segments.as_slice() {
        [.., prev, last] if is_major_version(last) => *prev,
        [.., last] => *last,
        [] => "",
    };

    let segment = segment.strip_prefix("go-").unwrap_or(segment);
    let segment = match segment.rsplit_once('.') {
        Some((base, version)) if is_major_version(version) => base,
        _ => segment,
    };

    let name: String = segment
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("pkg{}", name)
    } else {
        GO_NAMING.safe_name(&name)
    }
}

fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

/// A single import line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub path: String,
    /// Set only when the alias differs from the last path segment.
    pub alias: Option<String>,
}

impl ImportSpec {
    fn format(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} \"{}\"", alias, self.path),
            None => format!("\"{}\"", self.path),
        }
    }
}

impl Renderable for ImportSpec {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.format())]
    }
}

/// The set of packages referenced by one generated file.
///
/// Aliases are assigned in first-use order, so the same descriptor always
/// yields the same aliases.
#[derive(Debug, Clone, Default)]
pub struct Imports {
    aliases: IndexMap<String, String>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias for `path`, registering the import on first use.
    pub fn alias(&mut self, path: &str) -> String {
        if let Some(alias) = self.aliases.get(path) {
            return alias.clone();
        }

        let base = package_name(path);
        let mut alias = base.clone();
        let mut n = 1;
        while self.aliases.values().any(|a| *a == alias) {
            alias = format!("{}{}", base, n);
            n += 1;
        }

        self.aliases.insert(path.to_string(), alias.clone());
        alias
    }

    /// Alias for an already registered path.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.aliases.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Import lines sorted by path.
    pub fn specs(&self) -> Vec<ImportSpec> {
        let mut specs: Vec<ImportSpec> = self
            .aliases
            .iter()
            .map(|(path, alias)| {
                let last = path.rsplit('/').next().unwrap_or(path);
                ImportSpec {
                    path: path.clone(),
                    alias: (alias != last).then(|| alias.clone()),
                }
            })
            .collect();
        specs.sort_by(|a, b| a.path.cmp(&b.path));
        specs
    }
}
