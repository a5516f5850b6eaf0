//! Shared types: what a source path is, how files are decoded, how the overlay
//! decides that a key exists, and what a load returns.

use std::path::PathBuf;

use serde_json::{Map, Value};

/// What the target path turned out to be when the loader was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Load exactly one file.
    File,
    /// Load every immediate entry of a directory (no recursion).
    Directory,
}

/// Recognized config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Map a file extension to a format. Matching is case-sensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "json" => Some(ConfigFormat::Json),
            "yml" | "yaml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }
}

/// How the overlay decides whether a target key "exists" and may be overwritten.
///
/// - [`Truthy`](ExistenceCheck::Truthy) (default): the key must hold a non-empty
///   value. `null`, `false`, `0`, `""`, `[]` and `{}` all count as absent, so env
///   vars can never override them.
/// - [`Present`](ExistenceCheck::Present): any key present in the mapping can be
///   overwritten, whatever its value.
///
/// Neither mode ever adds a key that is not already in the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExistenceCheck {
    #[default]
    Truthy,
    Present,
}

/// One loaded configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    /// Where the data came from. Directory entries are `{dir}/{entry_name}`.
    pub path: PathBuf,
    /// The decoded (and possibly overlaid) mapping.
    pub data: Map<String, Value>,
}

impl LoadedConfig {
    /// Flatten into a single mapping with the origin injected as a leading `path` key.
    ///
    /// A `path` key in the file itself takes precedence over the injected one.
    pub fn into_value(self) -> Value {
        let mut out = Map::with_capacity(self.data.len() + 1);
        out.insert(
            "path".to_string(),
            Value::String(self.path.to_string_lossy().into_owned()),
        );
        for (key, value) in self.data {
            out.insert(key, value);
        }
        Value::Object(out)
    }

    /// Same as [`into_value`](Self::into_value), without consuming `self`.
    pub fn to_value(&self) -> Value {
        self.clone().into_value()
    }
}
