use std::fmt;

use crate::error::EnvfigError;

/// Separates nesting levels in an environment variable name.
pub const SEPARATOR: &str = "___";

/// A normalized path into a configuration mapping.
///
/// Built from an environment variable name: split on `___`, empty segments
/// dropped, lowercased, single `_` turned into `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Normalize an environment variable name into a key path.
    ///
    /// `DUMMY_1___CFG___FOO` becomes `dummy-1.cfg.foo`. The result may be empty
    /// (e.g. for `___`); callers decide whether that is an error.
    pub fn from_env_name(name: &str) -> Self {
        let segments = name
            .split(SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase().replace('_', "-"))
            .collect();
        KeyPath(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Dot-joined form, e.g. `key-1.child-key-1`.
    pub fn dotted(&self) -> String {
        self.0.join(".")
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dotted())
    }
}

/// An environment variable selected for overlay, with its normalized key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvOverride {
    pub var: String,
    pub path: KeyPath,
    pub value: String,
}

/// Select every variable whose name contains `___` and normalize its name.
///
/// Input order is preserved, so a later variable targeting the same key wins
/// once the overrides are applied in sequence. A name that normalizes to an
/// empty path (`___`, `______`) is rejected.
///
/// Takes an iterator so tests can pass synthetic data instead of `std::env::vars()`.
pub fn extract_key_paths(
    vars: impl IntoIterator<Item = (String, String)>,
) -> Result<Vec<EnvOverride>, EnvfigError> {
    let mut overrides = Vec::new();

    for (var, value) in vars {
        if !var.contains(SEPARATOR) {
            continue;
        }

        let path = KeyPath::from_env_name(&var);
        if path.is_empty() {
            return Err(EnvfigError::EmptyKeyPath { var });
        }

        overrides.push(EnvOverride { var, path, value });
    }

    Ok(overrides)
}
