use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::EnvfigError;
use crate::file;
use crate::resolve::{self, ResolveInput};
use crate::types::{ExistenceCheck, LoadedConfig, SourceKind};

/// Entry point for building a config loader.
pub struct Envfig;

impl Envfig {
    pub fn builder() -> EnvfigBuilder {
        EnvfigBuilder::new()
    }
}

/// Builder for a [`ConfigLoader`].
///
/// Only [`path()`](Self::path) is required. Env overlay is off by default; when
/// enabled without [`env_vars()`](Self::env_vars), the process environment is
/// snapshotted at each [`load()`](ConfigLoader::load).
#[derive(Debug, Clone, Default)]
pub struct EnvfigBuilder {
    path: Option<PathBuf>,
    env_overlay: bool,
    env_vars: Option<Vec<(String, String)>>,
    existence_check: ExistenceCheck,
}

impl EnvfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// The config file or directory to load.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Overlay `___`-delimited env vars onto existing keys (default: `false`).
    pub fn env_overlay(mut self, enabled: bool) -> Self {
        self.env_overlay = enabled;
        self
    }

    /// Use these variables instead of the process environment.
    ///
    /// Order matters: when two variables target the same key, the later one wins.
    pub fn env_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Set what counts as an existing key (default: [`ExistenceCheck::Truthy`]).
    pub fn existence_check(mut self, check: ExistenceCheck) -> Self {
        self.existence_check = check;
        self
    }

    /// Probe the path and build the loader.
    pub fn build(self) -> Result<ConfigLoader, EnvfigError> {
        let target_path = self.path.ok_or(EnvfigError::PathRequired)?;
        let source = file::probe(&target_path)?;
        tracing::debug!(path = %target_path.display(), ?source, "Probed config source");

        Ok(ConfigLoader {
            target_path,
            source,
            env_overlay: self.env_overlay,
            env_vars: self.env_vars,
            existence_check: self.existence_check,
        })
    }

    /// Build the loader and load in one step.
    pub fn load(self) -> Result<Vec<LoadedConfig>, EnvfigError> {
        self.build()?.load()
    }
}

/// Loads one config file, or every file in a directory, and optionally overlays
/// env vars onto each.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    target_path: PathBuf,
    source: SourceKind,
    env_overlay: bool,
    env_vars: Option<Vec<(String, String)>>,
    existence_check: ExistenceCheck,
}

impl ConfigLoader {
    /// Probe `path` once and remember whether it is a file or a directory.
    ///
    /// Fails with [`EnvfigError::NotFound`] if it is neither.
    pub fn new(path: impl Into<PathBuf>, env_overlay: bool) -> Result<Self, EnvfigError> {
        Envfig::builder().path(path).env_overlay(env_overlay).build()
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn source(&self) -> SourceKind {
        self.source
    }

    pub fn is_file(&self) -> bool {
        self.source == SourceKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.source == SourceKind::Directory
    }

    pub fn env_overlay(&self) -> bool {
        self.env_overlay
    }

    pub fn existence_check(&self) -> ExistenceCheck {
        self.existence_check
    }

    /// Load every config, overlay env vars if enabled, and sort by path.
    ///
    /// Any failure (unsupported extension, unreadable file, parse error, malformed
    /// env var name) fails the whole call.
    pub fn load(&self) -> Result<Vec<LoadedConfig>, EnvfigError> {
        let sources = file::read_sources(&self.target_path, self.source)?;

        let env_vars = match (&self.env_vars, self.env_overlay) {
            (_, false) => Vec::new(),
            (Some(vars), true) => vars.clone(),
            (None, true) => process_env(),
        };

        resolve::resolve(ResolveInput {
            sources,
            env_overlay: self.env_overlay,
            env_vars,
            existence_check: self.existence_check,
        })
    }

    /// Like [`load()`](Self::load), with each config flattened to a mapping that
    /// carries its origin under a `path` key.
    ///
    /// Values keep the order of [`load()`](Self::load), which sorts by origin
    /// path. A file that defines its own top-level `path` key keeps that value,
    /// so the `path` field of an item may not match its position in the order.
    pub fn load_values(&self) -> Result<Vec<Value>, EnvfigError> {
        Ok(self
            .load()?
            .into_iter()
            .map(LoadedConfig::into_value)
            .collect())
    }

    /// Like [`load()`](Self::load), deserializing each config's data into `T`.
    pub fn load_as<T: DeserializeOwned>(&self) -> Result<Vec<(PathBuf, T)>, EnvfigError> {
        self.load()?
            .into_iter()
            .map(|config| {
                let typed = serde_json::from_value(Value::Object(config.data)).map_err(|e| {
                    EnvfigError::InvalidValue {
                        path: config.path.clone(),
                        reason: e.to_string(),
                    }
                })?;
                Ok((config.path, typed))
            })
            .collect()
    }
}

/// Snapshot the process environment, skipping variables that are not valid unicode.
fn process_env() -> Vec<(String, String)> {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
