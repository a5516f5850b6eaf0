//! Load JSON/YAML configuration from a file or a directory, and overlay
//! environment variables onto keys that already exist.
//!
//! ```ignore
//! let configs = envfig::ConfigLoader::new("configs/", true)?.load()?;
//! for config in &configs {
//!     println!("{}: {:?}", config.path.display(), config.data);
//! }
//! ```
//!
//! That call lists `configs/`, decodes every `*.json`, `*.yml` and `*.yaml`
//! entry, overlays matching `SECTION___KEY` environment variables onto each
//! one, and returns the results sorted by path.
//!
//! # Sources
//!
//! The target path is probed once, when the loader is built:
//!
//! - **File**: exactly one config is loaded.
//! - **Directory**: every immediate entry is loaded; subdirectories are not
//!   descended into. Entry names are joined onto the directory path as-is, and
//!   the results are sorted by that path.
//!
//! A path that is neither fails with [`EnvfigError::NotFound`]. Every entry must
//! carry one of the recognized extensions (`json`, `yml`, `yaml`); anything else
//! fails the whole load with [`EnvfigError::UnsupportedFormat`] rather than being
//! skipped. Each document must decode to a mapping.
//!
//! # Environment overlay
//!
//! Nesting levels in a variable name are separated by `___` (triple
//! underscore). Segments are lowercased and single `_` become `-`, so that
//! shell-friendly names reach hyphenated config keys:
//!
//! | Env var | Key path |
//! |---------|----------|
//! | `SERVER___HOST` | `server.host` |
//! | `DUMMY_1___CFG___FOO` | `dummy-1.cfg.foo` |
//! | `KEY_1___` | `key-1` |
//!
//! Variables without `___` are ignored. A name with no segments at all (`___`)
//! fails the load with [`EnvfigError::EmptyKeyPath`].
//!
//! Values are always strings. The same set of variables is applied to every
//! loaded file; there is no per-file scoping.
//!
//! # Overwrite-only merge
//!
//! The overlay can only **replace** values. It never adds a key that the file
//! does not already define, and it never replaces a leaf value with a nested
//! mapping. A variable naming an unknown key is silently dropped.
//!
//! By default a key only counts as existing if its value is non-empty
//! ([`ExistenceCheck::Truthy`]): `null`, `false`, `0`, `""`, `[]` and `{}` are
//! treated as absent and cannot be overridden. Switch to
//! [`ExistenceCheck::Present`] to allow overriding any key present in the file.
//!
//! # Builder
//!
//! [`ConfigLoader::new(path, env_overlay)`](ConfigLoader::new) covers the common
//! case. [`Envfig::builder()`] adds the rest: an explicit variable set instead of
//! the process environment (handy in tests), and the existence check.
//!
//! ```ignore
//! let configs = envfig::Envfig::builder()
//!     .path("config.yml")
//!     .env_overlay(true)
//!     .env_vars([("SERVER___PORT", "9090")])
//!     .existence_check(envfig::ExistenceCheck::Present)
//!     .load()?;
//! ```
//!
//! # Logging
//!
//! The crate never prints. Probing, directory listing and overlays emit
//! `tracing` events at `debug`; dropped updates are reported at `trace`.
//!
//! # Clap adapter
//!
//! With the `clap` feature (on by default), [`LoadArgs`] can be flattened into a
//! clap derive struct and turned into a builder with
//! [`into_builder()`](LoadArgs::into_builder).

pub mod error;
pub mod types;

mod builder;
#[cfg(feature = "clap")]
mod cli;
mod codec;
mod env;
mod file;
pub(crate) mod merge;
mod resolve;
mod tree;

#[cfg(test)]
mod fixtures;

pub use builder::{ConfigLoader, Envfig, EnvfigBuilder};
#[cfg(feature = "clap")]
pub use cli::LoadArgs;
pub use env::{EnvOverride, KeyPath, extract_key_paths};
pub use error::{EnvfigError, ParseError};
pub use merge::{is_truthy, merge_existing};
pub use tree::build_update_tree;
pub use types::{ConfigFormat, ExistenceCheck, LoadedConfig, SourceKind};
