//! Core resolution pipeline: decode, overlay, sort.
//!
//! Operates on pre-loaded data (`ResolveInput`) with no I/O, making the full
//! pipeline testable with synthetic inputs. Steps:
//!
//! 1. Decode each source file into a mapping
//! 2. If overlay is enabled, normalize env var names into key paths (once)
//! 3. Merge one update tree per env var into every config, existing keys only
//! 4. Sort the configs by path

use serde_json::{Map, Value};

use crate::codec;
use crate::env::{self, EnvOverride};
use crate::error::EnvfigError;
use crate::file::SourceFile;
use crate::merge::merge_existing;
use crate::tree::build_update_tree;
use crate::types::{ExistenceCheck, LoadedConfig};

/// All pre-loaded data needed to resolve configs. No I/O happens here.
pub struct ResolveInput {
    /// Files in listing order.
    pub sources: Vec<SourceFile>,
    /// Whether env vars are overlaid onto each config.
    pub env_overlay: bool,
    /// Raw environment variable pairs (pass `std::env::vars().collect()` or synthetic data).
    pub env_vars: Vec<(String, String)>,
    /// What counts as an existing key when overlaying.
    pub existence_check: ExistenceCheck,
}

/// Resolve configs from pre-loaded inputs.
///
/// Any decode failure or malformed env var name fails the whole call.
pub fn resolve(input: ResolveInput) -> Result<Vec<LoadedConfig>, EnvfigError> {
    let mut configs = input
        .sources
        .into_iter()
        .map(|source| {
            let data = codec::decode(source.format, &source.content, &source.path)?;
            Ok(LoadedConfig {
                path: source.path,
                data,
            })
        })
        .collect::<Result<Vec<_>, EnvfigError>>()?;

    if input.env_overlay {
        let overrides = env::extract_key_paths(input.env_vars)?;
        for config in &mut configs {
            tracing::debug!(
                path = %config.path.display(),
                candidates = overrides.len(),
                "Applying env overlay"
            );
            apply_overrides(&mut config.data, &overrides, input.existence_check);
        }
    }

    configs.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));
    Ok(configs)
}

/// Merge each override into `config`, in order. Later overrides of the same key win.
///
/// The key path is dot-joined and split again, so a `.` inside a name segment
/// (`HOSTS___EXAMPLE.COM`) addresses one more nesting level.
pub fn apply_overrides(
    config: &mut Map<String, Value>,
    overrides: &[EnvOverride],
    check: ExistenceCheck,
) {
    for ov in overrides {
        let update = build_update_tree(&ov.path.dotted(), Value::String(ov.value.clone()));
        merge_existing(config, update, check);
    }
}
