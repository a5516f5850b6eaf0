//! Pick a decoder by file extension and decode file contents into a mapping.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{EnvfigError, ParseError};
use crate::types::ConfigFormat;

/// Detect the format of `path` from the text after the last `.` in its file name.
///
/// A name without a `.` is unsupported; `.json` counts as a json file.
pub fn detect_format(path: &Path) -> Result<ConfigFormat, EnvfigError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let extension = file_name
        .rsplit_once('.')
        .map_or(file_name.as_ref(), |(_, ext)| ext);

    ConfigFormat::from_extension(extension).ok_or_else(|| EnvfigError::UnsupportedFormat {
        path: path.to_path_buf(),
        extension: extension.to_string(),
    })
}

/// Decode `content` and require a mapping at the root.
///
/// YAML merge keys (`<<: *anchor`) are expanded before conversion. YAML `.nan`
/// and `.inf` have no JSON counterpart and are rejected rather than turned into
/// `null`.
pub fn decode(
    format: ConfigFormat,
    content: &str,
    path: &Path,
) -> Result<Map<String, Value>, EnvfigError> {
    let value: Value = match format {
        ConfigFormat::Json => serde_json::from_str::<Value>(content).map_err(ParseError::from),
        ConfigFormat::Yaml => decode_yaml(content),
    }
    .map_err(|source| EnvfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(EnvfigError::UnexpectedType {
            path: path.to_path_buf(),
            found: type_name(&other),
        }),
    }
}

fn decode_yaml(content: &str) -> Result<Value, ParseError> {
    let mut doc: serde_yaml::Value = serde_yaml::from_str(content)?;
    doc.apply_merge()?;
    if let Some(key) = find_non_finite(&doc, "") {
        return Err(ParseError::NonFinite { key });
    }
    Ok(serde_json::to_value(doc)?)
}

/// Dotted location of the first NaN or infinite number in `value`, if any.
fn find_non_finite(value: &serde_yaml::Value, at: &str) -> Option<String> {
    use serde_yaml::Value as Yaml;

    let child = |key: &str| {
        if at.is_empty() {
            key.to_string()
        } else {
            format!("{at}.{key}")
        }
    };

    match value {
        Yaml::Number(n) if n.is_nan() || n.is_infinite() => Some(at.to_string()),
        Yaml::Sequence(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| find_non_finite(item, &child(&i.to_string()))),
        Yaml::Mapping(map) => map.iter().find_map(|(k, v)| {
            let key = match k {
                Yaml::String(s) => s.clone(),
                Yaml::Number(n) => n.to_string(),
                Yaml::Bool(b) => b.to_string(),
                _ => "?".to_string(),
            };
            find_non_finite(v, &child(&key))
        }),
        Yaml::Tagged(tagged) => find_non_finite(&tagged.value, at),
        _ => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
