//! Turn a key path and a value into a single-branch update mapping.
//!
//! `("key-1.child-key-1", "foo")` becomes `{"key-1": {"child-key-1": "foo"}}`,
//! ready to be merged into a loaded config by [`merge_existing`](crate::merge::merge_existing).

use serde_json::{Map, Value};

/// Build a nested update mapping from a dot-joined key path.
///
/// Splits on the first `.` and recurses on the remainder, so the result has
/// exactly one leaf at a depth equal to the number of segments.
pub fn build_update_tree(keys: &str, value: Value) -> Map<String, Value> {
    let mut tree = Map::new();
    match keys.split_once('.') {
        Some((key, rest)) => {
            tree.insert(key.to_string(), Value::Object(build_update_tree(rest, value)));
        }
        None => {
            tree.insert(keys.to_string(), value);
        }
    }
    tree
}
