use serde_json::{Map, Value};

use crate::types::ExistenceCheck;

/// Merge `update` into `target` in place, touching only keys that already exist.
///
/// - Both sides hold a mapping for the key: recurse.
/// - The key exists and the update is not a mapping: the update's value wins.
/// - Anything else is dropped: keys missing from `target` (or falsy under
///   [`ExistenceCheck::Truthy`]) are never created, and an update mapping never
///   replaces a non-mapping target value.
///
/// Returns `target` for chaining.
pub fn merge_existing<'a>(
    target: &'a mut Map<String, Value>,
    update: Map<String, Value>,
    check: ExistenceCheck,
) -> &'a mut Map<String, Value> {
    for (key, update_val) in update {
        let Some(existing) = target.get_mut(&key) else {
            tracing::trace!(key = %key, "Skipping update for absent key");
            continue;
        };
        if !exists(existing, check) {
            tracing::trace!(key = %key, "Skipping update for falsy key");
            continue;
        }

        match (existing, update_val) {
            (Value::Object(existing_map), Value::Object(update_map)) => {
                merge_existing(existing_map, update_map, check);
            }
            (_, Value::Object(_)) => {
                tracing::trace!(key = %key, "Skipping nested update for non-mapping value");
            }
            (existing, update_val) => {
                *existing = update_val;
            }
        }
    }
    target
}

fn exists(value: &Value, check: ExistenceCheck) -> bool {
    match check {
        ExistenceCheck::Present => true,
        ExistenceCheck::Truthy => is_truthy(value),
    }
}

/// Emptiness-based truthiness: `null`, `false`, zero, `""`, `[]` and `{}` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(m) => m,
            other => panic!("Expected object, got {other}"),
        }
    }

    fn merged(target: Value, update: Value) -> Value {
        merged_with(target, update, ExistenceCheck::Truthy)
    }

    fn merged_with(target: Value, update: Value, check: ExistenceCheck) -> Value {
        let mut target = map(target);
        merge_existing(&mut target, map(update), check);
        Value::Object(target)
    }

    #[test]
    fn existing_scalar_overwritten() {
        assert_eq!(merged(json!({"a": 1}), json!({"a": 2})), json!({"a": 2}));
    }

    #[test]
    fn absent_nested_key_not_introduced() {
        assert_eq!(
            merged(json!({"a": {"b": 1}}), json!({"a": {"c": 2}})),
            json!({"a": {"b": 1}})
        );
    }

    #[test]
    fn absent_top_level_key_not_introduced() {
        assert_eq!(
            merged(json!({"a": 1}), json!({"z": "new"})),
            json!({"a": 1})
        );
    }

    #[test]
    fn nested_leaf_replaced_siblings_untouched() {
        let target = json!({
            "key-1": {"child-key-1": {"grandchild-key-1": "value-1", "other": "keep"}},
            "key-2": {"child-key-2": {"grandchild-key-2": "value-2"}}
        });
        let update = json!({"key-1": {"child-key-1": {"grandchild-key-1": "foo"}}});
        assert_eq!(
            merged(target, update),
            json!({
                "key-1": {"child-key-1": {"grandchild-key-1": "foo", "other": "keep"}},
                "key-2": {"child-key-2": {"grandchild-key-2": "value-2"}}
            })
        );
    }

    #[test]
    fn scalar_update_replaces_whole_subtree() {
        assert_eq!(
            merged(json!({"key-1": {"child": "x"}, "key-2": 2}), json!({"key-1": "foo"})),
            json!({"key-1": "foo", "key-2": 2})
        );
    }

    #[test]
    fn zero_is_falsy_and_kept() {
        assert_eq!(merged(json!({"a": 0}), json!({"a": 5})), json!({"a": 0}));
    }

    #[test]
    fn other_falsy_values_kept() {
        let target = json!({"s": "", "b": false, "n": null, "f": 0.0, "l": [], "m": {}});
        let update = json!({"s": "x", "b": "x", "n": "x", "f": "x", "l": "x", "m": {"k": "x"}});
        assert_eq!(merged(target.clone(), update), target);
    }

    #[test]
    fn present_mode_overwrites_falsy_values() {
        assert_eq!(
            merged_with(json!({"a": 0, "b": false}), json!({"a": 5, "b": "on"}), ExistenceCheck::Present),
            json!({"a": 5, "b": "on"})
        );
    }

    #[test]
    fn present_mode_still_never_adds_keys() {
        assert_eq!(
            merged_with(json!({"a": {}}), json!({"a": {"new": 1}, "b": 2}), ExistenceCheck::Present),
            json!({"a": {}})
        );
    }

    #[test]
    fn nested_update_into_scalar_discarded() {
        assert_eq!(
            merged(json!({"a": "flat"}), json!({"a": {"b": "x"}})),
            json!({"a": "flat"})
        );
    }

    #[test]
    fn nested_update_into_sequence_discarded() {
        assert_eq!(
            merged(json!({"a": [1, 2]}), json!({"a": {"b": "x"}})),
            json!({"a": [1, 2]})
        );
    }

    #[test]
    fn sequence_replaced_as_leaf() {
        assert_eq!(
            merged(json!({"a": [1, 2]}), json!({"a": "x"})),
            json!({"a": "x"})
        );
    }

    #[test]
    fn empty_update_returns_target() {
        let target = json!({"a": {"b": 1}});
        assert_eq!(merged(target.clone(), json!({})), target);
    }

    #[test]
    fn returns_same_target() {
        let mut target = map(json!({"a": 1}));
        let returned = merge_existing(&mut target, map(json!({"a": 2})), ExistenceCheck::Truthy);
        returned.insert("b".into(), json!(3));
        assert_eq!(Value::Object(target), json!({"a": 2, "b": 3}));
    }

    #[test]
    fn truthiness_table() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(-0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!(0.5)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([0])));
        assert!(is_truthy(&json!({"k": null})));
    }
}
