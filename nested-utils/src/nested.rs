//! Traversal of nested JSON objects along a key path.

use serde_json::Value;
use thiserror::Error;

/// A key in the path was absent at its level.
///
/// Also raised when the value reached so far is not an object, since such a
/// value has no keys at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{key}'")]
pub struct KeyError {
    key: String,
}

impl KeyError {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The offending key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Descend into `nested_map` one key of `path` at a time.
///
/// Returns the value found at the end of the path. The first key that is
/// missing (or that is applied to a non-object value) stops the walk with a
/// [`KeyError`] carrying that key. An empty path returns `nested_map` itself.
pub fn access_nested_map<'a, K: AsRef<str>>(
    nested_map: &'a Value,
    path: &[K],
) -> Result<&'a Value, KeyError> {
    let mut current = nested_map;
    for key in path {
        let key = key.as_ref();
        current = current
            .as_object()
            .and_then(|map| map.get(key))
            .ok_or_else(|| KeyError::new(key))?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn returns_value_at_path() {
        let cases = [
            (json!({"a": 1}), vec!["a"], json!(1)),
            (json!({"a": {"b": 2}}), vec!["a"], json!({"b": 2})),
            (json!({"a": {"b": 2}}), vec!["a", "b"], json!(2)),
        ];
        for (idx, (nested_map, path, expected)) in cases.iter().enumerate() {
            let found = access_nested_map(nested_map, path)
                .unwrap_or_else(|err| panic!("case {idx}: unexpected {err}"));
            assert_eq!(found, expected, "case {idx}");
        }
    }

    #[test]
    fn missing_key_reports_offending_key() {
        let cases = [
            (json!({}), vec!["a"], "a"),
            (json!({"a": 1}), vec!["a", "b"], "b"),
            (json!({"a": {"b": 2}}), vec!["a", "c"], "c"),
            (json!({"a": {"b": 2}}), vec!["x", "b"], "x"),
        ];
        for (idx, (nested_map, path, missing)) in cases.iter().enumerate() {
            let err = access_nested_map(nested_map, path).unwrap_err();
            assert_eq!(err.key(), *missing, "case {idx}");
            assert_eq!(err.to_string(), format!("'{missing}'"), "case {idx}");
        }
    }

    #[test]
    fn non_object_intermediates_are_not_indexable() {
        let nested_map = json!({"list": [1, 2], "text": "abc", "none": null});
        for key in ["list", "text", "none"] {
            let err = access_nested_map(&nested_map, &[key, "0"]).unwrap_err();
            assert_eq!(err.key(), "0", "descending into {key}");
        }
    }

    #[test]
    fn empty_path_returns_input() {
        let nested_map = json!({"a": 1});
        let path: [&str; 0] = [];
        assert_eq!(access_nested_map(&nested_map, &path), Ok(&nested_map));
    }

    #[test]
    fn accepts_owned_keys() {
        let nested_map = json!({"outer": {"inner": true}});
        let path = vec!["outer".to_string(), "inner".to_string()];
        assert_eq!(access_nested_map(&nested_map, &path), Ok(&json!(true)));
    }
}
