//! Non-fatal debug serialization.

use serde::Serialize;

/// Render `value` as pretty JSON for diagnostics.
///
/// Sets serialize as lists. A value that cannot be serialized yields a
/// `"Serialization error: ..."` message instead of failing the caller.
pub fn debug_json<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(json) => json,
        Err(e) => format!("Serialization error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};

    use super::*;

    #[test]
    fn test_sets_render_as_lists() {
        let set: BTreeSet<&str> = ["a", "b"].into_iter().collect();
        let json = debug_json(&set);
        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec!["a", "b"]);
    }

    #[test]
    fn test_unserializable_value_reports_error() {
        // JSON object keys must be strings
        let mut map: HashMap<Vec<u8>, u32> = HashMap::new();
        map.insert(vec![1, 2], 3);
        assert!(debug_json(&map).starts_with("Serialization error"));
    }
}
