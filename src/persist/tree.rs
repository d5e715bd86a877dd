//! Flat string key/value tree for persisted part state
//!
//! The host save format is a tree of string pairs nested under a named
//! section per part instance; this type models one such section.
//! Reads never fail: a missing or unparsable value falls back to the
//! caller's documented default, so a corrupt save degrades instead of
//! crashing the load. Keys the engine does not recognize are left
//! untouched, which keeps saves forward compatible.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One part's persisted key/value section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateTree {
    entries: BTreeMap<String, String>,
}

impl StateTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw string lookup
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Float lookup with fallback
    ///
    /// Accepts Rust float text (including `inf`/`-inf` sentinels) and
    /// the `Infinity`/`-Infinity` spellings some hosts write. `NaN`
    /// and garbage both fall back to the default.
    pub fn get_f64(&self, key: &str, default: f64) -> f64 {
        let Some(raw) = self.entries.get(key) else {
            return default;
        };
        let parsed = match raw.trim() {
            "Infinity" => Some(f64::INFINITY),
            "-Infinity" => Some(f64::NEG_INFINITY),
            text => text.parse::<f64>().ok(),
        };
        match parsed {
            Some(value) if !value.is_nan() => value,
            _ => default,
        }
    }

    /// Bool lookup with fallback; `True`/`False` in any casing
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.entries.get(key) {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => default,
            },
            None => default,
        }
    }

    pub fn set_str(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    /// Floats are written as shortest round-trip decimal text; the
    /// sentinels come out as `inf`/`-inf`
    pub fn set_f64(&mut self, key: &str, value: f64) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    /// Bools are written as `True`/`False`
    pub fn set_bool(&mut self, key: &str, value: bool) {
        let text = if value { "True" } else { "False" };
        self.entries.insert(key.to_string(), text.to_string());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_falls_back() {
        let tree = StateTree::new();
        assert_eq!(tree.get_f64("Age", 7.5), 7.5);
        assert!(tree.get_bool("HasFailed", true));
        assert_eq!(tree.get_str("LeakName"), None);
    }

    #[test]
    fn test_floats_round_trip_exactly() {
        let mut tree = StateTree::new();
        for value in [0.0, 1.5, -3.25, 0.1, 1e300, f64::INFINITY, f64::NEG_INFINITY] {
            tree.set_f64("x", value);
            assert_eq!(tree.get_f64("x", 999.0), value);
        }
    }

    #[test]
    fn test_bools_serialize_capitalized() {
        let mut tree = StateTree::new();
        tree.set_bool("HasFailed", true);
        assert_eq!(tree.get_str("HasFailed"), Some("True"));
        assert!(tree.get_bool("HasFailed", false));

        tree.set_str("HasFailed", "FALSE");
        assert!(!tree.get_bool("HasFailed", true));
    }

    #[test]
    fn test_corrupt_values_fall_back() {
        let mut tree = StateTree::new();
        tree.set_str("Age", "not a number");
        assert_eq!(tree.get_f64("Age", 0.0), 0.0);

        tree.set_str("Age", "NaN");
        assert_eq!(tree.get_f64("Age", 12.0), 12.0);

        tree.set_str("HasFailed", "maybe");
        assert!(!tree.get_bool("HasFailed", false));
    }

    #[test]
    fn test_foreign_infinity_spellings_parse() {
        let mut tree = StateTree::new();
        tree.set_str("TimeOfLastReset", "Infinity");
        assert_eq!(tree.get_f64("TimeOfLastReset", 0.0), f64::INFINITY);
        tree.set_str("TimeOfLastInspection", "-Infinity");
        assert_eq!(
            tree.get_f64("TimeOfLastInspection", 0.0),
            f64::NEG_INFINITY
        );
    }

    #[test]
    fn test_unknown_keys_survive() {
        let mut tree = StateTree::new();
        tree.set_str("SomeFutureField", "kept");
        tree.set_f64("Age", 1.0);
        assert_eq!(tree.get_str("SomeFutureField"), Some("kept"));
        assert_eq!(tree.len(), 2);
    }
}
