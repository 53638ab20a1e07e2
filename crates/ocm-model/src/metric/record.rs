use serde::Serialize;

use crate::{ModelError, ModelResult};

/// One observation inside a [`crate::MetricFamily`].
///
/// Label keys and values are positional: `label_keys[i]` names `label_values[i]`.
/// The two arrays always have the same length; a label missing from the source
/// is carried as an empty value, never dropped. Each record owns its arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    label_keys: Vec<String>,
    label_values: Vec<String>,
    value: f64,
}

impl MetricRecord {
    /// Create a record, rejecting mismatched key/value arrays.
    pub fn new(label_keys: Vec<String>, label_values: Vec<String>, value: f64) -> ModelResult<Self> {
        if label_keys.len() != label_values.len() {
            return Err(ModelError::LabelArity {
                keys: label_keys.len(),
                values: label_values.len(),
            });
        }
        Ok(Self {
            label_keys,
            label_values,
            value,
        })
    }

    /// Create a record from `(key, value)` pairs; arity holds by construction.
    pub fn from_pairs<I, K, V>(pairs: I, value: f64) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (label_keys, label_values) = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        Self {
            label_keys,
            label_values,
            value,
        }
    }

    pub fn label_keys(&self) -> &[String] {
        &self.label_keys
    }

    pub fn label_values(&self) -> &[String] {
        &self.label_values
    }

    /// Mutable view of the keys. A slice, so the arity cannot change.
    pub fn label_keys_mut(&mut self) -> &mut [String] {
        &mut self.label_keys
    }

    /// Mutable view of the values. A slice, so the arity cannot change.
    pub fn label_values_mut(&mut self) -> &mut [String] {
        &mut self.label_values
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value of the label named `key`, if the record carries it.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Iterate labels as `(key, value)` pairs, in schema order.
    pub fn labels(&self) -> impl Iterator<Item = (&str, &str)> {
        self.label_keys
            .iter()
            .zip(&self.label_values)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn new_rejects_arity_mismatch() {
        let err = MetricRecord::new(strings(&["a", "b"]), strings(&["1"]), 1.0).unwrap_err();
        assert!(matches!(err, ModelError::LabelArity { keys: 2, values: 1 }));
    }

    #[test]
    fn new_accepts_empty_values() {
        let rec = MetricRecord::new(strings(&["a", "b"]), strings(&["", ""]), 1.0).unwrap();
        assert_eq!(rec.label("b"), Some(""));
        assert_eq!(rec.label("c"), None);
    }

    #[test]
    fn from_pairs_keeps_order() {
        let rec = MetricRecord::from_pairs([("z", "1"), ("a", "2")], 3.0);
        assert_eq!(rec.label_keys(), ["z", "a"]);
        assert_eq!(rec.label_values(), ["1", "2"]);
        assert_eq!(rec.value(), 3.0);
    }

    #[test]
    fn clones_do_not_share_arrays() {
        let original = MetricRecord::from_pairs([("name", "a")], 1.0);
        let mut copy = original.clone();
        copy.label_values_mut()[0] = "b".into();

        assert_eq!(original.label("name"), Some("a"));
        assert_eq!(copy.label("name"), Some("b"));
    }
}
