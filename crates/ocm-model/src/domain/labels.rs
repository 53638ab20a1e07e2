use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Resource labels (`metadata.labels`) based on [`BTreeMap`].
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(pub BTreeMap<String, String>);

impl Labels {
    /// Create an empty set of labels.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns `true` if no labels are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or overwrite a label.
    ///
    /// Returns `self` for chaining.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into());
        self
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Get the value for a key, or `""` when the key is absent.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    /// Iterate through all labels as `(&str, &str)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Labels
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Labels;

    #[test]
    fn missing_key_reads_as_empty() {
        let labels: Labels = [("vendor", "OpenShift")].into_iter().collect();

        assert_eq!(labels.get_or_empty("vendor"), "OpenShift");
        assert_eq!(labels.get_or_empty("cloud"), "");
        assert_eq!(labels.get("cloud"), None);
    }

    #[test]
    fn insert_overwrites() {
        let mut labels = Labels::new();
        labels.insert("cloud", "AWS").insert("cloud", "GCP");

        assert_eq!(labels.get("cloud"), Some("GCP"));
        assert_eq!(labels.iter().count(), 1);
    }

    #[test]
    fn deserializes_from_plain_object() {
        let labels: Labels = serde_json::from_str(r#"{"cloud":"AWS","vendor":""}"#).unwrap();

        assert_eq!(labels.get("cloud"), Some("AWS"));
        assert_eq!(labels.get("vendor"), Some(""));
    }
}
