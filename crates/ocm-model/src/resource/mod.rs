//! Typed views of the custom resources the collectors read.
//!
//! Only the fields the collectors consume are modelled; everything else in the
//! API object is ignored on decode.
use serde::Deserialize;
use serde_json::Value;

use crate::{ModelError, ModelResult};

mod meta;
pub use meta::ObjectMeta;

mod managed_cluster;
pub use managed_cluster::{ManagedCluster, ManagedClusterStatus, ManagedClusterVersion};

mod cluster_version;
pub use cluster_version::{ClusterVersion, ClusterVersionSpec};

/// A resource type with a fixed `apiVersion`/`kind` pair.
pub trait ResourceKind: for<'de> Deserialize<'de> {
    /// `group/version` of the resource.
    const API_VERSION: &'static str;
    /// Object kind, e.g. `ManagedCluster`.
    const KIND: &'static str;
    /// Lower-case plural used in API paths.
    const PLURAL: &'static str;

    /// `metadata.name` of this object.
    fn object_name(&self) -> &str;

    /// Decode an untyped API object into this type.
    ///
    /// The object's `kind` must equal [`Self::KIND`]; an `apiVersion`, when
    /// present, must equal [`Self::API_VERSION`]. Nothing is coerced.
    fn decode(value: &Value) -> ModelResult<Self> {
        let found_kind = value.get("kind").and_then(Value::as_str).unwrap_or_default();
        if found_kind != Self::KIND {
            return Err(ModelError::KindMismatch {
                expected: Self::KIND,
                found: found_kind.to_string(),
            });
        }
        if let Some(api_version) = value.get("apiVersion").and_then(Value::as_str) {
            if api_version != Self::API_VERSION {
                return Err(ModelError::KindMismatch {
                    expected: Self::KIND,
                    found: format!("{api_version}/{found_kind}"),
                });
            }
        }

        Self::deserialize(value).map_err(|e| ModelError::Decode {
            kind: Self::KIND,
            reason: e.to_string(),
        })
    }
}
