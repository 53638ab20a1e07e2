use serde::{Deserialize, Serialize};

use crate::{Labels, ObjectMeta, ResourceKind};

/// Open Cluster Management `ManagedCluster` (cluster-scoped).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedCluster {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub status: ManagedClusterStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterStatus {
    #[serde(default)]
    pub version: ManagedClusterVersion,
}

/// Versions reported by the managed cluster's agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterVersion {
    /// Kubernetes version, e.g. `v1.21.1`.
    #[serde(default)]
    pub kubernetes: String,
}

impl ManagedCluster {
    /// A cluster with the given name and labels and an empty status.
    pub fn new(name: impl Into<String>, labels: Labels) -> Self {
        Self {
            metadata: ObjectMeta::named(name).with_labels(labels),
            status: ManagedClusterStatus::default(),
        }
    }

    /// Set the reported Kubernetes version and return the updated cluster.
    pub fn with_kubernetes_version(mut self, version: impl Into<String>) -> Self {
        self.status.version.kubernetes = version.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn labels(&self) -> &Labels {
        &self.metadata.labels
    }

    pub fn kubernetes_version(&self) -> &str {
        &self.status.version.kubernetes
    }
}

impl ResourceKind for ManagedCluster {
    const API_VERSION: &'static str = "cluster.open-cluster-management.io/v1";
    const KIND: &'static str = "ManagedCluster";
    const PLURAL: &'static str = "managedclusters";

    fn object_name(&self) -> &str {
        &self.metadata.name
    }
}
