use serde::{Deserialize, Serialize};

use crate::{ObjectMeta, ResourceKind};

/// OpenShift `ClusterVersion` singleton (`config.openshift.io/v1`, named `version`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterVersion {
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: ClusterVersionSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterVersionSpec {
    /// Unique identifier of the cluster. Required; decode fails without it.
    #[serde(rename = "clusterID")]
    pub cluster_id: String,
}

impl ClusterVersion {
    /// Name of the singleton object.
    pub const SINGLETON_NAME: &'static str = "version";

    pub fn cluster_id(&self) -> &str {
        &self.spec.cluster_id
    }
}

impl ResourceKind for ClusterVersion {
    const API_VERSION: &'static str = "config.openshift.io/v1";
    const KIND: &'static str = "ClusterVersion";
    const PLURAL: &'static str = "clusterversions";

    fn object_name(&self) -> &str {
        &self.metadata.name
    }
}
