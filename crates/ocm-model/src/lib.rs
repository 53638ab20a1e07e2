mod domain;
pub use domain::{
    HubContext, LABEL_CLOUD, LABEL_CLUSTER_ID, LABEL_NAME, LABEL_VENDOR, LABEL_VERSION, Labels,
};

mod error;
pub use error::{ModelError, ModelResult};

mod metric;
pub use metric::{MetricFamily, MetricKind, MetricRecord};

mod resource;
pub use resource::{
    ClusterVersion, ClusterVersionSpec, ManagedCluster, ManagedClusterStatus,
    ManagedClusterVersion, ObjectMeta, ResourceKind,
};
