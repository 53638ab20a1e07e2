//! Well-known label keys.
//!
//! `LABEL_VENDOR` and `LABEL_CLOUD` are read from a managed cluster's own labels,
//! the others name metric labels filled from resource fields or hub context.

/// Hub cluster identifier, taken from the hub's `ClusterVersion`.
pub const LABEL_CLUSTER_ID: &str = "cluster_id";

/// Name of the managed cluster.
pub const LABEL_NAME: &str = "name";

/// Distribution vendor, e.g. `OpenShift`.
pub const LABEL_VENDOR: &str = "vendor";

/// Cloud provider, e.g. `AWS`.
pub const LABEL_CLOUD: &str = "cloud";

/// Kubernetes version reported in the managed cluster status.
pub const LABEL_VERSION: &str = "version";
