//! Concrete metric families, one module per resource kind.
mod managed_cluster;
pub use managed_cluster::{
    MANAGED_CLUSTER_INFO, MANAGED_CLUSTER_INFO_HELP, MANAGED_CLUSTER_INFO_LABELS,
    ManagedClusterCollector, managed_cluster_collector, managed_cluster_families,
};
