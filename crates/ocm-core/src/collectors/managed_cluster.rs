use ocm_model::{
    HubContext, LABEL_CLOUD, LABEL_CLUSTER_ID, LABEL_NAME, LABEL_VENDOR, LABEL_VERSION,
    ManagedCluster, MetricKind, MetricRecord,
};

use crate::generator::{FamilyGenerator, ResourceCollector};

/// Info metric: value is always 1, the payload is in the labels.
pub const MANAGED_CLUSTER_INFO: &str = "ocm_managedcluster_info";
pub const MANAGED_CLUSTER_INFO_HELP: &str = "Managed cluster information";
pub const MANAGED_CLUSTER_INFO_LABELS: &[&str] =
    &[LABEL_CLUSTER_ID, LABEL_NAME, LABEL_VENDOR, LABEL_CLOUD, LABEL_VERSION];

/// Collector for `ManagedCluster` resources.
pub type ManagedClusterCollector = ResourceCollector<ManagedCluster>;

/// Collector with every `ManagedCluster` family registered.
pub fn managed_cluster_collector(hub: HubContext) -> ManagedClusterCollector {
    managed_cluster_families()
        .into_iter()
        .fold(ResourceCollector::new(hub), ResourceCollector::with_family)
}

/// Family generators exposed for `ManagedCluster`.
pub fn managed_cluster_families() -> Vec<FamilyGenerator<ManagedCluster>> {
    vec![FamilyGenerator::new(
        MANAGED_CLUSTER_INFO,
        MetricKind::Gauge,
        MANAGED_CLUSTER_INFO_HELP,
        MANAGED_CLUSTER_INFO_LABELS,
        cluster_info,
    )]
}

// Absent vendor/cloud labels and an unreported version become "" so every
// record carries the full schema.
fn cluster_info(mc: &ManagedCluster, hub: &HubContext) -> Vec<MetricRecord> {
    let labels = mc.labels();
    let values = [
        hub.cluster_id(),
        mc.name(),
        labels.get_or_empty(LABEL_VENDOR),
        labels.get_or_empty(LABEL_CLOUD),
        mc.kubernetes_version(),
    ];

    vec![MetricRecord::from_pairs(
        MANAGED_CLUSTER_INFO_LABELS.iter().copied().zip(values),
        1.0,
    )]
}
