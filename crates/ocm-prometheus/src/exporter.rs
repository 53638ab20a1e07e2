use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder, proto::MetricFamily};
use tracing::{debug, instrument, warn};

use ocm_core::ResourceCollector;
use ocm_model::{ManagedCluster, MetricKind, ResourceKind};

use crate::ExporterError;

/// Series currently exported for one resource: `(family index, label values)`.
type Series = Vec<(usize, Vec<String>)>;

/// Prometheus store for the families of one resource type.
///
/// Every family is backed by a [`GaugeVec`] whose label names are the family's
/// label schema. Observing a resource replaces the series it produced before,
/// so label changes (e.g. a new Kubernetes version) never leave stale series.
pub struct ResourceExporter<R> {
    collector: ResourceCollector<R>,
    gauges: Vec<GaugeVec>,
    series: Mutex<HashMap<String, Series>>,
    registry: Arc<Registry>,
}

/// Exporter for `ManagedCluster` families.
pub type ClusterStateExporter = ResourceExporter<ManagedCluster>;

impl<R: ResourceKind> ResourceExporter<R> {
    /// Create an exporter with its own registry.
    pub fn new(collector: ResourceCollector<R>) -> Result<Self, ExporterError> {
        Self::new_with_registry(collector, Arc::new(Registry::new()))
    }

    /// Create an exporter that registers its families in `registry`.
    pub fn new_with_registry(
        collector: ResourceCollector<R>,
        registry: Arc<Registry>,
    ) -> Result<Self, ExporterError> {
        let mut gauges = Vec::with_capacity(collector.families().len());
        for family in collector.families() {
            if matches!(family.kind(), MetricKind::Counter) {
                return Err(ExporterError::UnsupportedKind {
                    family: family.name(),
                    kind: family.kind().to_string(),
                });
            }
            let gauge = GaugeVec::new(Opts::new(family.name(), family.help()), family.label_keys())?;
            registry.register(Box::new(gauge.clone()))?;
            gauges.push(gauge);
        }

        Ok(Self {
            collector,
            gauges,
            series: Mutex::new(HashMap::new()),
            registry,
        })
    }

    /// Generate the families for `resource` and replace its previous series.
    #[instrument(level = "debug", skip(self, resource), fields(kind = R::KIND, name = resource.object_name()))]
    pub fn observe(&self, resource: &R) -> Result<(), ExporterError> {
        let families = self.collector.collect(resource);

        let mut current = Series::new();
        for (idx, family) in families.iter().enumerate() {
            let schema = self.collector.families()[idx].label_keys();
            for record in family.records() {
                if !record.label_keys().iter().map(String::as_str).eq(schema.iter().copied()) {
                    return Err(ExporterError::Schema {
                        family: self.collector.families()[idx].name(),
                        found: record.label_keys().to_vec(),
                    });
                }
                current.push((idx, record.label_values().to_vec()));
            }
        }

        let mut series = self.lock_series();
        if let Some(previous) = series.remove(resource.object_name()) {
            self.remove_series(&previous);
        }
        for (idx, family) in families.iter().enumerate() {
            for record in family.records() {
                let values: Vec<&str> = record.label_values().iter().map(String::as_str).collect();
                self.gauges[idx]
                    .with_label_values(values.as_slice())
                    .set(record.value());
            }
        }
        debug!(series = current.len(), "exported resource");
        series.insert(resource.object_name().to_string(), current);
        Ok(())
    }

    /// Drop every series of the resource named `name`. Returns `false` if it was unknown.
    #[instrument(level = "debug", skip(self))]
    pub fn forget(&self, name: &str) -> bool {
        match self.lock_series().remove(name) {
            Some(previous) => {
                self.remove_series(&previous);
                true
            }
            None => false,
        }
    }

    /// Number of resources with exported series.
    pub fn len(&self) -> usize {
        self.lock_series().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn collector(&self) -> &ResourceCollector<R> {
        &self.collector
    }

    /// Gather all metric families for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Render everything in the registry in the text exposition format.
    pub fn encode_text(&self) -> Result<String, ExporterError> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Underlying registry, for registering other collectors next to these families.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    fn remove_series(&self, series: &Series) {
        for (idx, values) in series {
            let values: Vec<&str> = values.iter().map(String::as_str).collect();
            if let Err(e) = self.gauges[*idx].remove_label_values(values.as_slice()) {
                warn!(error = %e, family = self.collector.families()[*idx].name(), "stale series already gone");
            }
        }
    }

    fn lock_series(&self) -> MutexGuard<'_, HashMap<String, Series>> {
        self.series.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use ocm_core::{FamilyGenerator, managed_cluster_collector};
    use ocm_model::{HubContext, Labels, MetricRecord};

    use super::*;

    fn exporter() -> ClusterStateExporter {
        ClusterStateExporter::new(managed_cluster_collector(HubContext::new("hub-123"))).unwrap()
    }

    fn cluster(name: &str, version: &str) -> ManagedCluster {
        let labels: Labels = [("vendor", "OpenShift"), ("cloud", "AWS")].into_iter().collect();
        ManagedCluster::new(name, labels).with_kubernetes_version(version)
    }

    fn series_count(exporter: &ClusterStateExporter) -> usize {
        exporter
            .gather()
            .iter()
            .find(|f| f.name() == "ocm_managedcluster_info")
            .map(|f| f.get_metric().len())
            .unwrap_or(0)
    }

    #[test]
    fn observe_exports_one_series_per_cluster() {
        let exporter = exporter();
        exporter.observe(&cluster("a", "1.21")).unwrap();
        exporter.observe(&cluster("b", "1.21")).unwrap();

        assert_eq!(exporter.len(), 2);
        assert_eq!(series_count(&exporter), 2);
    }

    #[test]
    fn reobserving_replaces_stale_series() {
        let exporter = exporter();
        exporter.observe(&cluster("a", "1.20")).unwrap();
        exporter.observe(&cluster("a", "1.21")).unwrap();

        assert_eq!(series_count(&exporter), 1);
        let text = exporter.encode_text().unwrap();
        assert!(text.contains("version=\"1.21\""));
        assert!(!text.contains("version=\"1.20\""));
    }

    #[test]
    fn forget_removes_series() {
        let exporter = exporter();
        exporter.observe(&cluster("a", "1.21")).unwrap();

        assert!(exporter.forget("a"));
        assert!(!exporter.forget("a"));
        assert!(exporter.is_empty());
        assert_eq!(series_count(&exporter), 0);
    }

    #[test]
    fn counter_families_are_rejected() {
        let collector = ResourceCollector::new(HubContext::new("hub")).with_family(FamilyGenerator::new(
            "ocm_test_total",
            MetricKind::Counter,
            "Counter",
            &["name"],
            |mc: &ManagedCluster, _: &HubContext| vec![MetricRecord::from_pairs([("name", mc.name())], 1.0)],
        ));

        assert!(matches!(
            ClusterStateExporter::new(collector),
            Err(ExporterError::UnsupportedKind { family: "ocm_test_total", .. })
        ));
    }

    #[test]
    fn off_schema_records_are_rejected() {
        let collector = ResourceCollector::new(HubContext::new("hub")).with_family(FamilyGenerator::new(
            "ocm_test_info",
            MetricKind::Gauge,
            "Off schema",
            &["name"],
            |mc: &ManagedCluster, _: &HubContext| vec![MetricRecord::from_pairs([("cluster", mc.name())], 1.0)],
        ));
        let exporter = ClusterStateExporter::new(collector).unwrap();

        let err = exporter.observe(&cluster("a", "")).unwrap_err();
        assert!(matches!(err, ExporterError::Schema { family: "ocm_test_info", .. }));
        assert!(exporter.is_empty());
    }

    #[test]
    fn shared_registry_rejects_duplicate_families() {
        let registry = Arc::new(Registry::new());
        let hub = HubContext::new("hub");

        ClusterStateExporter::new_with_registry(managed_cluster_collector(hub.clone()), registry.clone()).unwrap();
        let second = ClusterStateExporter::new_with_registry(managed_cluster_collector(hub), registry);
        assert!(matches!(second, Err(ExporterError::Prometheus(_))));
    }
}
