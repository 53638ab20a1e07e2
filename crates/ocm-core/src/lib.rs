//! Metric generation for Open Cluster Management resources.
//!
//! - [`context`] resolves the hub identity once, before any generation.
//! - [`generator`] holds the per-family generator type and the typed collector.
//! - [`collectors`] defines the concrete families per resource kind.
//! - `kube` (feature `kube`) reads the resources from a Kubernetes API server.
pub mod collectors;
pub mod context;
pub mod error;
pub mod generator;

#[cfg(feature = "kube")]
pub mod kube;

pub use collectors::{ManagedClusterCollector, managed_cluster_collector};
pub use context::{ClusterVersionSource, SourceError, resolve_hub_context};
pub use error::CoreError;
pub use generator::{FamilyGenerator, ResourceCollector};

