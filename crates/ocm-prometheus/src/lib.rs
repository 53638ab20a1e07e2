//! Prometheus store and text exposition for generated metric families.
//!
//! [`ResourceExporter`] keeps the latest series of every observed resource in a
//! [`prometheus::Registry`] and renders them with [`prometheus::TextEncoder`].
//!
//! ## Example
//! ```rust
//! use ocm_core::managed_cluster_collector;
//! use ocm_model::{HubContext, Labels, ManagedCluster};
//! use ocm_prometheus::ClusterStateExporter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let exporter = ClusterStateExporter::new(managed_cluster_collector(HubContext::new("hub-123")))?;
//! exporter.observe(&ManagedCluster::new("cluster-a", Labels::new()))?;
//!
//! let text = exporter.encode_text()?;
//! assert!(text.contains("ocm_managedcluster_info{"));
//! # Ok(())
//! # }
//! ```
//!
//! ## HTTP
//! No `/metrics` server is provided; serve [`ResourceExporter::encode_text`] from
//! whatever HTTP stack the host application already runs.
mod error;
pub use error::ExporterError;

mod exporter;
pub use exporter::{ClusterStateExporter, ResourceExporter};

pub use prometheus::{Encoder, Registry, TextEncoder};
