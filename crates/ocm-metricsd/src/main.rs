//! One-shot exporter: prints the current `ManagedCluster` metrics of a hub in the
//! Prometheus text format.
//!
//! Usage: `ocm-metricsd [config.json]`. Logs go to stderr, metrics to stdout.
mod config;

use std::io::Write;

use tracing::{error, info, warn};

use ocm_core::kube::KubeResourceApi;
use ocm_core::{managed_cluster_collector, resolve_hub_context};
use ocm_model::{ClusterVersion, ManagedCluster, ResourceKind};
use ocm_observe::{LOG_ENV_VAR, init_logger};
use ocm_prometheus::ClusterStateExporter;

use crate::config::DaemonConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1) config + logger
    let path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let cfg = DaemonConfig::load(path.as_deref())?;
    init_logger(
        &cfg.logger
            .clone()
            .with_level_override(std::env::var(LOG_ENV_VAR).ok())?,
    )?;
    info!("logger initialized");

    // 2) client
    let client = cfg.kube_client().await?;

    // 3) hub identity; nothing can be generated without it
    let hub = match resolve_hub_context(&KubeResourceApi::<ClusterVersion>::new(client.clone())).await {
        Ok(hub) => hub,
        Err(e) => {
            error!(error = %e, "cannot resolve hub cluster id, exiting");
            std::process::exit(1);
        }
    };

    // 4) managed clusters -> exporter
    let exporter = ClusterStateExporter::new(managed_cluster_collector(hub))?;
    let objects = KubeResourceApi::<ManagedCluster>::new(client).list_raw().await?;
    for obj in &objects {
        match ManagedCluster::decode(obj) {
            Ok(mc) => exporter.observe(&mc)?,
            Err(e) => warn!(error = %e, "skipping object"),
        }
    }
    info!(clusters = exporter.len(), listed = objects.len(), "collected managed clusters");

    // 5) exposition
    let text = exporter.encode_text()?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
