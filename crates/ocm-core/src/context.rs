//! Hub identity resolution.
//!
//! The hub cluster id comes from the `ClusterVersion` singleton and labels every
//! generated record. It is fetched exactly once; any failure is fatal.
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, instrument};

use ocm_model::{ClusterVersion, HubContext, ResourceKind};

use crate::error::CoreError;

/// Failure to read an object from the API server.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{kind} {name:?} not found")]
    NotFound { kind: &'static str, name: String },

    #[error("access denied: {0}")]
    Forbidden(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Read access to the `ClusterVersion` singleton.
///
/// Returns the raw API object; decoding is done by [`resolve_hub_context`].
#[async_trait]
pub trait ClusterVersionSource: Send + Sync {
    async fn fetch_cluster_version(&self) -> Result<Value, SourceError>;
}

/// Fetch and decode the `ClusterVersion` singleton once and extract the hub cluster id.
///
/// Every failure (not found, access denied, transport, undecodable object, empty id)
/// is returned as [`CoreError::FatalConfiguration`]. No retry is attempted here;
/// callers wanting resilience wrap this call themselves.
#[instrument(level = "debug", skip(source))]
pub async fn resolve_hub_context<S>(source: &S) -> Result<HubContext, CoreError>
where
    S: ClusterVersionSource + ?Sized,
{
    let raw = source.fetch_cluster_version().await.map_err(|e| {
        error!(error = %e, "error getting cluster version");
        CoreError::FatalConfiguration(format!("error getting cluster version: {e}"))
    })?;

    let cv = ClusterVersion::decode(&raw).map_err(|e| {
        error!(error = %e, "error decoding cluster version");
        CoreError::FatalConfiguration(format!("error decoding cluster version: {e}"))
    })?;

    if cv.cluster_id().is_empty() {
        error!("cluster version has an empty spec.clusterID");
        return Err(CoreError::FatalConfiguration(format!(
            "{} {:?} has an empty spec.clusterID",
            ClusterVersion::KIND,
            ClusterVersion::SINGLETON_NAME
        )));
    }

    info!(cluster_id = cv.cluster_id(), "resolved hub cluster id");
    Ok(HubContext::new(cv.spec.cluster_id))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;

    struct FakeSource {
        response: fn() -> Result<Value, SourceError>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(response: fn() -> Result<Value, SourceError>) -> Self {
            Self {
                response,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ClusterVersionSource for FakeSource {
        async fn fetch_cluster_version(&self) -> Result<Value, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.response)()
        }
    }

    fn version(id: &str) -> Value {
        json!({
            "apiVersion": "config.openshift.io/v1",
            "kind": "ClusterVersion",
            "metadata": {"name": "version"},
            "spec": {"clusterID": id}
        })
    }

    #[tokio::test]
    async fn resolves_cluster_id() {
        let source = FakeSource::new(|| Ok(version("hub-123")));

        let hub = resolve_hub_context(&source).await.unwrap();
        assert_eq!(hub.cluster_id(), "hub-123");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn not_found_is_fatal_and_not_retried() {
        let source = FakeSource::new(|| {
            Err(SourceError::NotFound {
                kind: "ClusterVersion",
                name: "version".into(),
            })
        });

        let err = resolve_hub_context(&source).await.unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("not found"), "got: {err}");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn forbidden_and_transport_are_fatal() {
        let forbidden = FakeSource::new(|| Err(SourceError::Forbidden("rbac".into())));
        let transport = FakeSource::new(|| Err(SourceError::Transport("reset".into())));

        assert!(resolve_hub_context(&forbidden).await.unwrap_err().is_fatal());
        assert!(resolve_hub_context(&transport).await.unwrap_err().is_fatal());
    }

    #[tokio::test]
    async fn undecodable_object_is_fatal() {
        let wrong_kind = FakeSource::new(|| Ok(json!({"kind": "Infrastructure"})));
        let no_spec = FakeSource::new(|| Ok(json!({"kind": "ClusterVersion"})));

        for source in [&wrong_kind, &no_spec] {
            let err = resolve_hub_context(source).await.unwrap_err();
            assert!(matches!(err, CoreError::FatalConfiguration(ref m) if m.contains("decoding")));
        }
    }

    #[tokio::test]
    async fn empty_cluster_id_is_fatal() {
        let source = FakeSource::new(|| Ok(version("")));

        assert!(resolve_hub_context(&source).await.unwrap_err().is_fatal());
    }

    #[tokio::test]
    async fn works_through_trait_object() {
        let source: Box<dyn ClusterVersionSource> = Box::new(FakeSource::new(|| Ok(version("x"))));

        let hub = resolve_hub_context(source.as_ref()).await.unwrap();
        assert_eq!(hub.cluster_id(), "x");
    }
}
