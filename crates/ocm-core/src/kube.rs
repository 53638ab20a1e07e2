//! Kubernetes API access for the resources the collectors read.
//!
//! Objects are fetched as [`DynamicObject`]s and handed on as raw JSON, so the
//! kind checking and decoding stay in [`ocm_model::ResourceKind::decode`].
use std::marker::PhantomData;

use async_trait::async_trait;
use kube::api::{Api, DynamicObject, GroupVersionKind, ListParams};
use kube::core::TypeMeta;
use kube::discovery::ApiResource;
use kube::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use ocm_model::{ClusterVersion, ResourceKind};

use crate::context::{ClusterVersionSource, SourceError};

/// Cluster-scoped API handle for resources of type `R`.
pub struct KubeResourceApi<R> {
    api: Api<DynamicObject>,
    _kind: PhantomData<fn() -> R>,
}

impl<R: ResourceKind> KubeResourceApi<R> {
    pub fn new(client: Client) -> Self {
        Self {
            api: Api::all_with(client, &api_resource::<R>()),
            _kind: PhantomData,
        }
    }

    /// Fetch one object by name.
    #[instrument(level = "debug", skip(self), fields(kind = R::KIND))]
    pub async fn get_raw(&self, name: &str) -> Result<Value, SourceError> {
        let obj = self
            .api
            .get(name)
            .await
            .map_err(|e| source_error(e, R::KIND, name))?;
        to_value(obj)
    }

    /// List every object of this kind.
    ///
    /// List responses may omit per-item `apiVersion`/`kind`; they are filled in
    /// so the items decode like objects fetched one by one.
    #[instrument(level = "debug", skip(self), fields(kind = R::KIND))]
    pub async fn list_raw(&self) -> Result<Vec<Value>, SourceError> {
        let list = self
            .api
            .list(&ListParams::default())
            .await
            .map_err(|e| source_error(e, R::KIND, ""))?;
        debug!(items = list.items.len(), "listed objects");

        list.items
            .into_iter()
            .map(|mut obj| {
                obj.types.get_or_insert_with(|| TypeMeta {
                    api_version: R::API_VERSION.to_string(),
                    kind: R::KIND.to_string(),
                });
                to_value(obj)
            })
            .collect()
    }
}

#[async_trait]
impl ClusterVersionSource for KubeResourceApi<ClusterVersion> {
    async fn fetch_cluster_version(&self) -> Result<Value, SourceError> {
        self.get_raw(ClusterVersion::SINGLETON_NAME).await
    }
}

/// Discovery-free [`ApiResource`] for `R`.
pub fn api_resource<R: ResourceKind>() -> ApiResource {
    let (group, version) = R::API_VERSION
        .split_once('/')
        .unwrap_or(("", R::API_VERSION));
    let gvk = GroupVersionKind::gvk(group, version, R::KIND);
    ApiResource::from_gvk_with_plural(&gvk, R::PLURAL)
}

fn to_value(obj: DynamicObject) -> Result<Value, SourceError> {
    serde_json::to_value(obj).map_err(|e| SourceError::Transport(e.to_string()))
}

fn source_error(e: kube::Error, kind: &'static str, name: &str) -> SourceError {
    match e {
        kube::Error::Api(ae) if ae.code == 404 => SourceError::NotFound {
            kind,
            name: name.to_string(),
        },
        kube::Error::Api(ae) if ae.code == 401 || ae.code == 403 => {
            SourceError::Forbidden(ae.message)
        }
        other => SourceError::Transport(other.to_string()),
    }
}
