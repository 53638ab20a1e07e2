use std::{fmt, sync::Arc};

/// Identity of the hub cluster, resolved once at startup.
///
/// Immutable after construction; clones share the same backing string,
/// so it can be handed to any number of generators and threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HubContext {
    cluster_id: Arc<str>,
}

impl HubContext {
    /// Create a context for the given hub cluster id.
    pub fn new(cluster_id: impl Into<Arc<str>>) -> Self {
        Self {
            cluster_id: cluster_id.into(),
        }
    }

    /// Hub cluster id (`ClusterVersion.spec.clusterID`).
    #[inline]
    pub fn cluster_id(&self) -> &str {
        &self.cluster_id
    }
}

impl fmt::Display for HubContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cluster_id)
    }
}
