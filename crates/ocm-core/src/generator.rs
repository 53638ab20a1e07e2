//! Per-family metric generators and the typed collector that owns them.
//!
//! A [`FamilyGenerator`] is a pure function of `(resource, hub context)` that
//! yields exactly one [`MetricFamily`]. Generators are typed by the resource they
//! read, so a mismatched object is rejected while decoding (see
//! [`FamilyGenerator::generate_value`]) rather than asserted at run time.
use std::fmt;

use serde_json::Value;
use tracing::{debug, instrument, trace};

use ocm_model::{HubContext, MetricFamily, MetricKind, MetricRecord, ResourceKind};

use crate::error::CoreError;

type GenerateFn<R> = dyn Fn(&R, &HubContext) -> Vec<MetricRecord> + Send + Sync;

/// Generator of one metric family for resources of type `R`.
pub struct FamilyGenerator<R> {
    name: &'static str,
    kind: MetricKind,
    help: &'static str,
    label_keys: &'static [&'static str],
    generate: Box<GenerateFn<R>>,
}

impl<R> FamilyGenerator<R> {
    /// Create a generator.
    ///
    /// `label_keys` is the family's label schema; every record `f` returns must carry
    /// exactly these keys in this order.
    pub fn new<F>(
        name: &'static str,
        kind: MetricKind,
        help: &'static str,
        label_keys: &'static [&'static str],
        f: F,
    ) -> Self
    where
        F: Fn(&R, &HubContext) -> Vec<MetricRecord> + Send + Sync + 'static,
    {
        Self {
            name,
            kind,
            help,
            label_keys,
            generate: Box::new(f),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    pub fn help(&self) -> &'static str {
        self.help
    }

    /// Label schema shared by all records of this family.
    pub fn label_keys(&self) -> &'static [&'static str] {
        self.label_keys
    }

    /// Produce the family for one resource.
    ///
    /// The returned records own their label arrays; nothing is shared with the
    /// generator, with `hub`, or with the family returned by another call.
    pub fn generate(&self, resource: &R, hub: &HubContext) -> MetricFamily {
        let records = (self.generate)(resource, hub);
        trace!(family = self.name, records = records.len(), "generated family");
        MetricFamily::new(self.name, self.kind, self.help).with_records(records)
    }
}

impl<R: ResourceKind> FamilyGenerator<R> {
    /// Decode an untyped API object as `R` and produce the family.
    ///
    /// Fails with [`CoreError::TypeMismatch`] when the object is not an `R`.
    pub fn generate_value(&self, obj: &Value, hub: &HubContext) -> Result<MetricFamily, CoreError> {
        let resource = R::decode(obj)?;
        Ok(self.generate(&resource, hub))
    }
}

impl<R> fmt::Debug for FamilyGenerator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FamilyGenerator")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("label_keys", &self.label_keys)
            .finish_non_exhaustive()
    }
}

/// All family generators registered for one resource type, bound to a resolved hub context.
pub struct ResourceCollector<R> {
    hub: HubContext,
    families: Vec<FamilyGenerator<R>>,
}

impl<R> ResourceCollector<R> {
    /// Create a collector without families.
    pub fn new(hub: HubContext) -> Self {
        Self {
            hub,
            families: Vec::new(),
        }
    }

    /// Register a family generator and return the updated collector.
    ///
    /// Families are generated in registration order.
    pub fn with_family(mut self, family: FamilyGenerator<R>) -> Self {
        self.families.push(family);
        self
    }

    pub fn hub(&self) -> &HubContext {
        &self.hub
    }

    pub fn families(&self) -> &[FamilyGenerator<R>] {
        &self.families
    }

    /// Run every registered generator against `resource`.
    pub fn collect(&self, resource: &R) -> Vec<MetricFamily> {
        self.families
            .iter()
            .map(|g| g.generate(resource, &self.hub))
            .collect()
    }
}

impl<R: ResourceKind> ResourceCollector<R> {
    /// Decode `obj` once and run every registered generator against it.
    #[instrument(level = "debug", skip(self, obj), fields(kind = R::KIND))]
    pub fn collect_value(&self, obj: &Value) -> Result<Vec<MetricFamily>, CoreError> {
        let resource = R::decode(obj).map_err(|e| {
            debug!(error = %e, "rejected object");
            CoreError::from(e)
        })?;
        Ok(self.collect(&resource))
    }
}

impl<R> fmt::Debug for ResourceCollector<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceCollector")
            .field("hub", &self.hub)
            .field("families", &self.families)
            .finish()
    }
}
