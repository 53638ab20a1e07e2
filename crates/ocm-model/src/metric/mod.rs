//! Metric families as produced by generators.
//!
//! A [`MetricFamily`] renders itself in the Prometheus text exposition format
//! through [`std::fmt::Display`], which is also what test comparisons consume.
mod family;
pub use family::MetricFamily;

mod kind;
pub use kind::MetricKind;

mod record;
pub use record::MetricRecord;
