//! Order-insensitive comparison of metric exposition text for tests.
//!
//! The exposition format fixes neither the order of lines nor the order of labels
//! within a line, so both texts are canonicalized before comparison:
//!
//! 1. filter: keep lines whose metric name starts with an allowed prefix (optional);
//! 2. trim: drop blank lines, trim the rest;
//! 3. label-sort: sort the comma-separated tokens inside `{...}`;
//! 4. line-sort: sort lines bytewise.
//!
//! ```rust
//! use ocm_testkit::compare;
//!
//! compare("foo{b=\"2\",a=\"1\"} 1\n", "foo{a=\"1\",b=\"2\"} 1\n", None::<&[&str]>).unwrap();
//! ```
mod case;
pub use case::{CaseError, MetricsTestCase, render_families};

mod compare;
pub use compare::compare;

mod error;
pub use error::CompareError;

mod normalize;
pub use normalize::{NormalizedText, metric_name, normalize};
