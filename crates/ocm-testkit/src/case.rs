use ocm_model::MetricFamily;
use thiserror::Error;

use crate::{CompareError, compare};

/// A failed [`MetricsTestCase`].
#[derive(Debug, Error)]
#[error("case {case:?}: expected wanted output to equal output: {source}")]
pub struct CaseError {
    pub case: String,
    #[source]
    pub source: CompareError,
}

/// Render families back to back, the way the exposition layer writes them.
pub fn render_families(families: &[MetricFamily]) -> String {
    families.iter().map(ToString::to_string).collect()
}

/// One generator test: input resource, expected exposition text, optional
/// metric-name prefixes, and the function under test.
///
/// ```rust
/// use ocm_model::{MetricFamily, MetricKind, MetricRecord};
/// use ocm_testkit::MetricsTestCase;
///
/// let case = MetricsTestCase::new("len", "abc".to_string(), "str_len{s=\"abc\"} 3", |s: &String| {
///     vec![MetricFamily::new("str_len", MetricKind::Gauge, "Length")
///         .with_records(vec![MetricRecord::from_pairs([("s", s.as_str())], s.len() as f64)])]
/// })
/// .with_metric_names(["str_"]);
///
/// case.run().unwrap();
/// ```
pub struct MetricsTestCase<R, F> {
    name: String,
    resource: R,
    want: String,
    metric_names: Option<Vec<String>>,
    generate: F,
}

impl<R, F> MetricsTestCase<R, F>
where
    F: Fn(&R) -> Vec<MetricFamily>,
{
    pub fn new(name: impl Into<String>, resource: R, want: impl Into<String>, generate: F) -> Self {
        Self {
            name: name.into(),
            resource,
            want: want.into(),
            metric_names: None,
            generate,
        }
    }

    /// Restrict the comparison to lines whose metric name starts with one of `prefixes`.
    pub fn with_metric_names<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metric_names = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the generator, render its output and compare it with the wanted text.
    pub fn run(&self) -> Result<(), CaseError> {
        let got = render_families(&(self.generate)(&self.resource));

        compare(&self.want, &got, self.metric_names.as_deref()).map_err(|source| CaseError {
            case: self.name.clone(),
            source,
        })
    }
}
