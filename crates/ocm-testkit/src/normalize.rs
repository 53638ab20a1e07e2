use std::fmt;

use crate::CompareError;

/// Canonical form of a metric text: filtered, trimmed, label-sorted, line-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText {
    lines: Vec<String>,
}

impl NormalizedText {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Label-sort and line-sort already filtered and trimmed lines.
    pub(crate) fn from_trimmed(lines: Vec<&str>) -> Result<Self, CompareError> {
        let mut lines = lines
            .into_iter()
            .map(sort_labels)
            .collect::<Result<Vec<_>, _>>()?;
        lines.sort_unstable();
        Ok(Self { lines })
    }
}

/// Lines joined with `\n`, no trailing newline.
impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Run the full canonicalization pipeline on `text`.
///
/// `filter` holds metric-name prefixes; `None` keeps every line.
pub fn normalize<S: AsRef<str>>(
    text: &str,
    filter: Option<&[S]>,
) -> Result<NormalizedText, CompareError> {
    NormalizedText::from_trimmed(filter_and_trim(text, filter))
}

/// Metric name of an exposition line: the text before the first `{` or whitespace.
pub fn metric_name(line: &str) -> &str {
    line.split(|c: char| c == '{' || c.is_whitespace())
        .next()
        .unwrap_or_default()
}

/// Steps 1 and 2: prefix filter, then trim and drop blanks.
///
/// Leading indentation is ignored when taking the metric name.
pub(crate) fn filter_and_trim<'t, S: AsRef<str>>(text: &'t str, filter: Option<&[S]>) -> Vec<&'t str> {
    text.split('\n')
        .filter(|line| match filter {
            None => true,
            Some(prefixes) => {
                let name = metric_name(line.trim_start());
                prefixes.iter().any(|p| name.starts_with(p.as_ref()))
            }
        })
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Step 3: `name{b,a}rest` -> `name{a,b}rest`; lines without `{` pass through.
fn sort_labels(line: &str) -> Result<String, CompareError> {
    let Some((name, rest)) = line.split_once('{') else {
        return Ok(line.to_string());
    };
    let malformed = || CompareError::Malformed {
        line: line.to_string(),
    };
    if rest.contains('{') {
        return Err(malformed());
    }
    let (block, tail) = rest.split_once('}').ok_or_else(malformed)?;

    let mut tokens: Vec<&str> = block.split(',').collect();
    tokens.sort_unstable();
    Ok(format!("{name}{{{}}}{tail}", tokens.join(",")))
}
