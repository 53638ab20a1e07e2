use std::fmt::{self, Write};

use serde::Serialize;

use crate::{MetricKind, MetricRecord};

/// A named, typed group of [`MetricRecord`]s.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricFamily {
    name: String,
    kind: MetricKind,
    help: String,
    records: Vec<MetricRecord>,
}

impl MetricFamily {
    /// Create an empty family.
    pub fn new(name: impl Into<String>, kind: MetricKind, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            help: help.into(),
            records: Vec::new(),
        }
    }

    /// Replace the records and return the updated family.
    pub fn with_records(mut self, records: Vec<MetricRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn push(&mut self, record: MetricRecord) {
        self.records.push(record);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MetricKind {
        self.kind
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [MetricRecord] {
        &mut self.records
    }

    pub fn into_records(self) -> Vec<MetricRecord> {
        self.records
    }
}

/// Text exposition:
///
/// ```text
/// # HELP <name> <help>
/// # TYPE <name> <kind>
/// <name>{k1="v1",k2="v2"} <value>
/// ```
impl fmt::Display for MetricFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("# HELP ")?;
        f.write_str(&self.name)?;
        f.write_char(' ')?;
        write_escaped(f, &self.help, false)?;
        f.write_char('\n')?;
        writeln!(f, "# TYPE {} {}", self.name, self.kind)?;

        for record in &self.records {
            f.write_str(&self.name)?;
            if !record.label_keys().is_empty() {
                f.write_char('{')?;
                for (i, (key, value)) in record.labels().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    f.write_str(key)?;
                    f.write_str("=\"")?;
                    write_escaped(f, value, true)?;
                    f.write_char('"')?;
                }
                f.write_char('}')?;
            }
            f.write_char(' ')?;
            write_value(f, record.value())?;
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Escapes `\` and newlines, plus `"` inside label values.
fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str, quote: bool) -> fmt::Result {
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '"' if quote => f.write_str("\\\"")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

fn write_value(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        f.write_str("NaN")
    } else if v == f64::INFINITY {
        f.write_str("+Inf")
    } else if v == f64::NEG_INFINITY {
        f.write_str("-Inf")
    } else {
        write!(f, "{v}")
    }
}
