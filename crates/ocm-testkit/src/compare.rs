use crate::{
    CompareError,
    normalize::{NormalizedText, filter_and_trim},
};

/// Compare two metric texts for equality up to line and label order.
///
/// Both sides go through the same pipeline (see [`crate::normalize`]). When exactly
/// one side is empty after filtering and trimming the texts are reported as a
/// mismatch straight away; two empty sides are equal.
pub fn compare<S: AsRef<str>>(
    expected: &str,
    actual: &str,
    name_filter: Option<&[S]>,
) -> Result<(), CompareError> {
    let expected = filter_and_trim(expected, name_filter);
    let actual = filter_and_trim(actual, name_filter);

    match (expected.is_empty(), actual.is_empty()) {
        (true, true) => return Ok(()),
        (true, false) | (false, true) => {
            return Err(CompareError::Mismatch {
                expected: expected.join("\n"),
                actual: actual.join("\n"),
            });
        }
        (false, false) => {}
    }

    let expected = NormalizedText::from_trimmed(expected)?;
    let actual = NormalizedText::from_trimmed(actual)?;

    if expected != actual {
        return Err(CompareError::Mismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}
