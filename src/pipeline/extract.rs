//! Field extraction: pulls the columns an analysis needs out of a parsed
//! row, tagging the row valid or dropped-with-reason. Dropping is the sole
//! malformed-data policy; extraction never fails hard.

use crate::domain::DropReason;

/// Outcome of extracting fields from one parsed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome<T> {
    Extracted(T),
    Dropped(DropReason),
}

/// Extracts the fields at `columns` when the row has at least `min_fields`
/// fields, covers every targeted index, and every targeted field is
/// non-empty after trimming. Extracted values keep their original, untrimmed
/// form. Header classification is the caller's concern.
pub fn extract_fields<'a>(
    fields: &[&'a str],
    min_fields: usize,
    columns: &[usize],
) -> RowOutcome<Vec<&'a str>> {
    let required = columns
        .iter()
        .map(|&c| c + 1)
        .max()
        .unwrap_or(0)
        .max(min_fields);
    if fields.len() < required {
        return RowOutcome::Dropped(DropReason::TooFewColumns);
    }
    for &column in columns {
        if fields[column].trim().is_empty() {
            return RowOutcome::Dropped(DropReason::EmptyField);
        }
    }
    RowOutcome::Extracted(columns.iter().map(|&c| fields[c]).collect())
}
