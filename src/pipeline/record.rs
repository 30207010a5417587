//! Raw record parsing: a line of delimited text becomes an ordered sequence
//! of positional string fields.

use crate::domain::HEADER_SENTINEL;

/// Splits a raw line on the comma delimiter. Fields are returned untouched;
/// no trimming or type conversion happens here. Quoting is not supported, so
/// a field that itself contains a comma is silently misparsed.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').collect()
}

/// A line is the header iff its first field equals the `MeetID` sentinel.
pub fn is_header(fields: &[&str]) -> bool {
    fields.first().copied() == Some(HEADER_SENTINEL)
}
