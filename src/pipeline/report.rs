//! Report rendering: an ordered mapping becomes `key: value` lines under a
//! literal section title.

use std::collections::BTreeMap;

/// Renders a section of integer counts. The title is immediately followed by
/// the first entry, with no separating newline; every entry line ends with a
/// newline of its own.
pub fn render_counts(title: &str, entries: &BTreeMap<String, u64>) -> String {
    let mut section = String::from(title);
    for (key, count) in entries {
        section.push_str(&format!("{key}: {count}\n"));
    }
    section
}

/// Renders a section of ratios or averages with exactly two decimal digits.
pub fn render_decimals(title: &str, entries: &BTreeMap<String, f64>) -> String {
    let mut section = String::from(title);
    for (key, value) in entries {
        section.push_str(&format!("{key}: {value:.2}\n"));
    }
    section
}
