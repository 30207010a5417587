//! The three analyses. Each is a pure pass from raw dataset text to one
//! rendered report section, with per-reason drop accounting. Nothing is
//! shared between analyses beyond the immutable input text.

use std::collections::BTreeMap;

use tracing::debug;

use crate::common::error::{AnalyzerError, Result};
use crate::domain::{DropReason, DropStats, LIFT_SCHEMA, MEET_SCHEMA};
use crate::pipeline::aggregate::{count_by_key, sum_by_key};
use crate::pipeline::extract::{extract_fields, RowOutcome};
use crate::pipeline::join::inner_join;
use crate::pipeline::record::{is_header, split_fields};
use crate::pipeline::report::{render_counts, render_decimals};

// Literal section titles; downstream consumers match on these exactly.
pub const ANALYSIS_1_TITLE: &str = "ANALYSIS 1: Total Meets Per Federation";
pub const ANALYSIS_2_TITLE: &str = "ANALYSIS 2: Average Performance by Equipment Type";
pub const ANALYSIS_3_TITLE: &str = "ANALYSIS 3: Performance Comparison/Average By States";

/// A rendered report section plus the rows the analysis excluded.
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    pub section: String,
    pub drops: DropStats,
}

/// Output of the join-based analysis, which reads both datasets.
#[derive(Debug, Clone)]
pub struct JoinAnalysisOutput {
    pub section: String,
    pub meet_drops: DropStats,
    pub lift_drops: DropStats,
}

/// Shared parse -> filter -> extract pass: every line of `text` is split,
/// headers and malformed rows are dropped with accounting, and the targeted
/// columns of the surviving rows are returned in source order.
fn extract_rows<'a>(
    text: &'a str,
    min_fields: usize,
    columns: &[usize],
    drops: &mut DropStats,
) -> Vec<Vec<&'a str>> {
    let mut rows = Vec::new();
    for line in text.lines() {
        let fields = split_fields(line);
        if is_header(&fields) {
            drops.record(DropReason::Header);
            continue;
        }
        match extract_fields(&fields, min_fields, columns) {
            RowOutcome::Extracted(values) => rows.push(values),
            RowOutcome::Dropped(reason) => drops.record(reason),
        }
    }
    rows
}

/// Analysis 1: count of meets per sanctioning federation.
pub fn meets_per_federation(meets: &str) -> AnalysisOutput {
    let mut drops = DropStats::default();
    let federations = extract_rows(meets, 3, &[MEET_SCHEMA.federation], &mut drops)
        .into_iter()
        .map(|row| row[0].to_string());
    let counts = count_by_key(federations);

    debug!(
        federations = counts.len(),
        dropped = drops.dropped(),
        "aggregated meets per federation"
    );
    AnalysisOutput {
        section: render_counts(ANALYSIS_1_TITLE, &counts),
        drops,
    }
}

/// Analysis 2: relative frequency of each equipment category among all lift
/// records.
pub fn share_by_equipment(lifts: &str) -> AnalysisOutput {
    let mut drops = DropStats::default();
    let equipment = extract_rows(lifts, 4, &[LIFT_SCHEMA.equipment], &mut drops)
        .into_iter()
        .map(|row| row[0].to_string());
    let counts = count_by_key(equipment);

    let total_records: u64 = counts.values().sum();
    let ratios: BTreeMap<String, f64> = counts
        .iter()
        .map(|(key, &count)| (key.clone(), count as f64 / total_records as f64))
        .collect();

    debug!(
        categories = ratios.len(),
        total_records,
        dropped = drops.dropped(),
        "aggregated equipment shares"
    );
    AnalysisOutput {
        section: render_decimals(ANALYSIS_2_TITLE, &ratios),
        drops,
    }
}

/// Analysis 3: average total lifted weight per state, joining lift records
/// to meet records on MeetID.
pub fn average_total_by_state(meets: &str, lifts: &str) -> Result<JoinAnalysisOutput> {
    let mut meet_drops = DropStats::default();
    let id_to_state: Vec<(String, String)> = extract_rows(
        meets,
        6,
        &[MEET_SCHEMA.meet_id, MEET_SCHEMA.state],
        &mut meet_drops,
    )
    .into_iter()
    .map(|row| (row[0].to_string(), row[1].to_string()))
    .collect();

    // TotalKg is parsed eagerly; a non-numeric value aborts the whole run
    // instead of being dropped like other malformed rows.
    let mut lift_drops = DropStats::default();
    let mut id_to_total: Vec<(String, f64)> = Vec::new();
    for row in extract_rows(
        lifts,
        15,
        &[LIFT_SCHEMA.meet_id, LIFT_SCHEMA.total_kg],
        &mut lift_drops,
    ) {
        id_to_total.push((row[0].to_string(), parse_total_kg(row[1])?));
    }

    let joined = inner_join(id_to_state, id_to_total);
    let by_state = sum_by_key(
        joined
            .into_iter()
            .map(|(_, state, total_kg)| (state, total_kg)),
    );
    let averages: BTreeMap<String, f64> = by_state
        .iter()
        .map(|(state, &(sum, count))| (state.clone(), sum / count as f64))
        .collect();

    debug!(
        states = averages.len(),
        meet_dropped = meet_drops.dropped(),
        lift_dropped = lift_drops.dropped(),
        "aggregated averages by state"
    );
    Ok(JoinAnalysisOutput {
        section: render_decimals(ANALYSIS_3_TITLE, &averages),
        meet_drops,
        lift_drops,
    })
}

fn parse_total_kg(raw: &str) -> Result<f64> {
    raw.trim()
        .parse()
        .map_err(|source| AnalyzerError::MalformedNumber {
            value: raw.to_string(),
            source,
        })
}
