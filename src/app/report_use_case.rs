use std::sync::Arc;

use tracing::info;

use crate::app::ports::{DatasetStore, ReportSink};
use crate::common::error::Result;
use crate::pipeline::analysis;

/// Use case for running all three analyses over the two datasets and writing
/// the combined report.
pub struct ReportUseCase {
    store: Arc<dyn DatasetStore>,
    sink: Arc<dyn ReportSink>,
}

impl ReportUseCase {
    pub fn new(store: Arc<dyn DatasetStore>, sink: Arc<dyn ReportSink>) -> Self {
        Self { store, sink }
    }

    /// Fetch both datasets, build the report, and write it to `output`.
    /// Returns the report text as written.
    pub async fn run(&self, meets: &str, lifts: &str, output: &str) -> Result<String> {
        info!("📥 Fetching meets dataset from {}", meets);
        let meets_text = self.store.fetch(meets).await?;
        info!("📥 Fetching lifts dataset from {}", lifts);
        let lifts_text = self.store.fetch(lifts).await?;

        let report = build_report(&meets_text, &lifts_text)?;

        info!("💾 Writing report to {}", output);
        self.sink.write(output, &report).await?;
        Ok(report)
    }
}

/// Assembles the full report: the three analyses run independently over the
/// immutable input text and their sections are concatenated in fixed order,
/// with one blank line between consecutive sections.
pub fn build_report(meets: &str, lifts: &str) -> Result<String> {
    let federation = analysis::meets_per_federation(meets);
    info!(
        dropped = federation.drops.dropped(),
        "analysis 1 complete"
    );

    let equipment = analysis::share_by_equipment(lifts);
    info!(dropped = equipment.drops.dropped(), "analysis 2 complete");

    let by_state = analysis::average_total_by_state(meets, lifts)?;
    info!(
        meet_dropped = by_state.meet_drops.dropped(),
        lift_dropped = by_state.lift_drops.dropped(),
        "analysis 3 complete"
    );

    let mut report = String::new();
    report.push_str(&federation.section);
    report.push('\n');
    report.push_str(&equipment.section);
    report.push('\n');
    report.push_str(&by_state.section);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::common::error::AnalyzerError;

    struct MockDatasetStore {
        datasets: HashMap<String, String>,
    }

    #[async_trait]
    impl DatasetStore for MockDatasetStore {
        async fn fetch(&self, locator: &str) -> crate::common::error::Result<String> {
            self.datasets
                .get(locator)
                .cloned()
                .ok_or_else(|| AnalyzerError::Storage {
                    message: format!("no dataset at {locator}"),
                })
        }
    }

    struct MockReportSink {
        written: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl ReportSink for MockReportSink {
        async fn write(&self, locator: &str, report: &str) -> crate::common::error::Result<()> {
            self.written
                .lock()
                .unwrap()
                .push((locator.to_string(), report.to_string()));
            Ok(())
        }
    }

    fn meets_fixture() -> String {
        [
            "MeetID,MeetName,Federation,Date,MeetCountry,MeetState",
            "001,X,USPA,2019-01-05,USA,CA",
            "002,Y,APF,2019-02-16,USA,TX",
        ]
        .join("\n")
    }

    fn lifts_fixture() -> String {
        [
            "MeetID,Name,Sex,Equipment,A,B,C,D,E,F,G,H,I,J,TotalKg",
            "001,a,M,Raw,0,0,0,0,0,0,0,0,0,0,500.0",
            "001,b,F,Raw,0,0,0,0,0,0,0,0,0,0,300.0",
            "002,c,M,Wraps,0,0,0,0,0,0,0,0,0,0,600.0",
        ]
        .join("\n")
    }

    const EXPECTED_REPORT: &str = "\
ANALYSIS 1: Total Meets Per FederationAPF: 1\nUSPA: 1\n\
\n\
ANALYSIS 2: Average Performance by Equipment TypeRaw: 0.67\nWraps: 0.33\n\
\n\
ANALYSIS 3: Performance Comparison/Average By StatesCA: 400.00\nTX: 600.00\n";

    #[test]
    fn report_sections_are_concatenated_in_fixed_order() {
        let report = build_report(&meets_fixture(), &lifts_fixture()).unwrap();
        assert_eq!(report, EXPECTED_REPORT);
    }

    #[test]
    fn report_is_deterministic() {
        let first = build_report(&meets_fixture(), &lifts_fixture()).unwrap();
        let second = build_report(&meets_fixture(), &lifts_fixture()).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn use_case_fetches_builds_and_writes() {
        let mut datasets = HashMap::new();
        datasets.insert("meets.csv".to_string(), meets_fixture());
        datasets.insert("lifts.csv".to_string(), lifts_fixture());
        let store = Arc::new(MockDatasetStore { datasets });
        let sink = Arc::new(MockReportSink {
            written: Mutex::new(Vec::new()),
        });

        let use_case = ReportUseCase::new(store, sink.clone());
        let report = use_case
            .run("meets.csv", "lifts.csv", "result.txt")
            .await
            .unwrap();

        assert_eq!(report, EXPECTED_REPORT);
        let written = sink.written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0], ("result.txt".to_string(), report));
    }

    #[tokio::test]
    async fn unreachable_dataset_aborts_without_writing() {
        let store = Arc::new(MockDatasetStore {
            datasets: HashMap::new(),
        });
        let sink = Arc::new(MockReportSink {
            written: Mutex::new(Vec::new()),
        });

        let use_case = ReportUseCase::new(store, sink.clone());
        let result = use_case.run("meets.csv", "lifts.csv", "result.txt").await;

        assert!(result.is_err());
        assert!(sink.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_total_kg_aborts_without_writing() {
        let mut datasets = HashMap::new();
        datasets.insert("meets.csv".to_string(), meets_fixture());
        datasets.insert(
            "lifts.csv".to_string(),
            "001,a,M,Raw,0,0,0,0,0,0,0,0,0,0,abc".to_string(),
        );
        let store = Arc::new(MockDatasetStore { datasets });
        let sink = Arc::new(MockReportSink {
            written: Mutex::new(Vec::new()),
        });

        let use_case = ReportUseCase::new(store, sink.clone());
        let result = use_case.run("meets.csv", "lifts.csv", "result.txt").await;

        assert!(result.is_err());
        assert!(sink.written.lock().unwrap().is_empty());
    }
}
