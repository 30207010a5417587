use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::app::ports::ReportSink;
use crate::common::error::Result;

/// Report sink that writes to the local filesystem, creating parent
/// directories as needed and replacing any existing file.
pub struct FsReportSink;

#[async_trait]
impl ReportSink for FsReportSink {
    async fn write(&self, locator: &str, report: &str) -> Result<()> {
        let path = Path::new(locator);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, report)?;
        debug!("wrote {} report bytes to {}", report.len(), locator);
        Ok(())
    }
}
