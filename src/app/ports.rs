use async_trait::async_trait;

use crate::common::error::Result;

/// Read-side collaborator: resolves a locator to the raw text of a dataset.
#[async_trait]
pub trait DatasetStore: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<String>;
}

/// Write-side collaborator: persists the rendered report, replacing any
/// existing object at the locator.
#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn write(&self, locator: &str, report: &str) -> Result<()>;
}
