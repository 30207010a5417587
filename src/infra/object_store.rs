use async_trait::async_trait;
use tracing::debug;

use crate::app::ports::DatasetStore;
use crate::common::error::{AnalyzerError, Result};

/// Dataset store backed by either a remote object over HTTP or the local
/// filesystem, chosen by the locator's scheme.
pub struct ObjectStore {
    client: reqwest::Client,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatasetStore for ObjectStore {
    async fn fetch(&self, locator: &str) -> Result<String> {
        if locator.starts_with("http://") || locator.starts_with("https://") {
            debug!("fetching dataset over HTTP: {}", locator);
            let response = self.client.get(locator).send().await?;
            if !response.status().is_success() {
                return Err(AnalyzerError::Storage {
                    message: format!("fetch of '{}' failed: {}", locator, response.status()),
                });
            }
            return Ok(response.text().await?);
        }

        debug!("reading dataset from filesystem: {}", locator);
        Ok(std::fs::read_to_string(locator)?)
    }
}
