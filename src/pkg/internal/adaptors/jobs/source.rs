use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;

use crate::{pkg::internal::adaptors::jobs::spec::JobEntry, prelude::Result};

/// Read-only origin of the job collection.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn load(&self) -> Result<Vec<JobEntry>>;
}

/// Re-reads and parses the JSON file on every call.
#[derive(Debug, Clone)]
pub struct FileJobSource {
    path: PathBuf,
}

impl FileJobSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileJobSource { path: path.into() }
    }
}

#[async_trait]
impl JobSource for FileJobSource {
    async fn load(&self) -> Result<Vec<JobEntry>> {
        let data = tokio::fs::read_to_string(&self.path).await?;
        let jobs: Vec<JobEntry> = serde_json::from_str(&data)?;
        tracing::debug!("loaded {} jobs from {}", jobs.len(), self.path.display());
        Ok(jobs)
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryJobSource {
    jobs: Arc<Vec<JobEntry>>,
}

#[cfg(test)]
impl MemoryJobSource {
    pub fn new(jobs: Vec<JobEntry>) -> Self {
        MemoryJobSource {
            jobs: Arc::new(jobs),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl JobSource for MemoryJobSource {
    async fn load(&self) -> Result<Vec<JobEntry>> {
        Ok(self.jobs.as_ref().clone())
    }
}
