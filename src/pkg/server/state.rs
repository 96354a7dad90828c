use std::sync::Arc;

use crate::{
    conf::Settings,
    pkg::internal::{
        adaptors::jobs::{
            selectors::ensure_unique_ids,
            source::{FileJobSource, JobSource},
        },
        auth::{Authority, StaticAuthority},
    },
    prelude::{Error, Result},
};

#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobSource>,
    pub authority: Arc<dyn Authority>,
}

impl AppState {
    /// Builds state from settings and rejects a dataset with duplicate ids.
    pub async fn new(s: &Settings) -> Result<AppState> {
        let state = AppState::with(
            Arc::new(FileJobSource::new(&s.jobs_file)),
            Arc::new(StaticAuthority::from_settings(s)),
        );
        let jobs = state.jobs.load().await?;
        ensure_unique_ids(&jobs).map_err(Error::DuplicateJobId)?;
        tracing::info!("serving {} jobs from {}", jobs.len(), &s.jobs_file);
        Ok(state)
    }

    pub fn with(jobs: Arc<dyn JobSource>, authority: Arc<dyn Authority>) -> AppState {
        AppState { jobs, authority }
    }
}
