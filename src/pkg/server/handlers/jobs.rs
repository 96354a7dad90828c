use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::{
    pkg::{
        internal::adaptors::jobs::{
            selectors::{JobSelector, PageRequest},
            spec::{JobEntry, JobPage},
        },
        server::state::AppState,
    },
    prelude::{Error, Result},
};

#[derive(Deserialize, Default)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

impl ListQuery {
    pub fn page_request(&self) -> Result<PageRequest> {
        let defaults = PageRequest::default();
        Ok(PageRequest {
            page: positive("page", self.page.as_deref(), defaults.page)?,
            limit: positive("limit", self.limit.as_deref(), defaults.limit)?,
        })
    }
}

fn positive(name: &str, raw: Option<&str>, default: u32) -> Result<u32> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(default);
    };
    match raw.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::InvalidQuery(format!(
            "{name} must be a positive integer"
        ))),
    }
}

pub async fn list(
    State(state): State<AppState>,
    params: std::result::Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<JobPage>> {
    let Query(params) = params.map_err(|e| Error::InvalidQuery(e.body_text()))?;
    let req = params.page_request()?;
    let jobs = state.jobs.load().await?;
    let page = JobSelector::new(&jobs).list(params.search.as_deref(), req);
    tracing::debug!(
        "page {}/{} for search {:?}, {} jobs",
        req.page,
        page.pagination.total_pages,
        params.search,
        page.jobs.len()
    );
    Ok(Json(page))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobEntry>> {
    let id = id.parse::<u32>().map_err(|_| Error::JobNotFound)?;
    let jobs = state.jobs.load().await?;
    JobSelector::new(&jobs)
        .get_by_id(id)
        .cloned()
        .map(Json)
        .ok_or(Error::JobNotFound)
}
