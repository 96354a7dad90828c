use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::{pkg::server::state::AppState, prelude::Result};

pub async fn authenticate(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if let Err(e) = state.authority.authorize(header) {
        tracing::warn!("token missing or invalid, authentication denied");
        return Err(e);
    }
    Ok(next.run(request).await)
}
