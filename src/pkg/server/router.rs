use axum::middleware::from_fn_with_state;
use axum::routing::post;
use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use super::handlers;
use super::handlers::auth::login;
use super::handlers::probes::{healthz, livez};
use super::middlewares::authn;
use super::state::AppState;

pub fn build_routes(state: AppState, static_dir: Option<&str>) -> Router {
    let mut app = Router::new()
        .route("/jobs", get(handlers::jobs::list))
        .route("/jobs/{id}", get(handlers::jobs::retrieve))
        .route_layer(from_fn_with_state(state.clone(), authn::authenticate))
        .route("/auth/login", post(login))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez));
    if let Some(dir) = static_dir {
        tracing::info!("serving static files from {}", dir);
        app = app.fallback_service(ServeDir::new(dir));
    }
    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
