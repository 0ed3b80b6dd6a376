//! Evidex Web Server
//!
//! Axum-based server for the dashboard shell. Full pages select a shell from
//! auth presence; HTMX fragment routes re-render individual panels.

pub mod auth;
pub mod extract;
pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // HTMX fragment routes; each senses its own embed/auth signals.
    let partial_routes = Router::new()
        .route("/partials/welcome", get(routes::partials::welcome))
        .route("/partials/suggestions", get(routes::partials::suggestions))
        .route(
            "/partials/missing-evidence",
            get(routes::partials::missing_evidence),
        )
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::pages::index))
        .route("/health", get(routes::health::health))
        .route("/static/evidex.css", get(routes::assets::stylesheet))
        .merge(partial_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
