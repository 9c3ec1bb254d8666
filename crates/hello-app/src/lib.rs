//! hello_app — an HTTP service that answers every request with the current
//! time and prints a heartbeat to stdout every five seconds.

pub mod config;
pub mod error;
pub mod heartbeat;
pub mod routes;
pub mod server;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
///
/// The greeting handler is installed as the fallback, so it answers every
/// path and every method.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::greeting::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
