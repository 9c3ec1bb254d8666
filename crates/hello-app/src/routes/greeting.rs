//! Catch-all greeting endpoint.

use axum::Router;
use axum::extract::State;
use hello_core::clock::Clock;

use crate::state::AppState;

/// Text every greeting starts with.
pub const GREETING_PREFIX: &str = "Hello, the time is";

/// Build the greeting body for the current reading of `clock`.
#[must_use]
pub fn greeting_line(clock: &dyn Clock) -> String {
    format!("{GREETING_PREFIX} {}\n", hello_core::now(clock))
}

/// ANY /*
///
/// The clock is read when the request is handled, not when the router is
/// built.
pub async fn greet(State(state): State<AppState>) -> String {
    greeting_line(state.clock.as_ref())
}

/// Returns the greeting router. The handler is the fallback, so no path or
/// method is rejected.
pub fn router() -> Router<AppState> {
    Router::new().fallback(greet)
}
