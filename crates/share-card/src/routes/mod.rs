//! Route definitions for the share-card service.
//!
//! ## Routes
//!
//! - `GET /api/share` - Share page with Open Graph tags and redirect
//! - `GET /health` - Health check (JSON)
//! - `GET /robots.txt` - Crawler instructions

mod health;
mod share;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::state::AppState;

/// Build the complete share-card router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/share", get(share::share_handler))
        .route("/health", get(health::health_check))
        .route("/robots.txt", get(robots_txt))
        .with_state(state)
}

/// Serve robots.txt allowing all crawlers.
///
/// Link-preview bots must be able to fetch share pages.
async fn robots_txt() -> impl IntoResponse {
    (
        [("content-type", "text/plain; charset=utf-8")],
        "User-agent: *\nAllow: /\n",
    )
}
