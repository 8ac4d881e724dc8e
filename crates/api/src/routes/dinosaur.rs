//! Route definitions for the `/dinosaurs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::dinosaur;
use crate::state::AppState;

/// Routes mounted at `/dinosaurs`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dinosaur::list).post(dinosaur::create))
        .route("/{name}", get(dinosaur::get_by_name))
}
