//! Route definitions for the `/cages` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::cage;
use crate::state::AppState;

/// Routes mounted at `/cages`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cage::list).post(cage::create))
        .route("/{label}", get(cage::get_by_label))
        .route("/{label}/power", put(cage::set_power))
        .route(
            "/{label}/dinosaurs",
            get(cage::list_dinosaurs).post(cage::assign_dinosaur),
        )
}
