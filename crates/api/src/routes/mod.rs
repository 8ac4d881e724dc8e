pub mod cage;
pub mod dinosaur;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /cages                      list (?has_power=), create
/// /cages/{label}              get (with derived occupancy)
/// /cages/{label}/power        set power state (PUT, rule-guarded)
/// /cages/{label}/dinosaurs    list occupants, assign dinosaur (POST)
///
/// /dinosaurs                  list (?species=&diet=&needs_cage=), create
/// /dinosaurs/{name}           get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/cages", cage::router())
        .nest("/dinosaurs", dinosaur::router())
}
