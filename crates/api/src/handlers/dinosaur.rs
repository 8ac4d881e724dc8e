//! Handlers for the `/dinosaurs` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use paddock_core::error::CoreError;
use paddock_db::models::dinosaur::{CreateDinosaur, Dinosaur, DinosaurFilter};
use paddock_db::repositories::DinosaurRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/dinosaurs
///
/// The species must exist in the registry and the name must be unused.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDinosaur>,
) -> AppResult<(StatusCode, Json<Dinosaur>)> {
    let dinosaur = DinosaurRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(dinosaur)))
}

/// GET /api/v1/dinosaurs
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<DinosaurFilter>,
) -> AppResult<Json<Vec<Dinosaur>>> {
    let dinosaurs = DinosaurRepo::list(&state.pool, &filter).await?;
    Ok(Json(dinosaurs))
}

/// GET /api/v1/dinosaurs/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Dinosaur>> {
    let dinosaur = DinosaurRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Dinosaur",
                key: name,
            })
        })?;
    Ok(Json(dinosaur))
}
