//! Handlers for the `/cages` resource.
//!
//! Cages are identified by their caller-assigned label in every route:
//! `/cages/{label}`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use paddock_core::error::CoreError;
use paddock_db::models::cage::{Cage, CageFilter, CreateCage, SetCagePower};
use paddock_db::models::dinosaur::{AssignDinosaur, Dinosaur};
use paddock_db::repositories::{CageRepo, DinosaurRepo, PlacementRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/cages
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCage>,
) -> AppResult<(StatusCode, Json<Cage>)> {
    if input.max_occupancy < 1 {
        return Err(AppError::Core(CoreError::Validation(
            "max_occupancy must be at least 1".to_string(),
        )));
    }
    let cage = CageRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(cage)))
}

/// GET /api/v1/cages
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<CageFilter>,
) -> AppResult<Json<Vec<Cage>>> {
    let cages = CageRepo::list(&state.pool, &filter).await?;
    Ok(Json(cages))
}

/// GET /api/v1/cages/{label}
pub async fn get_by_label(
    State(state): State<AppState>,
    Path(label): Path<String>,
) -> AppResult<Json<Cage>> {
    let cage = CageRepo::find_by_label(&state.pool, &label)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Cage",
                key: label,
            })
        })?;
    Ok(Json(cage))
}

/// PUT /api/v1/cages/{label}/power
///
/// Powering off is rejected while the cage is occupied.
pub async fn set_power(
    State(state): State<AppState>,
    Path(label): Path<String>,
    Json(input): Json<SetCagePower>,
) -> AppResult<Json<Cage>> {
    let cage = CageRepo::set_power(&state.pool, &label, input.has_power).await?;
    Ok(Json(cage))
}

/// GET /api/v1/cages/{label}/dinosaurs
pub async fn list_dinosaurs(
    State(state): State<AppState>,
    Path(label): Path<String>,
) -> AppResult<Json<Vec<Dinosaur>>> {
    let cage = CageRepo::find_by_label(&state.pool, &label)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Cage",
                key: label,
            })
        })?;
    let dinosaurs = DinosaurRepo::list_by_cage(&state.pool, cage.id).await?;
    Ok(Json(dinosaurs))
}

/// POST /api/v1/cages/{label}/dinosaurs
///
/// Assigns the named dinosaur to this cage, subject to the placement rules.
pub async fn assign_dinosaur(
    State(state): State<AppState>,
    Path(label): Path<String>,
    Json(input): Json<AssignDinosaur>,
) -> AppResult<(StatusCode, Json<Dinosaur>)> {
    let placed = PlacementRepo::assign_to_cage(&state.pool, &input.name, &label).await?;
    Ok((StatusCode::CREATED, Json(placed)))
}
