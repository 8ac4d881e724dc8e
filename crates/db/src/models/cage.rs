//! Cage entity model and DTOs.

use paddock_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cages` table, with derived occupancy.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cage {
    pub id: DbId,
    pub label: String,
    pub max_occupancy: i32,
    /// Count of dinosaurs currently assigned. Computed per query from the
    /// assignment relation, never stored.
    pub occupancy: i64,
    pub has_power: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new cage.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCage {
    pub label: String,
    pub max_occupancy: i32,
    /// Defaults to `false` if omitted.
    pub has_power: Option<bool>,
}

/// Filters for listing cages (`?has_power=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CageFilter {
    pub has_power: Option<bool>,
}

/// Request body for toggling a cage's power flag.
#[derive(Debug, Clone, Deserialize)]
pub struct SetCagePower {
    pub has_power: bool,
}
