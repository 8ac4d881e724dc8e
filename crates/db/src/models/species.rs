//! Species registry model.

use paddock_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `species` registry. Immutable reference data.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Species {
    pub id: DbId,
    pub name: String,
    pub diet: String,
}
