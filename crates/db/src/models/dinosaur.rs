//! Dinosaur entity model and DTOs.

use paddock_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A dinosaur joined with its species registry entry and cage label.
///
/// Diet is derived transitively through the species, never stored on the
/// dinosaur row itself.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dinosaur {
    pub id: DbId,
    pub name: String,
    pub species: String,
    pub diet: String,
    /// Label of the assigned cage; `None` while awaiting placement.
    pub cage: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new dinosaur. The species must exist in the registry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDinosaur {
    pub name: String,
    pub species: String,
}

/// Filters for listing dinosaurs (`?species=&diet=&needs_cage=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DinosaurFilter {
    pub species: Option<String>,
    pub diet: Option<String>,
    /// `true` selects dinosaurs awaiting a cage, `false` the assigned ones.
    pub needs_cage: Option<bool>,
}

/// Request body for assigning a dinosaur to a cage.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignDinosaur {
    pub name: String,
}
