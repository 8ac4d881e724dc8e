//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the query row
//! - `Deserialize` DTOs for the write operations on that entity
//! - Filter structs for list endpoints

pub mod cage;
pub mod dinosaur;
pub mod species;
