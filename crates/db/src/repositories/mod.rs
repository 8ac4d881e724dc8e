//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Plain CRUD methods return
//! `sqlx::Error`; rule-enforcing methods return [`crate::DbError`].

pub mod cage_repo;
pub mod dinosaur_repo;
pub mod placement_repo;
pub mod species_repo;

pub use cage_repo::CageRepo;
pub use dinosaur_repo::DinosaurRepo;
pub use placement_repo::PlacementRepo;
pub use species_repo::SpeciesRepo;
