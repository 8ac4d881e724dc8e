//! Repository for the `species` registry.

use sqlx::PgPool;

use crate::models::species::Species;

pub struct SpeciesRepo;

impl SpeciesRepo {
    /// Resolve a species by name. `None` means the species is not in the
    /// registry, which callers report as `InvalidSpecies`.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Species>, sqlx::Error> {
        sqlx::query_as::<_, Species>("SELECT id, name, diet FROM species WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
