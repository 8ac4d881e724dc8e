//! Repository for the `dinosaurs` table.

use paddock_core::error::CoreError;
use paddock_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::dinosaur::{CreateDinosaur, Dinosaur, DinosaurFilter};
use crate::repositories::SpeciesRepo;

/// Column list for the joined dinosaur row. Diet comes from the species
/// registry, the cage label from the (optional) assignment.
pub(crate) const COLUMNS: &str = "d.id, d.name, s.name AS species, s.diet, \
    c.label AS cage, d.created_at, d.updated_at";

/// Shared FROM clause joining the species registry and the cage assignment.
pub(crate) const JOINS: &str = "FROM dinosaurs d \
    JOIN species s ON s.id = d.species_id \
    LEFT OUTER JOIN cages c ON c.id = d.cage_id";

/// Provides create and read operations for dinosaurs.
pub struct DinosaurRepo;

impl DinosaurRepo {
    /// Insert a new dinosaur, returning the created row.
    ///
    /// The species must resolve in the registry (`InvalidSpecies`) and the
    /// name must be unused (`AlreadyExists`). The insert uses
    /// `ON CONFLICT DO NOTHING`, so a duplicate name surfaces as zero rows
    /// affected without mutating the existing record.
    pub async fn create(pool: &PgPool, input: &CreateDinosaur) -> Result<Dinosaur, DbError> {
        let species = SpeciesRepo::find_by_name(pool, &input.species)
            .await?
            .ok_or_else(|| CoreError::InvalidSpecies(input.species.clone()))?;

        let result = sqlx::query(
            "INSERT INTO dinosaurs (name, species_id) VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_dinosaurs_name DO NOTHING",
        )
        .bind(&input.name)
        .bind(species.id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::AlreadyExists {
                entity: "Dinosaur",
                key: input.name.clone(),
            }
            .into());
        }

        let dinosaur = Self::find_by_name(pool, &input.name).await?.ok_or_else(|| {
            CoreError::Internal(format!("dinosaur '{}' missing after insert", input.name))
        })?;
        tracing::info!(dinosaur = %dinosaur.name, species = %dinosaur.species, "dinosaur created");
        Ok(dinosaur)
    }

    /// Find a dinosaur by its name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Dinosaur>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {JOINS} WHERE d.name = $1");
        sqlx::query_as::<_, Dinosaur>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List dinosaurs with optional species, diet, and assignment filters.
    /// Ordered by id.
    pub async fn list(pool: &PgPool, filter: &DinosaurFilter) -> Result<Vec<Dinosaur>, sqlx::Error> {
        let mut clauses: Vec<String> = Vec::new();
        let mut next_param = 0usize;

        if filter.species.is_some() {
            next_param += 1;
            clauses.push(format!("s.name = ${next_param}"));
        }
        if filter.diet.is_some() {
            next_param += 1;
            clauses.push(format!("s.diet = ${next_param}"));
        }
        if let Some(needs_cage) = filter.needs_cage {
            clauses.push(if needs_cage {
                "d.cage_id IS NULL".to_string()
            } else {
                "d.cage_id IS NOT NULL".to_string()
            });
        }

        let mut query = format!("SELECT {COLUMNS} {JOINS}");
        if !clauses.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&clauses.join(" AND "));
        }
        query.push_str(" ORDER BY d.id");

        let mut q = sqlx::query_as::<_, Dinosaur>(&query);
        if let Some(species) = &filter.species {
            q = q.bind(species);
        }
        if let Some(diet) = &filter.diet {
            q = q.bind(diet);
        }
        q.fetch_all(pool).await
    }

    /// List the occupants of a cage, ordered by id.
    pub async fn list_by_cage(pool: &PgPool, cage_id: DbId) -> Result<Vec<Dinosaur>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {JOINS} WHERE d.cage_id = $1 ORDER BY d.id");
        sqlx::query_as::<_, Dinosaur>(&query)
            .bind(cage_id)
            .fetch_all(pool)
            .await
    }
}
