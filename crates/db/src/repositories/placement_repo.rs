//! Transactional commit path for the placement engine.
//!
//! All reads and the single write run inside one transaction with the
//! target cage row locked, so the capacity, power, and compatibility
//! checks can never race with another placement into the same cage.

use paddock_core::error::CoreError;
use paddock_core::placement::{self, CageSnapshot, OccupantMix};
use paddock_core::types::DbId;
use paddock_core::Diet;
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::DbError;
use crate::models::dinosaur::Dinosaur;
use crate::repositories::dinosaur_repo::{COLUMNS, JOINS};

/// Runs the placement rules and commits assignments.
pub struct PlacementRepo;

impl PlacementRepo {
    /// Assign a dinosaur to a cage, enforcing the placement rules.
    ///
    /// Precondition order: dinosaur exists, cage exists, capacity, power,
    /// species compatibility. The first failure determines the error and
    /// nothing is written. On success the dinosaur's cage reference is
    /// overwritten in a single UPDATE and the placed row is returned.
    pub async fn assign_to_cage(
        pool: &PgPool,
        dinosaur_name: &str,
        cage_label: &str,
    ) -> Result<Dinosaur, DbError> {
        let mut tx = pool.begin().await?;

        // The dinosaur row is locked too, so two concurrent placements of
        // the same dinosaur serialize instead of both committing.
        let dinosaur: Option<(DbId, DbId, String)> = sqlx::query_as(
            "SELECT d.id, d.species_id, s.diet
             FROM dinosaurs d
             JOIN species s ON s.id = d.species_id
             WHERE d.name = $1
             FOR UPDATE OF d",
        )
        .bind(dinosaur_name)
        .fetch_optional(&mut *tx)
        .await?;
        let Some((dinosaur_id, species_id, diet)) = dinosaur else {
            return Err(CoreError::NotFound {
                entity: "Dinosaur",
                key: dinosaur_name.to_string(),
            }
            .into());
        };
        let diet: Diet = diet.parse()?;

        // Locking the cage row serializes every placement and power change
        // targeting this cage; the counts below are therefore stable until
        // commit.
        let cage: Option<(DbId, i32, bool)> = sqlx::query_as(
            "SELECT id, max_occupancy, has_power FROM cages WHERE label = $1 FOR UPDATE",
        )
        .bind(cage_label)
        .fetch_optional(&mut *tx)
        .await?;
        let Some((cage_id, max_occupancy, has_power)) = cage else {
            return Err(CoreError::NotFound {
                entity: "Cage",
                key: cage_label.to_string(),
            }
            .into());
        };

        let (occupancy, mix) = occupant_profile(&mut tx, cage_id, species_id).await?;

        let snapshot = CageSnapshot {
            label: cage_label.to_string(),
            max_occupancy,
            occupancy,
            has_power,
        };
        placement::check_assignment(&snapshot, diet, &mix)?;

        sqlx::query("UPDATE dinosaurs SET cage_id = $2, updated_at = NOW() WHERE id = $1")
            .bind(dinosaur_id)
            .bind(cage_id)
            .execute(&mut *tx)
            .await?;

        let query = format!("SELECT {COLUMNS} {JOINS} WHERE d.id = $1");
        let placed = sqlx::query_as::<_, Dinosaur>(&query)
            .bind(dinosaur_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(dinosaur = %dinosaur_name, cage = %cage_label, "dinosaur placed");
        Ok(placed)
    }
}

/// Fresh occupant counts for a cage, relative to the incoming species.
///
/// Returns the total occupancy plus the mix the compatibility rules need:
/// occupants of a different species and carnivorous occupants.
async fn occupant_profile(
    tx: &mut Transaction<'_, Postgres>,
    cage_id: DbId,
    incoming_species_id: DbId,
) -> Result<(i64, OccupantMix), sqlx::Error> {
    let (occupancy, other_species, carnivores): (i64, i64, i64) = sqlx::query_as(
        "SELECT COUNT(*),
                COUNT(*) FILTER (WHERE d.species_id <> $2),
                COUNT(*) FILTER (WHERE s.diet = $3)
         FROM dinosaurs d
         JOIN species s ON s.id = d.species_id
         WHERE d.cage_id = $1",
    )
    .bind(cage_id)
    .bind(incoming_species_id)
    .bind(Diet::Carnivore.as_str())
    .fetch_one(&mut **tx)
    .await?;

    Ok((
        occupancy,
        OccupantMix {
            other_species,
            carnivores,
        },
    ))
}
