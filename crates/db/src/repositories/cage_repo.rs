//! Repository for the `cages` table.

use paddock_core::error::CoreError;
use paddock_core::placement;
use paddock_core::types::DbId;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::cage::{Cage, CageFilter, CreateCage};

/// Column list shared across queries. Occupancy is derived from the
/// dinosaur assignment relation on every read.
const COLUMNS: &str = "c.id, c.label, c.max_occupancy, \
    (SELECT COUNT(*) FROM dinosaurs d WHERE d.cage_id = c.id) AS occupancy, \
    c.has_power, c.created_at, c.updated_at";

/// Provides CRUD and power-state operations for cages.
pub struct CageRepo;

impl CageRepo {
    /// Insert a new cage, returning the created row.
    ///
    /// `has_power` defaults to `false`. A freshly created cage is
    /// necessarily empty, so occupancy is returned as a constant zero.
    pub async fn create(pool: &PgPool, input: &CreateCage) -> Result<Cage, sqlx::Error> {
        sqlx::query_as::<_, Cage>(
            "INSERT INTO cages (label, max_occupancy, has_power)
             VALUES ($1, $2, COALESCE($3, FALSE))
             RETURNING id, label, max_occupancy, 0::BIGINT AS occupancy,
                       has_power, created_at, updated_at",
        )
        .bind(&input.label)
        .bind(input.max_occupancy)
        .bind(input.has_power)
        .fetch_one(pool)
        .await
    }

    /// Find a cage by its label.
    pub async fn find_by_label(pool: &PgPool, label: &str) -> Result<Option<Cage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cages c WHERE c.label = $1");
        sqlx::query_as::<_, Cage>(&query)
            .bind(label)
            .fetch_optional(pool)
            .await
    }

    /// List cages, optionally filtered by power state. Ordered by id.
    pub async fn list(pool: &PgPool, filter: &CageFilter) -> Result<Vec<Cage>, sqlx::Error> {
        let mut query = format!("SELECT {COLUMNS} FROM cages c");
        if filter.has_power.is_some() {
            query.push_str(" WHERE c.has_power = $1");
        }
        query.push_str(" ORDER BY c.id");

        let mut q = sqlx::query_as::<_, Cage>(&query);
        if let Some(has_power) = filter.has_power {
            q = q.bind(has_power);
        }
        q.fetch_all(pool).await
    }

    /// Set a cage's power flag, enforcing the power-state rule.
    ///
    /// The cage row is locked for the duration of the transaction, so the
    /// occupancy check and the write are atomic against concurrent
    /// placements into the same cage.
    pub async fn set_power(pool: &PgPool, label: &str, power_on: bool) -> Result<Cage, DbError> {
        let mut tx = pool.begin().await?;

        let row: Option<(DbId, i64)> = sqlx::query_as(
            "SELECT c.id, (SELECT COUNT(*) FROM dinosaurs d WHERE d.cage_id = c.id)
             FROM cages c
             WHERE c.label = $1
             FOR UPDATE",
        )
        .bind(label)
        .fetch_optional(&mut *tx)
        .await?;
        let Some((id, occupancy)) = row else {
            return Err(CoreError::NotFound {
                entity: "Cage",
                key: label.to_string(),
            }
            .into());
        };

        placement::check_power_change(label, occupancy, power_on)?;

        sqlx::query("UPDATE cages SET has_power = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(power_on)
            .execute(&mut *tx)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM cages c WHERE c.id = $1");
        let cage = sqlx::query_as::<_, Cage>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::info!(cage = %label, power_on, "cage power state updated");
        Ok(cage)
    }
}
