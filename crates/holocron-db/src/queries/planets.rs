//! Database query functions for the `planets` table.
//!
//! Unlike most of the crate these return raw [`sqlx::Error`]: the domain
//! layer inspects SQLSTATE codes (unique violations in particular) to turn
//! driver errors into typed outcomes, so the error must not be wrapped here.

use sqlx::PgPool;
use uuid::Uuid;

use crate::filter::PlanetFilter;
use crate::models::Planet;

/// Parameters for inserting a new planet row.
#[derive(Debug, Clone)]
pub struct NewPlanet<'a> {
    pub name: &'a str,
    pub climate: &'a str,
    pub terrain: &'a str,
}

/// Insert a new planet row. Returns the inserted planet with
/// server-generated defaults (id, created_at).
///
/// A planet with a name that already exists is rejected via the UNIQUE
/// constraint; the violation surfaces as a database error with SQLSTATE
/// 23505.
pub async fn insert_planet(pool: &PgPool, new: &NewPlanet<'_>) -> Result<Planet, sqlx::Error> {
    sqlx::query_as::<_, Planet>(
        "INSERT INTO planets (name, climate, terrain) \
         VALUES ($1, $2, $3) \
         RETURNING *",
    )
    .bind(new.name)
    .bind(new.climate)
    .bind(new.terrain)
    .fetch_one(pool)
    .await
}

/// Fetch a planet by its ID.
pub async fn get_planet(pool: &PgPool, id: Uuid) -> Result<Option<Planet>, sqlx::Error> {
    sqlx::query_as::<_, Planet>("SELECT * FROM planets WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Fetch a planet by its unique name (exact match).
pub async fn get_planet_by_name(pool: &PgPool, name: &str) -> Result<Option<Planet>, sqlx::Error> {
    sqlx::query_as::<_, Planet>("SELECT * FROM planets WHERE name = $1")
        .bind(name)
        .fetch_optional(pool)
        .await
}

/// List planets matching the filter, in insertion order.
///
/// One static statement per populated-field combination; each populated
/// field constrains with case-insensitive equality, unpopulated fields not
/// at all.
pub async fn list_planets(
    pool: &PgPool,
    filter: &PlanetFilter,
) -> Result<Vec<Planet>, sqlx::Error> {
    match (filter.climate.as_deref(), filter.terrain.as_deref()) {
        (None, None) => {
            sqlx::query_as::<_, Planet>("SELECT * FROM planets ORDER BY created_at")
                .fetch_all(pool)
                .await
        }
        (Some(climate), None) => {
            sqlx::query_as::<_, Planet>(
                "SELECT * FROM planets \
                 WHERE lower(climate) = lower($1) \
                 ORDER BY created_at",
            )
            .bind(climate)
            .fetch_all(pool)
            .await
        }
        (None, Some(terrain)) => {
            sqlx::query_as::<_, Planet>(
                "SELECT * FROM planets \
                 WHERE lower(terrain) = lower($1) \
                 ORDER BY created_at",
            )
            .bind(terrain)
            .fetch_all(pool)
            .await
        }
        (Some(climate), Some(terrain)) => {
            sqlx::query_as::<_, Planet>(
                "SELECT * FROM planets \
                 WHERE lower(climate) = lower($1) AND lower(terrain) = lower($2) \
                 ORDER BY created_at",
            )
            .bind(climate)
            .bind(terrain)
            .fetch_all(pool)
            .await
        }
    }
}

/// Delete a planet by ID. Returns the number of rows removed (0 or 1); the
/// caller decides whether 0 is an error.
pub async fn delete_planet(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM planets WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Count all planet rows.
pub async fn count_planets(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM planets")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
