//! Planet operations: create, get, get-by-name, list, remove.
//!
//! Each operation is a single request against storage; there is no session
//! state and no retry policy. Storage failures are re-signalled to the
//! caller, never swallowed; the transport layer owns the translation into
//! status codes.

use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use holocron_db::filter::PlanetFilter;
use holocron_db::models::Planet;
use holocron_db::queries::planets;

pub use holocron_db::queries::planets::NewPlanet;

/// Errors that can occur during planet operations.
#[derive(Debug, Error)]
pub enum PlanetError {
    /// A required field was empty or whitespace-only.
    #[error("planet {0} must not be empty")]
    EmptyField(&'static str),

    /// The planet name is already taken by a persisted planet.
    #[error("planet name {0:?} already exists")]
    DuplicateName(String),

    /// No planet with the given id exists.
    #[error("planet {0} not found")]
    NotFound(Uuid),

    /// Any other storage failure, propagated as-is.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Validate that every required field is non-blank.
fn validate(new: &NewPlanet<'_>) -> Result<(), PlanetError> {
    for (field, value) in [
        ("name", new.name),
        ("climate", new.climate),
        ("terrain", new.terrain),
    ] {
        if value.trim().is_empty() {
            return Err(PlanetError::EmptyField(field));
        }
    }
    Ok(())
}

/// True when the error is a PostgreSQL unique-constraint violation.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

/// Create a planet. Returns the persisted planet including the assigned id.
///
/// Fails with [`PlanetError::EmptyField`] before touching storage when a
/// required field is blank, and with [`PlanetError::DuplicateName`] when the
/// name is already taken (detected via the table's unique constraint, so
/// concurrent creates cannot both win).
pub async fn create_planet(pool: &PgPool, new: &NewPlanet<'_>) -> Result<Planet, PlanetError> {
    validate(new)?;

    match planets::insert_planet(pool, new).await {
        Ok(planet) => {
            tracing::info!(id = %planet.id, name = %planet.name, "planet created");
            Ok(planet)
        }
        Err(err) if is_unique_violation(&err) => {
            Err(PlanetError::DuplicateName(new.name.to_owned()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Fetch a planet by id. Absence is `Ok(None)`, not an error.
pub async fn get_planet(pool: &PgPool, id: Uuid) -> Result<Option<Planet>, PlanetError> {
    Ok(planets::get_planet(pool, id).await?)
}

/// Fetch a planet by its unique name. Same absence semantics as
/// [`get_planet`].
pub async fn get_planet_by_name(pool: &PgPool, name: &str) -> Result<Option<Planet>, PlanetError> {
    Ok(planets::get_planet_by_name(pool, name).await?)
}

/// List planets matching whichever of climate/terrain are supplied.
///
/// Blank arguments are treated as absent; with neither supplied every
/// persisted planet is returned. Re-running the same query observes current
/// state, and an empty result is not an error.
pub async fn list_planets(
    pool: &PgPool,
    climate: Option<&str>,
    terrain: Option<&str>,
) -> Result<Vec<Planet>, PlanetError> {
    let filter = PlanetFilter::new(climate, terrain);
    Ok(planets::list_planets(pool, &filter).await?)
}

/// Remove a planet by id.
///
/// Fails with [`PlanetError::NotFound`] when no such planet exists; the
/// caller decides what that means (the HTTP layer maps it to 404).
pub async fn remove_planet(pool: &PgPool, id: Uuid) -> Result<(), PlanetError> {
    let removed = planets::delete_planet(pool, id).await?;

    if removed == 0 {
        return Err(PlanetError::NotFound(id));
    }

    tracing::info!(%id, "planet removed");
    Ok(())
}
