//! The `holocron seed` command: load the classic fixture planets.

use anyhow::Result;
use sqlx::PgPool;

use holocron_core::planet::{self, NewPlanet, PlanetError};

/// The classic trio every fresh catalog starts from.
const CLASSIC_PLANETS: [(&str, &str, &str); 3] = [
    ("Tatooine", "arid", "desert"),
    ("Alderaan", "temperate", "grasslands, mountains"),
    ("Yavin IV", "temperate, tropical", "jungle, rainforests"),
];

/// Insert the classic planets. Names that already exist are reported and
/// skipped rather than treated as failures, so seeding is safe to re-run.
pub async fn run_seed(pool: &PgPool) -> Result<()> {
    let mut added = 0;
    for (name, climate, terrain) in CLASSIC_PLANETS {
        let result = planet::create_planet(
            pool,
            &NewPlanet {
                name,
                climate,
                terrain,
            },
        )
        .await;

        match result {
            Ok(planet) => {
                println!("  added {} ({})", planet.name, planet.id);
                added += 1;
            }
            Err(PlanetError::DuplicateName(_)) => {
                println!("  {name} already present, skipping");
            }
            Err(err) => return Err(err.into()),
        }
    }

    println!();
    println!("Seed complete: {added} planet(s) added.");
    Ok(())
}
