//! Operator CLI handlers for `holocron planet` subcommands.
//!
//! Implements:
//! - `holocron planet add <name> --climate C --terrain T`
//! - `holocron planet show <id>` / `holocron planet show --name <name>`
//! - `holocron planet list [--climate C] [--terrain T]`
//! - `holocron planet remove <id>`

use anyhow::{Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use holocron_core::planet::{self, NewPlanet};
use holocron_db::models::Planet;

use crate::PlanetCommands;

// -----------------------------------------------------------------------
// Public entry point
// -----------------------------------------------------------------------

/// Dispatch a `PlanetCommands` variant to the appropriate handler.
pub async fn run_planet_command(command: PlanetCommands, pool: &PgPool) -> Result<()> {
    match command {
        PlanetCommands::Add {
            name,
            climate,
            terrain,
        } => cmd_add(pool, &name, &climate, &terrain).await,
        PlanetCommands::Show { id, name } => match (id, name) {
            (Some(id), None) => cmd_show_by_id(pool, &id).await,
            (None, Some(name)) => cmd_show_by_name(pool, &name).await,
            _ => anyhow::bail!("provide a planet ID or --name <name>"),
        },
        PlanetCommands::List { climate, terrain } => {
            cmd_list(pool, climate.as_deref(), terrain.as_deref()).await
        }
        PlanetCommands::Remove { id } => cmd_remove(pool, &id).await,
    }
}

fn parse_planet_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).with_context(|| format!("invalid planet ID: {id}"))
}

fn print_planet(planet: &Planet) {
    println!("  ID:      {}", planet.id);
    println!("  Name:    {}", planet.name);
    println!("  Climate: {}", planet.climate);
    println!("  Terrain: {}", planet.terrain);
    println!("  Added:   {}", planet.created_at);
}

// -----------------------------------------------------------------------
// holocron planet add
// -----------------------------------------------------------------------

async fn cmd_add(pool: &PgPool, name: &str, climate: &str, terrain: &str) -> Result<()> {
    let planet = planet::create_planet(
        pool,
        &NewPlanet {
            name,
            climate,
            terrain,
        },
    )
    .await?;

    println!("Planet added.");
    println!();
    print_planet(&planet);

    Ok(())
}

// -----------------------------------------------------------------------
// holocron planet show
// -----------------------------------------------------------------------

async fn cmd_show_by_id(pool: &PgPool, id: &str) -> Result<()> {
    let id = parse_planet_id(id)?;
    match planet::get_planet(pool, id).await? {
        Some(planet) => print_planet(&planet),
        None => println!("No planet with ID {id}."),
    }
    Ok(())
}

async fn cmd_show_by_name(pool: &PgPool, name: &str) -> Result<()> {
    match planet::get_planet_by_name(pool, name).await? {
        Some(planet) => print_planet(&planet),
        None => println!("No planet named {name:?}."),
    }
    Ok(())
}

// -----------------------------------------------------------------------
// holocron planet list
// -----------------------------------------------------------------------

async fn cmd_list(pool: &PgPool, climate: Option<&str>, terrain: Option<&str>) -> Result<()> {
    let planets = planet::list_planets(pool, climate, terrain).await?;

    if planets.is_empty() {
        println!("No planets found. Use `holocron planet add` or `holocron seed`.");
        return Ok(());
    }

    println!("{:<38} {:<20} {:<24} {}", "ID", "NAME", "CLIMATE", "TERRAIN");
    for p in &planets {
        println!("{:<38} {:<20} {:<24} {}", p.id, p.name, p.climate, p.terrain);
    }
    println!();
    println!("{} planet(s).", planets.len());

    Ok(())
}

// -----------------------------------------------------------------------
// holocron planet remove
// -----------------------------------------------------------------------

async fn cmd_remove(pool: &PgPool, id: &str) -> Result<()> {
    let id = parse_planet_id(id)?;
    planet::remove_planet(pool, id).await?;
    println!("Planet {id} removed.");
    Ok(())
}
