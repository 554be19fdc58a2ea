mod config;
mod planet_cmds;
mod seed_cmd;
mod serve_cmd;
#[cfg(test)]
mod test_util;

use clap::{Parser, Subcommand};

use holocron_db::pool;
use holocron_db::queries::planets;

use config::HolocronConfig;

#[derive(Parser)]
#[command(name = "holocron", about = "Planet catalog service")]
struct Cli {
    /// Database URL (overrides HOLOCRON_DATABASE_URL env var)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a holocron config file (no database required)
    Init {
        /// PostgreSQL connection URL
        #[arg(long, default_value = "postgresql://localhost:5432/holocron")]
        db_url: String,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Initialize the holocron database (create it and run migrations)
    DbInit,
    /// Run the HTTP API server
    Serve {
        /// Address to bind (overrides the config file)
        #[arg(long)]
        bind: Option<String>,
        /// Port to listen on (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Load the classic fixture planets into the catalog
    Seed,
    /// Planet management
    Planet {
        #[command(subcommand)]
        command: PlanetCommands,
    },
}

#[derive(Subcommand)]
pub enum PlanetCommands {
    /// Add a planet to the catalog
    Add {
        /// Unique planet name
        name: String,
        /// Climate description (e.g. "temperate, tropical")
        #[arg(long)]
        climate: String,
        /// Terrain description (e.g. "jungle, rainforests")
        #[arg(long)]
        terrain: String,
    },
    /// Show a planet by ID or by name
    Show {
        /// Planet ID to show
        id: Option<String>,
        /// Look up by name instead of ID
        #[arg(long, conflicts_with = "id")]
        name: Option<String>,
    },
    /// List planets, optionally filtered by climate and/or terrain
    List {
        /// Only planets with this climate (case-insensitive)
        #[arg(long)]
        climate: Option<String>,
        /// Only planets with this terrain (case-insensitive)
        #[arg(long)]
        terrain: Option<String>,
    },
    /// Remove a planet by ID
    Remove {
        /// Planet ID to remove
        id: String,
    },
}

/// Execute the `holocron init` command: write config file.
fn cmd_init(db_url: &str, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        database: config::DatabaseSection {
            url: db_url.to_string(),
        },
        server: config::ServerSection::default(),
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  database.url = {db_url}");
    println!("  server       = {}:{}", cfg.server.bind, cfg.server.port);
    println!();
    println!("Next: run `holocron db-init` to create and migrate the database.");

    Ok(())
}

/// Execute the `holocron db-init` command: create database and run
/// migrations.
async fn cmd_db_init(cli_db_url: Option<&str>) -> anyhow::Result<()> {
    let resolved = HolocronConfig::resolve(cli_db_url)?;

    println!("Initializing holocron database...");

    // 1. Create the database if it does not exist.
    pool::ensure_database_exists(&resolved.db_config).await?;

    // 2. Connect to the target database.
    let db_pool = pool::create_pool(&resolved.db_config).await?;

    // 3. Run migrations.
    pool::run_migrations(&db_pool).await?;

    // 4. Print success with the planet count.
    let count = planets::count_planets(&db_pool).await?;
    println!("Database ready. planets: {count} rows");

    // 5. Clean shutdown.
    db_pool.close().await;

    println!("holocron db-init complete.");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { db_url, force } => {
            cmd_init(&db_url, force)?;
        }
        Commands::DbInit => {
            cmd_db_init(cli.database_url.as_deref()).await?;
        }
        Commands::Serve { bind, port } => {
            let resolved = HolocronConfig::resolve(cli.database_url.as_deref())?;
            let bind = bind.unwrap_or_else(|| resolved.server.bind.clone());
            let port = port.unwrap_or(resolved.server.port);
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = serve_cmd::run_serve(db_pool.clone(), &bind, port).await;
            db_pool.close().await;
            result?;
        }
        Commands::Seed => {
            let resolved = HolocronConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = seed_cmd::run_seed(&db_pool).await;
            db_pool.close().await;
            result?;
        }
        Commands::Planet { command } => {
            let resolved = HolocronConfig::resolve(cli.database_url.as_deref())?;
            let db_pool = pool::create_pool(&resolved.db_config).await?;
            let result = planet_cmds::run_planet_command(command, &db_pool).await;
            db_pool.close().await;
            result?;
        }
    }

    Ok(())
}
