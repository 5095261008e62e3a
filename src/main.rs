//! Routes CLI - record and query bus route departures

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use routes::config;
use routes::output::OutputMode;
use routes::storage::RouteLedger;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "routes")]
#[command(version)]
#[command(about = "Departure ledger - record and query bus route departures")]
#[command(long_about = r#"
Routes keeps a small SQLite ledger of bus departures.

Example usage:
  routes add -n 12 -d "Central Station" -t 08:45
  routes display
  routes select -t 09:00
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// The database file name (defaults to ~/routes.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the ledger tables
    Init,

    /// Add a new route
    Add {
        /// The route number
        #[arg(short, long, allow_negative_numbers = true)]
        number: i64,

        /// The destination name
        #[arg(short, long)]
        destination: String,

        /// Departure time (hh:mm)
        #[arg(short, long)]
        time: String,
    },

    /// Display all routes
    Display,

    /// Select the routes departing after a given time
    Select {
        /// Lower bound (hh:mm), exclusive
        #[arg(short, long)]
        time: String,
    },

    /// Show row counts for the ledger
    Stats,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(e) = run(cli) {
        routes::ui::failure(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let output_mode = OutputMode::from_json_flag(cli.json);
    let loaded = config::load_config(cli.config.as_deref())?;
    let database = config::resolve_database_path(cli.db.as_deref(), loaded.as_ref());

    tracing::debug!("Using database {}", database.display());
    let mut ledger = RouteLedger::open(&database)?;

    match cli.command {
        Commands::Init => commands::run_init(&ledger, output_mode)?,

        Commands::Add { number, destination, time } => {
            tracing::debug!("Adding route {} to {:?}", number, destination);
            commands::run_add(&mut ledger, number, &destination, &time, output_mode)?
        }

        Commands::Display => commands::run_display(&ledger, output_mode)?,

        Commands::Select { time } => commands::run_select(&ledger, &time, output_mode)?,

        Commands::Stats => {
            commands::run_stats(&ledger, &database.display().to_string(), output_mode)?
        }
    }

    Ok(())
}
