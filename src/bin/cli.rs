//! logpatterns CLI
//!
//! Command-line interface for a file-backed pattern table.

use clap::{Parser, Subcommand};
use logpatterns::{Config, FileStore, PatternTable, Registry};
use tracing_subscriber::{fmt, EnvFilter};

/// logpatterns CLI
#[derive(Parser, Debug)]
#[command(name = "logpatterns-cli")]
#[command(about = "Manage and query logger-name patterns and their levels")]
#[command(version)]
struct Args {
    /// File holding the pattern table
    #[arg(short, long, default_value = "./logpatterns.json")]
    file: String,

    /// Level reported when a matching pattern has none
    #[arg(short, long, default_value = logpatterns::DEFAULT_LEVEL)]
    default_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the stored table as JSON
    Show,

    /// Replace the whole table
    Set {
        /// Entries as PATTERN=LEVEL; PATTERN or PATTERN= leaves the level unset
        entries: Vec<String>,
    },

    /// Print whether any pattern matches a name
    Match {
        /// The name to test
        name: String,
    },

    /// Print the level for a name
    Level {
        /// The name to resolve
        name: String,
    },

    /// Delete the stored table
    Reset,
}

/// "foo*=warn" -> ("foo*", Some("warn")), "foo" / "foo=" -> ("foo", None)
fn parse_entry(entry: &str) -> (&str, Option<&str>) {
    match entry.split_once('=') {
        Some((pattern, "")) => (pattern, None),
        Some((pattern, level)) => (pattern, Some(level)),
        None => (entry, None),
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,logpatterns=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .default_level(&args.default_level)
        .store_path(&args.file)
        .build();

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        std::process::exit(2);
    }

    tracing::debug!("Pattern store: {}", config.store_path.display());

    let store = FileStore::new(config.store_path.clone());
    let registry = Registry::with_config(store, config);

    match args.command {
        Commands::Show => match registry.get().to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!("Failed to render patterns: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Set { entries } => {
            let table: PatternTable = entries.iter().map(|e| parse_entry(e)).collect();
            if let Err(e) = registry.try_set(&table) {
                tracing::error!("Failed to store patterns: {}", e);
                std::process::exit(1);
            }
            tracing::info!("Stored {} pattern(s)", table.len());
        }
        Commands::Match { name } => println!("{}", registry.matches(&name)),
        Commands::Level { name } => println!("{}", registry.level(&name)),
        Commands::Reset => {
            registry.reset();
            tracing::info!("Pattern store reset");
        }
    }
}
