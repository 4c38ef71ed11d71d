mod commands;
mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use dacg_catalog::config::{Config, CONFIG_FILE};
use dacg_catalog::SharedCatalog;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dacg")]
#[command(about = "Inspect the DACG vulnerability-checker metadata catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file (default: .dacg.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the metadata of the given checker ids (case-insensitive)
    Lookup {
        /// Checker ids to look up
        #[arg(required = true)]
        ids: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
    /// List every checker id in the catalog
    List {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Also show which resources were loaded or skipped
        #[arg(long)]
        report: bool,
    },
    /// Generate a default .dacg.toml config file
    Init,
}

#[derive(ValueEnum, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup { ids, format } => {
            let catalog = open_catalog(cli.config)?;
            commands::lookup::run(&catalog, &ids, format, cli.no_color)
        }
        Commands::List { format, report } => {
            let catalog = open_catalog(cli.config)?;
            commands::list::run(&catalog, format, report, cli.no_color)
        }
        Commands::Init => commands::init::run(),
    }
}

/// Load config, install logging and wire up the (not yet built) catalog.
/// A relative `resource_root` is resolved against the config file's directory.
fn open_catalog(config_path: Option<PathBuf>) -> anyhow::Result<SharedCatalog> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = Config::load(&config_path)?;
    init_logging(&config.logging.level);

    let base_dir = config_path.parent().unwrap_or(Path::new("."));
    Ok(config.catalog(base_dir))
}

/// Logs go to stderr; `RUST_LOG` overrides the configured level.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
