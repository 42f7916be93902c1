mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use visadir_core::{AgencyStore, Catalog, Locale, MessageCatalog, SortOption};

#[derive(Debug, Parser)]
#[command(name = "visadir-cli")]
#[command(about = "Query the Thailand visa agency directory")]
struct Cli {
    /// Agency fixture to load instead of `VISADIR_AGENCIES_PATH`
    #[arg(long, global = true)]
    agencies: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every city with at least one agency location
    Cities,
    /// List catalog service keys offered by at least one agency
    Services,
    /// List search categories visible in a locale
    Categories {
        #[arg(long, default_value = "en")]
        locale: Locale,
    },
    /// List the services of one category
    CategoryServices {
        category: String,
        #[arg(long, default_value = "en")]
        locale: Locale,
    },
    /// List agencies, optionally by city and catalog service key
    Agencies {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        service: Option<String>,
    },
    /// Show one agency by slug
    Show { slug: String },
    /// Run a search the way the search form submits it
    Search {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "")]
        city: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        service: String,
        #[arg(long, default_value = "en")]
        locale: Locale,
        #[arg(long, default_value = "featured")]
        sort: SortOption,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        verified_only: bool,
    },
    /// Load and validate the agency fixture
    Validate,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = visadir_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("visadir-cli ready; run with --help for commands");
        return Ok(());
    };

    let path = cli.agencies.unwrap_or(config.agencies_path);
    let catalog = Catalog::new(AgencyStore::from_path(&path)?);
    let messages = MessageCatalog::bundled()?;

    let output = commands::run(&command, &catalog, &messages, config.search_default_limit)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
