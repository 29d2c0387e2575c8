//! Brokerage CLI - demo walkthrough and catalog seeds
//!
//! Thin driver over the `brokerage` library; no domain rules live here.

mod config;
mod demo;

use anyhow::{Context, Result};
use brokerage::{CatalogSeed, PropertyCategory, PropertySearchFilter, SeededCatalog};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use config::Config;

#[derive(Parser)]
#[command(name = "brokerage")]
#[command(about = "Brokerage CLI - properties, agents and the catalog", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.config/brokerage/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted walkthrough on sample data
    Demo,

    /// Load a catalog seed and list or search it
    Catalog {
        /// Seed file (TOML); falls back to default_seed from the config
        #[arg(short, long)]
        seed: Option<PathBuf>,
        /// Exact property type, e.g. "Warehouse"
        #[arg(short = 't', long = "type")]
        property_type: Option<String>,
        /// Substring of the address (case-sensitive)
        #[arg(short, long)]
        address: Option<String>,
        /// Maximum selling price (inclusive)
        #[arg(short, long)]
        max_price: Option<f64>,
        /// residential or commercial
        #[arg(short, long)]
        category: Option<PropertyCategory>,
        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the resolved configuration
    Show,
    /// Write a default config file if none exists
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;

    init_tracing(&config);

    match cli.command {
        Commands::Demo => cmd_demo(),
        Commands::Catalog {
            seed,
            property_type,
            address,
            max_price,
            category,
            json,
        } => {
            let filter = PropertySearchFilter {
                property_type,
                address,
                max_price,
                category,
            };
            cmd_catalog(&config, seed, filter, json)
        }
        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => cmd_config(&config, &config_path),
            ConfigAction::Init => cmd_config_init(&config_path),
        },
    }
}

/// RUST_LOG wins over the configured filter
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

// ============================================
// Command Implementations
// ============================================

fn cmd_demo() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run(&mut out)?;
    writeln!(out, "\n===========================================\n")?;
    Ok(())
}

fn load_seed(path: &Path, config: &Config) -> Result<SeededCatalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed from {:?}", path))?;

    let seed = CatalogSeed::from_toml_str(&content)
        .with_context(|| format!("Failed to parse seed file {:?}", path))?;

    let catalog = seed
        .into_catalog(config.catalog_policy())
        .with_context(|| format!("Failed to build catalog from {:?}", path))?;

    Ok(catalog)
}

fn cmd_catalog(
    config: &Config,
    seed: Option<PathBuf>,
    filter: PropertySearchFilter,
    json: bool,
) -> Result<()> {
    let seed_path = seed
        .or_else(|| config.default_seed.clone())
        .context("No seed given. Use --seed <FILE> or set default_seed in the config.")?;

    let catalog = load_seed(&seed_path, config)?;

    // Unfiltered listings are ordered by price; searches keep catalog order.
    let properties = if filter.is_empty() {
        catalog.manager.properties_sorted_by_price()?
    } else {
        catalog.manager.search_properties(&filter)?
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&properties).context("Failed to serialize properties")?
        );
        return Ok(());
    }

    if properties.is_empty() {
        println!("No properties found.");
        return Ok(());
    }

    println!(
        "{} of {} properties:",
        properties.len().to_string().green(),
        catalog.manager.count()?
    );
    for property in &properties {
        println!("{}", property);
    }

    if !catalog.agents.is_empty() {
        println!("\n{}", "Agents:".bold());
        for agent in &catalog.agents {
            println!(
                "  {} {} {}",
                agent.agent_id().to_string().dimmed(),
                agent.name().cyan(),
                agent.email().dimmed()
            );
        }
    }

    Ok(())
}

fn cmd_config(config: &Config, path: &Path) -> Result<()> {
    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", path);
    println!("  Log filter: {}", config.log_filter);
    println!(
        "  Unique property IDs: {}",
        if config.unique_property_ids { "Yes".green() } else { "No".yellow() }
    );
    println!(
        "  Default seed: {}",
        config
            .default_seed
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "None".to_string())
            .cyan()
    );

    Ok(())
}

fn cmd_config_init(path: &Path) -> Result<()> {
    if path.exists() {
        println!("{} Config already exists at {:?}", "!".yellow(), path);
        return Ok(());
    }

    Config::default().save_to(path)?;
    println!("{} Config written to {:?}", "✓".green(), path);

    Ok(())
}
