//! # Default Catalog Writer
//!
//! Writes the six default pizzas to a catalog file.
//!
//! ## Usage
//! ```bash
//! # Write data/pizza_menu.txt (refuses if it already exists)
//! cargo run -p pizza-store --bin pizza-seed
//!
//! # Custom location
//! cargo run -p pizza-store --bin pizza-seed -- --path ./menu.txt
//!
//! # Replace an existing catalog
//! cargo run -p pizza-store --bin pizza-seed -- --force
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pizza_core::seed::default_catalog;
use pizza_store::{CatalogStore, DEFAULT_MENU_PATH};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pizza-seed", version, about = "Write the default pizza catalog")]
struct Cli {
    /// Catalog file to write
    #[arg(short, long, default_value = DEFAULT_MENU_PATH)]
    path: PathBuf,

    /// Overwrite an existing catalog file
    #[arg(short, long)]
    force: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    println!("Pizza Desk Catalog Seeder");
    println!("=========================");
    println!("Catalog: {}", cli.path.display());
    println!();

    if cli.path.exists() && !cli.force {
        println!("⚠ Catalog file already exists");
        println!("  Skipping seed to keep your menu.");
        println!("  Pass --force to replace it.");
        return Ok(());
    }

    if let Some(parent) = cli.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let catalog = default_catalog()?;
    CatalogStore::new(&cli.path).save(&catalog)?;

    println!("✓ Wrote {} pizzas", catalog.len());
    for pizza in &catalog {
        println!("  {:<20} {:>8}", pizza.name, pizza.price);
    }

    Ok(())
}
