//! # Seed Data Generator
//!
//! Populates the store with a demo catalog for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default dev database
//! cargo run -p scissors-db --bin seed
//!
//! # Specify database path
//! cargo run -p scissors-db --bin seed -- --db ./data/scissors.db
//! ```
//!
//! ## Generated Catalog
//! - 4 services (Corte Clásico, Corte + Barba, Barba, Combo Premium)
//! - 4 extras (Lavado, Cejas, Máscara Facial, Tinte Barba)
//! - 3 barbers (Carlos, Miguel, Andrés)
//! - 4 percentage discounts (10%, 20%, 30%, 50%)

use std::env;

use scissors_core::Catalog;
use scissors_db::{Store, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./scissors_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Scissors POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./scissors_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Scissors POS Seed Data Generator");
    println!("===================================");
    println!("Database: {}", db_path);
    println!();

    let store = Store::new(StoreConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Refuse to double-seed
    let existing = store.catalog().load_catalog().await?;
    if !existing.services().is_empty() {
        println!("⚠ Database already has {} services", existing.services().len());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding catalog...");

    // Build through the catalog so ids and rules match production paths
    let mut catalog = Catalog::new();

    let services = [
        ("Corte Clásico", 3500),
        ("Corte + Barba", 5000),
        ("Barba", 2000),
        ("Combo Premium", 6500),
    ];
    for (name, price) in services {
        let service = catalog.add_service(name, scissors_core::Money::new(price), None);
        store.catalog().upsert_service(&service).await?;
    }

    let extras = [
        ("Lavado", 500),
        ("Cejas", 300),
        ("Máscara Facial", 800),
        ("Tinte Barba", 1000),
    ];
    for (name, price) in extras {
        let extra = catalog.add_extra(name, scissors_core::Money::new(price));
        store.catalog().upsert_extra(&extra).await?;
    }

    for name in ["Carlos", "Miguel", "Andrés"] {
        let barber = catalog.add_barber(name, true);
        store.catalog().upsert_barber(&barber).await?;
    }

    for pct in [10u32, 20, 30, 50] {
        let discount = catalog.add_discount(format!("{pct}%"), pct);
        store.catalog().upsert_discount(&discount).await?;
    }

    let loaded = store.catalog().load_catalog().await?;
    println!();
    println!("✓ Seeded {} services", loaded.services().len());
    println!("✓ Seeded {} extras", loaded.extras().len());
    println!("✓ Seeded {} barbers", loaded.all_barbers().len());
    // Minus the built-in "none" entry
    println!("✓ Seeded {} discounts", loaded.discounts().len() - 1);

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
