//! # Seed Data Generator
//!
//! Populates the database with demo clients, products, and price windows
//! for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default development database
//! cargo run -p almacen-db --bin seed
//!
//! # Specify database path
//! cargo run -p almacen-db --bin seed -- --db ./data/almacen.db
//! ```
//!
//! Each product gets a price window valid from yesterday for 90 days, so a
//! freshly seeded database accepts orders immediately.

use std::env;

use chrono::{Duration, Utc};
use tracing_subscriber::EnvFilter;

use almacen_db::{Database, DbConfig};

/// Demo clients: (first name, last name, tax id).
const CLIENTS: &[(&str, &str, &str)] = &[
    ("Ana", "Suarez", "27-22334455-9"),
    ("Ruben", "Ortiz", "20-18273645-1"),
    ("Clara", "Benitez", "23-30405060-4"),
    ("Diego", "Funes", "20-25161718-3"),
];

/// Demo products: (sku, name, stock, unit price in cents).
const PRODUCTS: &[(&str, &str, i64, i64)] = &[
    ("TUERCA-M10", "Tuerca hexagonal M10", 500, 120),
    ("BULON-M8-40", "Bulon M8 x 40mm", 350, 310),
    ("ARANDELA-10", "Arandela plana 10mm", 1000, 45),
    ("CLAVO-2P", "Clavo punta paris 2\"", 800, 25),
    ("TORNILLO-T2", "Tornillo autoperforante T2", 600, 95),
    ("LIJA-120", "Lija al agua grano 120", 200, 380),
    ("CINTA-TEFLON", "Cinta de teflon 12mm", 150, 650),
    ("PINCEL-2P", "Pincel cerda natural 2\"", 80, 2_450),
    ("SELLADOR-300", "Sellador acrilico 300ml", 120, 4_100),
    ("GUANTE-NITRILO", "Guante de nitrilo par", 0, 1_900),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./almacen_dev.db");

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
                println!("Almacen Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./almacen_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Almacen Seed Data Generator");
    println!("==============================");
    println!("Database: {}", db_path);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.orders().count().await?;
    let existing_products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(db.pool())
        .await?;
    if existing > 0 || existing_products > 0 {
        println!("⚠ Database already has data ({} products, {} orders)", existing_products, existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding clients...");
    for (first_name, last_name, tax_id) in CLIENTS {
        sqlx::query("INSERT INTO clients (first_name, last_name, tax_id) VALUES (?1, ?2, ?3)")
            .bind(first_name)
            .bind(last_name)
            .bind(tax_id)
            .execute(db.pool())
            .await?;
    }
    println!("  {} clients", CLIENTS.len());

    println!("Seeding products and price windows...");
    let valid_from = Utc::now() - Duration::days(1);
    let valid_to = valid_from + Duration::days(90);
    for (sku, name, stock_qty, unit_price_cents) in PRODUCTS {
        let product_id =
            sqlx::query("INSERT INTO products (sku, name, stock_qty) VALUES (?1, ?2, ?3)")
                .bind(sku)
                .bind(name)
                .bind(stock_qty)
                .execute(db.pool())
                .await?
                .last_insert_rowid();

        sqlx::query(
            "INSERT INTO price_list (product_id, unit_price_cents, valid_from, valid_to)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(product_id)
        .bind(unit_price_cents)
        .bind(valid_from)
        .bind(valid_to)
        .execute(db.pool())
        .await?;
    }
    println!("  {} products, each with a 90-day price window", PRODUCTS.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
