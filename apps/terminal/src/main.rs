//! # Scissors Terminal Entry Point
//!
//! Opens the store, loads the session, and prints the day's cierre.
//! A UI shell links against `scissors_terminal` and drives the actions
//! directly; this binary is the headless smoke path.

use tracing::info;

use scissors_db::{Store, StoreConfig};
use scissors_terminal::actions::summary::daily_summary;
use scissors_terminal::{database_path, init_tracing, load_session};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Scissors POS terminal");

    let db_path = database_path()?;
    info!(?db_path, "Database path determined");

    let store = Store::new(StoreConfig::new(db_path)).await?;
    let session = load_session(&store).await?;

    let summary = daily_summary(&session);

    println!("Cierre del día");
    println!("==============");
    println!("Cobros:       {}", summary.count);
    println!("Efectivo:     {}", summary.total_efectivo);
    println!("Mercado Pago: {}", summary.total_mercado_pago);
    println!("Total:        {}", summary.total);

    if !summary.per_barber.is_empty() {
        println!();
        println!("Por barbero");
        println!("-----------");
        for row in &summary.per_barber {
            println!(
                "{:<20} {:>3} cobros  {:>10}",
                row.barber_name, row.count, row.total
            );
        }
    }

    store.close().await;
    Ok(())
}
