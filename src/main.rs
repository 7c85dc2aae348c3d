use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pizza_tracker::config::Settings;
use pizza_tracker::db;
use pizza_tracker::domain::order::{OrderCommandHandler, PizzaLine, PlaceOrder};
use pizza_tracker::metrics::{self, Metrics};
use pizza_tracker::store::OrderStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pizza_tracker=debug"))
        )
        .init();

    tracing::info!("🍕 Starting pizza tracker");

    // === 1. Load configuration (.env first, then process environment) ===
    let settings = Settings::load()?;
    tracing::debug!(?settings, "Loaded settings");

    // === 2. Open the database and apply the schema ===
    let pool = db::connect(&settings.database).await?;

    // === 3. Initialize Prometheus metrics ===
    let metrics = Arc::new(Metrics::new()?);

    let store = OrderStore::new(pool.clone(), metrics.clone());
    store.migrate().await?;

    // Metrics HTTP server runs on its own actix system in a background thread
    if settings.metrics_enabled() {
        let registry = Arc::new(metrics.registry().clone());
        let port = settings.metrics_port;
        let pool = pool.clone();
        std::thread::spawn(move || {
            let system = actix_web::rt::System::new();
            if let Err(e) = system.block_on(metrics::start_metrics_server(registry, pool, port)) {
                tracing::error!("Metrics server error: {}", e);
            }
        });
    }

    // === 4. Place an order and read it back ===
    let handler = OrderCommandHandler::new(Arc::new(store));

    let placed = handler
        .place(PlaceOrder {
            customer_name: "Ann".to_string(),
            phone: "555".to_string(),
            address: "1 Main St".to_string(),
            status: Some("Order placed".to_string()),
            pizzas: vec![PizzaLine {
                size: "Medium".to_string(),
                pizza: "Veggie".to_string(),
                instructions: Some(String::new()),
            }],
        })
        .await?;

    tracing::info!(order_id = %placed.id, "✅ Order placed");

    let fetched = handler.fetch(&placed.id).await?;
    tracing::info!("📦 {}", serde_json::to_string_pretty(&fetched)?);

    tracing::info!("🎉 Done");
    Ok(())
}
