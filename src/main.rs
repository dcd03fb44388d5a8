use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod db;
mod error;
mod models;
mod routes;
mod seed;

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting tournament api server...");

    let config = config::Config::from_env()
        .expect("Invalid configuration");

    // Create database connection pool
    let pool = db::connect(&config.database_url, config.database_max_connections)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Database connection established.");

    db::init_schema(&pool)
        .await
        .expect("Failed to create tournaments table");

    tracing::info!("Tournaments schema ready.");

    if config.seed_on_startup {
        seed::run(&pool)
            .await
            .expect("Failed to seed tournaments");
    } else {
        tracing::warn!("SEED_ON_STARTUP is disabled, keeping existing tournaments");
    }

    let addr = config.addr();
    let app = routes::router(pool);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server.");
}
