use skinvault::server::{config::Config, model::app::AppState, router, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to connect to database");
    let steam_client = startup::build_steam_client(&config).expect("Failed to build Steam client");
    let inventory = startup::build_inventory_coordinator(&config, &db, steam_client)
        .expect("Failed to build inventory sync coordinator");

    let router = router::routes().with_state(AppState { db, inventory });

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, router)
        .await
        .expect("Server exited unexpectedly");
}
