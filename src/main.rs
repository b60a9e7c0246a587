use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use review_app::shell::config::Config;
use review_app::shell::http::router;
use review_app::shell::seed::DataSeeder;
use review_app::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let state = AppState::in_memory();

    if config.seed_dev_data {
        let seeder = DataSeeder::new(Arc::clone(&state.products), Arc::clone(&state.reviews));
        if let Err(err) = seeder.seed_development_data().await {
            tracing::error!(error = %err, "failed to seed development data");
        }
    }

    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "review API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
