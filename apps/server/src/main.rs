#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::sync::Arc;

use binwise_api::backend::create_backend;
use binwise_api::construct_router;
use binwise_api::state::State;
use dotenv::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Binwise API Service");

    let config = config::Config::from_env()?;

    let backend = create_backend(config.use_model_backend, config.model_backend_url.clone());
    tracing::info!(
        "Loaded configuration: port={}, backend={}",
        config.port,
        backend.mode()
    );

    let state = Arc::new(State::new(backend));

    let app = construct_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
