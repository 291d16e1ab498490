use anyhow::Result;
use fee_lens::{
    config::Config,
    handlers::{router, AppState},
    services::*,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting fee-lens v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {:?}", config.environment);

    // Initialize services
    let connection = Arc::new(EthereumConnection::new(&config.rpc_url)?);
    match connection.latest_block_number().await {
        Ok(block) => tracing::info!("Network RPC connected, current block: {}", block),
        Err(e) => tracing::warn!("Network RPC not reachable yet: {}", e),
    }

    let oracle = Arc::new(CoinGeckoOracle::new(
        config.price_feed_url.clone(),
        config.native_asset_id.clone(),
    ));
    let estimator = Arc::new(FeeEstimator::new(
        oracle,
        CostCalculator::new(config.native_symbol.clone(), config.cost_precision),
    ));

    let state = AppState {
        connection,
        estimator,
        data_source: config.native_asset_id.clone(),
        started_at: Instant::now(),
    };

    let app = router(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for ctrl+c");
    tracing::info!("Shutting down gracefully...");
}
