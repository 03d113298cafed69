//! Entry point for the `pyro-gateway` HTTP server.

use std::sync::Arc;

use pyro_bridge::{BridgeConfig, DetectorClient};
use pyro_gateway::routes::create_router;
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let addr = std::env::var("PYRO_GATEWAY_LISTEN_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:4750".to_owned());

    let config = BridgeConfig::from_env();
    info!(detector = %config.detector_path.display(), "using detector binary");

    let bridge = Arc::new(DetectorClient::new(config));
    let app = create_router(bridge);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "pyro-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
