use std::net::SocketAddr;

use talent_backend::{
    config::{get_config, init_config},
    routes,
    store::Ledger,
    AppState,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    // All state lives in memory; every boot starts from the seed dataset.
    let ledger = Ledger::seeded();
    let app_state = AppState::new(ledger);

    let app = routes::api_router(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
