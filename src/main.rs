use anyhow::Result;
use tracing::info;

use kinship_terms_api::{api, config::Config, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kinship_terms_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(config.clone());
    info!(records = state.catalog.len(), "Loaded kinship catalog");

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("kinship-terms-api listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
