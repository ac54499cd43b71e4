use tracing::info;
use tracing_subscriber::EnvFilter;

use news_api::api::{create_router, AppState};
use news_api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "news_api=info,tower_http=debug".into()),
        )
        .init();

    let config = AppConfig::from_env();

    info!("connecting to database");
    let pool = config.database.connect().await?;

    let state = AppState::new(pool);
    let app = create_router(state, config.http.request_timeout);

    let addr = format!("{}:{}", config.http.host, config.http.port);
    info!("starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
