use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_portal::config::environment::Config;
use user_portal::services::upstream::UpstreamController;
use user_portal::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_portal=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let controller = UpstreamController::new(config.upstream_url.clone());
    tracing::info!("Forwarding user requests to {}", config.upstream_url);

    let app = user_portal::create_app(AppState::new(Arc::new(controller)), &config.mount_path);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        "Server running on http://{} (user routes under {})",
        config.bind_addr,
        config.mount_path
    );
    axum::serve(listener, app).await?;

    Ok(())
}
