use scheduler_backend::{app, ServerConfig, API_PATH};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;
    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    tracing::info!(
        addr = %config.addr,
        api = API_PATH,
        static_dir = %config.static_dir,
        auth = !config.token.is_empty(),
        "server running"
    );
    axum::serve(listener, app(&config)).await?;
    Ok(())
}
