use anyhow::Result;
use chef_core::ChefConfig;
use chef_llm::{GeminiClient, TextGenerator};
use chef_server::{app_with_state, logging::init_logging, state::AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ChefConfig::from_env()?;
    init_logging(config.log_format);

    let generator = Arc::new(GeminiClient::from_config(&config.upstream)?);
    tracing::info!(
        version = chef_server::VERSION,
        model = generator.model(),
        api_configured = config.api_configured(),
        "starting ChefBot server"
    );
    if !config.api_configured() {
        tracing::warn!("{} is not set; /chat requests will fail", chef_core::API_KEY_ENV);
    }

    let app = app_with_state(AppState::new(generator));
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
