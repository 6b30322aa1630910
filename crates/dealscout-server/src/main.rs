mod api;
mod middleware;
mod users;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use dealscout_analyzer::{CompletionClient, CompletionSettings};
use dealscout_search::SearchClient;

use crate::api::{build_app, default_rate_limit_state, AppState};
use crate::users::UserStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(dealscout_core::load_app_config_from_env()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let search = SearchClient::with_base_url(
        &config.serpapi_key,
        &config.search_currency,
        config.search_timeout_secs,
        &config.search_base_url,
    )?
    .with_retry_policy(config.max_retries, config.retry_backoff_base_ms);

    let analyzer = CompletionClient::with_base_url(
        &config.groq_api_key,
        CompletionSettings {
            model: config.llm_model.clone(),
            max_tokens: config.llm_max_tokens,
            temperature: config.llm_temperature,
        },
        config.llm_timeout_secs,
        &config.llm_base_url,
    )?
    .with_retry_policy(config.max_retries, config.retry_backoff_base_ms);

    let state = AppState {
        config: Arc::clone(&config),
        search: Arc::new(search),
        analyzer: Arc::new(analyzer),
        users: UserStore::new(),
    };
    let app = build_app(state, default_rate_limit_state());

    tracing::info!(addr = %config.bind_addr, env = %config.env, "starting dealscout server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
