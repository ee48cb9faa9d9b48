use anyhow::Context;
use fertigation_dashboard::{build_router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Plain fmt subscriber at the default INFO level
    tracing_subscriber::fmt::init();

    let config = Config::load().context("Failed to load configuration")?;
    tracing::info!(
        "Users in {}, maintenance tasks in {}",
        config.storage.users_file,
        config.storage.tasks_file
    );

    let state = AppState::from_config(&config);
    let app = build_router(state, config.upload.max_file_size);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server running on {}", addr);
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}
