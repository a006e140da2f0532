use sheet_server::{AppState, Config, build_app, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger(&config.log_level, config.log_dir.as_deref());

    tracing::info!(
        port = config.http_port,
        work_dir = %config.work_dir.display(),
        environment = %config.environment,
        "sheet server starting"
    );

    let state = AppState::initialize(&config)?;
    let app = build_app(state);

    let listener =
        tokio::net::TcpListener::bind(("0.0.0.0", config.http_port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("sheet server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install shutdown handler: {e}");
    }
}
