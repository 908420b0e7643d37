use anyhow::Result;
use chrono::Utc;
use notable_server::app;
use notable_server::config::ServerConfig;
use notable_server::state::AppState;
use notable_storage::NoteStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[allow(clippy::print_stderr)]
fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  notable-server [config.toml]    Start the server");
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("notable=info".parse()?))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1).map(|s| s.as_str()) {
        None => ServerConfig::default(),
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(path) => ServerConfig::load(path)?,
    };

    // The default SQLite URL points into data_dir; make sure it exists so
    // mode=rwc can create the database file.
    if config.database_url.is_none() {
        std::fs::create_dir_all(&config.data_dir)?;
    }

    let store = Arc::new(NoteStore::new(&config.database_url()).await?);

    match store.count_users().await {
        Ok(count) => tracing::info!(count, "Registered users at startup"),
        Err(e) => tracing::error!(error = %e, "Failed to count users at startup"),
    }

    let state = AppState {
        store,
        start_time: Utc::now(),
        config: Arc::new(config.clone()),
    };

    let http_addr: SocketAddr = format!("0.0.0.0:{}", config.http_port).parse()?;
    let app = app::build_http_app(state);
    let listener = tokio::net::TcpListener::bind(http_addr).await?;

    tracing::info!(http = %http_addr, "Server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            signal::ctrl_c().await.ok();
            tracing::info!("Shutting down gracefully");
        })
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
