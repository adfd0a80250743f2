use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use minnote_core::NoteStore;
use tracing::info;

/// The fixed file name inside the data directory; kept for compatibility
/// with previously stored note files.
const DATA_FILE: &str = "info.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "minnote_server=debug,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let host = std::env::var("MINNOTE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("MINNOTE_PORT").unwrap_or_else(|_| "3000".to_string());
    let data_dir =
        PathBuf::from(std::env::var("MINNOTE_DATA_DIR").unwrap_or_else(|_| ".".to_string()));

    tokio::fs::create_dir_all(&data_dir).await?;
    let store = NoteStore::open(data_dir.join(DATA_FILE)).await?;
    info!(
        "Loaded {} notes from {}",
        store.note_count().await,
        store.path().display()
    );

    let app = minnote_server::router(Arc::new(store));

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running at http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
