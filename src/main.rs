//! Host binary: serves the server-rendered review app and its WASM bundle.

#![recursion_limit = "256"]

mod routes;


/// Port used when `PORT` is unset.
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("{0}")]
    Config(String),
    #[error("io failed: {0}")]
    Io(#[from] std::io::Error),
}

fn parse_port(raw: Option<String>) -> Result<u16, HostError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw.trim().parse().map_err(|_| HostError::InvalidPort(raw)),
    }
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let port = parse_port(std::env::var("PORT").ok())?;
    let app = routes::app().map_err(HostError::Config)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "review-desk listening");
    axum::serve(listener, app).await?;
    Ok(())
}
