use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use streams_api::{AppState, AppStateInner};
use streams_core::{DataStore, Store};

const DEV_SECRET: &str = "dev-secret-change-me";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "streams=debug,streams_api=debug,streams_core=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let jwt_secret = std::env::var("STREAMS_JWT_SECRET").unwrap_or_else(|_| DEV_SECRET.into());
    if jwt_secret == DEV_SECRET {
        warn!("STREAMS_JWT_SECRET is unset; tokens are signed with the development secret");
    }
    let host = std::env::var("STREAMS_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("STREAMS_PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()?;

    let state: AppState = Arc::new(AppStateInner {
        store: DataStore::new(Store::new()),
        jwt_secret,
    });

    let app = streams_api::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Streams server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
