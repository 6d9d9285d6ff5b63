pub mod handlers;
pub mod shared;

use shared::config::Config;
use std::sync::Arc;

/// Shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use axum::routing::{any, get};
    use axum::Router;
    use std::net::SocketAddr;
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;

    let base_dir = shared::config::exe_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    shared::logger::init_tracing(&base_dir)?;

    let config = shared::config::load_config()?;
    tracing::info!("Business backend: {}", config.upstream.api_url);
    tracing::info!("Reporting service: {}", config.upstream.reportes_url);
    tracing::info!("Client empresa: {}", config.client.empresa);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(120))
        .build()?;

    let port = config.server.port;
    let static_dir = config.server.static_dir.clone();
    let state = AppState {
        config: Arc::new(config),
        client,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/client-config",
            get(handlers::client_config::get_client_config),
        )
        .route("/api/*path", any(handlers::proxy::proxy_api))
        .route("/reportes/*path", any(handlers::proxy::proxy_reportes))
        .fallback_service(ServeDir::new(&static_dir))
        .with_state(state)
        .layer(middleware::from_fn(shared::logger::request_logger))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind gateway to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Gateway successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
