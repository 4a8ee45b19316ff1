//! HTTP surface: the two page routes plus the draft-mode toggles.

pub mod draft;
pub mod routes;

use crate::config::SiteConfig;
use crate::content::GraphQlExecutor;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::info;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub executor: Arc<dyn GraphQlExecutor>,
}

impl AppState {
    pub fn new(config: SiteConfig, executor: Arc<dyn GraphQlExecutor>) -> Self {
        Self {
            config: Arc::new(config),
            executor,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/hotel-details/:slug", get(routes::hotel))
        .route("/api/draft-mode/enable", get(draft::enable))
        .route("/api/draft-mode/disable", get(draft::disable))
        .fallback(routes::not_found)
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

pub async fn serve(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Handled request"
    );
    response
}
