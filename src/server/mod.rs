//! HTTP surface - axum router, CORS, shared state

pub mod handlers;

use std::sync::Arc;

use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::Result;
use crate::llm::LlmClient;
use crate::router::Router;

/// State shared by every request handler
pub struct AppState<C: LlmClient> {
    pub router: Arc<Router<C>>,
}

impl<C: LlmClient> AppState<C> {
    pub fn new(router: Router<C>) -> Self {
        Self {
            router: Arc::new(router),
        }
    }
}

impl<C: LlmClient> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            router: Arc::clone(&self.router),
        }
    }
}

/// Allow any origin, method and header with credentials.
///
/// Wildcards are not valid alongside credentials, so each is mirrored from the request.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build the axum router with all routes and middleware
pub fn build_router<C: LlmClient + 'static>(state: AppState<C>) -> axum::Router {
    axum::Router::new()
        .route("/", get(handlers::root))
        .route("/execute", get(handlers::execute::<C>))
        .route("/tools", get(handlers::tools::<C>))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until ctrl-c
pub async fn serve(listener: TcpListener, app: axum::Router) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "Listening");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
