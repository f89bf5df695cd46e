//! Web server for the Roster user directory

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use roster_core::pagination::DEFAULT_PAGE_SIZE;
use roster_storage::StorageManager;

use crate::{handlers, Result};

/// Web server configuration
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    pub page_size: u32,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Shared state available to all handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<StorageManager>,
    pub page_size: u32,
}

/// Build the application router
pub fn router(storage: Arc<StorageManager>, page_size: u32) -> Router {
    let state = AppState {
        storage,
        page_size: page_size.max(1),
    };

    Router::new()
        // Page routes
        .route("/", get(handlers::users::list))
        .route("/users", get(handlers::users::list))
        .route("/users/:id", get(handlers::users::detail))
        // API routes
        .route("/api/health", get(handlers::api::health))
        .route("/api/users", get(handlers::api::users_list))
        .route("/api/stats", get(handlers::api::stats))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Web server instance
pub struct WebServer {
    config: WebConfig,
    storage: Arc<StorageManager>,
}

impl WebServer {
    /// Create a new web server
    pub fn new(config: WebConfig, storage: Arc<StorageManager>) -> Self {
        Self { config, storage }
    }

    /// Run the web server
    pub async fn run(self) -> Result<()> {
        let app = router(self.storage, self.config.page_size);
        let addr = format!("{}:{}", self.config.host, self.config.port);

        tracing::info!("User directory starting on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
