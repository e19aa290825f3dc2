//! HTTP server assembly: configuration, shared state, routing, shutdown.

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::routing::{get, post};
use axum::Router;
use bytes::Bytes;
use http_body_util::Full;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use schoolmap_core::Result;
use schoolmap_store::SchoolStore;

use crate::handlers;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// Enable CORS.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".parse().unwrap(),
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Creates a new server config builder.
    #[must_use]
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

/// Builder for [`ServerConfig`].
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    addr: Option<SocketAddr>,
    cors: Option<bool>,
}

impl ServerConfigBuilder {
    /// Sets the listen address.
    #[must_use]
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Sets whether CORS is enabled.
    #[must_use]
    pub fn cors(mut self, enabled: bool) -> Self {
        self.cors = Some(enabled);
        self
    }

    /// Builds the server config.
    #[must_use]
    pub fn build(self) -> ServerConfig {
        ServerConfig {
            addr: self.addr.unwrap_or_else(|| "0.0.0.0:8080".parse().unwrap()),
            cors: self.cors.unwrap_or(true),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// The record store handle, injected rather than global so handlers stay
    /// testable without a live database.
    pub store: Arc<dyn SchoolStore>,
    /// Server start time.
    pub start_time: Instant,
}

impl AppState {
    /// Creates new app state around a store handle.
    pub fn new(store: Arc<dyn SchoolStore>) -> Self {
        Self {
            store,
            start_time: Instant::now(),
        }
    }
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates a new server with the given configuration and store.
    pub fn new(config: ServerConfig, store: Arc<dyn SchoolStore>) -> Self {
        let state = Arc::new(AppState::new(store));
        Self { config, state }
    }

    /// Creates the router.
    #[must_use]
    pub fn router(&self) -> Router {
        let mut router = Router::new()
            // Liveness endpoints
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            // School API
            .route("/addSchool", post(handlers::add_school))
            .route("/listSchools", get(handlers::list_schools))
            // Internal management
            .route("/api/status", get(handlers::status))
            .with_state(self.state.clone());

        // Add middleware
        router = router
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic));

        if self.config.cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }

    /// Runs the server until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the listen address cannot be bound.
    pub async fn run(self) -> Result<()> {
        let router = self.router();

        tracing::info!(addr = %self.config.addr, "Starting schoolmap server");

        let listener = tokio::net::TcpListener::bind(self.config.addr)
            .await
            .map_err(schoolmap_core::Error::Io)?;

        let shutdown_signal = async {
            let ctrl_c = async {
                tokio::signal::ctrl_c()
                    .await
                    .expect("Failed to install Ctrl+C handler");
            };

            #[cfg(unix)]
            let terminate = async {
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                    .expect("Failed to install signal handler")
                    .recv()
                    .await;
            };

            #[cfg(not(unix))]
            let terminate = std::future::pending::<()>();

            tokio::select! {
                () = ctrl_c => {
                    tracing::info!("Received Ctrl+C, shutting down gracefully");
                },
                () = terminate => {
                    tracing::info!("Received SIGTERM, shutting down gracefully");
                },
            }
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| schoolmap_core::Error::Internal {
                message: e.to_string(),
            })?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Converts an escaped panic into a generic 500 so the process keeps serving.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> http::Response<Full<Bytes>> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(panic = %detail, "Handler panicked");

    let body = serde_json::json!({
        "message": "Something Went Wrong!",
        "success": false,
    })
    .to_string();

    http::Response::builder()
        .status(http::StatusCode::INTERNAL_SERVER_ERROR)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(body)))
        .expect("static panic response must build")
}
