//! # HTTP Server for the Gauge Dashboard
//!
//! Serves the entry page with its gauges drawn in, plus every other file of
//! the asset root as-is.
//!
//! ## Usage
//!
//! ```bash
//! PORT=3009 gaugeboard serve
//! gaugeboard serve --port 8080 --static-dir ./public
//! ```
//!
//! Then open http://localhost:3009 in a browser.
//!
//! ## Routes
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /` | Entry page with gauges rendered |
//! | `GET /api/gauges` | Dashboard chart list (JSON) |
//! | `GET /api/gauge.svg?value=..` | One standalone gauge (SVG) |
//! | anything else | Static file from the asset root |

mod handlers;
mod state;
mod static_files;

pub use state::{AppState, DEFAULT_PORT, ServerConfig};
pub use static_files::Assets;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::error::GaugeError;

/// Build the application router.
pub fn router(config: ServerConfig) -> Router {
    let app_state = Arc::new(AppState::new(config));

    let app = Router::new()
        // Entry page
        .route("/", get(static_files::index_handler))
        // Gauge API
        .route("/api/gauges", get(handlers::gauges::list))
        .route("/api/gauge.svg", get(handlers::gauges::svg));

    let app = match &app_state.assets {
        Assets::Embedded => app.fallback(static_files::asset_handler),
        Assets::Directory(dir) => app.fallback_service(ServeDir::new(dir)),
    };

    app.with_state(app_state).layer(TraceLayer::new_for_http())
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use gaugeboard::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), gaugeboard::error::GaugeError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:3009".to_string(),
///     static_dir: None,
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), GaugeError> {
    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            GaugeError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    match &config.static_dir {
        Some(dir) => info!(static_dir = %dir.display(), "serving assets from disk"),
        None => info!("serving embedded assets"),
    }
    info!("server started and running on {}", config.listen_addr);

    axum::serve(listener, router(config))
        .await
        .map_err(|e| GaugeError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
