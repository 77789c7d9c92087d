//! Static file serving for the entry page and its assets.

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use include_dir::{include_dir, Dir};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::error;

use crate::bootstrap;
use crate::error::GaugeError;

use super::state::AppState;

/// Embedded frontend files.
static PUBLIC: Dir = include_dir!("$CARGO_MANIFEST_DIR/public");

/// Where the entry page and assets come from.
#[derive(Debug, Clone)]
pub enum Assets {
    /// The `public/` directory compiled into the binary.
    Embedded,
    /// A directory on disk.
    Directory(PathBuf),
}

impl Assets {
    pub fn from_config(static_dir: Option<&PathBuf>) -> Self {
        match static_dir {
            Some(dir) => Assets::Directory(dir.clone()),
            None => Assets::Embedded,
        }
    }

    /// Read the raw `index.html`.
    pub async fn index(&self) -> Result<String, GaugeError> {
        match self {
            Assets::Embedded => PUBLIC
                .get_file("index.html")
                .map(|file| String::from_utf8_lossy(file.contents()).into_owned())
                .ok_or_else(|| {
                    GaugeError::Io(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "index.html not embedded",
                    ))
                }),
            Assets::Directory(dir) => Ok(tokio::fs::read_to_string(dir.join("index.html")).await?),
        }
    }
}

/// Serve the entry page with the gauges drawn into it.
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Response {
    let html = match state.assets.index().await {
        Ok(html) => html,
        Err(e) => {
            error!("failed to load index.html: {}", e);
            return (StatusCode::NOT_FOUND, "Entry page not found").into_response();
        }
    };

    Html(bootstrap::render_page(&html)).into_response()
}

/// Serve an embedded asset by request path.
pub async fn asset_handler(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    match PUBLIC.get_file(path) {
        Some(file) => {
            let mime = mime_guess::from_path(path)
                .first_or_octet_stream()
                .to_string();
            ([(header::CONTENT_TYPE, mime)], file.contents().to_vec()).into_response()
        }
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}
