//! Server state and configuration.

use std::path::PathBuf;

use super::static_files::Assets;

/// Default port when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3009;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:3009")
    pub listen_addr: String,
    /// Directory to serve instead of the embedded `public/` assets
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: format!("0.0.0.0:{}", DEFAULT_PORT),
            static_dir: None,
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Source of the entry page, fixed at startup.
    pub assets: Assets,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let assets = Assets::from_config(config.static_dir.as_ref());
        Self { config, assets }
    }
}
