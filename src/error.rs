//! # Error Types
//!
//! This module defines error types used throughout the gaugeboard library.
//!
//! Gauge rendering itself never fails: a missing surface draws nothing and a
//! malformed width draws `NaN` geometry. Errors only come from the layers
//! around it (page parsing, configuration, the HTTP listener).

use thiserror::Error;

/// Main error type for gaugeboard operations
#[derive(Debug, Error)]
pub enum GaugeError {
    /// The entry page could not be parsed into a document
    #[error("Page error: {0}")]
    Page(String),

    /// Invalid configuration (CLI flags, environment)
    #[error("Config error: {0}")]
    Config(String),

    /// HTTP server errors (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
