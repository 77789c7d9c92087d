//! # Gaugeboard - Gauge Dashboard Server
//!
//! Gaugeboard serves a static web page and draws gauge-style SVG dials into
//! it. It provides:
//!
//! - **Gauge rendering**: bezels, ticks, needle and labels derived from a
//!   single surface width
//! - **Surfaces**: an in-memory SVG substrate and an entry page whose
//!   `<svg id=...>` elements are addressable by selector
//! - **Server**: static file host that returns the entry page with the
//!   dashboard's gauges drawn in
//!
//! ## Quick Start
//!
//! ```
//! use gaugeboard::{
//!     gauge::{self, ChartSpec},
//!     surface::SvgSurface,
//! };
//!
//! // A 200-unit square drawing surface
//! let mut surface = SvgSurface::square(200.0);
//!
//! // Draw one gauge reading 86 on the default 0..100 domain
//! let spec = ChartSpec::new("#setlistChart", "Setlist", 86.0);
//! gauge::render(&mut surface, &spec);
//!
//! // Serialize to a standalone SVG document
//! let svg = surface.to_svg();
//! assert!(svg.contains("gauge-needle"));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`gauge`] | Gauge geometry and draw sequence |
//! | [`scale`] | Linear domain-to-range mapping |
//! | [`surface`] | Drawing surfaces and the entry page document |
//! | [`bootstrap`] | The dashboard's fixed chart list |
//! | [`server`] | HTTP static host |
//! | [`error`] | Error types |

pub mod bootstrap;
pub mod error;
pub mod gauge;
pub mod scale;
pub mod server;
pub mod surface;

// Re-exports for convenience
pub use error::GaugeError;
pub use gauge::ChartSpec;
pub use surface::{Document, Surface, SvgSurface};
