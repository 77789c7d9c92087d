//! Gauge API handlers.

use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::bootstrap;
use crate::gauge::{self, ChartSpec};
use crate::surface::SvgSurface;

/// Default surface width for standalone gauges.
pub const DEFAULT_WIDTH: f64 = 200.0;

/// Query parameters for a standalone gauge.
#[derive(Debug, Deserialize)]
pub struct GaugeQuery {
    pub value: f64,
    #[serde(default)]
    pub label: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub width: Option<f64>,
}

/// Handle GET /api/gauges - list the dashboard's charts.
pub async fn list() -> Json<Vec<ChartSpec>> {
    Json(bootstrap::charts())
}

/// Handle GET /api/gauge.svg - render a single gauge as a standalone SVG.
pub async fn svg(Query(query): Query<GaugeQuery>) -> Result<impl IntoResponse, (StatusCode, String)> {
    let width = query.width.unwrap_or(DEFAULT_WIDTH);
    if !(width.is_finite() && width > 0.0) {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("width must be a positive number, got {}", width),
        ));
    }

    let spec = ChartSpec {
        el: String::new(),
        label: query.label,
        value: query.value,
        min: query.min,
        max: query.max,
    };

    let mut surface = SvgSurface::square(width);
    gauge::render(&mut surface, &spec);

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], surface.to_svg()))
}
