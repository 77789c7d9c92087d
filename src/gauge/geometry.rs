//! Gauge dimensions derived from the surface width.
//!
//! Every length is a fixed proportion of the width so a gauge scales to any
//! size. The multipliers are tuned for visual balance; change them and the
//! dial no longer looks like the reference design.

// Bezels
pub const OUTER_BEZEL_RATIO: f64 = 0.009;
pub const INNER_BEZEL_RATIO: f64 = 0.072;

// Ticks
pub const TICK_EXTRA_RATIO: f64 = 0.027;
pub const TICK_WIDTH_RATIO: f64 = 0.009;
pub const TICK_HIDER_RATIO: f64 = 0.345;

// Labels
pub const LABEL_Y_DIVISOR: f64 = 1.3;
pub const VALUE_LABEL_Y_RATIO: f64 = 0.75;
pub const LABEL_FONT_RATIO: f64 = 0.13;

// Needle
pub const NEEDLE_WIDTH_RATIO: f64 = 0.054;
pub const NEEDLE_CAP_RATIO: f64 = 0.059;

/// Face circle inset from the outer bezel radius, in absolute units.
pub const FACE_INSET: f64 = 1.0;

/// Scalar geometry for one render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedGeometry {
    pub width: f64,
    pub center: f64,
    pub outer_bezel_width: f64,
    pub outer_bezel_radius: f64,
    pub inner_bezel_width: f64,
    pub inner_bezel_radius: f64,
    pub tick_height: f64,
    pub tick_width: f64,
    pub tick_hider_radius: f64,
    pub label_y: f64,
    pub value_label_y: f64,
    pub label_font_size: f64,
    pub needle_width: f64,
    pub needle_cap_radius: f64,
}

impl DerivedGeometry {
    pub fn from_width(width: f64) -> Self {
        let center = width / 2.0;

        let outer_bezel_width = width * OUTER_BEZEL_RATIO;
        let outer_bezel_radius = center - outer_bezel_width;
        let inner_bezel_width = width * INNER_BEZEL_RATIO;
        let inner_bezel_radius = outer_bezel_radius - inner_bezel_width / 2.0;

        // Ticks reach from the center up to just inside the inner bezel
        let tick_height = outer_bezel_width + inner_bezel_width + width * TICK_EXTRA_RATIO;

        Self {
            width,
            center,
            outer_bezel_width,
            outer_bezel_radius,
            inner_bezel_width,
            inner_bezel_radius,
            tick_height,
            tick_width: width * TICK_WIDTH_RATIO,
            tick_hider_radius: width * TICK_HIDER_RATIO,
            label_y: center / LABEL_Y_DIVISOR,
            value_label_y: width * VALUE_LABEL_Y_RATIO,
            label_font_size: width * LABEL_FONT_RATIO,
            needle_width: width * NEEDLE_WIDTH_RATIO,
            needle_cap_radius: width * NEEDLE_CAP_RATIO,
        }
    }

    /// Radius of the face circle, one unit inside the outer bezel.
    pub fn face_radius(&self) -> f64 {
        self.outer_bezel_radius - FACE_INSET
    }
}
