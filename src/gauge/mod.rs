//! # Gauge Renderer
//!
//! Draws a circular dial with bezel rings, radial ticks, a pivoting needle and
//! two text labels onto a [`Surface`].
//!
//! All geometry is derived from the surface's `width` attribute (see
//! [`geometry`]). Layers are appended in a fixed order; with no z-index in SVG
//! coordinate space, that order is the stacking:
//!
//! | # | Layer | Element |
//! |---|-------|---------|
//! | a | Outer bezel | `circle.gauge-bezel-outer` |
//! | b | Face | `circle.gauge-face` |
//! | c | Inner bezel | `circle.gauge-bezel-inner` |
//! | d | Ticks | `line.gauge-tick` × 21 |
//! | e | Tick hider | `circle.gauge-tick-hider` |
//! | f | Label | `text.gauge-label` |
//! | g | Value | `text.gauge-label-value` |
//! | h | Needle | `path.gauge-needle` |
//! | i | Needle cap | `circle.gauge-needle-cap` |
//!
//! ## Example
//!
//! ```
//! use gaugeboard::gauge::{self, ChartSpec};
//! use gaugeboard::surface::SvgSurface;
//!
//! let mut surface = SvgSurface::square(200.0);
//! gauge::render(&mut surface, &ChartSpec::new("#setlistChart", "Setlist", 86.0));
//!
//! assert_eq!(surface.children().len(), 29);
//! ```

pub mod geometry;

use serde::{Deserialize, Serialize};

use crate::scale::LinearScale;
use crate::surface::{Document, Element, Surface, format_number};
pub use geometry::DerivedGeometry;

/// Angle of the first tick, and of the needle at the domain minimum.
pub const START_ANGLE: f64 = -135.0;
/// Angle of the last tick, and of the needle at the domain maximum.
pub const END_ANGLE: f64 = 135.0;
/// Degrees between adjacent ticks.
pub const TICK_SPACING: f64 = 13.5;

pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;

/// Input for one gauge.
///
/// ## Example (JSON)
///
/// ```json
/// { "el": "#setlistChart", "label": "Setlist", "value": 86 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Selector of the target surface (`#id`).
    pub el: String,
    /// Text drawn in the upper half of the dial.
    pub label: String,
    /// Reading shown as text and by the needle.
    pub value: f64,
    /// Domain minimum (default: 0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Domain maximum (default: 100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl ChartSpec {
    pub fn new(el: impl Into<String>, label: impl Into<String>, value: f64) -> Self {
        Self {
            el: el.into(),
            label: label.into(),
            value,
            min: None,
            max: None,
        }
    }

    /// Set the domain bounds.
    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// The needle scale: `[min, max]` onto `[-135°, 135°]`.
    pub fn needle_scale(&self) -> LinearScale {
        LinearScale::new(
            [
                self.min.unwrap_or(DEFAULT_MIN),
                self.max.unwrap_or(DEFAULT_MAX),
            ],
            [START_ANGLE, END_ANGLE],
        )
    }

    /// Needle rotation in degrees. Not clamped to the tick range.
    pub fn needle_angle(&self) -> f64 {
        self.needle_scale().apply(self.value)
    }
}

/// Angles of every tick, accumulated the way the draw loop walks them.
pub fn tick_angles() -> Vec<f64> {
    let mut angles = Vec::new();
    let mut angle = START_ANGLE;
    while angle <= END_ANGLE {
        angles.push(angle);
        angle += TICK_SPACING;
    }
    angles
}

/// Draw a gauge onto `surface`.
///
/// Appends to whatever the surface already holds; rendering twice draws two
/// overlapping gauges.
pub fn render<S: Surface + ?Sized>(surface: &mut S, spec: &ChartSpec) {
    let g = DerivedGeometry::from_width(surface.width());
    let c = g.center;
    let needle_angle = spec.needle_angle();

    // a: outer bezel
    surface.append(
        circle("gauge-bezel-outer", c)
            .num("stroke-width", g.outer_bezel_width)
            .num("r", g.outer_bezel_radius),
    );

    // b: face
    surface.append(circle("gauge-face", c).num("r", g.face_radius()));

    // c: inner bezel
    surface.append(
        circle("gauge-bezel-inner", c)
            .num("stroke-width", g.inner_bezel_width)
            .num("r", g.inner_bezel_radius),
    );

    // d: ticks
    for angle in tick_angles() {
        surface.append(
            Element::new("line")
                .attr("class", "gauge-tick")
                .num("x1", c)
                .num("y1", c)
                .num("x2", c)
                .num("y2", g.tick_height)
                .num("stroke-width", g.tick_width)
                .attr("transform", rotate(angle, c)),
        );
    }

    // e: tick hider covers the tick stems, leaving only the outer marks
    surface.append(circle("gauge-tick-hider", c).num("r", g.tick_hider_radius));

    // f, g: labels
    surface.append(label("gauge-label", c, g.label_y, g.label_font_size).text(spec.label.clone()));
    surface.append(
        label("gauge-label-value", c, g.value_label_y, g.label_font_size)
            .text(format_number(spec.value)),
    );

    // h: needle
    let half = g.needle_width / 2.0;
    let d = format!(
        "M {} {} L {} {} L {} {} Z",
        format_number(c - half),
        format_number(c),
        format_number(c),
        format_number(g.tick_height),
        format_number(c + half),
        format_number(c),
    );
    surface.append(
        Element::new("path")
            .attr("class", "gauge-needle")
            .num("stroke-width", g.outer_bezel_width)
            .attr("d", d)
            .attr("transform", rotate(needle_angle, c)),
    );

    // i: needle cap, last so it covers the pivot
    surface.append(
        circle("gauge-needle-cap", c)
            .num("stroke-width", g.outer_bezel_width)
            .num("r", g.needle_cap_radius),
    );
}

/// Resolve `spec.el` in `document` and draw into it.
///
/// Returns whether the selector resolved. An unresolved selector draws nothing.
pub fn render_into(document: &mut Document, spec: &ChartSpec) -> bool {
    match document.select(&spec.el) {
        Some(surface) => {
            render(surface, spec);
            true
        }
        None => false,
    }
}

fn circle(class: &'static str, center: f64) -> Element {
    Element::new("circle")
        .attr("class", class)
        .num("cx", center)
        .num("cy", center)
}

fn label(class: &'static str, x: f64, y: f64, font_size: f64) -> Element {
    Element::new("text")
        .attr("class", class)
        .num("x", x)
        .num("y", y)
        .attr("text-anchor", "middle")
        .attr("alignment-baseline", "middle")
        .num("font-size", font_size)
}

fn rotate(angle: f64, center: f64) -> String {
    format!(
        "rotate({} {} {})",
        format_number(angle),
        format_number(center),
        format_number(center)
    )
}
