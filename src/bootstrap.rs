//! The fixed set of gauges drawn into the entry page.

use tracing::{debug, warn};

use crate::gauge::{self, ChartSpec};
use crate::surface::Document;

/// The dashboard's gauges, in draw order.
pub fn charts() -> Vec<ChartSpec> {
    vec![
        ChartSpec::new("#setlistChart", "Setlist", 86.0),
        ChartSpec::new("#jamsChart", "Jams", 92.0),
        ChartSpec::new("#fidelityChart", "Sound", 77.0),
    ]
}

/// Draw every chart into `document`. Charts whose surface is missing are skipped.
pub fn render_all(document: &mut Document) {
    for spec in charts() {
        if gauge::render_into(document, &spec) {
            debug!(el = %spec.el, label = %spec.label, value = spec.value, "rendered gauge");
        } else {
            warn!(el = %spec.el, "no surface for gauge");
        }
    }
}

/// Parse an entry page, draw the charts into it and serialize the result.
///
/// A page the parser rejects has no addressable surfaces, so it comes back
/// unchanged.
pub fn render_page(html: &str) -> String {
    let mut document = match Document::parse(html) {
        Ok(document) => document,
        Err(e) => {
            warn!("entry page not parseable, serving it without gauges: {}", e);
            Document::unparsed(html)
        }
    };
    render_all(&mut document);
    document.render()
}
