//! In-memory `<svg>` surface.

use super::{Element, Surface, escape_attr, escape_text};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// An `<svg>` element with its own attributes and the children appended to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgSurface {
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl SvgSurface {
    /// A square surface `size` units wide and tall.
    pub fn square(size: f64) -> Self {
        let size = super::format_number(size);
        Self::with_attributes([("width", size.clone()), ("height", size)])
    }

    pub fn with_attributes<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Serialize only the appended children, one per line.
    pub fn children_markup(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            out.push_str(&element_markup(child));
            out.push('\n');
        }
        out
    }

    /// Serialize as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = String::from("<svg");
        if self.attr("xmlns").is_none() {
            svg.push_str(&format!(r#" xmlns="{}""#, SVG_NS));
        }
        for (name, value) in &self.attributes {
            svg.push_str(&format!(r#" {}="{}""#, name, escape_attr(value)));
        }
        svg.push_str(">\n");
        for child in &self.children {
            svg.push_str("  ");
            svg.push_str(&element_markup(child));
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl Surface for SvgSurface {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn append(&mut self, element: Element) {
        self.children.push(element);
    }
}

/// Serialize a single element.
pub fn element_markup(element: &Element) -> String {
    let mut out = format!("<{}", element.kind);
    for (name, value) in &element.attributes {
        out.push_str(&format!(r#" {}="{}""#, name, escape_attr(value)));
    }
    match &element.text {
        Some(text) => {
            out.push('>');
            out.push_str(&escape_text(text));
            out.push_str(&format!("</{}>", element.kind));
        }
        None => out.push_str("/>"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_square_reads_width() {
        let surface = SvgSurface::square(200.0);
        assert_eq!(surface.attr("width"), Some("200"));
        assert_eq!(surface.width(), 200.0);
    }

    #[test]
    fn test_element_markup() {
        let circle = Element::new("circle").attr("class", "dot").num("r", 2.5);
        assert_eq!(element_markup(&circle), r#"<circle class="dot" r="2.5"/>"#);

        let text = Element::new("text").num("x", 10.0).text("Fish & Chips");
        assert_eq!(element_markup(&text), r#"<text x="10">Fish &amp; Chips</text>"#);
    }

    #[test]
    fn test_to_svg() {
        let mut surface = SvgSurface::square(10.0);
        surface.append(Element::new("circle").num("r", 5.0));
        assert_eq!(
            surface.to_svg(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"10\" height=\"10\">\n  <circle r=\"5\"/>\n</svg>\n"
        );
    }

    #[test]
    fn test_missing_width_reads_zero() {
        let surface = SvgSurface::default();
        assert_eq!(surface.width(), 0.0);
    }
}
