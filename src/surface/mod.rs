//! # Drawing Surfaces
//!
//! The substrate gauges are drawn onto. A surface exposes two capabilities:
//! reading one of its own attributes, and appending a child element described
//! by `{kind, attributes, text}`. Once appended, an element belongs to the
//! surface; callers never hold on to it.
//!
//! ## Modules
//!
//! - [`svg`]: In-memory `<svg>` surface that serializes to markup
//! - [`document`]: Entry page whose `<svg id=...>` elements are addressable surfaces

pub mod document;
pub mod svg;

pub use document::Document;
pub use svg::SvgSurface;

/// An element to append to a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Element name (`circle`, `line`, `text`, `path`).
    pub kind: &'static str,
    /// Attributes in the order they were set.
    pub attributes: Vec<(&'static str, String)>,
    /// Text content, if any.
    pub text: Option<String>,
}

impl Element {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
            text: None,
        }
    }

    /// Set an attribute. Setting the same name twice overwrites the first value.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Set a numeric attribute, formatted with [`format_number`].
    pub fn num(self, name: &'static str, value: f64) -> Self {
        self.attr(name, format_number(value))
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.text = Some(content.into());
        self
    }

    /// Look up an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The `class` attribute, or an empty string.
    pub fn class(&self) -> &str {
        self.get("class").unwrap_or("")
    }
}

/// A drawing surface.
pub trait Surface {
    /// Read an attribute of the surface element itself.
    fn attr(&self, name: &str) -> Option<&str>;

    /// Append a child element. Later children paint over earlier ones.
    fn append(&mut self, element: Element);

    /// The surface width as a number.
    ///
    /// Follows browser attribute coercion: a missing or blank attribute reads
    /// as 0, surrounding whitespace is ignored, anything non-numeric is NaN.
    fn width(&self) -> f64 {
        coerce_number(self.attr("width"))
    }
}

/// Coerce an optional attribute string to a number.
///
/// Decimal and exponent forms parse as usual; unsigned `0x`, `0b` and `0o`
/// prefixes select hexadecimal, binary and octal.
pub fn coerce_number(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let radix = match trimmed.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0b") => Some(2),
        Some("0o") => Some(8),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&trimmed[2..], radix);
    }
    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust accepts "inf" and "nan" spellings that browsers reject
        _ if trimmed.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) => {
            f64::NAN
        }
        _ => trimmed.parse().unwrap_or(f64::NAN),
    }
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
        })
        .unwrap_or(f64::NAN)
}

/// Format a number the way a browser stringifies it into an attribute.
///
/// Shortest round-trip digits, no trailing `.0` on integers, `-0` as `0`,
/// `NaN` / `Infinity` spelled out, and exponent form (`1e+21`, `1.5e-7`)
/// below 1e-6 or from 1e21 up.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let exp = format!("{:e}", value);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        format!("{}", value)
    }
}

/// Escape text content for markup.
pub(crate) fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value for a double-quoted attribute.
pub(crate) fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(98.2), "98.2");
        assert_eq!(format_number(-135.0), "-135");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_number_exponent_ranges() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(Some("200")), 200.0);
        assert_eq!(coerce_number(Some(" 200 ")), 200.0);
        assert_eq!(coerce_number(Some("1e2")), 100.0);
        assert_eq!(coerce_number(Some("")), 0.0);
        assert_eq!(coerce_number(None), 0.0);
        assert!(coerce_number(Some("200px")).is_nan());
        assert!(coerce_number(Some("inf")).is_nan());
        assert!(coerce_number(Some("wide")).is_nan());
    }

    #[test]
    fn test_coerce_number_radix_prefixes() {
        assert_eq!(coerce_number(Some("0x10")), 16.0);
        assert_eq!(coerce_number(Some("0XfF")), 255.0);
        assert_eq!(coerce_number(Some("0b101")), 5.0);
        assert_eq!(coerce_number(Some(" 0o17 ")), 15.0);
        assert!(coerce_number(Some("0x")).is_nan());
        assert!(coerce_number(Some("0x1g")).is_nan());
        assert!(coerce_number(Some("-0x10")).is_nan());
        assert!(coerce_number(Some("0b102")).is_nan());
    }

    #[test]
    fn test_element_attr_overwrites() {
        let el = Element::new("circle")
            .num("r", 1.0)
            .attr("class", "a")
            .num("r", 2.0);
        assert_eq!(el.attributes.len(), 2);
        assert_eq!(el.get("r"), Some("2"));
        assert_eq!(el.class(), "a");
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_attr("say \"hi\""), "say &quot;hi&quot;");
    }
}
