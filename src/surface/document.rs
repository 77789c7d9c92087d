//! Entry page as a set of addressable surfaces.
//!
//! The page is parsed once; every `<svg>` element carrying an `id` becomes a
//! surface reachable through `#id`. Rendering splices whatever was appended
//! to each surface back into the original markup, just before its closing
//! tag, leaving every other byte of the page untouched.

use std::ops::Range;

use roxmltree::ParsingOptions;

use super::SvgSurface;
use crate::error::GaugeError;

struct Slot {
    id: String,
    /// Byte range of the whole `<svg>` element in the source page.
    range: Range<usize>,
    surface: SvgSurface,
}

/// A parsed entry page.
pub struct Document {
    source: String,
    slots: Vec<Slot>,
}

impl Document {
    /// Parse a page. The markup must be well-formed (XHTML-style); a doctype is allowed.
    pub fn parse(html: &str) -> Result<Self, GaugeError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let tree = roxmltree::Document::parse_with_options(html, options)
            .map_err(|e| GaugeError::Page(e.to_string()))?;

        let slots = tree
            .descendants()
            .filter(|node| node.is_element() && node.tag_name().name() == "svg")
            .filter_map(|node| {
                let id = node.attribute("id")?.to_string();
                let surface = SvgSurface::with_attributes(
                    node.attributes().map(|a| (a.name(), a.value())),
                );
                Some(Slot {
                    id,
                    range: node.range(),
                    surface,
                })
            })
            .collect();

        Ok(Self {
            source: html.to_string(),
            slots,
        })
    }

    /// A page with no addressable surfaces; renders back unchanged.
    pub fn unparsed(html: &str) -> Self {
        Self {
            source: html.to_string(),
            slots: Vec::new(),
        }
    }

    /// Resolve a `#id` selector to a surface.
    ///
    /// Only id selectors are understood. When several surfaces share an id,
    /// the first in page order wins.
    pub fn select(&mut self, selector: &str) -> Option<&mut SvgSurface> {
        let id = selector.strip_prefix('#')?;
        self.slots
            .iter_mut()
            .find(|slot| slot.id == id)
            .map(|slot| &mut slot.surface)
    }

    /// Ids of all surfaces, in page order.
    pub fn surface_ids(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.id.as_str())
    }

    /// Serialize the page with appended elements spliced into their surfaces.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for slot in &self.slots {
            // Nested svg elements with ids are not supported; keep the outer one.
            if slot.range.start < cursor {
                continue;
            }
            out.push_str(&self.source[cursor..slot.range.start]);
            out.push_str(&splice(&self.source[slot.range.clone()], &slot.surface));
            cursor = slot.range.end;
        }
        out.push_str(&self.source[cursor..]);
        out
    }
}

/// Insert the surface's children into the original element markup.
fn splice(original: &str, surface: &SvgSurface) -> String {
    if surface.children().is_empty() {
        return original.to_string();
    }
    let children = surface.children_markup();

    if let Some(open) = original.strip_suffix("/>") {
        return format!("{}>\n{}</svg>", open.trim_end(), children);
    }

    match original.rfind("</") {
        Some(close) => format!("{}\n{}{}", &original[..close], children, &original[close..]),
        None => original.to_string(),
    }
}
