//! Parsed markup document with in-place element replacement.
//!
//! The markup is parsed into an HTML tree once. Replacing a container swaps
//! it for a marker text node; serialization then substitutes each marker with
//! its replacement text verbatim, so shortcode syntax is never entity-escaped.
//! A document in which nothing was replaced serializes to its source as is.

mod scan;

use scraper::node::Text;
use scraper::{Html, Node};

pub use scan::{PHOTO_CONTAINER_TAG, PHOTO_ITEMTYPE};

/// Delimits replacement markers in the serialized tree (Unicode private use).
const MARKER: char = '\u{E000}';

/// An `img` found as a direct child of a photograph container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoElement {
    /// `src` attribute, entity-decoded, empty when absent.
    pub src: String,
    /// `style` attribute, entity-decoded, empty when absent.
    pub style: String,
}

/// A post body being rewritten.
#[derive(Debug)]
pub struct Document {
    source: String,
    html: Html,
    replacements: Vec<String>,
}

impl Document {
    pub fn new(markup: impl Into<String>) -> Self {
        let source = markup.into();
        let html = Html::parse_fragment(&source);
        Self {
            source,
            html,
            replacements: Vec::new(),
        }
    }

    /// Photo elements currently in the document, in document order.
    pub fn photo_elements(&self) -> Vec<PhotoElement> {
        scan::photo_images(&self.html).map(scan::photo_element).collect()
    }

    /// Calls `replace` for every photo element, in document order, and
    /// replaces the element's container with the returned text.
    ///
    /// Matches are collected before anything is replaced. `replace` still runs
    /// for an element whose container is already gone (a second `img` in one
    /// container, or a container nested in a replaced one), but its text is
    /// dropped. The first error stops the walk; earlier replacements stay.
    ///
    /// Returns the number of containers replaced.
    pub fn replace_photos<E>(
        &mut self,
        mut replace: impl FnMut(&PhotoElement) -> Result<String, E>,
    ) -> Result<usize, E> {
        let matches: Vec<_> = scan::photo_images(&self.html)
            .filter_map(|img| Some((img.parent()?.id(), scan::photo_element(img))))
            .collect();

        let root = self.html.tree.root().id();
        let mut count = 0;
        for (container, element) in matches {
            let text = replace(&element)?;

            let attached = self
                .html
                .tree
                .get(container)
                .is_some_and(|node| node.ancestors().any(|a| a.id() == root));
            if !attached {
                tracing::debug!(src = %element.src, "photo container already replaced, skipped");
                continue;
            }

            let marker = marker(self.replacements.len());
            if let Some(mut node) = self.html.tree.get_mut(container) {
                node.insert_before(Node::Text(Text {
                    text: marker.as_str().into(),
                }));
                node.detach();
            }
            tracing::debug!(src = %element.src, replacement = %text, "photo container replaced");
            self.replacements.push(text);
            count += 1;
        }
        Ok(count)
    }

    /// Serializes the document.
    pub fn to_html(&self) -> String {
        if self.replacements.is_empty() {
            return self.source.clone();
        }
        let mut html = self.html.root_element().inner_html();
        for (index, text) in self.replacements.iter().enumerate() {
            html = html.replacen(&marker(index), text, 1);
        }
        html
    }

    pub fn into_html(self) -> String {
        if self.replacements.is_empty() {
            self.source
        } else {
            self.to_html()
        }
    }
}

fn marker(index: usize) -> String {
    format!("{MARKER}{index}{MARKER}")
}
