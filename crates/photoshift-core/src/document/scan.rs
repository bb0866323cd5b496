//! Photo element detection: `span[itemtype='http://schema.org/Photograph'] > img`.

use super::PhotoElement;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Element name of a photograph container.
pub const PHOTO_CONTAINER_TAG: &str = "span";
/// Microdata type marking a photograph container.
pub const PHOTO_ITEMTYPE: &str = "http://schema.org/Photograph";

static PHOTO_IMG: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!(
        "{}[itemtype='{}'] > img",
        PHOTO_CONTAINER_TAG, PHOTO_ITEMTYPE
    ))
    .expect("photo selector is valid")
});

/// `img` elements attached to the document, in document order.
pub(super) fn photo_images(html: &Html) -> impl Iterator<Item = ElementRef<'_>> + '_ {
    html.root_element().select(&PHOTO_IMG)
}

pub(super) fn photo_element(img: ElementRef<'_>) -> PhotoElement {
    let attr = |name: &str| img.value().attr(name).unwrap_or_default().to_string();
    PhotoElement {
        src: attr("src"),
        style: attr("style"),
    }
}
