//! Photo markup rewriter.
//!
//! Finds `img` elements wrapped in a photograph container, optionally archives
//! each image, and replaces the container with a `figure` shortcode pointing
//! at the codec-derived local path.
//!
//! The first archive failure stops the scan. Containers rewritten before it
//! stay rewritten; there is no rollback.

mod directive;

pub use directive::{figure_shortcode, local_image_path, width_hint, IMAGE_URL_ROOT};

use crate::config::TransformConfig;
use crate::document::{Document, PhotoElement};
use crate::entry::Entry;
use crate::fetch::HttpClient;
use crate::image_store::{save_image, ImageError};

/// What the rewriter needs from one matched `img`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoReference {
    pub src: String,
    /// Width digits exactly as written in the style attribute.
    pub width_hint: Option<String>,
}

impl PhotoReference {
    pub fn from_element(element: &PhotoElement) -> Self {
        Self {
            src: element.src.clone(),
            width_hint: width_hint(&element.style).map(str::to_string),
        }
    }

    pub fn shortcode(&self) -> String {
        figure_shortcode(&local_image_path(&self.src), self.width_hint.as_deref())
    }
}

/// Rewrites the photo markup of one entry.
pub struct PhotoRewriter<'a> {
    config: &'a TransformConfig,
    client: &'a dyn HttpClient,
    entry: &'a Entry,
}

impl<'a> PhotoRewriter<'a> {
    pub fn new(config: &'a TransformConfig, client: &'a dyn HttpClient, entry: &'a Entry) -> Self {
        Self {
            config,
            client,
            entry,
        }
    }

    /// Rewrites `doc` in place.
    ///
    /// Every matched `img` is archived, including a second `img` of one
    /// container and those in a container nested inside a replaced one. Only
    /// the first match of each surviving container supplies the shortcode.
    pub fn transform(&self, doc: &mut Document) -> Result<(), ImageError> {
        let span = tracing::debug_span!("rewrite", entry = %self.entry.basename);
        let _guard = span.enter();

        let count = doc.replace_photos(|element| -> Result<String, ImageError> {
            self.archive(&element.src)?;
            Ok(PhotoReference::from_element(element).shortcode())
        })?;

        tracing::debug!(count, "photo rewrite finished");
        Ok(())
    }

    fn archive(&self, src: &str) -> Result<(), ImageError> {
        if !self.config.download_images || src.is_empty() {
            return Ok(());
        }
        save_image(self.client, src, &self.config.output_image_root)?;
        tracing::info!("downloaded {}", src);
        Ok(())
    }
}
