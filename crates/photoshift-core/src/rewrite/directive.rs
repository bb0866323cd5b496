//! `figure` shortcode construction.

use crate::codec;
use crate::url_model::image_basename;
use regex::Regex;
use std::sync::LazyLock;

/// Site path under which rewritten images are referenced.
pub const IMAGE_URL_ROOT: &str = "/images";

static WIDTH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"width:([0-9]+)px").expect("invalid width regex"));

/// Pixel width digits from an inline style (`width:<digits>px`, first match).
pub fn width_hint(style: &str) -> Option<&str> {
    WIDTH_PATTERN
        .captures(style)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Site path of the local copy: `/images/<encode(basename(src))>`.
pub fn local_image_path(src: &str) -> String {
    format!("{}/{}", IMAGE_URL_ROOT, codec::encode(&image_basename(src)))
}

/// `{{< figure src="<path>" <extra> >}}`; without a width the extra slot is
/// empty and two spaces precede `>}}`.
pub fn figure_shortcode(local_path: &str, width: Option<&str>) -> String {
    let extra = width
        .map(|w| format!(r#"width="{}px""#, w))
        .unwrap_or_default();
    format!(r#"{{{{< figure src="{}" {} >}}}}"#, local_path, extra)
}
