//! Filename derivation from image `src` values.
//!
//! The codec needs the final path element of the image URL. Absolute URLs are
//! parsed so that query strings and fragments never reach the extension;
//! anything else (relative or malformed `src`) is split textually.

mod path;

pub use path::{basename, filename_from_url_path};

/// Final path element of an image `src`, as fed to the filename codec.
///
/// # Examples
///
/// - `image_basename("https://cdn.example.com/u/a/20210101/20210101120000.jpg")` → `"20210101120000.jpg"`
/// - `image_basename("https://cdn.example.com/a.png?size=l")` → `"a.png"`
/// - `image_basename("")` → `"."`
pub fn image_basename(src: &str) -> String {
    if let Some(segment) = filename_from_url_path(src) {
        return segment;
    }
    let end = src
        .find(|c: char| c == '?' || c == '#')
        .unwrap_or(src.len());
    basename(&src[..end]).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url() {
        assert_eq!(
            image_basename(
                "https://cdn-ak.f.st-hatena.com/images/fotolife/u/user/20210101/20210101120000.jpg"
            ),
            "20210101120000.jpg"
        );
    }

    #[test]
    fn query_and_fragment_are_dropped() {
        assert_eq!(
            image_basename("https://example.com/p/20210101120000.png?w=300#x"),
            "20210101120000.png"
        );
        assert_eq!(image_basename("img/20210101120000.gif?v=2"), "20210101120000.gif");
    }

    #[test]
    fn relative_src() {
        assert_eq!(image_basename("/images/a.jpg"), "a.jpg");
        assert_eq!(image_basename("a.jpg"), "a.jpg");
    }

    #[test]
    fn empty_and_root() {
        assert_eq!(image_basename(""), ".");
        assert_eq!(image_basename("https://example.com/"), "/");
    }
}
