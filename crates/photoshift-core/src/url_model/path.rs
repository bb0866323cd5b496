//! Path element extraction.

/// Last `/`-separated element of `path`, ignoring trailing slashes.
///
/// An empty path yields `"."` and a path of only slashes yields `"/"`.
pub fn basename(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}

/// Extracts the last path segment of an absolute URL.
///
/// Returns `None` if `url` does not parse as an absolute, hierarchical URL.
/// A URL whose path is only `/` yields `"/"`.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    if parsed.cannot_be_a_base() {
        return None;
    }
    Some(basename(parsed.path()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_cases() {
        assert_eq!(basename("a/b/file.jpg"), "file.jpg");
        assert_eq!(basename("a/b/"), "b");
        assert_eq!(basename("file"), "file");
        assert_eq!(basename("///"), "/");
        assert_eq!(basename(""), ".");
    }

    #[test]
    fn url_segment() {
        assert_eq!(
            filename_from_url_path("https://example.com/a/b/file.jpg").as_deref(),
            Some("file.jpg")
        );
        assert_eq!(
            filename_from_url_path("https://example.com/file.zip?token=abc").as_deref(),
            Some("file.zip")
        );
    }

    #[test]
    fn not_a_url() {
        assert_eq!(filename_from_url_path("relative/file.jpg"), None);
        assert_eq!(filename_from_url_path("data:image/png;base64,AAAA"), None);
    }
}
