//! Export entry record for the post being rewritten.
//!
//! Only identifies the post in logs; the rewriter reads it and never changes it.

use std::path::Path;

/// Fallback basename when an input path has no usable file stem.
const DEFAULT_BASENAME: &str = "entry";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// Post slug as exported (e.g. `2021/01/01/120000`).
    pub basename: String,
    pub title: Option<String>,
}

impl Entry {
    pub fn new(basename: impl Into<String>) -> Self {
        Self {
            basename: basename.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Entry named after the file stem of an exported post body.
    pub fn from_input_path(path: &Path) -> Self {
        let basename = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASENAME.to_string());
        Self::new(basename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_input_path_uses_stem() {
        let e = Entry::from_input_path(Path::new("export/2021-01-01-hello.html"));
        assert_eq!(e.basename, "2021-01-01-hello");
        assert!(e.title.is_none());
    }

    #[test]
    fn from_input_path_fallback() {
        assert_eq!(Entry::from_input_path(Path::new("/")).basename, "entry");
    }

    #[test]
    fn with_title() {
        let e = Entry::new("slug").with_title("Hello");
        assert_eq!(e.title.as_deref(), Some("Hello"));
    }
}
