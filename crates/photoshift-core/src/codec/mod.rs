//! Filename codec: re-encodes timestamp-named image files as Unix epoch names.
//!
//! Photo hosts name uploads after their capture time, e.g.
//! `20210101120000.jpg` (`YYYYMMDDhhmmss`). The codec reads that stem as a
//! civil time in Asia/Tokyo and emits `<epoch-seconds><ext>`. Parsing is best
//! effort: a stem that is not an integer is treated as zero, never as an error.

mod civil;
mod stem;

pub use civil::{epoch_seconds, CivilFields};
pub use stem::{parse_stem, StemValue};

/// Re-encodes `basename` as `<unix-seconds><ext>`.
///
/// The extension keeps its leading dot and is copied verbatim.
///
/// # Examples
///
/// - `encode("20210101120000.jpg")` → `"1609470000.jpg"`
/// - `encode("abc.png")` → `"-62170017539.png"` (unparsable stem, all-zero date)
pub fn encode(basename: &str) -> String {
    let (stem, ext) = split_extension(basename);
    let value = parse_stem(stem);
    if value.is_defaulted() {
        tracing::debug!(basename, "filename stem is not an integer, using zero");
    }
    let fields = CivilFields::from_packed(value.get());
    let seconds = epoch_seconds(&fields)
        .or_else(|| {
            tracing::debug!(basename, ?fields, "date out of calendar range, using zero");
            epoch_seconds(&CivilFields::default())
        })
        .unwrap_or_default();
    format!("{}{}", seconds, ext)
}

/// Splits `name` into `(stem, extension)` at the last `.` of its final
/// `/`-separated element. The extension includes the dot; no dot means an
/// empty extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    let element_start = name.rfind('/').map_or(0, |i| i + 1);
    match name[element_start..].rfind('.') {
        Some(dot) => name.split_at(element_start + dot),
        None => (name, ""),
    }
}
