//! Image fetch-and-save.
//!
//! Downloads one image and stores it under the output root with its
//! codec-encoded name. Every failure is terminal; nothing is retried.

use crate::codec;
use crate::fetch::{FetchError, HttpClient};
use crate::url_model::image_basename;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The only status accepted as a successful image download.
const HTTP_OK: u32 = 200;

/// Why an image could not be archived.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("create directory {} failed", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("status code {status}: src={url}")]
    Status { status: u32, url: String },
    #[error("create file {} failed", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("write file {} failed", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where a downloaded `src` is stored: `<output_root>/<encode(basename(src))>`.
pub fn image_output_path(output_root: &Path, src: &str) -> PathBuf {
    output_root.join(codec::encode(&image_basename(src)))
}

/// Fetches `src` and writes the body to [`image_output_path`], replacing any
/// existing file. Returns the written path.
///
/// The output directory (and its parents) is created first. Only HTTP 200 is
/// accepted; any other status fails without touching the filesystem beyond
/// the directory.
pub fn save_image(client: &dyn HttpClient, src: &str, output_root: &Path) -> Result<PathBuf, ImageError> {
    fs::create_dir_all(output_root).map_err(|source| ImageError::CreateDir {
        path: output_root.to_path_buf(),
        source,
    })?;

    let response = client.get(src)?;
    if response.status != HTTP_OK {
        return Err(ImageError::Status {
            status: response.status,
            url: src.to_string(),
        });
    }

    let path = image_output_path(output_root, src);
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .map_err(|source| ImageError::CreateFile {
            path: path.clone(),
            source,
        })?;
    file.write_all(&response.body)
        .map_err(|source| ImageError::WriteFile {
            path: path.clone(),
            source,
        })?;

    tracing::debug!(src, path = %path.display(), bytes = response.body.len(), "image stored");
    Ok(path)
}
