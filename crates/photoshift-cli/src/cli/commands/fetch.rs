//! `photoshift fetch <url>` – archive a single image.

use anyhow::{Context, Result};
use photoshift_core::config::TransformConfig;
use photoshift_core::fetch::CurlClient;
use photoshift_core::image_store::save_image;

pub fn run_fetch(cfg: &TransformConfig, url: &str) -> Result<()> {
    let path = save_image(&CurlClient::new(), url, &cfg.output_image_root)
        .with_context(|| format!("fetch {}", url))?;
    tracing::info!("downloaded {}", url);
    println!("{}", path.display());
    Ok(())
}
