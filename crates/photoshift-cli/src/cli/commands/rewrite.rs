//! `photoshift rewrite <input>` – rewrite photo markup in one post body.

use anyhow::{Context, Result};
use photoshift_core::config::TransformConfig;
use photoshift_core::document::Document;
use photoshift_core::entry::Entry;
use photoshift_core::fetch::{CurlClient, HttpClient};
use photoshift_core::rewrite::PhotoRewriter;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RewriteArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub title: Option<String>,
}

pub fn run_rewrite(cfg: &TransformConfig, args: &RewriteArgs) -> Result<()> {
    rewrite_with(cfg, args, &CurlClient::new())
}

/// Rewrites `args.input`. The output is written even when a download fails,
/// so the containers rewritten before the failure are not lost; the error is
/// returned afterwards.
fn rewrite_with(cfg: &TransformConfig, args: &RewriteArgs, client: &dyn HttpClient) -> Result<()> {
    let markup = fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;

    let mut entry = Entry::from_input_path(&args.input);
    if let Some(title) = &args.title {
        entry = entry.with_title(title.clone());
    }

    let mut doc = Document::new(markup);
    let result = PhotoRewriter::new(cfg, client, &entry).transform(&mut doc);

    let html = doc.into_html();
    match &args.output {
        Some(path) => fs::write(path, &html)
            .with_context(|| format!("write {}", path.display()))?,
        None => io::stdout().lock().write_all(html.as_bytes())?,
    }

    result.with_context(|| format!("rewrite {}", args.input.display()))?;
    tracing::info!(entry = %entry.basename, "rewrote {}", args.input.display());
    Ok(())
}
