//! CLI for photoshift.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use photoshift_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_encode, run_fetch, run_rewrite, RewriteArgs};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "photoshift")]
#[command(about = "photoshift: rewrite exported photo markup into figure shortcodes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rewrite photo markup in an exported post body.
    Rewrite {
        /// Exported post body (HTML fragment).
        input: PathBuf,

        /// Write the result here instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Directory downloaded images are saved to (overrides config).
        #[arg(long, value_name = "DIR")]
        image_root: Option<PathBuf>,

        /// Download referenced images (overrides config).
        #[arg(long, conflicts_with = "no_download")]
        download: bool,

        /// Do not download images even if the config enables it.
        #[arg(long)]
        no_download: bool,

        /// Post title, recorded in logs.
        #[arg(long)]
        title: Option<String>,
    },

    /// Print the timestamp-encoded name for each image basename.
    Encode {
        /// Basenames such as `20210101120000.jpg`.
        #[arg(required = true)]
        basenames: Vec<String>,
    },

    /// Download one image into the image root under its encoded name.
    Fetch {
        /// Image URL.
        url: String,

        /// Directory the image is saved to (overrides config).
        #[arg(long, value_name = "DIR")]
        image_root: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Tri-state download override from the `--download`/`--no-download` pair.
fn download_override(download: bool, no_download: bool) -> Option<bool> {
    match (download, no_download) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Rewrite {
                input,
                output,
                image_root,
                download,
                no_download,
                title,
            } => {
                let cfg = config::load_or_init()?
                    .with_overrides(image_root, download_override(download, no_download));
                tracing::debug!("loaded config: {:?}", cfg);
                run_rewrite(
                    &cfg,
                    &RewriteArgs {
                        input,
                        output,
                        title,
                    },
                )?;
            }
            CliCommand::Encode { basenames } => run_encode(&basenames)?,
            CliCommand::Fetch { url, image_root } => {
                let cfg = config::load_or_init()?.with_overrides(image_root, None);
                run_fetch(&cfg, &url)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
