//! CLI command handlers, one file per command.

mod completions;
mod encode;
mod fetch;
mod rewrite;

pub use completions::run_completions;
pub use encode::run_encode;
pub use fetch::run_fetch;
pub use rewrite::{run_rewrite, RewriteArgs};
