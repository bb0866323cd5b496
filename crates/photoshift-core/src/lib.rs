pub mod config;
pub mod logging;

pub mod codec;
pub mod document;
pub mod entry;
pub mod fetch;
pub mod image_store;
pub mod rewrite;
pub mod url_model;
