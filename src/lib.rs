// Portfolio backend library.
// Serves cached GitHub statistics and project cards over HTTP.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod github;
pub mod projects;
pub mod server;
pub mod stats;

pub use error::{FolioError, Result};
