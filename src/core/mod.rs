//! Core types - pure abstractions shared across the codebase.

mod state;
mod url;

pub use state::{is_shutdown, register_server, setup_shutdown_handler};
pub use url::UrlPath;
