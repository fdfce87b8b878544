//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"   # Output directory (relative to project root)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Build settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory, relative to the project root until normalized.
    pub output: PathBuf,

    /// Remove the output directory before building (also `--clean`).
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("public"),
            clean: false,
        }
    }
}
