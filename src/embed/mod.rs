//! Embedded static resources.
//!
//! The stylesheet and the navigation runtime are compiled into the
//! binary and written to the output with content-fingerprinted
//! filenames (see [`asset::EmbeddedAsset`]).

mod asset;

pub use asset::{ASSET_DIR, AssetKind, EmbeddedAsset};

use anyhow::Result;
use std::path::Path;

use crate::config::SiteConfig;

/// Site stylesheet (always written).
pub const SITE_CSS: EmbeddedAsset =
    EmbeddedAsset::new(AssetKind::Css, "site", include_str!("css/site.css"));

/// In-app navigation runtime (written when `site.nav.spa` is enabled).
pub const NAV_JS: EmbeddedAsset =
    EmbeddedAsset::new(AssetKind::JavaScript, "nav", include_str!("js/nav.js"));

/// Write all embedded assets to the output directory.
///
/// Stale fingerprints are removed first so the output never accumulates
/// superseded copies.
pub fn write_embedded_assets(config: &SiteConfig, output_dir: &Path) -> Result<()> {
    SITE_CSS.cleanup_old(output_dir)?;
    SITE_CSS.write(output_dir)?;

    if config.site.nav.spa {
        NAV_JS.cleanup_old(output_dir)?;
        NAV_JS.write(output_dir)?;
    } else {
        NAV_JS.remove_all(output_dir)?;
    }

    Ok(())
}
