//! Embedded asset types with content-hash filenames.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::hash;

/// Directory embedded assets are written into, relative to output.
pub const ASSET_DIR: &str = "assets";

/// Kind of embedded asset (determines extension).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Css,
    JavaScript,
}

impl AssetKind {
    const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::JavaScript => "js",
        }
    }
}

/// A static asset compiled into the binary.
///
/// Written with a content fingerprint in the filename
/// (`assets/site-a1b2c3d4.css`) so rebuilt sites never serve stale caches.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedAsset {
    kind: AssetKind,
    name: &'static str,
    content: &'static str,
}

impl EmbeddedAsset {
    pub const fn new(kind: AssetKind, name: &'static str, content: &'static str) -> Self {
        Self {
            kind,
            name,
            content,
        }
    }

    pub const fn content(&self) -> &'static str {
        self.content
    }

    /// Fingerprinted filename, e.g. `site-a1b2c3d4.css`.
    pub fn filename(&self) -> String {
        format!(
            "{}-{}.{}",
            self.name,
            hash::fingerprint(self.content),
            self.kind.extension()
        )
    }

    /// Absolute URL path the asset is referenced under.
    pub fn url_path(&self) -> String {
        format!("/{}/{}", ASSET_DIR, self.filename())
    }

    /// Write the asset under `output_dir`, creating `assets/` if needed.
    pub fn write(&self, output_dir: &Path) -> Result<PathBuf> {
        let dir = output_dir.join(ASSET_DIR);
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let file = dir.join(self.filename());
        fs::write(&file, self.content)
            .with_context(|| format!("failed to write {}", file.display()))?;
        Ok(file)
    }

    /// Remove stale fingerprints of this asset (other hashes, same name).
    pub fn cleanup_old(&self, output_dir: &Path) -> Result<()> {
        self.cleanup(output_dir, false)
    }

    /// Remove every written copy of this asset, current fingerprint included.
    pub fn remove_all(&self, output_dir: &Path) -> Result<()> {
        self.cleanup(output_dir, true)
    }

    fn cleanup(&self, output_dir: &Path, include_current: bool) -> Result<()> {
        let dir = output_dir.join(ASSET_DIR);
        let Ok(entries) = fs::read_dir(&dir) else {
            return Ok(()); // nothing written yet
        };

        let current = self.filename();
        let prefix = format!("{}-", self.name);
        let suffix = format!(".{}", self.kind.extension());

        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !name.starts_with(&prefix) || !name.ends_with(&suffix) {
                continue;
            }
            if !include_current && name == current {
                continue;
            }
            fs::remove_file(entry.path())
                .with_context(|| format!("failed to remove stale asset {}", name))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASSET: EmbeddedAsset = EmbeddedAsset::new(AssetKind::Css, "site", "body { margin: 0 }");

    #[test]
    fn test_filename_fingerprinted() {
        let filename = ASSET.filename();
        assert!(filename.starts_with("site-"));
        assert!(filename.ends_with(".css"));
        // name + '-' + 8 hex chars + extension
        assert_eq!(filename.len(), "site-".len() + 8 + ".css".len());
    }

    #[test]
    fn test_url_path() {
        assert_eq!(ASSET.url_path(), format!("/assets/{}", ASSET.filename()));
    }

    #[test]
    fn test_write_and_cleanup() {
        let tmp = tempfile::tempdir().unwrap();

        let file = ASSET.write(tmp.path()).unwrap();
        assert!(file.is_file());
        assert_eq!(fs::read_to_string(&file).unwrap(), ASSET.content());

        // A stale fingerprint of the same asset gets removed
        let stale = tmp.path().join(ASSET_DIR).join("site-00000000.css");
        fs::write(&stale, "old").unwrap();
        ASSET.cleanup_old(tmp.path()).unwrap();
        assert!(!stale.exists());
        assert!(file.exists());

        // Unrelated assets survive cleanup
        let other = tmp.path().join(ASSET_DIR).join("nav-00000000.js");
        fs::write(&other, "js").unwrap();
        ASSET.cleanup_old(tmp.path()).unwrap();
        assert!(other.exists());
    }

    #[test]
    fn test_remove_all() {
        let tmp = tempfile::tempdir().unwrap();
        let file = ASSET.write(tmp.path()).unwrap();
        ASSET.remove_all(tmp.path()).unwrap();
        assert!(!file.exists());
    }

    #[test]
    fn test_cleanup_without_assets_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(ASSET.cleanup_old(tmp.path()).is_ok());
    }
}
