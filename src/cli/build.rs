//! Site building: render every route through the shell into the output.
//!
//! Pipeline: init output -> embedded assets -> pages (parallel) -> 404.
//! Rendering is pure, so building twice produces byte-identical files.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{fs, path::Path, time::Instant};

use crate::{
    config::SiteConfig,
    debug, embed, log,
    page::PageKind,
    router::{self, Shell},
};

/// Build the entire site into `config.build.output`.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let started = Instant::now();
    let output_dir = &config.build.output;

    init_output(config, output_dir)?;
    embed::write_embedded_assets(config, output_dir)?;

    let shell = Shell::from_config(config);

    // Pages render in parallel; rendering is pure so output is stable
    router::ROUTES.par_iter().try_for_each(|route| {
        let html = shell.render(route.page);
        write_page(&route.output_file(output_dir), &html)
    })?;

    // Fallback document for unmatched paths
    write_page(
        &output_dir.join("404.html"),
        &shell.render(PageKind::NotFound),
    )?;

    log!(
        "build";
        "{} pages in {:.0?}",
        router::ROUTES.len() + 1,
        started.elapsed()
    );
    Ok(())
}

/// Prepare the output directory (clean if requested).
fn init_output(config: &SiteConfig, output_dir: &Path) -> Result<()> {
    if config.build.clean && output_dir.exists() {
        fs::remove_dir_all(output_dir)
            .with_context(|| format!("failed to clean {}", output_dir.display()))?;
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    Ok(())
}

fn write_page(file: &Path, html: &str) -> Result<()> {
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(file, html).with_context(|| format!("failed to write {}", file.display()))?;
    debug!("build"; "wrote {}", file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(output: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.output = output.to_path_buf();
        config
    }

    #[test]
    fn test_build_writes_all_documents() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_config(tmp.path());

        build_site(&config).unwrap();

        let index = fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(index.contains("Welcome to ConfigSite"));

        let about = fs::read_to_string(tmp.path().join("about/index.html")).unwrap();
        assert!(about.contains("About ConfigSite"));

        let not_found = fs::read_to_string(tmp.path().join("404.html")).unwrap();
        assert!(not_found.contains("Page Not Found"));

        assert!(
            tmp.path()
                .join("assets")
                .join(embed::SITE_CSS.filename())
                .is_file()
        );
    }

    #[test]
    fn test_build_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_config(tmp.path());

        build_site(&config).unwrap();
        let first = fs::read(tmp.path().join("index.html")).unwrap();
        let first_about = fs::read(tmp.path().join("about/index.html")).unwrap();

        build_site(&config).unwrap();
        let second = fs::read(tmp.path().join("index.html")).unwrap();
        let second_about = fs::read(tmp.path().join("about/index.html")).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_about, second_about);
    }

    #[test]
    fn test_build_clean_removes_stale_files() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = test_config(tmp.path());

        let stale = tmp.path().join("stale.html");
        fs::write(&stale, "old").unwrap();

        config.build.clean = true;
        build_site(&config).unwrap();

        assert!(!stale.exists());
        assert!(tmp.path().join("index.html").is_file());
    }

    #[test]
    fn test_build_without_spa_skips_nav_script() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = test_config(tmp.path());
        config.site.nav.spa = false;

        build_site(&config).unwrap();

        let index = fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(!index.contains("<script"));
        assert!(
            !tmp.path()
                .join("assets")
                .join(embed::NAV_JS.filename())
                .exists()
        );
    }
}
