//! `configsite init` - write a starter config file.

use crate::{config::SiteConfig, log};
use anyhow::{Result, bail};
use std::fs;

/// Starter config, mirroring the defaults.
const CONFIG_TEMPLATE: &str = r#"[site.info]
title = "ConfigSite"
description = "Your modern web application solution"
copyright = "© 2024 ConfigSite. All rights reserved."
language = "en"
# url = "https://example.com"

[site.nav]
spa = true          # in-app navigation (no full page reloads)

[build]
output = "public"

[serve]
interface = "127.0.0.1"
port = 5277
"#;

/// Write the starter config. Refuses to overwrite an existing file.
pub fn init_site(config: &SiteConfig) -> Result<()> {
    let path = &config.config_path;
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}
