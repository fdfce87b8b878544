//! `[site]` configuration: site information and navigation.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "ConfigSite"
//! copyright = "© 2024 ConfigSite. All rights reserved."
//!
//! [site.nav]
//! spa = true
//! ```

use serde::{Deserialize, Serialize};

/// `[site]` section: info + nav.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    pub info: SiteInfoConfig,
    pub nav: NavConfig,
}

/// Site metadata rendered into the chrome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title (header and document titles).
    pub title: String,

    /// Site description.
    pub description: String,

    /// Copyright notice (footer).
    pub copyright: String,

    /// Public site URL (e.g., "https://example.com").
    pub url: Option<String>,

    /// Language code (e.g., "en", "zh-Hans").
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: "ConfigSite".into(),
            description: "Your modern web application solution".into(),
            copyright: "© 2024 ConfigSite. All rights reserved.".into(),
            url: None,
            language: "en".into(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` must not be empty (the chrome depends on it)
    /// - `url`, when set, must be a valid http(s) URL with a host
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                "site.info.title",
                "title must not be empty",
                "set a title, e.g.: \"ConfigSite\"",
            );
        }

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            "site.info.url",
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            "site.info.url",
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        "site.info.url",
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}

/// In-app navigation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Enable in-app navigation (link interception + content swap).
    /// When disabled, nav links are plain full-reload anchors.
    pub spa: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { spa: true }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_site_info_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.info.title, "ConfigSite");
        assert_eq!(
            config.site.info.copyright,
            "© 2024 ConfigSite. All rights reserved."
        );
        assert_eq!(config.site.info.language, "en");
        assert!(config.site.info.url.is_none());
    }

    #[test]
    fn test_site_info_override() {
        let config = test_parse_config("[site.info]\ntitle = \"Other\"\nlanguage = \"de\"");
        assert_eq!(config.site.info.title, "Other");
        assert_eq!(config.site.info.language, "de");
        // Untouched fields keep defaults
        assert!(config.site.info.copyright.contains("ConfigSite"));
    }

    #[test]
    fn test_nav_defaults_to_spa() {
        let config = test_parse_config("");
        assert!(config.site.nav.spa);
    }

    #[test]
    fn test_nav_spa_disabled() {
        let config = test_parse_config("[site.nav]\nspa = false");
        assert!(!config.site.nav.spa);
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let config = test_parse_config("[site.info]\ntitle = \"  \"");
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_url() {
        let mut diag = ConfigDiagnostics::new();
        test_parse_config("[site.info]\nurl = \"https://example.com\"")
            .site
            .info
            .validate(&mut diag);
        assert!(!diag.has_errors());

        let mut diag = ConfigDiagnostics::new();
        test_parse_config("[site.info]\nurl = \"ftp://example.com\"")
            .site
            .info
            .validate(&mut diag);
        assert!(diag.has_errors());

        let mut diag = ConfigDiagnostics::new();
        test_parse_config("[site.info]\nurl = \"not a url\"")
            .site
            .info
            .validate(&mut diag);
        assert!(diag.has_errors());
    }
}
