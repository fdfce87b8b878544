//! Router shell: the persistent chrome hosting the matched page.
//!
//! The shell owns everything outside the content slot - site title
//! header, navigation links, footer - and mounts exactly one page
//! component into `main`. Chrome text comes from `[site.info]`; the
//! chrome itself is identical on every route.

use crate::{
    config::SiteConfig,
    dom::{Element, render_document},
    embed,
    page::PageKind,
};

/// Persistent outer layout, captured from config once per build.
#[derive(Debug, Clone)]
pub struct Shell {
    title: String,
    copyright: String,
    language: String,
    spa: bool,
}

impl Shell {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            title: config.site.info.title.clone(),
            copyright: config.site.info.copyright.clone(),
            language: config.site.info.language.clone(),
            spa: config.site.nav.spa,
        }
    }

    /// Render a complete document with `page` mounted in the content slot.
    pub fn render(&self, page: PageKind) -> String {
        let html = Element::new("html")
            .attr("lang", self.language.clone())
            .child(self.head(page))
            .child(
                Element::new("body").child(
                    Element::new("div")
                        .class("app")
                        .child(self.header())
                        .child(Element::new("main").class("app-main").child(page.render()))
                        .child(self.footer()),
                ),
            );
        render_document(&html)
    }

    fn document_title(&self, page: PageKind) -> String {
        match page {
            PageKind::Home => self.title.clone(),
            other => format!("{} - {}", other.title(), self.title),
        }
    }

    fn head(&self, page: PageKind) -> Element {
        let mut head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(Element::new("title").text(self.document_title(page)))
            .child(
                Element::new("link")
                    .attr("rel", "stylesheet")
                    .attr("href", embed::SITE_CSS.url_path()),
            );

        if self.spa {
            head = head.child(
                Element::new("script")
                    .attr("defer", "")
                    .attr("src", embed::NAV_JS.url_path()),
            );
        }

        head
    }

    fn header(&self) -> Element {
        Element::new("header")
            .class("app-header")
            .child(Element::new("h1").text(self.title.clone()))
            .child(
                Element::new("nav").children(
                    crate::router::nav_links().map(|(label, href)| {
                        Element::new("a").attr("href", href).text(label).into()
                    }),
                ),
            )
    }

    fn footer(&self) -> Element {
        Element::new("footer")
            .class("app-footer")
            .child(Element::new("p").text(self.copyright.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::render;

    fn shell() -> Shell {
        Shell::from_config(&SiteConfig::default())
    }

    #[test]
    fn test_home_document() {
        let html = shell().render(PageKind::Home);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Welcome to ConfigSite</h1>"));
        assert!(html.contains("<title>ConfigSite</title>"));
    }

    #[test]
    fn test_about_document() {
        let html = shell().render(PageKind::About);
        assert!(html.contains("<h1>About ConfigSite</h1>"));
        assert!(html.contains("<title>About - ConfigSite</title>"));
    }

    #[test]
    fn test_chrome_identical_across_routes() {
        let shell = shell();
        let header = render(&shell.header().into());
        let footer = render(&shell.footer().into());

        for page in [PageKind::Home, PageKind::About, PageKind::NotFound] {
            let html = shell.render(page);
            assert!(html.contains(&header), "header missing on {:?}", page);
            assert!(html.contains(&footer), "footer missing on {:?}", page);
        }
    }

    #[test]
    fn test_chrome_content() {
        let html = shell().render(PageKind::Home);
        assert!(html.contains(r#"<h1>ConfigSite</h1>"#));
        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(html.contains(r#"<a href="/about">About</a>"#));
        assert!(html.contains("© 2024 ConfigSite. All rights reserved."));
    }

    #[test]
    fn test_render_idempotent() {
        let shell = shell();
        assert_eq!(shell.render(PageKind::Home), shell.render(PageKind::Home));
        assert_eq!(shell.render(PageKind::About), shell.render(PageKind::About));
    }

    #[test]
    fn test_nav_script_follows_spa_flag() {
        let mut config = SiteConfig::default();
        config.site.nav.spa = true;
        let with_nav = Shell::from_config(&config).render(PageKind::Home);
        assert!(with_nav.contains(&embed::NAV_JS.url_path()));

        config.site.nav.spa = false;
        let without_nav = Shell::from_config(&config).render(PageKind::Home);
        assert!(!without_nav.contains("<script"));
    }

    #[test]
    fn test_stylesheet_link_fingerprinted() {
        let html = shell().render(PageKind::Home);
        assert!(html.contains(&embed::SITE_CSS.url_path()));
    }
}
