//! Page components: stateless, propless content renderers.
//!
//! Every page is a pure function of no input producing a fixed content
//! tree. There is no state, lifecycle, or I/O behind any of them.

mod about;
mod home;
mod not_found;

use crate::dom::Node;

/// The page components this site ships.
///
/// `Home` and `About` are routable; `NotFound` is the fallback for
/// unmatched paths and never appears in the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    About,
    NotFound,
}

impl PageKind {
    /// Stable machine name (used by `configsite routes`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::NotFound => "not-found",
        }
    }

    /// Document title for the page.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::NotFound => "Page Not Found",
        }
    }

    /// Navigation label, for pages that appear in the nav.
    pub fn nav_label(&self) -> &'static str {
        self.title()
    }

    /// Render the page's content tree.
    pub fn render(&self) -> Node {
        match self {
            Self::Home => home::render(),
            Self::About => about::render(),
            Self::NotFound => not_found::render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::render;

    #[test]
    fn test_home_heading() {
        let html = render(&PageKind::Home.render());
        assert!(html.contains("<h1>Welcome to ConfigSite</h1>"));
    }

    #[test]
    fn test_about_heading() {
        let html = render(&PageKind::About.render());
        assert!(html.contains("<h1>About ConfigSite</h1>"));
    }

    #[test]
    fn test_not_found_links_home() {
        let html = render(&PageKind::NotFound.render());
        assert!(html.contains(r#"href="/""#));
    }

    #[test]
    fn test_pages_are_pure() {
        // Rendering twice yields identical trees: no hidden state accumulates
        for kind in [PageKind::Home, PageKind::About, PageKind::NotFound] {
            assert_eq!(kind.render(), kind.render());
            assert_eq!(render(&kind.render()), render(&kind.render()));
        }
    }
}
