//! Route table and path resolution.
//!
//! The table is fixed at compile time: an ordered set of
//! (path pattern, page component) pairs. Resolution normalizes the
//! incoming path and returns the first matching entry.

pub mod shell;

pub use shell::Shell;

use std::path::{Path, PathBuf};

use crate::{core::UrlPath, page::PageKind};

/// A single route: URL path pattern -> page component.
///
/// # Example
///
/// ```text
/// Route { path: "/about", page: About }
///     permalink:   /about/
///     output_file: <output>/about/index.html
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// URL path pattern (exact match, trailing-slash-insensitive).
    pub path: &'static str,
    /// Page component mounted when this route matches.
    pub page: PageKind,
}

/// The route table, in navigation order.
///
/// Invariant: patterns do not overlap, so at most one entry matches any
/// normalized path.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        page: PageKind::Home,
    },
    Route {
        path: "/about",
        page: PageKind::About,
    },
];

impl Route {
    /// Canonical permalink (normalized page URL).
    pub fn permalink(&self) -> UrlPath {
        UrlPath::from_page(self.path)
    }

    /// Output document for this route under `output_dir`.
    ///
    /// `/` -> `index.html`, `/about` -> `about/index.html`.
    pub fn output_file(&self, output_dir: &Path) -> PathBuf {
        let mut file = output_dir.to_path_buf();
        for segment in self.path.split('/').filter(|s| !s.is_empty()) {
            file.push(segment);
        }
        file.push("index.html");
        file
    }
}

/// Resolve a path to its page component.
///
/// Walks the table in order and returns the first match; `None` means the
/// caller falls back to the not-found page.
pub fn resolve(path: &UrlPath) -> Option<PageKind> {
    ROUTES
        .iter()
        .find(|route| path.matches_ignoring_trailing_slash(route.path))
        .map(|route| route.page)
}

/// Navigation links: (label, href) for every route, in table order.
pub fn nav_links() -> impl Iterator<Item = (&'static str, &'static str)> {
    ROUTES
        .iter()
        .map(|route| (route.page.nav_label(), route.path))
}
