//! `configsite routes` - print the route table as JSON.

use anyhow::Result;
use serde::Serialize;

use crate::{config::SiteConfig, router};

/// One route table entry, as reported to the user.
#[derive(Debug, Serialize)]
struct RouteEntry {
    path: &'static str,
    page: &'static str,
    title: &'static str,
    output: String,
}

fn collect(config: &SiteConfig) -> Vec<RouteEntry> {
    router::ROUTES
        .iter()
        .map(|route| RouteEntry {
            path: route.path,
            page: route.page.name(),
            title: route.page.title(),
            output: route
                .output_file(&config.build.output)
                .display()
                .to_string(),
        })
        .collect()
}

pub fn run_routes(pretty: bool, config: &SiteConfig) -> Result<()> {
    let entries = collect(config);
    let json = if pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };
    println!("{json}");
    Ok(())
}
