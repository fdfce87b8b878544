//! Development server for local preview.
//!
//! Serves the built output directory. Requests are dispatched to a small
//! thread pool; Ctrl+C unblocks the accept loop for a graceful exit.

mod lifecycle;
mod path;
mod response;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Request, Server};

use crate::{
    config::{SiteConfig, cfg},
    core::{self, UrlPath},
    debug, log,
    router::{self, Shell},
};

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
}

/// Bind the HTTP server without starting the request loop
pub fn bind_server(config: &SiteConfig) -> Result<BoundServer> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);

    // Register for graceful shutdown before accepting anything
    core::register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);

    Ok(BoundServer { server, addr })
}

impl BoundServer {
    /// Get the bound address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start the request loop (blocking until shutdown).
    pub fn run(self) -> Result<()> {
        run_request_loop(&self.server);
        Ok(())
    }
}

fn run_request_loop(server: &Server) {
    // Use a thread pool to handle requests concurrently
    // This prevents one slow client from blocking the rest
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("failed to create thread pool");

    for request in server.incoming_requests() {
        let config = cfg();
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &config) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

/// Handle a single HTTP request
fn handle_request(request: Request, config: &SiteConfig) -> Result<()> {
    // Early exit if shutdown requested
    if core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    debug!("serve"; "{} {}", request.method(), request.url());

    // Serve from the built output (already rendered)
    if let Some(path) = path::resolve_path(request.url(), &config.build.output) {
        return response::respond_file(request, &path);
    }

    // On-demand rendering (URL -> route table -> page through the shell),
    // covers routes whose documents are missing from the output
    let url = UrlPath::from_browser(request.url());
    if let Some(page) = router::resolve(&url) {
        let html = Shell::from_config(config).render(page);
        return response::respond_html(request, html);
    }

    response::respond_not_found(request, config)
}
