//! HTTP response handlers.

use crate::config::SiteConfig;
use crate::utils::mime;
use anyhow::{Context, Result};
use std::{fs, path::Path};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Respond with a static file from the built output.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = mime::from_path(path);

    if is_head_request(&request) {
        return send_head(request, 200, content_type);
    }

    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send_body(request, 200, content_type, body)
}

/// Respond with the 404 fallback document (plain text if missing).
pub fn respond_not_found(request: Request, config: &SiteConfig) -> Result<()> {
    use crate::utils::mime::types::{HTML, PLAIN};

    let fallback = config.build.output.join("404.html");
    let has_fallback = fallback.is_file();

    if is_head_request(&request) {
        let mime = if has_fallback { HTML } else { PLAIN };
        return send_head(request, 404, mime);
    }

    if has_fallback
        && let Ok(body) = fs::read(&fallback)
    {
        return send_body(request, 404, HTML, body);
    }

    send_body(request, 404, PLAIN, b"404 Not Found".to_vec())
}

/// Respond with an in-memory rendered document.
pub fn respond_html(request: Request, body: String) -> Result<()> {
    use crate::utils::mime::types::HTML;

    if is_head_request(&request) {
        return send_head(request, 200, HTML);
    }

    send_body(request, 200, HTML, body.into_bytes())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    use crate::utils::mime::types::PLAIN;
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(request: Request, status: u16, content_type: &'static str) -> Result<()> {
    let response =
        Response::empty(StatusCode(status)).with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
