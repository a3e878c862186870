//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation and path
//! resolution against the root directory.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let path = uri.path();

    let access_log = state.config.logging.access_log;
    if access_log {
        logger::log_request(method, uri, req.version());
    }

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(method) {
        return Ok(resp);
    }

    // 2. Resolve the path under the root directory and serve the file
    let response = serve_path(path, &state, access_log).await;
    Ok(response)
}

/// Only GET is defined; everything else gets the default 405 handling
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    if method == Method::GET {
        None
    } else {
        logger::log_warning(&format!("Method not allowed: {method}"));
        Some(http::build_405_response())
    }
}

async fn serve_path(path: &str, state: &Arc<AppState>, access_log: bool) -> Response<Full<Bytes>> {
    // The root path maps to index.html directly under the root directory
    let relative = if path == "/" { "/index.html" } else { path };

    match static_files::load(state.root_dir(), relative).await {
        Some((content, content_type)) => {
            if access_log {
                logger::log_response(content.len());
            }
            http::build_file_response(content, content_type)
        }
        None => http::build_404_response(),
    }
}
