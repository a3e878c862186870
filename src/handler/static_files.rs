//! Static file loading
//!
//! Maps request paths to files under the root directory and reads their
//! contents, with the MIME type inferred from the file extension.

use crate::http::mime;
use crate::logger;
use std::path::Path;
use tokio::fs;

/// Load the file addressed by a request path relative to `root`.
///
/// The leading slash is stripped and the remainder joined onto `root`.
/// Returns `None` when the path does not name a readable regular file
/// under `root`.
pub async fn load(root: &Path, path: &str) -> Option<(Vec<u8>, &'static str)> {
    let relative = path.trim_start_matches('/');
    let file_path = root.join(relative);

    let root_canonical = match root.canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Root directory not found or inaccessible '{}': {e}",
                root.display()
            ));
            return None;
        }
    };

    // Missing files are a routine 404, no need to log at warning level
    let Ok(file_canonical) = file_path.canonicalize() else {
        return None;
    };

    // Resolution must stay within the root directory
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {path} -> {}",
            file_canonical.display()
        ));
        return None;
    }

    if !file_canonical.is_file() {
        return None;
    }

    let content = match fs::read(&file_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_canonical.display()
            ));
            return None;
        }
    };

    let content_type = mime::content_type_for(file_canonical.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}
