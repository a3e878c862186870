//! Request handler module
//!
//! Routes each request to a file under the root directory.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
