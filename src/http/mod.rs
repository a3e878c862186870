//! HTTP protocol layer module
//!
//! Protocol-level helpers decoupled from the file-serving logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{build_404_response, build_405_response, build_file_response};
