//! localview — a minimal local web server that serves static files from a
//! root directory and opens the default browser pointed at them.

pub mod browser;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
