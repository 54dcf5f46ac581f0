//! Utility modules for relfind

pub mod http;

// Re-export commonly used items
pub use http::HttpClient;
