//! Core modules for relfind

pub mod config;
pub mod release;

// Re-export commonly used items
pub use config::Config;
pub use release::{parse_timestamp, Failure, Release, ReleaseSet, Status};
