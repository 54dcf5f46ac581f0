//! Command implementations for relfind

pub mod latest;
pub mod providers;
pub mod releases;

// Re-export command functions
pub use latest::run as run_latest;
pub use providers::run as run_providers;
pub use releases::run as run_releases;
