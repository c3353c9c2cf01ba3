pub mod browser;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod render;
pub mod sources;
pub mod utils;

// Re-export error types for convenience
pub use error::PocketLinksError;
