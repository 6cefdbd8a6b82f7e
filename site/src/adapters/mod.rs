//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod content;
pub mod github;

pub use content::HttpPostSource;
pub use github::GitHubClientImpl;
