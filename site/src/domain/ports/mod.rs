//! Domain ports (traits)
//!
//! Port traits define the sources the loaders read from.
//! Adapters provide concrete implementations of these traits.

pub mod content;
pub mod github;

pub use content::PostSource;
pub use github::{GitHubRepo, RepoSort, RepositorySource};
