//! Domain entities
//!
//! Entries are built once per load cycle and never mutated afterwards.

pub mod post;
pub mod repository;

pub use post::PostEntry;
pub use repository::RepositoryEntry;
