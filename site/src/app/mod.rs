//! Application layer
//!
//! Loaders for the two feeds and the pure transforms they run.
//! Services coordinate between ports, parsing and fallback data.

pub mod blog_service;
pub mod fallback;
pub mod post_parser;
pub mod projects_service;

pub use blog_service::BlogService;
pub use post_parser::PostParser;
pub use projects_service::ProjectsService;
