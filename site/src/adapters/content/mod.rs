//! Content adapter
//!
//! Fetches markdown posts over HTTP.

pub mod client;

pub use client::HttpPostSource;
