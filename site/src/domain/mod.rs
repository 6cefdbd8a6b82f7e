//! Domain layer
//!
//! Contains the feed entries and the ports the loaders depend on.
//! - `entities`: Entry types rendered on the page
//! - `ports`: Trait definitions for the external sources

pub mod entities;
pub mod ports;
