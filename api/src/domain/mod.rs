//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for repository analytics
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
