//! Registry processing logic.
//!
//! This module contains behavior built on the domain models:
//! - [`search`] - Unified address and name search
//! - [`sample`] - Sample registry used at startup

mod sample;
mod search;

// Re-export public functions
pub use sample::sample_registry;
pub use search::SearchResult;
