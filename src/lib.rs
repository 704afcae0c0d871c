//! In-memory registry of IPv4 address blocks and the organizations owning them.
//!
//! - [`models`] - Address, block, organization and registry types
//! - [`processing`] - Search and sample data
//! - [`output`] - Text rendering for the terminal

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Error, Result};
pub use models::{Address, AddressBlock, Organization, Registry};
pub use processing::{sample_registry, SearchResult};

/// Registry to start from: the sample data set or an empty registry.
pub fn initial_registry(config: &config::Config) -> Result<Registry> {
    if config.sample_data {
        let registry = sample_registry()?;
        log::info!(
            "Loaded {} sample organizations, {} addresses allocated",
            registry.len(),
            registry.total_allocated_addresses()
        );
        Ok(registry)
    } else {
        Ok(Registry::new())
    }
}
