//! Domain models for the IPv4 address registry.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Address`] - IPv4 address with optional CIDR prefix length
//! - [`AddressBlock`] - Block of addresses owned by an organization
//! - [`Organization`] and [`Registry`] - Owners and the collection of owners

mod address;
mod block;
mod organization;
mod registry;

// Re-export public types
pub use address::{get_cidr_mask, Address, MAX_LENGTH};
pub use block::{AddressBlock, Hosts};
pub use organization::Organization;
pub use registry::Registry;
