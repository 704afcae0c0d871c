//! Seed data loaded at startup.

use crate::error::Result;
use crate::models::{Address, AddressBlock, Organization, Registry};

/// Blocks per organization, in text form.
const SAMPLE_ORGANIZATIONS: &[(&str, &[&str])] = &[
    (
        "Google",
        &["155.153.45.23/24", "00001111010101011110000110100101/24"],
    ),
    ("Amazon", &["96.85.162.16/22"]),
    ("SpaceX", &["18.1.0.0/20"]),
    ("Bala's Chicken Store", &[]),
    ("SpaceY", &[]),
];

/// Build the sample registry.
pub fn sample_registry() -> Result<Registry> {
    let mut registry = Registry::new();
    for (name, blocks) in SAMPLE_ORGANIZATIONS {
        let blocks = blocks
            .iter()
            .map(|b| b.parse::<Address>().map(AddressBlock::new))
            .collect::<Result<Vec<_>>>()?;
        registry.add_organization(Organization::with_blocks(*name, blocks));
    }
    Ok(registry)
}
