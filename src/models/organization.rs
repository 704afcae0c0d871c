//! Organization and the address blocks it owns.

use super::{Address, AddressBlock};
use crate::error::{Error, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named owner of an ordered list of address blocks.
///
/// Blocks keep insertion order; duplicates and overlaps are allowed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    name: String,
    blocks: Vec<AddressBlock>,
}

impl Organization {
    pub fn new(name: impl Into<String>) -> Organization {
        Organization {
            name: name.into(),
            blocks: vec![],
        }
    }

    /// Create an organization owning `blocks`, in the given order.
    pub fn with_blocks(
        name: impl Into<String>,
        blocks: impl IntoIterator<Item = AddressBlock>,
    ) -> Organization {
        Organization {
            name: name.into(),
            blocks: blocks.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn blocks(&self) -> &[AddressBlock] {
        &self.blocks
    }

    pub fn add_block(&mut self, block: AddressBlock) {
        log::debug!("{}: add {}", self.name, block);
        self.blocks.push(block);
    }

    /// Remove the first block equal to `block`.
    pub fn remove_block(&mut self, block: &AddressBlock) -> Result<AddressBlock> {
        let index = self
            .blocks
            .iter()
            .position(|b| b == block)
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "block {} in organization '{}'",
                    block.identity_address(),
                    self.name
                ))
            })?;
        log::debug!("{}: remove {}", self.name, block);
        Ok(self.blocks.remove(index))
    }

    pub fn owns_address(&self, addr: &Address) -> bool {
        self.blocks.iter().any(|b| b.contains(addr))
    }

    /// First block containing `addr`.
    pub fn find_block(&self, addr: &Address) -> Option<&AddressBlock> {
        self.blocks.iter().find(|b| b.contains(addr))
    }

    /// Sum of every block's full size, network and broadcast included.
    pub fn total_address_count(&self) -> u64 {
        self.blocks.iter().map(AddressBlock::address_count).sum()
    }
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}: ", self.name)?;
        write!(
            f,
            "{}",
            self.blocks.iter().map(|b| format!("  {b}")).join("\n")
        )
    }
}
