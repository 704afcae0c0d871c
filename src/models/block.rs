//! Address block (subnet) derived from an identity address.

use super::address::{Address, MAX_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;

/// A block of addresses starting at `identity` and sized by its prefix length.
///
/// The identity is kept as given: an address that is not aligned to its
/// prefix still starts the block. Use [`AddressBlock::containing`] to align.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AddressBlock {
    identity: Address,
}

impl AddressBlock {
    pub fn new(identity: Address) -> AddressBlock {
        AddressBlock { identity }
    }

    /// Block whose identity is the network address of `addr`.
    pub fn containing(addr: Address) -> AddressBlock {
        AddressBlock::new(addr.network_address())
    }

    pub fn identity_address(&self) -> Address {
        self.identity
    }

    pub fn prefix_length(&self) -> u8 {
        self.identity.prefix_length()
    }

    pub fn subnet_mask(&self) -> Address {
        self.identity.subnet_mask()
    }

    /// Total addresses in the block, `2^(32 - prefix length)`.
    pub fn address_count(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.prefix_length())
    }

    /// Addresses other than identity and broadcast; 0 for /31 and /32.
    pub fn usable_host_count(&self) -> u64 {
        self.address_count().saturating_sub(2)
    }

    pub fn broadcast_address(&self) -> Address {
        self.offset(self.address_count() as i64 - 1)
    }

    /// First usable host address.
    pub fn lower_bound_address(&self) -> Address {
        self.identity + 1
    }

    /// Last usable host address.
    pub fn upper_bound_address(&self) -> Address {
        self.offset(self.address_count() as i64 - 2)
    }

    /// Whether `addr` lies between identity and broadcast, both included.
    pub fn contains(&self, addr: &Address) -> bool {
        self.identity.numeric_cmp(addr).is_le()
            && addr.numeric_cmp(&self.broadcast_address()).is_le()
    }

    /// Iterate over the usable host addresses.
    pub fn hosts(&self) -> Hosts {
        let lower = self.lower_bound_address();
        let upper = self.upper_bound_address();
        Hosts {
            next: lower.value(),
            last: upper.value(),
            prefix_length: self.prefix_length(),
            done: lower.numeric_cmp(&upper).is_gt()
                || self.identity.checked_offset(1).is_none(),
        }
    }

    fn offset(&self, count: i64) -> Address {
        self.identity + count
    }
}

impl<'a> IntoIterator for &'a AddressBlock {
    type Item = Address;
    type IntoIter = Hosts;

    fn into_iter(self) -> Hosts {
        self.hosts()
    }
}

/// Usable host addresses of an [`AddressBlock`], in ascending order.
#[derive(Debug, Clone)]
pub struct Hosts {
    next: u32,
    last: u32,
    prefix_length: u8,
    done: bool,
}

impl Iterator for Hosts {
    type Item = Address;

    fn next(&mut self) -> Option<Address> {
        if self.done {
            return None;
        }
        let current = self.next;
        if current == self.last {
            self.done = true;
        } else {
            self.next += 1;
        }
        Address::from(current)
            .with_prefix_length(self.prefix_length)
            .ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = u64::from(self.last - self.next) + 1;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Hosts {}

impl fmt::Display for AddressBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Address Block: {} (ID) - {}",
            self.identity,
            self.broadcast_address()
        )
    }
}
