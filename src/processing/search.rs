//! Unified registry search.
//!
//! A query is matched twice, independently: once as an address against the
//! blocks of every organization, and once as a name fragment.

use crate::models::{Address, AddressBlock, Organization, Registry};
use serde::Serialize;

/// Result of [`Registry::search`].
///
/// Every field is computed regardless of the others.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchResult<'a> {
    /// The query parsed as an address, if it was address-shaped.
    pub address: Option<Address>,
    /// Last organization, in insertion order, owning `address`.
    pub owner: Option<&'a Organization>,
    /// First block of `owner` containing `address`.
    pub block: Option<&'a AddressBlock>,
    /// Organizations whose name contains the query, in insertion order.
    pub name_matches: Vec<&'a Organization>,
}

impl SearchResult<'_> {
    /// `true` when neither pass found anything.
    pub fn is_empty(&self) -> bool {
        self.address.is_none() && self.owner.is_none() && self.name_matches.is_empty()
    }
}

impl Registry {
    /// Look `query` up as an address and as an organization name fragment.
    ///
    /// A query that does not parse as an address only yields name matches;
    /// the parse error is not reported.
    pub fn search(&self, query: &str) -> SearchResult<'_> {
        let address = match query.parse::<Address>() {
            Ok(addr) => Some(addr),
            Err(e) => {
                log::trace!("search({query:?}) is not an address: {e}");
                None
            }
        };

        let owner = address.and_then(|addr| self.last_owner(&addr));
        let block = owner
            .zip(address)
            .and_then(|(org, addr)| org.find_block(&addr));

        let name_matches: Vec<&Organization> = self
            .organizations()
            .iter()
            .filter(|o| o.name().contains(query))
            .collect();

        log::debug!(
            "search({query:?}) address={} owner={} block={} name_matches={}",
            address.map_or("-".to_string(), |a| a.to_string()),
            owner.map_or("-", Organization::name),
            block.map_or("-".to_string(), |b| b.identity_address().to_string()),
            name_matches.len()
        );

        SearchResult {
            address,
            owner,
            block,
            name_matches,
        }
    }

    // Overlapping allocations resolve to the most recently added owner.
    fn last_owner(&self, addr: &Address) -> Option<&Organization> {
        self.organizations()
            .iter()
            .rev()
            .find(|o| o.owns_address(addr))
    }
}
