//! Registry of organizations.

use super::Organization;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Ordered collection of organizations.
///
/// Names need not be unique; name lookups return the first match.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    organizations: Vec<Organization>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    pub fn len(&self) -> usize {
        self.organizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
    }

    pub fn add_organization(&mut self, organization: Organization) {
        log::info!(
            "Add organization '{}' ({} blocks)",
            organization.name(),
            organization.blocks().len()
        );
        self.organizations.push(organization);
    }

    /// Remove the first organization equal to `organization`.
    pub fn remove_organization(&mut self, organization: &Organization) -> Result<Organization> {
        let index = self.organizations.iter().position(|o| o == organization);
        self.remove_at(index, organization.name())
    }

    /// Remove the first organization named exactly `name`.
    pub fn remove_organization_by_name(&mut self, name: &str) -> Result<Organization> {
        let index = self.organizations.iter().position(|o| o.name() == name);
        self.remove_at(index, name)
    }

    fn remove_at(&mut self, index: Option<usize>, name: &str) -> Result<Organization> {
        match index {
            Some(i) => {
                log::info!("Remove organization '{name}'");
                Ok(self.organizations.remove(i))
            }
            None => {
                log::warn!("Cannot remove organization '{name}': not in registry");
                Err(Error::NotFound(format!("organization '{name}'")))
            }
        }
    }

    /// First organization named exactly `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Organization> {
        self.organizations.iter().find(|o| o.name() == name)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Organization> {
        self.organizations.iter_mut().find(|o| o.name() == name)
    }

    /// Sum of every organization's total address count.
    pub fn total_allocated_addresses(&self) -> u64 {
        self.organizations
            .iter()
            .map(Organization::total_address_count)
            .sum()
    }
}
