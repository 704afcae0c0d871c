//! Text panels for addresses, blocks and organizations.

use crate::models::{Address, AddressBlock, Organization};

/// Details of an address and the network it belongs to.
///
/// The network is the block built from the address's network address.
pub fn address_details(addr: &Address) -> String {
    let mut lines = vec!["IP Address".to_string(), String::new(), addr.to_string()];

    if addr.is_unmasked() {
        lines.push(String::new());
        lines.push(
            "This is not a network address, no information about a network can be inferred"
                .to_string(),
        );
        return lines.join("\n");
    }

    let block = AddressBlock::containing(*addr);
    lines.extend([
        String::new(),
        format!("Network Address: {}", addr.network_address()),
        format!("Host Address: {}", addr.host_address()),
        format!("Subnet Mask: {}", addr.subnet_mask()),
        format!("Total Addresses in Network: {}", block.address_count()),
        format!("Usable Host Addresses in Network: {}", block.usable_host_count()),
        format!(
            "Usable Host Address Range: {} - {}",
            block.lower_bound_address(),
            block.upper_bound_address()
        ),
        format!("Broadcast Address: {}", block.broadcast_address()),
    ]);
    lines.join("\n")
}

pub fn block_details(block: &AddressBlock) -> String {
    format!("IP Address Block\n\n{block}")
}

pub fn organization_details(organization: &Organization) -> String {
    format!("Organization\n\n{organization}")
}

/// Format a value as a right-aligned field.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:>width$}")
}
