//! Search report for the terminal.

use super::terminal::{address_details, format_field, organization_details};
use crate::models::Organization;
use crate::processing::SearchResult;
use colored::Colorize;

/// Width of the name column in organization cards.
const NAME_WIDTH: usize = 24;

/// Render a search result as text.
///
/// Sections: the parsed address, the owning organization and block, then
/// the organizations whose name matched.
pub fn search_report(query: &str, result: &SearchResult<'_>) -> String {
    let mut out = vec![format!("{} {query:?}", "Search".bold())];

    if let Some(addr) = &result.address {
        out.push(String::new());
        out.push(address_details(addr));
    }

    match (result.owner, result.block) {
        (Some(owner), Some(block)) => {
            out.push(String::new());
            out.push(format!(
                "{} {} via {}",
                "Owner:".green(),
                owner.name(),
                block.identity_address()
            ));
        }
        _ if result.address.is_some() => {
            out.push(String::new());
            out.push(format!("{} unallocated", "Owner:".yellow()));
        }
        _ => {}
    }

    out.push(String::new());
    if result.name_matches.is_empty() {
        out.push(format!("{} none", "Organizations:".bold()));
    } else {
        out.push(format!(
            "{} {}",
            "Organizations:".bold(),
            result.name_matches.len()
        ));
        out.extend(result.name_matches.iter().map(|o| organization_card(o)));
    }

    out.join("\n")
}

/// One line per organization: name, block count and total size.
pub fn organization_card(organization: &Organization) -> String {
    format!(
        "{} {} blocks {} addresses",
        format_field(organization.name(), NAME_WIDTH),
        format_field(organization.blocks().len(), 3),
        format_field(organization.total_address_count(), 10)
    )
}

/// Print the search report, or the owner's full details when asked.
pub fn print_search(query: &str, result: &SearchResult<'_>, verbose: bool) {
    log::info!("#Start print_search({query:?})");
    println!("{}", search_report(query, result));
    if verbose {
        if let Some(owner) = result.owner {
            println!("\n{}", organization_details(owner));
        }
    }
}
