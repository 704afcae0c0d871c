//! Output formatting for registry data.
//!
//! This module handles formatting and outputting registry data:
//! - [`terminal`] - Detail panels for addresses, blocks and organizations
//! - [`report`] - Search report with colors

mod report;
mod terminal;

pub use report::{organization_card, print_search, search_report};
pub use terminal::{address_details, block_details, format_field, organization_details};
