//! Address-analysis logic.
//!
//! This module contains the pure lookup and mapping engines:
//! - [`classify`] - Classification of one address under the convention
//! - [`nn_ips`] - Forward mapping from a network number to its addresses
//! - [`prefix_match`] - Most-specific-match resolution over CIDR tables
//! - [`ospf_table`] - OSPF snapshot model and advertising-router lookup
//! - [`range_sheet`] - Range/host sheet normalization and lookups

pub mod classify;
pub mod nn_ips;
pub mod ospf_table;
pub mod prefix_match;
pub mod range_sheet;

// Re-export public functions
pub use classify::{classify, is_mesh_address};
pub use nn_ips::{dhcp_router_address, nn_ips, ospf_address, TERTIARY_REMAINDER_CUTOFF};
pub use ospf_table::{advertising_routers, parse_ospf_snapshot, OspfSnapshot};
pub use prefix_match::{first_most_specific, longest_prefix_match, PrefixMatch};
pub use range_sheet::{
    check_ip_host, check_ip_range, normalize_host_ip, range_table, IpHostRow, IpRangeRow,
};
