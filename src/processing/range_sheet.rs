//! Static range-sheet and host-sheet lookups.
//!
//! Operators maintain the mesh's address plan in a spreadsheet: one tab of
//! CIDR ranges with ownership metadata, one tab of individual hosts. The
//! rows arrive here as already-fetched records; this module normalizes the
//! operator-entered cells and resolves lookups against them.

use crate::models::{CidrTable, Ipv4};
use crate::processing::prefix_match::first_most_specific;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// One row of the range tab.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct IpRangeRow {
    /// Source row number, for pointing operators back at the sheet.
    pub row_num: usize,
    /// CIDR prefix cell; may arrive as a bare address.
    pub prefix: String,
    pub purpose: String,
    pub from: String,
    pub in_use: String,
    pub directly_use: String,
    pub controlled_by: String,
    pub vlan: String,
    pub notes: String,
    pub comment: String,
}

/// One row of the host tab.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct IpHostRow {
    /// Source row number, for pointing operators back at the sheet.
    pub row_num: usize,
    /// IP cell; may carry trailing junk ("10.70.131.218 ?", "10.70.71.24/30").
    pub ip: String,
    pub location: String,
    pub hostname: String,
    #[serde(rename = "use")]
    pub used_for: String,
    pub controlled_by: String,
    pub notes: String,
}

lazy_static! {
    /// First dotted quad in a cell, whatever surrounds it.
    static ref DOTTED_QUAD: Regex = Regex::new(r"\d+\.\d+\.\d+\.\d+").expect("Invalid Regex?");
}

/// Build a lookup table from raw range-sheet rows.
///
/// Cells are trimmed, a bare address is treated as a /32, and rows whose
/// prefix is empty or unparsable are dropped with a warning naming the
/// sheet row.
pub fn range_table(rows: &[IpRangeRow]) -> CidrTable<IpRangeRow> {
    let mut entries: Vec<(Ipv4, IpRangeRow)> = Vec::new();

    for row in rows {
        let mut prefix = row.prefix.trim().to_string();
        if prefix.is_empty() {
            continue;
        }
        if !prefix.contains('/') {
            prefix = format!("{prefix}/32");
        }

        match Ipv4::new(&prefix) {
            Ok(range) => {
                let mut row = row.clone();
                row.prefix = prefix;
                entries.push((range, row));
            }
            Err(e) => log::warn!("Skipping range sheet row {}: {}", row.row_num, e),
        }
    }

    CidrTable { entries }
}

/// Find the most specific range-sheet row covering `addr`.
///
/// On a tie at the winning prefix length the first row in sheet order is
/// returned (the sheet should not carry duplicate most-specific rows, but
/// nothing enforces that).
pub fn check_ip_range(addr: Ipv4Addr, table: &CidrTable<IpRangeRow>) -> Option<IpRangeRow> {
    first_most_specific(addr, table)
}

/// Extract the address part of a host-sheet IP cell, dropping any
/// surrounding junk. Returns the cell unchanged if no dotted quad is found.
pub fn normalize_host_ip(cell: &str) -> &str {
    DOTTED_QUAD.find(cell).map(|m| m.as_str()).unwrap_or(cell)
}

/// Find the first host-sheet row whose (normalized) IP cell equals `addr`.
pub fn check_ip_host(addr: Ipv4Addr, rows: &[IpHostRow]) -> Option<IpHostRow> {
    let needle = addr.to_string();
    rows.iter()
        .find(|row| normalize_host_ip(&row.ip) == needle)
        .cloned()
}
