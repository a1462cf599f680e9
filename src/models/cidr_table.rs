//! Ordered CIDR-to-value association tables.
//!
//! The classification layers are ordered lists, not maps: the legacy
//! convention scans the full table and keeps the LAST entry whose range
//! contains the address. The canonical tables are mutually exclusive, so
//! order rarely matters in practice, but the scan contract is part of the
//! scheme and is preserved here as-is.

use super::Ipv4;
use std::net::Ipv4Addr;

/// An ordered list of (CIDR range, value) pairs.
#[derive(Debug, Clone)]
pub struct CidrTable<T> {
    /// Table entries, in source order.
    pub entries: Vec<(Ipv4, T)>,
}

impl<T: Clone> CidrTable<T> {
    /// Build a table from (CIDR string, value) rows.
    ///
    /// Rows whose CIDR does not parse are skipped with a warning; the rest
    /// of the table is still usable. This keeps lookups robust against
    /// operator-entered source data.
    pub fn from_rows(rows: &[(&str, T)]) -> CidrTable<T> {
        let entries = rows
            .iter()
            .filter_map(|(cidr, value)| match Ipv4::new(cidr) {
                Ok(range) => Some((range, value.clone())),
                Err(e) => {
                    log::warn!("Skipping table entry '{}': {}", cidr, e);
                    None
                }
            })
            .collect();
        CidrTable { entries }
    }

    /// Scan the whole table; return the value of the LAST entry containing
    /// `addr`, or `None` if no entry matches.
    pub fn last_match(&self, addr: Ipv4Addr) -> Option<T> {
        let mut found = None;
        for (range, value) in &self.entries {
            if range.contains(addr) {
                found = Some(value.clone());
            }
        }
        found
    }
}

/// The three classification layers, scanned in succession by the classifier.
///
/// Built once at startup (see [`crate::config::CANONICAL_TABLES`]) and
/// passed by reference, so tests can substitute their own tables.
#[derive(Debug, Clone)]
pub struct AddressTables {
    /// Which broad address family an address belongs to.
    pub provenance: CidrTable<crate::models::AddressProvenance>,
    /// Which mesh address type an address is.
    pub address_type: CidrTable<crate::models::AddressType>,
    /// Category breakdown for static and public address types.
    pub static_category: CidrTable<crate::models::StaticAddressCategory>,
}
