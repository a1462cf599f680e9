//! Most-specific-match resolution over CIDR-tagged records.
//!
//! Used wherever an address has to be matched against externally-supplied
//! range data: the live routing snapshot and the static range sheet. Both
//! want the most specific applicable record, so summary rows covering half
//! the mesh do not drown out the answer.

use crate::models::CidrTable;
use std::net::Ipv4Addr;

/// Result of a most-specific match.
///
/// All records tied at the winning prefix length are returned: for routing
/// lookups, several routers may legitimately advertise the same
/// most-specific route. `matched` is empty when nothing contains the
/// address, with `prefix_len` 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatch<T> {
    /// Records whose range is the most specific containing the address,
    /// in table order.
    pub matched: Vec<T>,
    /// The winning (longest) prefix length.
    pub prefix_len: u8,
}

/// Find the record(s) whose CIDR is the longest-prefix match for `addr`.
pub fn longest_prefix_match<T: Clone>(addr: Ipv4Addr, table: &CidrTable<T>) -> PrefixMatch<T> {
    let mut hits: Vec<(u8, &T)> = Vec::new();
    for (range, value) in &table.entries {
        if range.contains(addr) {
            hits.push((range.mask, value));
        }
    }

    if hits.is_empty() {
        return PrefixMatch {
            matched: Vec::new(),
            prefix_len: 0,
        };
    }

    let longest = hits.iter().fold(0, |acc, (len, _)| acc.max(*len));

    PrefixMatch {
        matched: hits
            .into_iter()
            .filter(|(len, _)| *len == longest)
            .map(|(_, value)| value.clone())
            .collect(),
        prefix_len: longest,
    }
}

/// The single-answer variant used by the range-sheet lookup.
///
/// Ties at the winning prefix length keep table order and the first
/// survivor is returned. If the sheet ever carries duplicate most-specific
/// rows, the answer is order-dependent; that is the documented legacy
/// behavior, not a tie-break policy.
pub fn first_most_specific<T: Clone>(addr: Ipv4Addr, table: &CidrTable<T>) -> Option<T> {
    longest_prefix_match(addr, table).matched.into_iter().next()
}
