//! Expected-address model for a network number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// A single conventionally-assigned address, with what it is for.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExplainedAddress {
    /// The address.
    pub address: Ipv4Addr,
    /// What the convention assigns this address to.
    pub description: String,
}

/// A conventionally-assigned CIDR block, with the subset actually handed out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExplainedCidr {
    /// Base address of the block.
    pub address: Ipv4Addr,
    /// Prefix length of the block.
    pub length: u8,
    /// What the convention assigns this block to.
    pub description: String,
    /// Inclusive range of addresses actually in active use within the block.
    pub active_subset: (Ipv4Addr, Ipv4Addr),
}

/// Every address and block conventionally assigned to one network number.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NnIpsResult {
    /// Individually-described addresses, OSPF primary first.
    pub addresses: Vec<ExplainedAddress>,
    /// Described CIDR blocks (the DHCP pool).
    pub cidrs: Vec<ExplainedCidr>,
}

impl fmt::Display for ExplainedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.address, self.description)
    }
}

impl fmt::Display for ExplainedCidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({}, active {} - {})",
            self.address, self.length, self.description, self.active_subset.0, self.active_subset.1
        )
    }
}
