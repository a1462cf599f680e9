//! Error types for address classification and lookups.

use std::net::Ipv4Addr;
use thiserror::Error;

/// Errors produced by the classification and encoding layers.
#[derive(Debug, Error)]
pub enum ExplainError {
    /// The address matches no entry in the provenance table. Callers use
    /// this to refuse acting on out-of-scope addresses.
    #[error("{0} is not a mesh address")]
    NonMeshAddress(Ipv4Addr),

    /// A CIDR string could not be parsed. Fatal when constructing a single
    /// range; table builders skip the entry and warn instead.
    #[error("malformed CIDR '{entry}': {reason}")]
    MalformedCidr { entry: String, reason: String },

    /// A network number too large for the addressing convention; one of its
    /// computed octets left 0..=255.
    #[error("network number {0} is outside the encodable range")]
    UnencodableNetworkNumber(u32),

    /// An externally-supplied JSON snapshot did not deserialize. `path`
    /// points at the offending element.
    #[error("error parsing snapshot: path={path} error={reason}")]
    SnapshotParse { path: String, reason: String },
}

impl ExplainError {
    /// Shorthand for a [`ExplainError::MalformedCidr`] from any displayable cause.
    pub fn malformed(entry: &str, reason: impl std::fmt::Display) -> Self {
        ExplainError::MalformedCidr {
            entry: entry.to_string(),
            reason: reason.to_string(),
        }
    }
}
