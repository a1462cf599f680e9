pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::ExplainError;

use models::{ClassificationResult, NnIpsResult};
use std::net::Ipv4Addr;

/// Classify an address against the canonical tables.
pub fn explain_address(addr: Ipv4Addr) -> Result<ClassificationResult, ExplainError> {
    processing::classify(addr, &config::CANONICAL_TABLES)
}

/// Whether an address belongs to the mesh, per the canonical provenance table.
pub fn is_mesh_address(addr: Ipv4Addr) -> bool {
    processing::is_mesh_address(addr, &config::CANONICAL_TABLES)
}

/// Every address conventionally assigned to a network number.
pub fn expected_addresses(nn: u32) -> Result<NnIpsResult, ExplainError> {
    processing::nn_ips(nn)
}
