//! Address classification against the layered convention tables.
//!
//! A classification runs the address through three successive table scans
//! (provenance, type, category) and then decodes whatever the matched type
//! embeds: OSPF types carry a network number and router index in octets 3
//! and 4, DHCP addresses carry a network number in their offset into the
//! 10.96/13 block.

use crate::error::ExplainError;
use crate::models::{
    AddressProvenance, AddressTables, AddressType, ClassificationResult, DhcpDerivation,
    StaticAddressCategory,
};
use std::net::Ipv4Addr;

/// Numeric value of the 10.0.0.0 base, stripped off DHCP addresses first.
const DHCP_TEN_PREFIX: u32 = 0x0A00_0000;
/// Offset of the 10.96.0.0/13 DHCP block within 10/8 (96 << 16).
const DHCP_BLOCK_BASE: u32 = 0x0060_0000;
/// Addresses reserved per node within the DHCP block.
const DHCP_ADDRESSES_PER_NODE: u32 = 64;

/// Check whether an address belongs to the mesh at all.
///
/// Collaborators call this before issuing any probe, to refuse operating on
/// out-of-scope addresses.
pub fn is_mesh_address(addr: Ipv4Addr, tables: &AddressTables) -> bool {
    matches!(
        tables.provenance.last_match(addr),
        Some(AddressProvenance::MeshInternal) | Some(AddressProvenance::MeshPublic)
    )
}

/// Classify one address under the addressing convention.
///
/// # Arguments
/// * `addr` - The address to classify
/// * `tables` - The classification tables (see [`crate::config::CANONICAL_TABLES`])
///
/// # Returns
/// * `Ok(ClassificationResult)` - The full breakdown
/// * `Err(ExplainError::NonMeshAddress)` - No provenance entry contains the address
pub fn classify(
    addr: Ipv4Addr,
    tables: &AddressTables,
) -> Result<ClassificationResult, ExplainError> {
    let address_provenance = tables
        .provenance
        .last_match(addr)
        .ok_or(ExplainError::NonMeshAddress(addr))?;

    let address_type = tables
        .address_type
        .last_match(addr)
        .unwrap_or(AddressType::Unknown);

    let octets = addr.octets();

    // OSPF types pack the network number into octets 3 and 4: hundreds in
    // octet 3, tens/units in octet 4 mod 100, with the router index as the
    // hundreds digit of octet 4. Octet 3 >= 100 means the address is of
    // OSPF shape but does not encode a network number.
    let mut network_number: Option<u32> = None;
    let mut router_index: Option<u8> = None;
    if address_type.is_ospf() && octets[2] < 100 {
        router_index = Some(octets[3] / 100);
        network_number = Some(octets[2] as u32 * 100 + (octets[3] % 100) as u32);
    }
    let valid_nn_encoding = network_number.is_some();

    let static_address_category = if address_type.has_static_category() {
        Some(
            tables
                .static_category
                .last_match(addr)
                .unwrap_or(StaticAddressCategory::Unknown),
        )
    } else {
        None
    };

    let mut dhcp_derivation: Option<DhcpDerivation> = None;
    if address_type == AddressType::Dhcp {
        let numeric = u32::from(addr);
        let component = numeric - DHCP_TEN_PREFIX;
        let offset = component - DHCP_BLOCK_BASE;
        let nn = offset / DHCP_ADDRESSES_PER_NODE;
        network_number = Some(nn);
        dhcp_derivation = Some(DhcpDerivation {
            component_hex: format!("0x{:X}", component),
            offset_hex: format!("0x{:06X}", offset),
            offset,
            network_number: nn,
        });
    }

    // Display octets; a valid OSPF encoding shows octet 4 as the two-digit
    // network-number remainder.
    let address_octets = octets
        .iter()
        .enumerate()
        .map(|(i, oct)| {
            if i == 3 && valid_nn_encoding {
                format!("{:02}", oct % 100)
            } else {
                oct.to_string()
            }
        })
        .collect();

    Ok(ClassificationResult {
        address_octets,
        address_provenance,
        address_type,
        network_number,
        router_index,
        static_address_category,
        dhcp_derivation,
    })
}
