//! Forward mapping from a network number to its conventional addresses.
//!
//! The inverse of the classifier's extraction: given a node's network
//! number, compute the OSPF bridge addresses and the DHCP block the
//! convention assigns to it.

use crate::error::ExplainError;
use crate::models::{ExplainedAddress, ExplainedCidr, NnIpsResult};
use std::net::Ipv4Addr;

/// Prefix length of each node's DHCP block.
const DHCP_PREFIX_LENGTH: u8 = 26;
/// First handed-out address within the block, relative to its base.
const POOL_START_REL: u32 = 6;
/// Last handed-out address within the block, relative to its base.
const POOL_END_REL: u32 = 57;
/// A tertiary OSPF address exists only while the network-number remainder
/// stays low enough that "2" + two digits fits in an octet.
pub const TERTIARY_REMAINDER_CUTOFF: u32 = 55;

/// Compute one OSPF address for a network number.
///
/// Octet 4 uses decimal-digit packing, not bit packing: the router index is
/// the hundreds digit in front of the zero-padded two-digit remainder, so
/// index 1 with remainder 5 yields octet 105.
///
/// # Arguments
/// * `nn` - The network number
/// * `router_index` - Which router at the node (0, 1, or 2)
/// * `use_wds` - WDS bridge (10.68/16) instead of mesh bridge (10.69/16)
///
/// # Returns
/// * `Ok(Ipv4Addr)` - The encoded address
/// * `Err(ExplainError::UnencodableNetworkNumber)` - A computed octet left 0..=255
pub fn ospf_address(nn: u32, router_index: u8, use_wds: bool) -> Result<Ipv4Addr, ExplainError> {
    let nn_hundreds = nn / 100;
    let nn_remainder = nn % 100;

    let octet2 = if use_wds { 68 } else { 69 };
    let octet3 =
        u8::try_from(nn_hundreds).map_err(|_| ExplainError::UnencodableNetworkNumber(nn))?;

    let octet4_str = if router_index > 0 {
        format!("{router_index}{nn_remainder:02}")
    } else {
        nn_remainder.to_string()
    };
    let octet4: u8 = octet4_str
        .parse()
        .map_err(|_| ExplainError::UnencodableNetworkNumber(nn))?;

    Ok(Ipv4Addr::new(10, octet2, octet3, octet4))
}

/// Base octets (2 and 3) of a network number's DHCP block.
fn dhcp_block_octets(nn: u32) -> Result<(u8, u8), ExplainError> {
    // nn >> 10 selects the /16 within 10.96/13, nn >> 2 the /24 within it,
    // nn & 3 the /26 quadrant (applied by the callers below).
    let octet2 =
        u8::try_from(96 + (nn >> 10)).map_err(|_| ExplainError::UnencodableNetworkNumber(nn))?;
    let octet3 = ((nn >> 2) & 0xFF) as u8;
    Ok((octet2, octet3))
}

/// The router's own address within the node's DHCP block (quadrant base + 1).
pub fn dhcp_router_address(nn: u32) -> Result<Ipv4Addr, ExplainError> {
    let (octet2, octet3) = dhcp_block_octets(nn)?;
    let quadrant = ((nn & 3) << 6) as u8;
    Ok(Ipv4Addr::new(10, octet2, octet3, quadrant + 1))
}

/// Every address and block conventionally assigned to `nn`, in display order.
pub fn nn_ips(nn: u32) -> Result<NnIpsResult, ExplainError> {
    let nn_remainder = nn % 100;

    let mut addresses = vec![
        ExplainedAddress {
            address: ospf_address(nn, 0, true)?,
            description: "Primary router OSPF address on the WDS bridge".to_string(),
        },
        ExplainedAddress {
            address: ospf_address(nn, 0, false)?,
            description: "Primary router OSPF address on the mesh bridge".to_string(),
        },
        ExplainedAddress {
            address: ospf_address(nn, 1, false)?,
            description: "Secondary router OSPF address on the mesh bridge (not common)"
                .to_string(),
        },
    ];

    if nn_remainder <= TERTIARY_REMAINDER_CUTOFF {
        addresses.push(ExplainedAddress {
            address: ospf_address(nn, 2, false)?,
            description: "Tertiary router OSPF address on the mesh bridge (very rare)".to_string(),
        });
    }

    let (octet2, octet3) = dhcp_block_octets(nn)?;
    let quadrant = ((nn & 3) << 6) as u8;
    let cidrs = vec![ExplainedCidr {
        address: Ipv4Addr::new(10, octet2, octet3, quadrant + 1),
        length: DHCP_PREFIX_LENGTH,
        description: "DHCP addresses for this node".to_string(),
        active_subset: (
            Ipv4Addr::new(10, octet2, octet3, quadrant + POOL_START_REL as u8),
            Ipv4Addr::new(10, octet2, octet3, quadrant + POOL_END_REL as u8),
        ),
    }];

    Ok(NnIpsResult { addresses, cidrs })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> Ipv4Addr {
        s.parse().unwrap()
    }

    #[test]
    fn test_ospf_address_packing() {
        assert_eq!(ospf_address(1234, 0, false).unwrap(), ip("10.69.12.34"));
        assert_eq!(ospf_address(1234, 0, true).unwrap(), ip("10.68.12.34"));
        assert_eq!(ospf_address(1234, 1, false).unwrap(), ip("10.69.12.134"));
        assert_eq!(ospf_address(1234, 2, false).unwrap(), ip("10.69.12.234"));
        // decimal concatenation, not addition of unpadded digits
        assert_eq!(ospf_address(1205, 1, false).unwrap(), ip("10.69.12.105"));
        assert_eq!(ospf_address(5, 0, false).unwrap(), ip("10.69.0.5"));
    }

    #[test]
    fn test_ospf_address_out_of_range() {
        // remainder 56 with router index 2 would need octet 256
        assert!(matches!(
            ospf_address(1256, 2, false),
            Err(ExplainError::UnencodableNetworkNumber(1256))
        ));
        // hundreds component beyond an octet
        assert!(ospf_address(25600, 0, false).is_err());
        assert!(ospf_address(25599, 0, false).is_ok());
    }

    #[test]
    fn test_nn_ips_low_nn() {
        let result = nn_ips(3).unwrap();
        let addrs: Vec<Ipv4Addr> = result.addresses.iter().map(|a| a.address).collect();
        assert_eq!(
            addrs,
            vec![
                ip("10.68.0.3"),
                ip("10.69.0.3"),
                ip("10.69.0.103"),
                ip("10.69.0.203"),
            ]
        );
        assert_eq!(
            result.addresses[0].description,
            "Primary router OSPF address on the WDS bridge"
        );
        assert_eq!(
            result.addresses[3].description,
            "Tertiary router OSPF address on the mesh bridge (very rare)"
        );

        assert_eq!(result.cidrs.len(), 1);
        let dhcp = &result.cidrs[0];
        assert_eq!(dhcp.address, ip("10.96.0.193"));
        assert_eq!(dhcp.length, 26);
        assert_eq!(dhcp.description, "DHCP addresses for this node");
        assert_eq!(dhcp.active_subset, (ip("10.96.0.198"), ip("10.96.0.249")));
    }

    #[test]
    fn test_nn_ips_high_nn() {
        let result = nn_ips(7888).unwrap();
        let addrs: Vec<Ipv4Addr> = result.addresses.iter().map(|a| a.address).collect();
        // remainder 88 > 55: no tertiary address
        assert_eq!(
            addrs,
            vec![ip("10.68.78.88"), ip("10.69.78.88"), ip("10.69.78.188")]
        );

        let dhcp = &result.cidrs[0];
        assert_eq!(dhcp.address, ip("10.103.180.1"));
        assert_eq!(dhcp.active_subset, (ip("10.103.180.6"), ip("10.103.180.57")));
    }

    #[test]
    fn test_tertiary_cutoff_boundary() {
        let with_tertiary = nn_ips(1255).unwrap();
        assert_eq!(with_tertiary.addresses.len(), 4);
        assert_eq!(with_tertiary.addresses[3].address, ip("10.69.12.255"));

        let without_tertiary = nn_ips(1256).unwrap();
        assert_eq!(without_tertiary.addresses.len(), 3);
    }

    #[test]
    fn test_dhcp_router_address() {
        assert_eq!(dhcp_router_address(3).unwrap(), ip("10.96.0.193"));
        assert_eq!(dhcp_router_address(642).unwrap(), ip("10.96.160.129"));
        assert_eq!(dhcp_router_address(7888).unwrap(), ip("10.103.180.1"));
    }
}
