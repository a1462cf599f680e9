//! Classification result model.
//!
//! The enums mirror the mesh's layered addressing convention: every address
//! has a provenance (which broad family it came from), a type (which block
//! of the scheme it sits in), and - for static and public blocks - a
//! category describing what the range is reserved for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which broad address family an address belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressProvenance {
    /// Mesh-internal RFC 1918 space (10.0.0.0/8).
    MeshInternal,
    /// Publicly routable blocks operated by the mesh.
    MeshPublic,
    /// Member-side private RFC 1918 space (192.168.0.0/16).
    MemberPrivate,
}

impl fmt::Display for AddressProvenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AddressProvenance::MeshInternal => "Mesh Internal (RFC 1918)",
            AddressProvenance::MeshPublic => "Mesh Public",
            AddressProvenance::MemberPrivate => "Member Private (RFC 1918)",
        };
        write!(f, "{label}")
    }
}

/// Which block of the addressing scheme an address sits in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    /// 10.68/16 - OSPF addresses on the WDS bridge.
    OspfWds,
    /// 10.69/16 - OSPF addresses on the mesh bridge.
    OspfMesh,
    /// 10.10/16 - statically assigned core services.
    StaticCore,
    /// 10.70/16 - statically assigned edge infrastructure.
    StaticEdge,
    /// 10.96/13 - per-node DHCP pools.
    Dhcp,
    /// Publicly routable mesh blocks.
    Public,
    /// Member LAN space.
    MemberLan,
    /// Inside the mesh but not in any known block.
    Unknown,
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AddressType::OspfWds => "10.68 OSPF (WDS Bridge)",
            AddressType::OspfMesh => "10.69 OSPF (Mesh Bridge)",
            AddressType::StaticCore => "10.10 Core Services",
            AddressType::StaticEdge => "10.70 Static",
            AddressType::Dhcp => "10.96 - 10.103 DHCP (Mesh Bridge)",
            AddressType::Public => "Publicly Routable",
            AddressType::MemberLan => "Member LAN",
            AddressType::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

impl AddressType {
    /// OSPF types carry a network number in octets 3 and 4.
    pub fn is_ospf(&self) -> bool {
        matches!(self, AddressType::OspfWds | AddressType::OspfMesh)
    }

    /// Types whose ranges are broken down by the static category table.
    pub fn has_static_category(&self) -> bool {
        matches!(
            self,
            AddressType::StaticCore | AddressType::StaticEdge | AddressType::Public
        )
    }
}

/// What a static or public range is reserved for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticAddressCategory {
    Supernode1,
    Supernode3,
    Supernode10,
    Supernode11,
    HubDhcp,
    VpnInfra,
    PtpSlash30,
    PtpSlash31,
    RouterLoopback,
    Anycast,
    Unknown,
}

impl fmt::Display for StaticAddressCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StaticAddressCategory::Supernode1 => "Supernode 1",
            StaticAddressCategory::Supernode3 => "Supernode 3",
            StaticAddressCategory::Supernode10 => "Supernode 10 (POP 10)",
            StaticAddressCategory::Supernode11 => "Supernode 11 (POP 11)",
            StaticAddressCategory::HubDhcp => "Hub Supplemental DHCP",
            StaticAddressCategory::VpnInfra => "VPN Infra",
            StaticAddressCategory::PtpSlash30 => "PtPs Sized /30",
            StaticAddressCategory::PtpSlash31 => "PtPs Sized /31",
            StaticAddressCategory::RouterLoopback => "Router Loopbacks",
            StaticAddressCategory::Anycast => "Anycast",
            StaticAddressCategory::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

/// The intermediate values of the DHCP network-number derivation, kept for
/// explanatory display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DhcpDerivation {
    /// The address with the fixed "10." prefix stripped, as uppercase hex
    /// (e.g. "0x60A0B6").
    pub component_hex: String,
    /// The offset into the DHCP block, as uppercase hex zero-padded to six
    /// digits (e.g. "0x00A0B6").
    pub offset_hex: String,
    /// The same offset in decimal.
    pub offset: u32,
    /// The recovered network number (offset / 64).
    pub network_number: u32,
}

/// Full breakdown of one address under the addressing convention.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    /// Display octets. For a valid OSPF encoding, octet 4 is rendered as
    /// the zero-padded two-digit network-number remainder.
    pub address_octets: Vec<String>,
    /// Which broad family the address belongs to.
    pub address_provenance: AddressProvenance,
    /// Which block of the scheme the address sits in.
    pub address_type: AddressType,
    /// Embedded network number, where the type carries one.
    pub network_number: Option<u32>,
    /// Which of up to three routers at the node this address refers to
    /// (OSPF types only).
    pub router_index: Option<u8>,
    /// Range category (static and public types only).
    pub static_address_category: Option<StaticAddressCategory>,
    /// Derivation trace for DHCP addresses.
    pub dhcp_derivation: Option<DhcpDerivation>,
}
