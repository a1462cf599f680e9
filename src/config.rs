//! Canonical classification tables.
//!
//! The CIDR-to-tag tables are fixed convention data: defined once, never
//! mutated at runtime. Row order is load-bearing - the classifier keeps the
//! last matching row of a full scan - so these stay ordered lists and must
//! not be reordered casually.

use crate::models::{
    AddressProvenance, AddressTables, AddressType, CidrTable, StaticAddressCategory,
};
use lazy_static::lazy_static;

/// Which broad family each block belongs to.
const PROVENANCE_ROWS: &[(&str, AddressProvenance)] = &[
    ("10.0.0.0/8", AddressProvenance::MeshInternal),
    ("199.167.59.0/24", AddressProvenance::MeshPublic),
    ("199.170.132.0/24", AddressProvenance::MeshPublic),
    ("208.68.5.0/24", AddressProvenance::MeshPublic),
    ("23.158.16.0/24", AddressProvenance::MeshPublic),
    ("192.168.0.0/16", AddressProvenance::MemberPrivate),
];

/// Which block of the scheme each range is.
const ADDRESS_TYPE_ROWS: &[(&str, AddressType)] = &[
    ("10.10.0.0/16", AddressType::StaticCore),
    ("10.68.0.0/16", AddressType::OspfWds),
    ("10.69.0.0/16", AddressType::OspfMesh),
    ("10.70.0.0/16", AddressType::StaticEdge),
    ("10.96.0.0/13", AddressType::Dhcp),
    ("199.167.59.0/24", AddressType::Public),
    ("199.170.132.0/24", AddressType::Public),
    ("208.68.5.0/24", AddressType::Public),
    ("23.158.16.0/24", AddressType::Public),
    ("192.168.0.0/16", AddressType::MemberLan),
];

/// What each static/public sub-range is reserved for.
const STATIC_CATEGORY_ROWS: &[(&str, StaticAddressCategory)] = &[
    ("10.10.10.0/24", StaticAddressCategory::Anycast),
    ("10.70.71.0/20", StaticAddressCategory::Supernode1),
    ("10.70.70.0/24", StaticAddressCategory::Supernode1),
    ("10.70.88.0/21", StaticAddressCategory::Supernode3),
    ("10.70.96.0/21", StaticAddressCategory::Supernode10),
    ("10.70.104.0/22", StaticAddressCategory::Supernode11),
    ("10.70.112.0/22", StaticAddressCategory::HubDhcp),
    ("10.70.247.0/24", StaticAddressCategory::VpnInfra),
    ("10.70.248.0/24", StaticAddressCategory::VpnInfra),
    ("10.70.250.0/24", StaticAddressCategory::VpnInfra),
    ("10.70.251.0/24", StaticAddressCategory::PtpSlash30),
    ("10.70.253.0/24", StaticAddressCategory::PtpSlash31),
    ("10.70.254.0/24", StaticAddressCategory::RouterLoopback),
];

/// Build a fresh copy of the canonical tables.
pub fn canonical_tables() -> AddressTables {
    AddressTables {
        provenance: CidrTable::from_rows(PROVENANCE_ROWS),
        address_type: CidrTable::from_rows(ADDRESS_TYPE_ROWS),
        static_category: CidrTable::from_rows(STATIC_CATEGORY_ROWS),
    }
}

lazy_static! {
    /// The canonical tables, built once at startup.
    pub static ref CANONICAL_TABLES: AddressTables = canonical_tables();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_every_canonical_row_parses() {
        let tables = canonical_tables();
        assert_eq!(tables.provenance.entries.len(), PROVENANCE_ROWS.len());
        assert_eq!(tables.address_type.entries.len(), ADDRESS_TYPE_ROWS.len());
        assert_eq!(
            tables.static_category.entries.len(),
            STATIC_CATEGORY_ROWS.len()
        );
    }

    #[test]
    fn test_table_spot_checks() {
        let tables = canonical_tables();
        assert_eq!(
            tables.provenance.last_match(Ipv4Addr::new(10, 69, 1, 1)),
            Some(AddressProvenance::MeshInternal)
        );
        assert_eq!(
            tables.address_type.last_match(Ipv4Addr::new(23, 158, 16, 9)),
            Some(AddressType::Public)
        );
        assert_eq!(
            tables
                .static_category
                .last_match(Ipv4Addr::new(10, 70, 254, 3)),
            Some(StaticAddressCategory::RouterLoopback)
        );
        assert_eq!(
            tables.provenance.last_match(Ipv4Addr::new(8, 8, 8, 8)),
            None
        );
    }
}
