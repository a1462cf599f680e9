//! OSPF snapshot model and advertising-router lookup.
//!
//! The mesh publishes a periodic JSON snapshot of its OSPF state. Given a
//! parsed snapshot and an address, this module answers "which routers
//! advertise the most specific route to it". Fetching the snapshot is the
//! caller's job; everything here is pure.

use crate::error::ExplainError;
use crate::models::{CidrTable, Ipv4};
use crate::processing::prefix_match::{longest_prefix_match, PrefixMatch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::Ipv4Addr;

/// The backbone area; the only one the mesh populates.
const BACKBONE_AREA: &str = "0.0.0.0";
/// Advertised by every exit; carries no information about an address.
const DEFAULT_ROUTE: &str = "0.0.0.0/0";

/// One advertised link.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OspfLink {
    /// Advertised CIDR (or router ID, for router links).
    pub id: String,
    /// OSPF metric.
    pub metric: u32,
    /// Next hop, present on some external links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
}

/// The links one router advertises, by link family.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OspfLinks {
    #[serde(default)]
    pub external: Vec<OspfLink>,
    #[serde(default)]
    pub router: Vec<OspfLink>,
    #[serde(default)]
    pub network: Vec<OspfLink>,
    #[serde(default)]
    pub stubnet: Vec<OspfLink>,
}

/// One router in an area.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OspfRouter {
    #[serde(default)]
    pub links: OspfLinks,
}

/// One transit network in an area.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OspfNetwork {
    /// Designated router for the network.
    pub dr: String,
    /// Routers attached to the network.
    #[serde(default)]
    pub routers: Vec<String>,
}

/// One OSPF area: transit networks plus per-router advertisements.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OspfArea {
    #[serde(default)]
    pub networks: BTreeMap<String, OspfNetwork>,
    #[serde(default)]
    pub routers: BTreeMap<String, OspfRouter>,
}

/// A full OSPF state snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OspfSnapshot {
    pub areas: BTreeMap<String, OspfArea>,
}

/// Parse a snapshot from its JSON text.
///
/// # Returns
/// * `Ok(OspfSnapshot)` - The parsed snapshot
/// * `Err(ExplainError::SnapshotParse)` - With the JSON path of the failure
pub fn parse_ospf_snapshot(json: &str) -> Result<OspfSnapshot, ExplainError> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let snapshot: OspfSnapshot =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            ExplainError::SnapshotParse {
                path: e.path().to_string(),
                reason: e.to_string(),
            }
        })?;
    Ok(snapshot)
}

/// Build the (CIDR, router ID) table of everything advertised in the
/// backbone area.
///
/// Transit networks are tagged with their designated router; each router
/// contributes its `external` and `stubnet` link advertisements. The
/// default route and malformed CIDRs are skipped with a warning.
fn advertisement_table(snapshot: &OspfSnapshot) -> CidrTable<String> {
    let mut entries: Vec<(Ipv4, String)> = Vec::new();

    let Some(area) = snapshot.areas.get(BACKBONE_AREA) else {
        log::warn!("OSPF snapshot has no {BACKBONE_AREA} area");
        return CidrTable { entries };
    };

    for (cidr, network) in &area.networks {
        match Ipv4::new(cidr) {
            Ok(range) => entries.push((range, network.dr.clone())),
            Err(e) => log::warn!("Skipping OSPF network '{}': {}", cidr, e),
        }
    }

    for (router_id, router) in &area.routers {
        let advertised = router.links.external.iter().chain(&router.links.stubnet);
        for link in advertised {
            if link.id == DEFAULT_ROUTE {
                continue;
            }
            match Ipv4::new(&link.id) {
                Ok(range) => entries.push((range, router_id.clone())),
                Err(e) => log::warn!(
                    "Skipping advertisement '{}' from router {}: {}",
                    link.id,
                    router_id,
                    e
                ),
            }
        }
    }

    CidrTable { entries }
}

/// Which routers advertise the most specific route to `addr`.
///
/// All routers tied at the winning prefix length are returned, so redundant
/// advertisements of one range surface every advertiser instead of an
/// arbitrary pick. `matched` is empty when nothing covers the address.
pub fn advertising_routers(addr: Ipv4Addr, snapshot: &OspfSnapshot) -> PrefixMatch<String> {
    longest_prefix_match(addr, &advertisement_table(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> OspfSnapshot {
        parse_ospf_snapshot(
            r#"{
              "areas": {
                "0.0.0.0": {
                  "networks": {
                    "10.69.5.0/24": { "dr": "10.69.5.1", "routers": ["10.69.5.1", "10.69.5.2"] }
                  },
                  "routers": {
                    "10.69.5.1": {
                      "links": {
                        "external": [
                          { "id": "0.0.0.0/0", "metric": 1 },
                          { "id": "10.70.251.8/30", "metric": 10, "via": "10.69.5.2" }
                        ],
                        "stubnet": [ { "id": "10.70.254.11/32", "metric": 1 } ],
                        "router": [ { "id": "10.69.5.2", "metric": 1 } ]
                      }
                    },
                    "10.69.5.2": {
                      "links": {
                        "stubnet": [
                          { "id": "10.70.251.8/30", "metric": 5 },
                          { "id": "bogus-cidr", "metric": 5 }
                        ]
                      }
                    }
                  }
                }
              }
            }"#,
        )
        .expect("sample snapshot should parse")
    }

    #[test]
    fn test_parse_reports_path_on_failure() {
        let err = parse_ospf_snapshot(r#"{"areas": {"0.0.0.0": {"networks": 42}}}"#)
            .expect_err("should fail to parse");
        match err {
            ExplainError::SnapshotParse { path, .. } => {
                assert!(path.contains("networks"), "path was {path}")
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_network_lookup_returns_designated_router() {
        let result = advertising_routers(Ipv4Addr::new(10, 69, 5, 77), &sample_snapshot());
        assert_eq!(result.matched, vec!["10.69.5.1"]);
        assert_eq!(result.prefix_len, 24);
    }

    #[test]
    fn test_tied_advertisers_all_returned() {
        // Both routers advertise 10.70.251.8/30; router order is by ID.
        let result = advertising_routers(Ipv4Addr::new(10, 70, 251, 9), &sample_snapshot());
        assert_eq!(result.matched, vec!["10.69.5.1", "10.69.5.2"]);
        assert_eq!(result.prefix_len, 30);
    }

    #[test]
    fn test_stubnet_host_route() {
        let result = advertising_routers(Ipv4Addr::new(10, 70, 254, 11), &sample_snapshot());
        assert_eq!(result.matched, vec!["10.69.5.1"]);
        assert_eq!(result.prefix_len, 32);
    }

    #[test]
    fn test_default_route_is_not_an_answer() {
        // 10.10.10.10 is only covered by 0.0.0.0/0, which is skipped.
        let result = advertising_routers(Ipv4Addr::new(10, 10, 10, 10), &sample_snapshot());
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_missing_backbone_area_is_empty() {
        let snapshot = parse_ospf_snapshot(r#"{"areas": {}}"#).unwrap();
        let result = advertising_routers(Ipv4Addr::new(10, 69, 5, 77), &snapshot);
        assert!(result.matched.is_empty());
    }
}
