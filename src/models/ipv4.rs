//! IPv4 CIDR range utilities.
//!
//! Provides the [`Ipv4`] struct for representing a CIDR range (network
//! address plus prefix length), along with the mask arithmetic used by the
//! classification and matching layers.

use crate::error::ExplainError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use mesh_address_explainer::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, ExplainError> {
    if len > MAX_LENGTH {
        Err(ExplainError::malformed(
            &format!("/{len}"),
            "prefix length is too long",
        ))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, ExplainError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, ExplainError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// An IPv4 CIDR range: network address plus prefix length.
///
/// The prefix length is validated at construction, so the range helpers
/// below never fail.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The network address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(de::Error::custom(format!("invalid CIDR format: {}", s)));
        }

        let addr = Ipv4Addr::from_str(parts[0])
            .map_err(|_| de::Error::custom(format!("invalid IP address: {}", parts[0])))?;
        let mask = u8::from_str(parts[1])
            .map_err(|_| de::Error::custom(format!("invalid prefix length: {}", parts[1])))?;

        Ok(Ipv4 { addr, mask })
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.70.0.0/16").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, ExplainError> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(ExplainError::malformed(addr_cidr, "expected address/prefix"));
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|e| ExplainError::malformed(addr_cidr, e))?;
        let mask: u8 = parts[1]
            .parse()
            .map_err(|e| ExplainError::malformed(addr_cidr, e))?;
        if mask > MAX_LENGTH {
            return Err(ExplainError::malformed(addr_cidr, "prefix length is too long"));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Get the lowest (network) address in the range.
    pub fn lo(&self) -> Ipv4Addr {
        // mask validated in new(), cannot exceed 32
        Ipv4Addr::from(u32::from(self.addr) & self.mask_bits())
    }

    /// Get the highest (broadcast) address in the range.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from((u32::from(self.addr) & self.mask_bits()) | !self.mask_bits())
    }

    /// Check if an IP address is contained within this range.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }

    fn mask_bits(&self) -> u32 {
        let right_len = MAX_LENGTH - self.mask;
        let all_bits = u32::MAX as u64;
        ((all_bits >> right_len) << right_len) as u32
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Ipv4) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Ipv4) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(13).unwrap(), 0xFFF80000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(26).unwrap(), 0xFFFFFFC0);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(10, 96, 160, 182);
        assert_eq!(cut_addr(ip, 26).unwrap(), Ipv4Addr::new(10, 96, 160, 128));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(10, 96, 0, 0));
        assert_eq!(cut_addr(ip, 13).unwrap(), Ipv4Addr::new(10, 96, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(10, 96, 160, 182));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(10, 96, 160, 128);
        assert_eq!(
            broadcast_addr(ip, 26).unwrap(),
            Ipv4Addr::new(10, 96, 160, 191)
        );
        assert_eq!(
            broadcast_addr(ip, 13).unwrap(),
            Ipv4Addr::new(10, 103, 255, 255)
        );
        assert!(broadcast_addr(ip, 33).is_err());
    }

    #[test]
    fn test_new_rejects_malformed() {
        assert!(Ipv4::new("10.0.0.0").is_err());
        assert!(Ipv4::new("10.0.0.0/33").is_err());
        assert!(Ipv4::new("10.0.0/8").is_err());
        assert!(Ipv4::new("not-an-ip/8").is_err());
        assert!(Ipv4::new(" 10.0.0.0/8 ").is_ok(), "whitespace is trimmed");
    }

    #[test]
    fn test_contains() {
        let range = Ipv4::new("10.70.0.0/16").unwrap();
        assert!(range.contains(Ipv4Addr::new(10, 70, 251, 234)));
        assert!(range.contains(Ipv4Addr::new(10, 70, 0, 0)));
        assert!(range.contains(Ipv4Addr::new(10, 70, 255, 255)));
        assert!(!range.contains(Ipv4Addr::new(10, 71, 0, 0)));
        assert!(!range.contains(Ipv4Addr::new(10, 69, 255, 255)));

        // a range given off its network base still covers the whole block
        let range = Ipv4::new("10.96.160.182/13").unwrap();
        assert_eq!(range.lo(), Ipv4Addr::new(10, 96, 0, 0));
        assert_eq!(range.hi(), Ipv4Addr::new(10, 103, 255, 255));
        assert!(range.contains(Ipv4Addr::new(10, 103, 1, 1)));
    }

    #[test]
    fn test_ip4_cmp() {
        let ip1 = Ipv4::new("10.0.0.1/24").unwrap();
        let ip2 = Ipv4::new("10.0.0.2/24").unwrap();
        let ip3 = Ipv4::new("10.0.0.1/24").unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 > ip1);
        assert!(ip2 >= ip3);
    }
}
