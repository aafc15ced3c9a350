//! CIDR prefix type for IPv4 and IPv6.
//!
//! Provides [`Prefix`], a base address plus prefix length in CIDR notation,
//! with validated construction, string and serde round trips, and range
//! endpoint helpers.

use super::addr::UnifiedAddr;
use super::uint128::Uint128;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::IpAddr;
use std::str::FromStr;

/// Maximum prefix length for an IPv4 address (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for an IPv6 address (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// An IP prefix in CIDR notation: base address plus prefix length.
///
/// Fields are private so `bits` never exceeds the address family width;
/// every reachable value went through a validated constructor. The base
/// address is kept as given, use [`Prefix::masked`] for the canonical
/// network form.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Prefix {
    addr: IpAddr,
    bits: u8,
}

/// Prefix length limit for the family of `addr`.
pub fn max_length(addr: &IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => MAX_LENGTH_V4,
        IpAddr::V6(_) => MAX_LENGTH_V6,
    }
}

impl Prefix {
    /// Create a new [`Prefix`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// # Examples
    /// ```
    /// use cidr_ranges::Prefix;
    /// let p = Prefix::new("10.0.0.0/24").unwrap();
    /// assert_eq!(p.bits(), 24);
    /// assert!(Prefix::new("10.0.0.0/33").is_err());
    /// ```
    pub fn new(addr_cidr: &str) -> Result<Prefix, Box<dyn Error>> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(format!("Invalid CIDR format: {}", addr_cidr).into());
        }
        let addr: IpAddr = parts[0]
            .parse()
            .map_err(|_| format!("Invalid address {}", parts[0]))?;
        let bits: u8 = parts[1].parse()?;
        Prefix::from_parts(addr, bits)
    }

    /// Create a new [`Prefix`] from a base address and a prefix length.
    pub fn from_parts(addr: IpAddr, bits: u8) -> Result<Prefix, Box<dyn Error>> {
        if bits > max_length(&addr) {
            return Err(format!("Prefix length {} is too long for {}", bits, addr).into());
        }
        Ok(Prefix { addr, bits })
    }

    /// Construct without the length check. Callers guarantee
    /// `bits <= max_length(&addr)`.
    pub(crate) fn from_parts_unchecked(addr: IpAddr, bits: u8) -> Prefix {
        debug_assert!(bits <= max_length(&addr));
        Prefix { addr, bits }
    }

    /// The base address as given at construction.
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// The prefix length.
    pub fn bits(&self) -> u8 {
        self.bits
    }

    /// The canonical form: base address masked down to the network address.
    pub fn masked(&self) -> Prefix {
        let ua = UnifiedAddr::from(self.addr);
        let mask = Uint128::mask(ua.unified_bits(self.bits));
        let base = UnifiedAddr {
            ip: ua.ip.and(mask),
            v4: ua.v4,
        };
        Prefix {
            addr: base.to_ip(),
            bits: self.bits,
        }
    }

    /// Get the lowest (network) address covered by this prefix.
    pub fn lo(&self) -> IpAddr {
        crate::processing::range(self).0
    }

    /// Get the highest (broadcast) address covered by this prefix.
    pub fn hi(&self) -> IpAddr {
        crate::processing::range(self).1
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.bits)
    }
}

impl FromStr for Prefix {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Prefix, Self::Err> {
        Prefix::new(s)
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.bits);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(deserializer: D) -> Result<Prefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Prefix::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {}: {}", s, e)))
    }
}
