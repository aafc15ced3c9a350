//! Bridge between `std::net::IpAddr` and the unified 128-bit space.
//!
//! IPv4 addresses are embedded in the low 32 bits of the 128-bit value with
//! the high 96 bits zero; IPv6 addresses fill all 128 bits. The family tag
//! travels alongside so the original form is restored on the way back out.

use super::uint128::Uint128;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// An IP address in the unified 128-bit space, plus its family tag.
///
/// The family is taken from the `IpAddr` enum variant, never from the bit
/// pattern, so an IPv4-mapped IPv6 address such as `::ffff:127.0.0.1` stays
/// IPv6 through a round trip.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct UnifiedAddr {
    /// Raw 128-bit value, big-endian semantics.
    pub ip: Uint128,
    /// True for IPv4 (low 32 bits used, high 96 bits zero).
    pub v4: bool,
}

impl From<IpAddr> for UnifiedAddr {
    fn from(addr: IpAddr) -> UnifiedAddr {
        match addr {
            IpAddr::V4(v4) => UnifiedAddr {
                ip: Uint128 {
                    hi: 0,
                    lo: u64::from(u32::from(v4)),
                },
                v4: true,
            },
            IpAddr::V6(v6) => {
                let bits = u128::from(v6);
                UnifiedAddr {
                    ip: Uint128 {
                        hi: (bits >> 64) as u64,
                        lo: bits as u64,
                    },
                    v4: false,
                }
            }
        }
    }
}

impl UnifiedAddr {
    /// Convert back to an `IpAddr` of the tagged family.
    ///
    /// Inverse of the `From<IpAddr>` conversion: for IPv4 only the low 32
    /// bits are used, for IPv6 the full 128 bits.
    pub fn to_ip(self) -> IpAddr {
        if self.v4 {
            IpAddr::V4(Ipv4Addr::from(self.ip.lo as u32))
        } else {
            let bits = (u128::from(self.ip.hi) << 64) | u128::from(self.ip.lo);
            IpAddr::V6(Ipv6Addr::from(bits))
        }
    }

    /// Prefix length adjusted into the unified space (+96 for IPv4).
    pub fn unified_bits(self, bits: u8) -> u8 {
        if self.v4 {
            bits + 96
        } else {
            bits
        }
    }

    /// Prefix length adjusted back out of the unified space (-96 for IPv4).
    pub fn family_bits(self, bits: u8) -> u8 {
        if self.v4 {
            bits - 96
        } else {
            bits
        }
    }
}
