//! Prefix to range conversion and back.
//!
//! The calculations run in the unified 128-bit space: IPv4 prefix lengths
//! are shifted by +96 on the way in and -96 on the way out, so a single
//! masking code path serves both families.

use crate::models::{Prefix, UnifiedAddr, Uint128};
use std::net::IpAddr;

/// Validate a range entry point: same family and `first <= last`.
///
/// Returns the unified views, or `None` with a debug trace when the pair
/// is rejected.
pub(crate) fn checked_range(first: IpAddr, last: IpAddr) -> Option<(UnifiedAddr, UnifiedAddr)> {
    let a = UnifiedAddr::from(first);
    let b = UnifiedAddr::from(last);
    if a.v4 != b.v4 {
        log::debug!("Rejecting range {} - {}: mixed address families", first, last);
        return None;
    }
    if a.ip > b.ip {
        log::debug!("Rejecting range {} - {}: first is above last", first, last);
        return None;
    }
    Some((a, b))
}

/// Get the inclusive address range `[first, last]` covered by a prefix.
///
/// The prefix does not have to be canonical; the base address is masked
/// down first. Both endpoints carry the family of the input prefix. A /0
/// yields the whole address space of that family, a full-width prefix
/// yields `first == last`.
///
/// # Examples
/// ```
/// use cidr_ranges::{range, Prefix};
/// use std::net::IpAddr;
///
/// let p = Prefix::new("10.0.0.0/8").unwrap();
/// let (first, last) = range(&p);
/// assert_eq!(first, "10.0.0.0".parse::<IpAddr>().unwrap());
/// assert_eq!(last, "10.255.255.255".parse::<IpAddr>().unwrap());
/// ```
pub fn range(p: &Prefix) -> (IpAddr, IpAddr) {
    let ua = UnifiedAddr::from(p.addr());
    let mask = Uint128::mask(ua.unified_bits(p.bits()));

    let first = ua.ip.and(mask);
    let last = first.or(mask.not());

    (
        UnifiedAddr { ip: first, v4: ua.v4 }.to_ip(),
        UnifiedAddr { ip: last, v4: ua.v4 }.to_ip(),
    )
}

/// Try to represent the inclusive range `[first, last]` as a single prefix.
///
/// Returns `None` when the families differ, when `first > last`, or when
/// the range does not align exactly to a CIDR block. A single-address range
/// is always exact at full width.
///
/// # Examples
/// ```
/// use cidr_ranges::{prefix, Prefix};
/// use std::net::IpAddr;
///
/// let first: IpAddr = "10.0.0.0".parse().unwrap();
/// let last: IpAddr = "10.255.255.255".parse().unwrap();
/// assert_eq!(prefix(first, last), Some(Prefix::new("10.0.0.0/8").unwrap()));
///
/// let close: IpAddr = "10.255.255.254".parse().unwrap();
/// assert_eq!(prefix(first, close), None);
/// ```
pub fn prefix(first: IpAddr, last: IpAddr) -> Option<Prefix> {
    let (a, b) = checked_range(first, last)?;

    let (bits, ok) = a.ip.prefix_ok(b.ip);
    if !ok {
        return None;
    }

    debug_assert!(!a.v4 || bits >= 96, "v4 ranges share the 96-bit embedding");
    Some(Prefix::from_parts_unchecked(first, a.family_bits(bits)))
}
