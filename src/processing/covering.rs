//! Minimal CIDR decomposition of an arbitrary address range.
//!
//! Splits an inclusive range `[first, last]` into the unique minimal
//! ordered set of non-overlapping prefixes whose union is exactly the
//! range. Driven lazily through [`CoveringPrefixes`], an iterator over the
//! pending subranges.

use super::convert::checked_range;
use crate::models::{Prefix, UnifiedAddr, Uint128};
use std::net::IpAddr;

/// Lazy iterator over the minimal covering prefix set of a range.
///
/// Subranges wait on an explicit stack; pushing the right half before the
/// left makes pop order ascending by base address, the same sequence the
/// recursive formulation produces. Each instance is independent, so
/// separate iterations never interfere.
#[derive(Debug, Clone)]
pub struct CoveringPrefixes {
    stack: Vec<(UnifiedAddr, UnifiedAddr)>,
}

/// Get the minimal covering prefix set of `[first, last]`, lazily.
///
/// The prefixes are non-overlapping, strictly ascending by base address,
/// and their union is exactly the input range. Works for ranges that align
/// to no power-of-two boundary. Degenerate input (mixed families,
/// `first > last`) yields an empty iterator.
///
/// # Examples
/// ```
/// use cidr_ranges::{covering_prefixes, Prefix};
/// use std::net::IpAddr;
///
/// let first: IpAddr = "0.0.0.4".parse().unwrap();
/// let last: IpAddr = "0.0.0.11".parse().unwrap();
/// let got: Vec<Prefix> = covering_prefixes(first, last).collect();
/// assert_eq!(got, vec![
///     Prefix::new("0.0.0.4/30").unwrap(),
///     Prefix::new("0.0.0.8/30").unwrap(),
/// ]);
/// ```
pub fn covering_prefixes(first: IpAddr, last: IpAddr) -> CoveringPrefixes {
    let stack = match checked_range(first, last) {
        Some(pair) => vec![pair],
        None => Vec::new(),
    };
    CoveringPrefixes { stack }
}

/// Eager form of [`covering_prefixes`]: collect the whole set into a `Vec`.
pub fn covering_prefixes_vec(first: IpAddr, last: IpAddr) -> Vec<Prefix> {
    covering_prefixes(first, last).collect()
}

impl Iterator for CoveringPrefixes {
    type Item = Prefix;

    fn next(&mut self) -> Option<Prefix> {
        while let Some((a, b)) = self.stack.pop() {
            let (bits, ok) = a.ip.prefix_ok(b.ip);
            if ok {
                return Some(Prefix::from_parts_unchecked(
                    a.to_ip(),
                    a.family_bits(bits),
                ));
            }

            // Not an exact block: split one bit below the common prefix.
            // bits < 128 here, otherwise prefix_ok would have succeeded.
            let mask = Uint128::mask(bits + 1);

            // Right half first so the left half pops before it.
            let right_lo = UnifiedAddr {
                ip: b.ip.and(mask),
                v4: b.v4,
            };
            let left_hi = UnifiedAddr {
                ip: a.ip.or(mask.not()),
                v4: a.v4,
            };
            self.stack.push((right_lo, b));
            self.stack.push((a, left_hi));
        }
        None
    }
}
