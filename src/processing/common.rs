//! Longest common prefix of two prefixes.

use crate::models::{Prefix, UnifiedAddr, Uint128};

/// Get the longest prefix contained in both `a` and `b`.
///
/// Returns `None` when the address families differ. The result length is
/// the common-bit count of the two network bases, clamped so it never
/// exceeds either input length, and the result is in canonical (masked)
/// form.
///
/// # Examples
/// ```
/// use cidr_ranges::{common_prefix, Prefix};
///
/// let a = Prefix::new("10.0.0.0/16").unwrap();
/// let b = Prefix::new("10.1.0.0/16").unwrap();
/// assert_eq!(common_prefix(&a, &b), Some(Prefix::new("10.0.0.0/15").unwrap()));
/// ```
pub fn common_prefix(a: &Prefix, b: &Prefix) -> Option<Prefix> {
    let ua = UnifiedAddr::from(a.addr());
    let ub = UnifiedAddr::from(b.addr());
    if ua.v4 != ub.v4 {
        log::debug!("No common prefix of {} and {}: mixed address families", a, b);
        return None;
    }

    let bits_a = ua.unified_bits(a.bits());
    let bits_b = ub.unified_bits(b.bits());
    let base_a = ua.ip.and(Uint128::mask(bits_a));
    let base_b = ub.ip.and(Uint128::mask(bits_b));

    // never more specific than either input
    let bits = base_a
        .common_prefix_len(base_b)
        .min(bits_a)
        .min(bits_b);

    let base = UnifiedAddr {
        ip: base_a.and(Uint128::mask(bits)),
        v4: ua.v4,
    };
    Some(Prefix::from_parts_unchecked(
        base.to_ip(),
        base.family_bits(bits),
    ))
}
