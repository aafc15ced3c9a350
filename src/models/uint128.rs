//! 128-bit unsigned integer arithmetic for the unified address space.
//!
//! Provides [`Uint128`], a `(hi, lo)` pair of `u64` values with the bitwise
//! and prefix operations the range calculations need. IPv4 addresses occupy
//! only the low 32 bits; IPv6 addresses use all 128.

/// Maximum prefix length in the unified 128-bit address space.
pub const MAX_BITS: u8 = 128;

/// A 128-bit unsigned integer as two 64-bit halves, most significant first.
///
/// The derived `Ord` compares `hi` before `lo`, which is exactly unsigned
/// 128-bit ordering.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Uint128 {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl Uint128 {
    /// All bits zero.
    pub const ZERO: Uint128 = Uint128 { hi: 0, lo: 0 };
    /// All bits one.
    pub const MAX: Uint128 = Uint128 {
        hi: u64::MAX,
        lo: u64::MAX,
    };

    /// Bitwise AND.
    pub fn and(self, other: Uint128) -> Uint128 {
        Uint128 {
            hi: self.hi & other.hi,
            lo: self.lo & other.lo,
        }
    }

    /// Bitwise OR.
    pub fn or(self, other: Uint128) -> Uint128 {
        Uint128 {
            hi: self.hi | other.hi,
            lo: self.lo | other.lo,
        }
    }

    /// Bitwise XOR.
    pub fn xor(self, other: Uint128) -> Uint128 {
        Uint128 {
            hi: self.hi ^ other.hi,
            lo: self.lo ^ other.lo,
        }
    }

    /// Bitwise NOT.
    pub fn not(self) -> Uint128 {
        Uint128 {
            hi: !self.hi,
            lo: !self.lo,
        }
    }

    /// Network mask with the top `n` bits set, `0 <= n <= 128`.
    ///
    /// Shifting a `u64` by 64 or more panics, so the half boundaries are
    /// handled explicitly.
    ///
    /// # Examples
    /// ```
    /// use cidr_ranges::models::Uint128;
    /// assert_eq!(Uint128::mask(0), Uint128::ZERO);
    /// assert_eq!(Uint128::mask(64), Uint128 { hi: u64::MAX, lo: 0 });
    /// assert_eq!(Uint128::mask(128), Uint128::MAX);
    /// ```
    pub fn mask(n: u8) -> Uint128 {
        debug_assert!(n <= MAX_BITS, "mask length {} exceeds 128 bits", n);
        match n {
            0 => Uint128::ZERO,
            1..=63 => Uint128 {
                hi: !(u64::MAX >> n),
                lo: 0,
            },
            64 => Uint128 {
                hi: u64::MAX,
                lo: 0,
            },
            65..=127 => Uint128 {
                hi: u64::MAX,
                lo: !(u64::MAX >> (n - 64)),
            },
            _ => Uint128::MAX,
        }
    }

    /// Number of leading bits equal between `self` and `other`, at most 128.
    pub fn common_prefix_len(self, other: Uint128) -> u8 {
        let n = (self.hi ^ other.hi).leading_zeros();
        if n == 64 {
            (n + (self.lo ^ other.lo).leading_zeros()) as u8
        } else {
            n as u8
        }
    }

    /// Common prefix length of `self` and `other`, and whether the inclusive
    /// range `[self, other]` is exactly the block of that prefix.
    ///
    /// Exactness requires `self` to carry no bits below the common prefix
    /// and `other` to carry all of them.
    pub fn prefix_ok(self, other: Uint128) -> (u8, bool) {
        let bits = self.common_prefix_len(other);
        if bits == MAX_BITS {
            // single address range
            return (bits, true);
        }
        let mask = Uint128::mask(bits);
        let all_zero = self.and(mask) == self;
        let all_ones = other.or(mask) == Uint128::MAX;
        (bits, all_zero && all_ones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_boundaries() {
        assert_eq!(Uint128::mask(0), Uint128 { hi: 0, lo: 0 });
        assert_eq!(
            Uint128::mask(1),
            Uint128 {
                hi: 0x8000_0000_0000_0000,
                lo: 0
            }
        );
        assert_eq!(
            Uint128::mask(63),
            Uint128 {
                hi: u64::MAX << 1,
                lo: 0
            }
        );
        assert_eq!(
            Uint128::mask(64),
            Uint128 {
                hi: u64::MAX,
                lo: 0
            }
        );
        assert_eq!(
            Uint128::mask(65),
            Uint128 {
                hi: u64::MAX,
                lo: 0x8000_0000_0000_0000
            }
        );
        assert_eq!(
            Uint128::mask(96),
            Uint128 {
                hi: u64::MAX,
                lo: 0xFFFF_FFFF_0000_0000
            }
        );
        assert_eq!(
            Uint128::mask(127),
            Uint128 {
                hi: u64::MAX,
                lo: u64::MAX << 1
            }
        );
        assert_eq!(Uint128::mask(128), Uint128::MAX);
    }

    #[test]
    fn test_bitwise_ops() {
        let a = Uint128 {
            hi: 0xF0F0_F0F0_F0F0_F0F0,
            lo: 0x0F0F_0F0F_0F0F_0F0F,
        };
        let b = Uint128 {
            hi: 0xFF00_FF00_FF00_FF00,
            lo: 0x00FF_00FF_00FF_00FF,
        };
        assert_eq!(
            a.and(b),
            Uint128 {
                hi: 0xF000_F000_F000_F000,
                lo: 0x000F_000F_000F_000F
            }
        );
        assert_eq!(
            a.or(b),
            Uint128 {
                hi: 0xFFF0_FFF0_FFF0_FFF0,
                lo: 0x0FFF_0FFF_0FFF_0FFF
            }
        );
        assert_eq!(
            a.xor(b),
            Uint128 {
                hi: 0x0FF0_0FF0_0FF0_0FF0,
                lo: 0x0FF0_0FF0_0FF0_0FF0
            }
        );
        assert_eq!(a.not().not(), a);
        assert_eq!(Uint128::ZERO.not(), Uint128::MAX);
    }

    #[test]
    fn test_ordering() {
        let small = Uint128 { hi: 0, lo: u64::MAX };
        let big = Uint128 { hi: 1, lo: 0 };
        assert!(small < big, "hi compares before lo");
        assert!(Uint128::ZERO < small);
        assert!(big < Uint128::MAX);
        assert_eq!(big, Uint128 { hi: 1, lo: 0 });
    }

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(Uint128::ZERO.common_prefix_len(Uint128::ZERO), 128);
        assert_eq!(Uint128::ZERO.common_prefix_len(Uint128::MAX), 0);
        // differs in the last bit of the high half
        let a = Uint128 { hi: 0, lo: 0 };
        let b = Uint128 { hi: 1, lo: 0 };
        assert_eq!(a.common_prefix_len(b), 63);
        // identical high halves, differ in the first bit of the low half
        let c = Uint128 {
            hi: 7,
            lo: 0x8000_0000_0000_0000,
        };
        let d = Uint128 { hi: 7, lo: 0 };
        assert_eq!(c.common_prefix_len(d), 64);
        // identical high halves, differ in the last low bit
        let e = Uint128 { hi: 7, lo: 0 };
        let f = Uint128 { hi: 7, lo: 1 };
        assert_eq!(e.common_prefix_len(f), 127);
    }

    #[test]
    fn test_prefix_ok() {
        // single address is always exact at /128
        let one = Uint128 { hi: 0, lo: 1 };
        assert_eq!(one.prefix_ok(one), (128, true));

        // [0, 3] is 0/126
        let three = Uint128 { hi: 0, lo: 3 };
        assert_eq!(Uint128::ZERO.prefix_ok(three), (126, true));

        // [0, 5] shares 125 bits but is not a block
        let five = Uint128 { hi: 0, lo: 5 };
        let (bits, ok) = Uint128::ZERO.prefix_ok(five);
        assert_eq!(bits, 125);
        assert!(!ok, "[0, 5] must not pass the exactness test");

        // [4, 11] is not a block either
        let four = Uint128 { hi: 0, lo: 4 };
        let eleven = Uint128 { hi: 0, lo: 11 };
        let (_, ok) = four.prefix_ok(eleven);
        assert!(!ok);

        // full space is 0/0
        assert_eq!(Uint128::ZERO.prefix_ok(Uint128::MAX), (0, true));
    }
}
