//! Population count primitive.
//!
//! Everything in the crate that counts set bits goes through [`popcount`].
//! By default it maps to `u64::count_ones`, which compiles down to the
//! hardware instruction when the target supports one. Enabling the
//! `portable-popcount` feature routes it through [`popcount_swar`] instead.
//!
//! # Examples
//!
//! ```
//! use fastcalc::popcount::{popcount, popcount_swar};
//!
//! assert_eq!(popcount(0b1011), 3);
//! assert_eq!(popcount_swar(u64::MAX), 64);
//! ```

const M1: u64 = 0x5555_5555_5555_5555;
const M2: u64 = 0x3333_3333_3333_3333;
const M4: u64 = 0x0F0F_0F0F_0F0F_0F0F;
const H01: u64 = 0x0101_0101_0101_0101;

/// Count the set bits of a 64-bit word. Always in `[0, 64]`.
#[inline(always)]
pub fn popcount(x: u64) -> u32 {
    #[cfg(feature = "portable-popcount")]
    {
        popcount_swar(x)
    }
    #[cfg(not(feature = "portable-popcount"))]
    {
        x.count_ones()
    }
}

/// Portable SWAR popcount.
///
/// Sums adjacent bit pairs, then nibbles, then bytes, and finally gathers the
/// byte sums into the top byte with a multiply.
#[inline]
pub const fn popcount_swar(x: u64) -> u32 {
    let x = x - ((x >> 1) & M1);
    let x = (x & M2) + ((x >> 2) & M2);
    let x = (x + (x >> 4)) & M4;
    (x.wrapping_mul(H01) >> 56) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popcount_edges() {
        assert_eq!(popcount(0), 0);
        assert_eq!(popcount(u64::MAX), 64);
        assert_eq!(popcount(1 << 63), 1);
    }

    #[test]
    fn test_swar_matches_builtin() {
        for x in [0u64, 1, 0xFF, 0x8000_0000_0000_0001, M1, M2, M4, H01, u64::MAX] {
            assert_eq!(popcount_swar(x), x.count_ones(), "x = {:#018x}", x);
        }
    }

    #[test]
    fn test_swar_is_const() {
        const ALL: u32 = popcount_swar(u64::MAX);
        assert_eq!(ALL, 64);
    }
}
