//! 128-bit 2-lane u64 lane register.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::error::{self, LanewiseError};
use crate::simd::traits::{LaneOps, Lanes};

/// Number of u64 elements that fit in a 128-bit vector.
pub(crate) const LANE_COUNT: usize = 2;

/// Expected `_mm_movemask_epi8` value when the predicate holds on every
/// lane, derived from the lane count and the element byte size.
const ALL_LANES: i32 =
    ((1u64 << (LANE_COUNT * core::mem::size_of::<u64>())) - 1) as u32 as i32;

/// 128-bit lane register containing 2 packed u64 values.
#[derive(Copy, Clone, Debug)]
pub struct U64x2 {
    /// 128-bit register containing 2 packed u64 values
    pub(crate) elements: __m128i,
}

/// Flips the sign bit so the signed compare orders unsigned operands.
#[inline(always)]
unsafe fn bias(v: __m128i) -> __m128i {
    _mm_xor_si128(v, _mm_set1_epi64x(i64::MIN))
}

impl Lanes for U64x2 {
    type Element = u64;
    type Array = [u64; LANE_COUNT];
    const COUNT: usize = LANE_COUNT;
}

impl LaneOps for U64x2 {
    #[inline(always)]
    fn splat(value: u64) -> Self {
        Self {
            elements: unsafe { _mm_set1_epi64x(value as i64) },
        }
    }

    #[inline(always)]
    fn from_lanes(lanes: [u64; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { _mm_loadu_si128(lanes.as_ptr() as *const __m128i) },
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [u64; LANE_COUNT] {
        let mut lanes = [0u64; LANE_COUNT];
        unsafe { _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, self.elements) };
        lanes
    }

    #[inline(always)]
    #[track_caller]
    fn extract(self, index: usize) -> u64 {
        debug_assert!(
            index < LANE_COUNT,
            "{}",
            LanewiseError::LaneIndexOutOfBounds {
                index,
                lane_count: LANE_COUNT
            }
        );
        unsafe { *self.to_lanes().get_unchecked(index) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_add_epi64(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_sub_epi64(self.elements, rhs.elements) },
        }
    }

    /// Per-lane scalar multiply; there is no packed 64-bit multiply below
    /// AVX-512.
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        let a = self.to_lanes();
        let b = rhs.to_lanes();

        let mut out = [0u64; LANE_COUNT];
        for (i, lane) in out.iter_mut().enumerate() {
            *lane = a[i].wrapping_mul(b[i]);
        }

        Self::from_lanes(out)
    }

    #[track_caller]
    fn div(self, _rhs: Self) -> Self {
        error::unsupported("Divide", "U64x2")
    }

    #[track_caller]
    fn fmadd(self, _b: Self, _c: Self) -> Self {
        error::unsupported("MultiplyAdd", "U64x2")
    }

    #[track_caller]
    fn lane_min(self, _rhs: Self) -> Self {
        error::unsupported("Min", "U64x2")
    }

    #[track_caller]
    fn lane_max(self, _rhs: Self) -> Self {
        error::unsupported("Max", "U64x2")
    }

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_and_si128(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_or_si128(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_xor_si128(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn all_eq(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpeq_epi64(self.elements, rhs.elements)) == ALL_LANES }
    }

    #[inline(always)]
    fn all_gt(self, rhs: Self) -> bool {
        unsafe {
            _mm_movemask_epi8(_mm_cmpgt_epi64(bias(self.elements), bias(rhs.elements)))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_ge(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi64(bias(rhs.elements), bias(self.elements))) == 0 }
    }

    #[inline(always)]
    fn all_lt(self, rhs: Self) -> bool {
        unsafe {
            _mm_movemask_epi8(_mm_cmpgt_epi64(bias(rhs.elements), bias(self.elements)))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_le(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi64(bias(self.elements), bias(rhs.elements))) == 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_ordering_with_high_bit_set() {
        let a = U64x2::splat(u64::MAX);
        let b = U64x2::splat(1);

        assert!(a.all_gt(b));
        assert!(b.all_lt(a));
    }
}
