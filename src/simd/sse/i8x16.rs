//! 128-bit 16-lane i8 lane register.
//!
//! There is no packed 8-bit multiply on x86, so multiply, divide and fused
//! multiply-add are unsupported operations at this width.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::error::{self, LanewiseError};
use crate::simd::traits::{LaneOps, Lanes};

/// Number of i8 elements that fit in a 128-bit vector.
pub(crate) const LANE_COUNT: usize = 16;

/// Expected `_mm_movemask_epi8` value when the predicate holds on every lane.
const ALL_LANES: i32 = ((1u64 << LANE_COUNT) - 1) as u32 as i32;

/// 128-bit lane register containing 16 packed i8 values.
#[derive(Copy, Clone, Debug)]
pub struct I8x16 {
    /// 128-bit register containing 16 packed i8 values
    pub(crate) elements: __m128i,
}

impl Lanes for I8x16 {
    type Element = i8;
    type Array = [i8; LANE_COUNT];
    const COUNT: usize = LANE_COUNT;
}

impl LaneOps for I8x16 {
    #[inline(always)]
    fn splat(value: i8) -> Self {
        Self {
            elements: unsafe { _mm_set1_epi8(value) },
        }
    }

    #[inline(always)]
    fn from_lanes(lanes: [i8; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { _mm_loadu_si128(lanes.as_ptr() as *const __m128i) },
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [i8; LANE_COUNT] {
        let mut lanes = [0i8; LANE_COUNT];
        unsafe { _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, self.elements) };
        lanes
    }

    #[inline(always)]
    #[track_caller]
    fn extract(self, index: usize) -> i8 {
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
            elements: unsafe { _mm_add_epi8(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_sub_epi8(self.elements, rhs.elements) },
        }
    }

    #[track_caller]
    fn mul(self, _rhs: Self) -> Self {
        error::unsupported("Multiply", "I8x16")
    }

    #[track_caller]
    fn div(self, _rhs: Self) -> Self {
        error::unsupported("Divide", "I8x16")
    }

    #[track_caller]
    fn fmadd(self, _b: Self, _c: Self) -> Self {
        error::unsupported("MultiplyAdd", "I8x16")
    }

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_min_epi8(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_max_epi8(self.elements, rhs.elements) },
        }
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
        unsafe { _mm_movemask_epi8(_mm_cmpeq_epi8(self.elements, rhs.elements)) == ALL_LANES }
    }

    #[inline(always)]
    fn all_gt(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi8(self.elements, rhs.elements)) == ALL_LANES }
    }

    #[inline(always)]
    fn all_ge(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi8(rhs.elements, self.elements)) == 0 }
    }

    #[inline(always)]
    fn all_lt(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi8(rhs.elements, self.elements)) == ALL_LANES }
    }

    #[inline(always)]
    fn all_le(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi8(self.elements, rhs.elements)) == 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "unsupported lane operation")]
    fn test_multiply_is_unsupported() {
        let a = I8x16::splat(2);
        let _ = a.mul(a);
    }

    #[test]
    fn test_min_max_per_lane() {
        let a = I8x16::splat(-5);
        let b = I8x16::splat(3);

        assert_eq!(a.lane_min(b).to_lanes(), [-5; LANE_COUNT]);
        assert_eq!(a.lane_max(b).to_lanes(), [3; LANE_COUNT]);
    }
}
