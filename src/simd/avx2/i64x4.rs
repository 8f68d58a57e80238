//! 256-bit 4-lane i64 lane register.
//!
//! Multiply, divide, fused multiply-add, min and max are all unsupported
//! operations at this width; x86 gains packed 64-bit multiply and min/max
//! only with AVX-512.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::error::{self, LanewiseError};
use crate::simd::traits::{LaneOps, Lanes};

/// Number of i64 elements that fit in a 256-bit vector.
pub(crate) const LANE_COUNT: usize = 4;

/// Expected `_mm256_movemask_epi8` value when the predicate holds on every
/// lane, derived from the lane count and the element byte size.
const ALL_LANES: i32 =
    ((1u64 << (LANE_COUNT * core::mem::size_of::<i64>())) - 1) as u32 as i32;

/// 256-bit lane register containing 4 packed i64 values.
#[derive(Copy, Clone, Debug)]
pub struct I64x4 {
    /// 256-bit register containing 4 packed i64 values
    pub(crate) elements: __m256i,
}

impl Lanes for I64x4 {
    type Element = i64;
    type Array = [i64; LANE_COUNT];
    const COUNT: usize = LANE_COUNT;
}

impl LaneOps for I64x4 {
    #[inline(always)]
    fn splat(value: i64) -> Self {
        Self {
            elements: unsafe { _mm256_set1_epi64x(value) },
        }
    }

    #[inline(always)]
    fn from_lanes(lanes: [i64; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { _mm256_loadu_si256(lanes.as_ptr() as *const __m256i) },
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [i64; LANE_COUNT] {
        let mut lanes = [0i64; LANE_COUNT];
        unsafe { _mm256_storeu_si256(lanes.as_mut_ptr() as *mut __m256i, self.elements) };
        lanes
    }

    #[inline(always)]
    #[track_caller]
    fn extract(self, index: usize) -> i64 {
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
            elements: unsafe { _mm256_add_epi64(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_sub_epi64(self.elements, rhs.elements) },
        }
    }

    #[track_caller]
    fn mul(self, _rhs: Self) -> Self {
        error::unsupported("Multiply", "I64x4")
    }

    #[track_caller]
    fn div(self, _rhs: Self) -> Self {
        error::unsupported("Divide", "I64x4")
    }

    #[track_caller]
    fn fmadd(self, _b: Self, _c: Self) -> Self {
        error::unsupported("MultiplyAdd", "I64x4")
    }

    #[track_caller]
    fn lane_min(self, _rhs: Self) -> Self {
        error::unsupported("Min", "I64x4")
    }

    #[track_caller]
    fn lane_max(self, _rhs: Self) -> Self {
        error::unsupported("Max", "I64x4")
    }

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_and_si256(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_or_si256(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_xor_si256(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn all_eq(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_epi8(_mm256_cmpeq_epi64(self.elements, rhs.elements)) == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_gt(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_epi8(_mm256_cmpgt_epi64(self.elements, rhs.elements)) == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_ge(self, rhs: Self) -> bool {
        unsafe { _mm256_movemask_epi8(_mm256_cmpgt_epi64(rhs.elements, self.elements)) == 0 }
    }

    #[inline(always)]
    fn all_lt(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_epi8(_mm256_cmpgt_epi64(rhs.elements, self.elements)) == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_le(self, rhs: Self) -> bool {
        unsafe { _mm256_movemask_epi8(_mm256_cmpgt_epi64(self.elements, rhs.elements)) == 0 }
    }
}
