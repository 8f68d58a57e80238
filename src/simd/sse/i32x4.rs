//! 128-bit 4-lane i32 lane register.
//!
//! Fused multiply-add widens to f64, which represents every i32 exactly, so
//! the only precision loss is the truncation back on results outside the i32
//! range.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::error::{self, LanewiseError};
use crate::simd::traits::{LaneOps, Lanes};

/// Number of i32 elements that fit in a 128-bit vector.
pub(crate) const LANE_COUNT: usize = 4;

/// Expected `_mm_movemask_epi8` value when the predicate holds on every
/// lane, derived from the lane count and the element byte size.
const ALL_LANES: i32 =
    ((1u64 << (LANE_COUNT * core::mem::size_of::<i32>())) - 1) as u32 as i32;

/// 128-bit lane register containing 4 packed i32 values.
#[derive(Copy, Clone, Debug)]
pub struct I32x4 {
    /// 128-bit register containing 4 packed i32 values
    pub(crate) elements: __m128i,
}

impl Lanes for I32x4 {
    type Element = i32;
    type Array = [i32; LANE_COUNT];
    const COUNT: usize = LANE_COUNT;
}

impl LaneOps for I32x4 {
    #[inline(always)]
    fn splat(value: i32) -> Self {
        Self {
            elements: unsafe { _mm_set1_epi32(value) },
        }
    }

    #[inline(always)]
    fn from_lanes(lanes: [i32; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { _mm_loadu_si128(lanes.as_ptr() as *const __m128i) },
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [i32; LANE_COUNT] {
        let mut lanes = [0i32; LANE_COUNT];
        unsafe { _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, self.elements) };
        lanes
    }

    #[inline(always)]
    #[track_caller]
    fn extract(self, index: usize) -> i32 {
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
            elements: unsafe { _mm_add_epi32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_sub_epi32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_mullo_epi32(self.elements, rhs.elements) },
        }
    }

    #[track_caller]
    fn div(self, _rhs: Self) -> Self {
        error::unsupported("Divide", "I32x4")
    }

    #[inline(always)]
    fn fmadd(self, b: Self, c: Self) -> Self {
        let a = self.to_lanes();
        let b = b.to_lanes();
        let c = c.to_lanes();

        let mut out = [0i32; LANE_COUNT];
        for (i, lane) in out.iter_mut().enumerate() {
            *lane = (b[i] as f64).mul_add(c[i] as f64, a[i] as f64) as i32;
        }

        Self::from_lanes(out)
    }

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_min_epi32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_max_epi32(self.elements, rhs.elements) },
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
        unsafe { _mm_movemask_epi8(_mm_cmpeq_epi32(self.elements, rhs.elements)) == ALL_LANES }
    }

    #[inline(always)]
    fn all_gt(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi32(self.elements, rhs.elements)) == ALL_LANES }
    }

    #[inline(always)]
    fn all_ge(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi32(rhs.elements, self.elements)) == 0 }
    }

    #[inline(always)]
    fn all_lt(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi32(rhs.elements, self.elements)) == ALL_LANES }
    }

    #[inline(always)]
    fn all_le(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi32(self.elements, rhs.elements)) == 0 }
    }
}
