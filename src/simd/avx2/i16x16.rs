//! 256-bit 16-lane i16 lane register.
//!
//! Fused multiply-add stays unimplemented at this width; the scalar f32
//! roundtrip that covers it in the 128-bit register would cost more than it
//! saves across sixteen lanes.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::error::{self, LanewiseError};
use crate::simd::traits::{LaneOps, Lanes};

/// Number of i16 elements that fit in a 256-bit vector.
pub(crate) const LANE_COUNT: usize = 16;

/// Expected `_mm256_movemask_epi8` value when the predicate holds on every
/// lane, derived from the lane count and the element byte size.
const ALL_LANES: i32 =
    ((1u64 << (LANE_COUNT * core::mem::size_of::<i16>())) - 1) as u32 as i32;

/// 256-bit lane register containing 16 packed i16 values.
#[derive(Copy, Clone, Debug)]
pub struct I16x16 {
    /// 256-bit register containing 16 packed i16 values
    pub(crate) elements: __m256i,
}

impl Lanes for I16x16 {
    type Element = i16;
    type Array = [i16; LANE_COUNT];
    const COUNT: usize = LANE_COUNT;
}

impl LaneOps for I16x16 {
    #[inline(always)]
    fn splat(value: i16) -> Self {
        Self {
            elements: unsafe { _mm256_set1_epi16(value) },
        }
    }

    #[inline(always)]
    fn from_lanes(lanes: [i16; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { _mm256_loadu_si256(lanes.as_ptr() as *const __m256i) },
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [i16; LANE_COUNT] {
        let mut lanes = [0i16; LANE_COUNT];
        unsafe { _mm256_storeu_si256(lanes.as_mut_ptr() as *mut __m256i, self.elements) };
        lanes
    }

    #[inline(always)]
    #[track_caller]
    fn extract(self, index: usize) -> i16 {
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
            elements: unsafe { _mm256_add_epi16(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_sub_epi16(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_mullo_epi16(self.elements, rhs.elements) },
        }
    }

    #[track_caller]
    fn div(self, _rhs: Self) -> Self {
        error::unsupported("Divide", "I16x16")
    }

    #[track_caller]
    fn fmadd(self, _b: Self, _c: Self) -> Self {
        error::unsupported("MultiplyAdd", "I16x16")
    }

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_min_epi16(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_max_epi16(self.elements, rhs.elements) },
        }
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
            _mm256_movemask_epi8(_mm256_cmpeq_epi16(self.elements, rhs.elements)) == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_gt(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_epi8(_mm256_cmpgt_epi16(self.elements, rhs.elements)) == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_ge(self, rhs: Self) -> bool {
        unsafe { _mm256_movemask_epi8(_mm256_cmpgt_epi16(rhs.elements, self.elements)) == 0 }
    }

    #[inline(always)]
    fn all_lt(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_epi8(_mm256_cmpgt_epi16(rhs.elements, self.elements)) == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_le(self, rhs: Self) -> bool {
        unsafe { _mm256_movemask_epi8(_mm256_cmpgt_epi16(self.elements, rhs.elements)) == 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "unsupported lane operation")]
    fn test_fmadd_is_unsupported() {
        let a = I16x16::splat(1);
        let _ = a.fmadd(a, a);
    }
}
