//! 256-bit 32-lane u8 lane register.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::error::{self, LanewiseError};
use crate::simd::traits::{LaneOps, Lanes};

/// Number of u8 elements that fit in a 256-bit vector.
pub(crate) const LANE_COUNT: usize = 32;

/// Expected `_mm256_movemask_epi8` value when the predicate holds on every
/// lane.
const ALL_LANES: i32 = ((1u64 << LANE_COUNT) - 1) as u32 as i32;

/// 256-bit lane register containing 32 packed u8 values.
#[derive(Copy, Clone, Debug)]
pub struct U8x32 {
    /// 256-bit register containing 32 packed u8 values
    pub(crate) elements: __m256i,
}

/// Flips the sign bit so the signed compare orders unsigned operands.
#[inline(always)]
unsafe fn bias(v: __m256i) -> __m256i {
    _mm256_xor_si256(v, _mm256_set1_epi8(i8::MIN))
}

impl Lanes for U8x32 {
    type Element = u8;
    type Array = [u8; LANE_COUNT];
    const COUNT: usize = LANE_COUNT;
}

impl LaneOps for U8x32 {
    #[inline(always)]
    fn splat(value: u8) -> Self {
        Self {
            elements: unsafe { _mm256_set1_epi8(value as i8) },
        }
    }

    #[inline(always)]
    fn from_lanes(lanes: [u8; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { _mm256_loadu_si256(lanes.as_ptr() as *const __m256i) },
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [u8; LANE_COUNT] {
        let mut lanes = [0u8; LANE_COUNT];
        unsafe { _mm256_storeu_si256(lanes.as_mut_ptr() as *mut __m256i, self.elements) };
        lanes
    }

    #[inline(always)]
    #[track_caller]
    fn extract(self, index: usize) -> u8 {
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
            elements: unsafe { _mm256_add_epi8(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_sub_epi8(self.elements, rhs.elements) },
        }
    }

    #[track_caller]
    fn mul(self, _rhs: Self) -> Self {
        error::unsupported("Multiply", "U8x32")
    }

    #[track_caller]
    fn div(self, _rhs: Self) -> Self {
        error::unsupported("Divide", "U8x32")
    }

    #[track_caller]
    fn fmadd(self, _b: Self, _c: Self) -> Self {
        error::unsupported("MultiplyAdd", "U8x32")
    }

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_min_epu8(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_max_epu8(self.elements, rhs.elements) },
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
        unsafe { _mm256_movemask_epi8(_mm256_cmpeq_epi8(self.elements, rhs.elements)) == ALL_LANES }
    }

    #[inline(always)]
    fn all_gt(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_epi8(_mm256_cmpgt_epi8(bias(self.elements), bias(rhs.elements)))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_ge(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_epi8(_mm256_cmpgt_epi8(bias(rhs.elements), bias(self.elements))) == 0
        }
    }

    #[inline(always)]
    fn all_lt(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_epi8(_mm256_cmpgt_epi8(bias(rhs.elements), bias(self.elements)))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_le(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_epi8(_mm256_cmpgt_epi8(bias(self.elements), bias(rhs.elements))) == 0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_ordering_above_127() {
        let a = U8x32::splat(250);
        let b = U8x32::splat(5);

        assert!(a.all_gt(b));
        assert!(b.all_lt(a));
    }
}
