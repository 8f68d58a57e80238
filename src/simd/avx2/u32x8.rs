//! 256-bit 8-lane u32 lane register.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::error::{self, LanewiseError};
use crate::simd::traits::{LaneOps, Lanes};

/// Number of u32 elements that fit in a 256-bit vector.
pub(crate) const LANE_COUNT: usize = 8;

/// Expected `_mm256_movemask_epi8` value when the predicate holds on every
/// lane, derived from the lane count and the element byte size.
const ALL_LANES: i32 =
    ((1u64 << (LANE_COUNT * core::mem::size_of::<u32>())) - 1) as u32 as i32;

/// 256-bit lane register containing 8 packed u32 values.
#[derive(Copy, Clone, Debug)]
pub struct U32x8 {
    /// 256-bit register containing 8 packed u32 values
    pub(crate) elements: __m256i,
}

/// Flips the sign bit so the signed compare orders unsigned operands.
#[inline(always)]
unsafe fn bias(v: __m256i) -> __m256i {
    _mm256_xor_si256(v, _mm256_set1_epi32(i32::MIN))
}

impl Lanes for U32x8 {
    type Element = u32;
    type Array = [u32; LANE_COUNT];
    const COUNT: usize = LANE_COUNT;
}

impl LaneOps for U32x8 {
    #[inline(always)]
    fn splat(value: u32) -> Self {
        Self {
            elements: unsafe { _mm256_set1_epi32(value as i32) },
        }
    }

    #[inline(always)]
    fn from_lanes(lanes: [u32; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { _mm256_loadu_si256(lanes.as_ptr() as *const __m256i) },
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [u32; LANE_COUNT] {
        let mut lanes = [0u32; LANE_COUNT];
        unsafe { _mm256_storeu_si256(lanes.as_mut_ptr() as *mut __m256i, self.elements) };
        lanes
    }

    #[inline(always)]
    #[track_caller]
    fn extract(self, index: usize) -> u32 {
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
            elements: unsafe { _mm256_add_epi32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_sub_epi32(self.elements, rhs.elements) },
        }
    }

    // Low halves of the products; identical bits to wrapping unsigned
    // multiply.
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_mullo_epi32(self.elements, rhs.elements) },
        }
    }

    #[track_caller]
    fn div(self, _rhs: Self) -> Self {
        error::unsupported("Divide", "U32x8")
    }

    /// Widen-to-f64 roundtrip with truncation back.
    #[inline(always)]
    fn fmadd(self, b: Self, c: Self) -> Self {
        let a = self.to_lanes();
        let b = b.to_lanes();
        let c = c.to_lanes();

        let mut out = [0u32; LANE_COUNT];
        for (i, lane) in out.iter_mut().enumerate() {
            *lane = (b[i] as f64).mul_add(c[i] as f64, a[i] as f64) as u32;
        }

        Self::from_lanes(out)
    }

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_min_epu32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_max_epu32(self.elements, rhs.elements) },
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
            _mm256_movemask_epi8(_mm256_cmpeq_epi32(self.elements, rhs.elements)) == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_gt(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_epi8(_mm256_cmpgt_epi32(bias(self.elements), bias(rhs.elements)))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_ge(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_epi8(_mm256_cmpgt_epi32(bias(rhs.elements), bias(self.elements))) == 0
        }
    }

    #[inline(always)]
    fn all_lt(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_epi8(_mm256_cmpgt_epi32(bias(rhs.elements), bias(self.elements)))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_le(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_epi8(_mm256_cmpgt_epi32(bias(self.elements), bias(rhs.elements))) == 0
        }
    }
}
