//! 256-bit 8-lane i32 lane register.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::error::{self, LanewiseError};
use crate::simd::traits::{LaneOps, Lanes};

/// Number of i32 elements that fit in a 256-bit vector.
pub(crate) const LANE_COUNT: usize = 8;

/// Expected `_mm256_movemask_epi8` value when the predicate holds on every
/// lane, derived from the lane count and the element byte size.
const ALL_LANES: i32 =
    ((1u64 << (LANE_COUNT * core::mem::size_of::<i32>())) - 1) as u32 as i32;

/// 256-bit lane register containing 8 packed i32 values.
#[derive(Copy, Clone, Debug)]
pub struct I32x8 {
    /// 256-bit register containing 8 packed i32 values
    pub(crate) elements: __m256i,
}

impl Lanes for I32x8 {
    type Element = i32;
    type Array = [i32; LANE_COUNT];
    const COUNT: usize = LANE_COUNT;
}

impl LaneOps for I32x8 {
    #[inline(always)]
    fn splat(value: i32) -> Self {
        Self {
            elements: unsafe { _mm256_set1_epi32(value) },
        }
    }

    #[inline(always)]
    fn from_lanes(lanes: [i32; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { _mm256_loadu_si256(lanes.as_ptr() as *const __m256i) },
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [i32; LANE_COUNT] {
        let mut lanes = [0i32; LANE_COUNT];
        unsafe { _mm256_storeu_si256(lanes.as_mut_ptr() as *mut __m256i, self.elements) };
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
            elements: unsafe { _mm256_add_epi32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_sub_epi32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_mullo_epi32(self.elements, rhs.elements) },
        }
    }

    #[track_caller]
    fn div(self, _rhs: Self) -> Self {
        error::unsupported("Divide", "I32x8")
    }

    /// Widen-to-f64 roundtrip; f64 holds every i32 exactly.
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
            elements: unsafe { _mm256_min_epi32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_max_epi32(self.elements, rhs.elements) },
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
            _mm256_movemask_epi8(_mm256_cmpgt_epi32(self.elements, rhs.elements)) == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_ge(self, rhs: Self) -> bool {
        unsafe { _mm256_movemask_epi8(_mm256_cmpgt_epi32(rhs.elements, self.elements)) == 0 }
    }

    #[inline(always)]
    fn all_lt(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_epi8(_mm256_cmpgt_epi32(rhs.elements, self.elements)) == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_le(self, rhs: Self) -> bool {
        unsafe { _mm256_movemask_epi8(_mm256_cmpgt_epi32(self.elements, rhs.elements)) == 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmadd_widens_without_loss() {
        let a = I32x8::splat(1_000_000);
        let b = I32x8::splat(1_000);
        let c = I32x8::splat(1_000);

        assert_eq!(a.fmadd(b, c).to_lanes(), [2_000_000; LANE_COUNT]);
    }
}
