//! 256-bit 8-lane f32 lane register.
//!
//! Same operation surface as the 128-bit f32 register, twice the lanes. The
//! AVX compare takes its predicate as a const generic; the ordered
//! non-signaling variants match the quiet NaN behavior of the SSE compares.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::error::LanewiseError;
use crate::simd::traits::{LaneOps, Lanes};

/// Number of f32 elements that fit in a 256-bit vector.
pub(crate) const LANE_COUNT: usize = 8;

/// Expected `_mm256_movemask_ps` value when the predicate holds on every
/// lane.
const ALL_LANES: i32 = ((1u64 << LANE_COUNT) - 1) as u32 as i32;

/// 256-bit lane register containing 8 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub struct F32x8 {
    /// 256-bit register containing 8 packed f32 values
    pub(crate) elements: __m256,
}

impl Lanes for F32x8 {
    type Element = f32;
    type Array = [f32; LANE_COUNT];
    const COUNT: usize = LANE_COUNT;
}

impl LaneOps for F32x8 {
    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { _mm256_set1_ps(value) },
        }
    }

    #[inline(always)]
    fn from_lanes(lanes: [f32; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { _mm256_loadu_ps(lanes.as_ptr()) },
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [f32; LANE_COUNT] {
        let mut lanes = [0.0f32; LANE_COUNT];
        unsafe { _mm256_storeu_ps(lanes.as_mut_ptr(), self.elements) };
        lanes
    }

    #[inline(always)]
    #[track_caller]
    fn extract(self, index: usize) -> f32 {
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
            elements: unsafe { _mm256_add_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_sub_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_mul_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_div_ps(self.elements, rhs.elements) },
        }
    }

    #[cfg(fma)]
    #[inline(always)]
    fn fmadd(self, b: Self, c: Self) -> Self {
        Self {
            elements: unsafe { _mm256_fmadd_ps(b.elements, c.elements, self.elements) },
        }
    }

    #[cfg(not(fma))]
    #[inline(always)]
    fn fmadd(self, b: Self, c: Self) -> Self {
        Self {
            elements: unsafe {
                _mm256_add_ps(self.elements, _mm256_mul_ps(b.elements, c.elements))
            },
        }
    }

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_min_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_max_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_and_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_or_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_xor_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn all_eq(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_ps(_mm256_cmp_ps::<_CMP_EQ_OQ>(self.elements, rhs.elements))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_gt(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_ps(_mm256_cmp_ps::<_CMP_GT_OQ>(self.elements, rhs.elements))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_ge(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_ps(_mm256_cmp_ps::<_CMP_GE_OQ>(self.elements, rhs.elements))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_lt(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_ps(_mm256_cmp_ps::<_CMP_LT_OQ>(self.elements, rhs.elements))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_le(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_ps(_mm256_cmp_ps::<_CMP_LE_OQ>(self.elements, rhs.elements))
                == ALL_LANES
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_lanes() {
        let lanes = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        assert_eq!(F32x8::from_lanes(lanes).to_lanes(), lanes);
    }

    #[test]
    fn test_predicates_with_nan_lane_never_hold() {
        let a = F32x8::from_lanes([f32::NAN, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let b = F32x8::splat(0.0);

        assert!(!a.all_gt(b));
        assert!(!a.all_le(b));
    }
}
