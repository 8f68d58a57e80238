//! 256-bit 4-lane f64 lane register.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::error::LanewiseError;
use crate::simd::traits::{LaneOps, Lanes};

/// Number of f64 elements that fit in a 256-bit vector.
pub(crate) const LANE_COUNT: usize = 4;

/// Expected `_mm256_movemask_pd` value when the predicate holds on every
/// lane.
const ALL_LANES: i32 = ((1u64 << LANE_COUNT) - 1) as u32 as i32;

/// 256-bit lane register containing 4 packed f64 values.
#[derive(Copy, Clone, Debug)]
pub struct F64x4 {
    /// 256-bit register containing 4 packed f64 values
    pub(crate) elements: __m256d,
}

impl Lanes for F64x4 {
    type Element = f64;
    type Array = [f64; LANE_COUNT];
    const COUNT: usize = LANE_COUNT;
}

impl LaneOps for F64x4 {
    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self {
            elements: unsafe { _mm256_set1_pd(value) },
        }
    }

    #[inline(always)]
    fn from_lanes(lanes: [f64; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { _mm256_loadu_pd(lanes.as_ptr()) },
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [f64; LANE_COUNT] {
        let mut lanes = [0.0f64; LANE_COUNT];
        unsafe { _mm256_storeu_pd(lanes.as_mut_ptr(), self.elements) };
        lanes
    }

    #[inline(always)]
    #[track_caller]
    fn extract(self, index: usize) -> f64 {
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
            elements: unsafe { _mm256_add_pd(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_sub_pd(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_mul_pd(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_div_pd(self.elements, rhs.elements) },
        }
    }

    #[cfg(fma)]
    #[inline(always)]
    fn fmadd(self, b: Self, c: Self) -> Self {
        Self {
            elements: unsafe { _mm256_fmadd_pd(b.elements, c.elements, self.elements) },
        }
    }

    #[cfg(not(fma))]
    #[inline(always)]
    fn fmadd(self, b: Self, c: Self) -> Self {
        Self {
            elements: unsafe {
                _mm256_add_pd(self.elements, _mm256_mul_pd(b.elements, c.elements))
            },
        }
    }

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_min_pd(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_max_pd(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_and_pd(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_or_pd(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm256_xor_pd(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn all_eq(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_pd(_mm256_cmp_pd::<_CMP_EQ_OQ>(self.elements, rhs.elements))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_gt(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_pd(_mm256_cmp_pd::<_CMP_GT_OQ>(self.elements, rhs.elements))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_ge(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_pd(_mm256_cmp_pd::<_CMP_GE_OQ>(self.elements, rhs.elements))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_lt(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_pd(_mm256_cmp_pd::<_CMP_LT_OQ>(self.elements, rhs.elements))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_le(self, rhs: Self) -> bool {
        unsafe {
            _mm256_movemask_pd(_mm256_cmp_pd::<_CMP_LE_OQ>(self.elements, rhs.elements))
                == ALL_LANES
        }
    }
}
