//! 128-bit 4-lane f32 lane register.
//!
//! This module provides `F32x4`, a lane register wrapping the `__m128`
//! intrinsic type to operate on 4 single-precision floating-point values at
//! once using 128-bit SSE instructions.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: any x86-64 processor (SSE2 baseline; SSE4 enabled by
//!   the build script for the integer registers of this tier)
//! - **Compilation**: selected by `build.rs` under `cfg(sse)`
//!
//! # Supported Operations
//!
//! - Arithmetic: `add`, `sub`, `mul`, `div`, `fmadd` (single rounding when
//!   the FMA unit is available, multiply-then-add otherwise)
//! - Lane selection: `lane_min`, `lane_max`
//! - Bitwise: `bitand`, `bitor`, `bitxor`
//! - All-lanes predicates: `all_eq`, `all_gt`, `all_ge`, `all_lt`, `all_le`

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::error::LanewiseError;
use crate::simd::traits::{LaneOps, Lanes};

/// Number of f32 elements that fit in a 128-bit vector.
pub(crate) const LANE_COUNT: usize = 4;

/// Expected `_mm_movemask_ps` value when the predicate holds on every lane,
/// derived from the lane count (one movemask bit per lane).
const ALL_LANES: i32 = ((1u64 << LANE_COUNT) - 1) as u32 as i32;

/// 128-bit lane register containing 4 packed f32 values.
///
/// Plain value semantics: `Copy` duplicates the bit pattern, there is no
/// heap state to own.
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    /// 128-bit register containing 4 packed f32 values
    pub(crate) elements: __m128,
}

impl Lanes for F32x4 {
    type Element = f32;
    type Array = [f32; LANE_COUNT];
    const COUNT: usize = LANE_COUNT;
}

impl LaneOps for F32x4 {
    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { _mm_set1_ps(value) },
        }
    }

    #[inline(always)]
    fn from_lanes(lanes: [f32; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { _mm_loadu_ps(lanes.as_ptr()) },
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [f32; LANE_COUNT] {
        let mut lanes = [0.0f32; LANE_COUNT];
        unsafe { _mm_storeu_ps(lanes.as_mut_ptr(), self.elements) };
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
            elements: unsafe { _mm_add_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_sub_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_mul_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_div_ps(self.elements, rhs.elements) },
        }
    }

    /// `self + b * c` per lane.
    ///
    /// With the FMA unit this is a single fused instruction (one rounding
    /// step); without it the multiply and add round separately.
    #[cfg(fma)]
    #[inline(always)]
    fn fmadd(self, b: Self, c: Self) -> Self {
        Self {
            elements: unsafe { _mm_fmadd_ps(b.elements, c.elements, self.elements) },
        }
    }

    #[cfg(not(fma))]
    #[inline(always)]
    fn fmadd(self, b: Self, c: Self) -> Self {
        Self {
            elements: unsafe { _mm_add_ps(self.elements, _mm_mul_ps(b.elements, c.elements)) },
        }
    }

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_min_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_max_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_and_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_or_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_xor_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn all_eq(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_ps(_mm_cmpeq_ps(self.elements, rhs.elements)) == ALL_LANES }
    }

    #[inline(always)]
    fn all_gt(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_ps(_mm_cmpgt_ps(self.elements, rhs.elements)) == ALL_LANES }
    }

    #[inline(always)]
    fn all_ge(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_ps(_mm_cmpge_ps(self.elements, rhs.elements)) == ALL_LANES }
    }

    #[inline(always)]
    fn all_lt(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_ps(_mm_cmplt_ps(self.elements, rhs.elements)) == ALL_LANES }
    }

    #[inline(always)]
    fn all_le(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_ps(_mm_cmple_ps(self.elements, rhs.elements)) == ALL_LANES }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splat_fills_every_lane() {
        let v = F32x4::splat(2.5);
        for i in 0..LANE_COUNT {
            assert_eq!(v.extract(i), 2.5);
        }
    }

    #[test]
    fn test_fmadd_is_a_plus_b_times_c() {
        let a = F32x4::from_lanes([1.0, 2.0, 3.0, 4.0]);
        let b = F32x4::from_lanes([10.0, 10.0, 10.0, 10.0]);
        let c = F32x4::from_lanes([0.5, 1.0, 1.5, 2.0]);

        assert_eq!(a.fmadd(b, c).to_lanes(), [6.0, 12.0, 18.0, 24.0]);
    }

    #[test]
    fn test_all_lanes_predicates_reject_mixed_lanes() {
        let a = F32x4::from_lanes([1.0, 5.0, 1.0, 5.0]);
        let b = F32x4::from_lanes([2.0, 2.0, 2.0, 2.0]);

        assert!(!a.all_eq(b));
        assert!(!a.all_gt(b));
        assert!(!a.all_lt(b));
    }
}
