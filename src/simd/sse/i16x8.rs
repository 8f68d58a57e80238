//! 128-bit 8-lane i16 lane register.
//!
//! Integer division has no SSE instruction and is an unsupported operation;
//! fused multiply-add is emulated through an f32 roundtrip (every i16 is
//! exactly representable in f32, the product and sum round once in float,
//! and the result truncates back).

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::error::{self, LanewiseError};
use crate::simd::traits::{LaneOps, Lanes};

/// Number of i16 elements that fit in a 128-bit vector.
pub(crate) const LANE_COUNT: usize = 8;

/// Expected `_mm_movemask_epi8` value when the predicate holds on every
/// lane, derived from the lane count and the element byte size (the movemask
/// yields one bit per byte).
const ALL_LANES: i32 =
    ((1u64 << (LANE_COUNT * core::mem::size_of::<i16>())) - 1) as u32 as i32;

/// 128-bit lane register containing 8 packed i16 values.
#[derive(Copy, Clone, Debug)]
pub struct I16x8 {
    /// 128-bit register containing 8 packed i16 values
    pub(crate) elements: __m128i,
}

impl Lanes for I16x8 {
    type Element = i16;
    type Array = [i16; LANE_COUNT];
    const COUNT: usize = LANE_COUNT;
}

impl LaneOps for I16x8 {
    #[inline(always)]
    fn splat(value: i16) -> Self {
        Self {
            elements: unsafe { _mm_set1_epi16(value) },
        }
    }

    #[inline(always)]
    fn from_lanes(lanes: [i16; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { _mm_loadu_si128(lanes.as_ptr() as *const __m128i) },
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [i16; LANE_COUNT] {
        let mut lanes = [0i16; LANE_COUNT];
        unsafe { _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, self.elements) };
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
            elements: unsafe { _mm_add_epi16(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_sub_epi16(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_mullo_epi16(self.elements, rhs.elements) },
        }
    }

    #[track_caller]
    fn div(self, _rhs: Self) -> Self {
        error::unsupported("Divide", "I16x8")
    }

    /// Widen-to-f32 roundtrip; the truncation back to i16 is the documented
    /// precision loss of the integer emulation.
    #[inline(always)]
    fn fmadd(self, b: Self, c: Self) -> Self {
        let a = self.to_lanes();
        let b = b.to_lanes();
        let c = c.to_lanes();

        let mut out = [0i16; LANE_COUNT];
        for (i, lane) in out.iter_mut().enumerate() {
            *lane = (b[i] as f32).mul_add(c[i] as f32, a[i] as f32) as i16;
        }

        Self::from_lanes(out)
    }

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_min_epi16(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_max_epi16(self.elements, rhs.elements) },
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
        unsafe { _mm_movemask_epi8(_mm_cmpeq_epi16(self.elements, rhs.elements)) == ALL_LANES }
    }

    #[inline(always)]
    fn all_gt(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi16(self.elements, rhs.elements)) == ALL_LANES }
    }

    // >= holds on every lane exactly when < holds on none.
    #[inline(always)]
    fn all_ge(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi16(rhs.elements, self.elements)) == 0 }
    }

    #[inline(always)]
    fn all_lt(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi16(rhs.elements, self.elements)) == ALL_LANES }
    }

    #[inline(always)]
    fn all_le(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi16(self.elements, rhs.elements)) == 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_wraps_on_overflow() {
        let a = I16x8::splat(i16::MAX);
        let b = I16x8::splat(1);

        assert_eq!(a.add(b).to_lanes(), [i16::MIN; LANE_COUNT]);
    }

    #[test]
    fn test_ge_holds_at_type_minimum() {
        // A subtract-one emulation of >= would wrap and fail on this pair.
        let a = I16x8::splat(i16::MIN);
        let b = I16x8::splat(i16::MIN);

        assert!(a.all_ge(b));
        assert!(a.all_le(b));
        assert!(!a.all_gt(b));
    }
}
