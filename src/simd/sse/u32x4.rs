//! 128-bit 4-lane u32 lane register.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::error::{self, LanewiseError};
use crate::simd::traits::{LaneOps, Lanes};

/// Number of u32 elements that fit in a 128-bit vector.
pub(crate) const LANE_COUNT: usize = 4;

/// Expected `_mm_movemask_epi8` value when the predicate holds on every
/// lane, derived from the lane count and the element byte size.
const ALL_LANES: i32 =
    ((1u64 << (LANE_COUNT * core::mem::size_of::<u32>())) - 1) as u32 as i32;

/// 128-bit lane register containing 4 packed u32 values.
#[derive(Copy, Clone, Debug)]
pub struct U32x4 {
    /// 128-bit register containing 4 packed u32 values
    pub(crate) elements: __m128i,
}

/// Flips the sign bit so the signed compare orders unsigned operands.
#[inline(always)]
unsafe fn bias(v: __m128i) -> __m128i {
    _mm_xor_si128(v, _mm_set1_epi32(i32::MIN))
}

impl Lanes for U32x4 {
    type Element = u32;
    type Array = [u32; LANE_COUNT];
    const COUNT: usize = LANE_COUNT;
}

impl LaneOps for U32x4 {
    #[inline(always)]
    fn splat(value: u32) -> Self {
        Self {
            elements: unsafe { _mm_set1_epi32(value as i32) },
        }
    }

    #[inline(always)]
    fn from_lanes(lanes: [u32; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { _mm_loadu_si128(lanes.as_ptr() as *const __m128i) },
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [u32; LANE_COUNT] {
        let mut lanes = [0u32; LANE_COUNT];
        unsafe { _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, self.elements) };
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
            elements: unsafe { _mm_add_epi32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_sub_epi32(self.elements, rhs.elements) },
        }
    }

    // Low halves of the products; identical bits to wrapping unsigned
    // multiply.
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_mullo_epi32(self.elements, rhs.elements) },
        }
    }

    #[track_caller]
    fn div(self, _rhs: Self) -> Self {
        error::unsupported("Divide", "U32x4")
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
            elements: unsafe { _mm_min_epu32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_max_epu32(self.elements, rhs.elements) },
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
        unsafe {
            _mm_movemask_epi8(_mm_cmpgt_epi32(bias(self.elements), bias(rhs.elements)))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_ge(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi32(bias(rhs.elements), bias(self.elements))) == 0 }
    }

    #[inline(always)]
    fn all_lt(self, rhs: Self) -> bool {
        unsafe {
            _mm_movemask_epi8(_mm_cmpgt_epi32(bias(rhs.elements), bias(self.elements)))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_le(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi32(bias(self.elements), bias(rhs.elements))) == 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_wraps_below_zero() {
        let a = U32x4::splat(0);
        let b = U32x4::splat(1);

        assert_eq!(a.sub(b).to_lanes(), [u32::MAX; LANE_COUNT]);
    }

    #[test]
    fn test_unsigned_ordering_with_high_bit_set() {
        let a = U32x4::splat(0x8000_0000);
        let b = U32x4::splat(7);

        assert!(a.all_gt(b));
        assert!(b.all_le(a));
    }
}
