//! 128-bit 8-lane u16 lane register.
//!
//! SSE has no unsigned compare instructions; ordering predicates bias both
//! operands by the sign bit and use the signed compare, which preserves
//! unsigned order.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::error::{self, LanewiseError};
use crate::simd::traits::{LaneOps, Lanes};

/// Number of u16 elements that fit in a 128-bit vector.
pub(crate) const LANE_COUNT: usize = 8;

/// Expected `_mm_movemask_epi8` value when the predicate holds on every
/// lane, derived from the lane count and the element byte size.
const ALL_LANES: i32 =
    ((1u64 << (LANE_COUNT * core::mem::size_of::<u16>())) - 1) as u32 as i32;

/// 128-bit lane register containing 8 packed u16 values.
#[derive(Copy, Clone, Debug)]
pub struct U16x8 {
    /// 128-bit register containing 8 packed u16 values
    pub(crate) elements: __m128i,
}

#[inline(always)]
unsafe fn bias(v: __m128i) -> __m128i {
    _mm_xor_si128(v, _mm_set1_epi16(i16::MIN))
}

impl Lanes for U16x8 {
    type Element = u16;
    type Array = [u16; LANE_COUNT];
    const COUNT: usize = LANE_COUNT;
}

impl LaneOps for U16x8 {
    #[inline(always)]
    fn splat(value: u16) -> Self {
        Self {
            elements: unsafe { _mm_set1_epi16(value as i16) },
        }
    }

    #[inline(always)]
    fn from_lanes(lanes: [u16; LANE_COUNT]) -> Self {
        Self {
            elements: unsafe { _mm_loadu_si128(lanes.as_ptr() as *const __m128i) },
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [u16; LANE_COUNT] {
        let mut lanes = [0u16; LANE_COUNT];
        unsafe { _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, self.elements) };
        lanes
    }

    #[inline(always)]
    #[track_caller]
    fn extract(self, index: usize) -> u16 {
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

    // Low halves of the products; identical bits to wrapping unsigned
    // multiply.
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_mullo_epi16(self.elements, rhs.elements) },
        }
    }

    #[track_caller]
    fn div(self, _rhs: Self) -> Self {
        error::unsupported("Divide", "U16x8")
    }

    /// Widen-to-f32 roundtrip with truncation back.
    #[inline(always)]
    fn fmadd(self, b: Self, c: Self) -> Self {
        let a = self.to_lanes();
        let b = b.to_lanes();
        let c = c.to_lanes();

        let mut out = [0u16; LANE_COUNT];
        for (i, lane) in out.iter_mut().enumerate() {
            *lane = (b[i] as f32).mul_add(c[i] as f32, a[i] as f32) as u16;
        }

        Self::from_lanes(out)
    }

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_min_epu16(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_max_epu16(self.elements, rhs.elements) },
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
        unsafe {
            _mm_movemask_epi8(_mm_cmpgt_epi16(bias(self.elements), bias(rhs.elements)))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_ge(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi16(bias(rhs.elements), bias(self.elements))) == 0 }
    }

    #[inline(always)]
    fn all_lt(self, rhs: Self) -> bool {
        unsafe {
            _mm_movemask_epi8(_mm_cmpgt_epi16(bias(rhs.elements), bias(self.elements)))
                == ALL_LANES
        }
    }

    #[inline(always)]
    fn all_le(self, rhs: Self) -> bool {
        unsafe { _mm_movemask_epi8(_mm_cmpgt_epi16(bias(self.elements), bias(rhs.elements))) == 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_ordering_with_high_bit_set() {
        // Signed compares would call 0x8000 negative and order this wrong.
        let a = U16x8::splat(0x8000);
        let b = U16x8::splat(1);

        assert!(a.all_gt(b));
        assert!(b.all_lt(a));
        assert_eq!(a.lane_max(b).to_lanes(), [0x8000; LANE_COUNT]);
    }
}
