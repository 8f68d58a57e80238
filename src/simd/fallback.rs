//! Portable scalar lane registers.
//!
//! Compiled when the build machine is not x86 with SSE4, or when
//! cross-compiling. The types carry the same names and lane counts as the
//! 128-bit tier and mirror its operation support exactly, so code written
//! against the baseline tier builds unchanged; each operation is a plain
//! loop the optimizer is free to vectorize.

use crate::error::{self, LanewiseError};
use crate::simd::traits::{LaneOps, Lanes};

macro_rules! lane_plumbing {
    ($name:ident, $elem:ty, $count:expr) => {
        impl Lanes for $name {
            type Element = $elem;
            type Array = [$elem; $count];
            const COUNT: usize = $count;
        }

        impl $name {
            #[inline(always)]
            fn map2(self, rhs: Self, f: impl Fn($elem, $elem) -> $elem) -> Self {
                let mut out = self.lanes;
                for (i, lane) in out.iter_mut().enumerate() {
                    *lane = f(self.lanes[i], rhs.lanes[i]);
                }
                Self { lanes: out }
            }

            #[inline(always)]
            fn all2(self, rhs: Self, f: impl Fn($elem, $elem) -> bool) -> bool {
                self.lanes
                    .iter()
                    .zip(rhs.lanes.iter())
                    .all(|(&a, &b)| f(a, b))
            }
        }
    };
}

macro_rules! lane_common_ops {
    ($name:ident, $elem:ty, $count:expr) => {
        #[inline(always)]
        fn splat(value: $elem) -> Self {
            Self {
                lanes: [value; $count],
            }
        }

        #[inline(always)]
        fn from_lanes(lanes: [$elem; $count]) -> Self {
            Self { lanes }
        }

        #[inline(always)]
        fn to_lanes(self) -> [$elem; $count] {
            self.lanes
        }

        #[inline(always)]
        #[track_caller]
        fn extract(self, index: usize) -> $elem {
            debug_assert!(
                index < $count,
                "{}",
                LanewiseError::LaneIndexOutOfBounds {
                    index,
                    lane_count: $count
                }
            );
            self.lanes[index]
        }

        #[inline(always)]
        fn all_eq(self, rhs: Self) -> bool {
            self.all2(rhs, |a, b| a == b)
        }

        #[inline(always)]
        fn all_gt(self, rhs: Self) -> bool {
            self.all2(rhs, |a, b| a > b)
        }

        #[inline(always)]
        fn all_ge(self, rhs: Self) -> bool {
            self.all2(rhs, |a, b| a >= b)
        }

        #[inline(always)]
        fn all_lt(self, rhs: Self) -> bool {
            self.all2(rhs, |a, b| a < b)
        }

        #[inline(always)]
        fn all_le(self, rhs: Self) -> bool {
            self.all2(rhs, |a, b| a <= b)
        }
    };
}

macro_rules! float_register {
    ($name:ident, $elem:ty, $count:expr) => {
        #[doc = concat!("Scalar stand-in for the packed ", stringify!($elem), " register.")]
        #[derive(Copy, Clone, Debug)]
        pub struct $name {
            pub(crate) lanes: [$elem; $count],
        }

        lane_plumbing!($name, $elem, $count);

        impl LaneOps for $name {
            lane_common_ops!($name, $elem, $count);

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a + b)
            }

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a - b)
            }

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a * b)
            }

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a / b)
            }

            #[inline(always)]
            fn fmadd(self, b: Self, c: Self) -> Self {
                let mut out = self.lanes;
                for (i, lane) in out.iter_mut().enumerate() {
                    *lane = b.lanes[i].mul_add(c.lanes[i], self.lanes[i]);
                }
                Self { lanes: out }
            }

            #[inline(always)]
            fn lane_min(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a.min(b))
            }

            #[inline(always)]
            fn lane_max(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a.max(b))
            }

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| <$elem>::from_bits(a.to_bits() & b.to_bits()))
            }

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| <$elem>::from_bits(a.to_bits() | b.to_bits()))
            }

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| <$elem>::from_bits(a.to_bits() ^ b.to_bits()))
            }
        }
    };
}

// 16- and 32-bit integers: multiply keeps the low half of the product,
// fused multiply-add goes through a float wide enough to hold the element
// exactly.
macro_rules! int_register {
    ($name:ident, $elem:ty, $count:expr, $wide:ty) => {
        #[doc = concat!("Scalar stand-in for the packed ", stringify!($elem), " register.")]
        #[derive(Copy, Clone, Debug)]
        pub struct $name {
            pub(crate) lanes: [$elem; $count],
        }

        lane_plumbing!($name, $elem, $count);

        impl LaneOps for $name {
            lane_common_ops!($name, $elem, $count);

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a.wrapping_add(b))
            }

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a.wrapping_sub(b))
            }

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a.wrapping_mul(b))
            }

            #[track_caller]
            fn div(self, _rhs: Self) -> Self {
                error::unsupported("Divide", stringify!($name))
            }

            #[inline(always)]
            fn fmadd(self, b: Self, c: Self) -> Self {
                let mut out = self.lanes;
                for (i, lane) in out.iter_mut().enumerate() {
                    *lane = (b.lanes[i] as $wide).mul_add(c.lanes[i] as $wide, self.lanes[i] as $wide)
                        as $elem;
                }
                Self { lanes: out }
            }

            #[inline(always)]
            fn lane_min(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a.min(b))
            }

            #[inline(always)]
            fn lane_max(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a.max(b))
            }

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a & b)
            }

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a | b)
            }

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a ^ b)
            }
        }
    };
}

// 8-bit integers: no multiply-family operations at this width.
macro_rules! byte_register {
    ($name:ident, $elem:ty, $count:expr) => {
        #[doc = concat!("Scalar stand-in for the packed ", stringify!($elem), " register.")]
        #[derive(Copy, Clone, Debug)]
        pub struct $name {
            pub(crate) lanes: [$elem; $count],
        }

        lane_plumbing!($name, $elem, $count);

        impl LaneOps for $name {
            lane_common_ops!($name, $elem, $count);

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a.wrapping_add(b))
            }

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a.wrapping_sub(b))
            }

            #[track_caller]
            fn mul(self, _rhs: Self) -> Self {
                error::unsupported("Multiply", stringify!($name))
            }

            #[track_caller]
            fn div(self, _rhs: Self) -> Self {
                error::unsupported("Divide", stringify!($name))
            }

            #[track_caller]
            fn fmadd(self, _b: Self, _c: Self) -> Self {
                error::unsupported("MultiplyAdd", stringify!($name))
            }

            #[inline(always)]
            fn lane_min(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a.min(b))
            }

            #[inline(always)]
            fn lane_max(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a.max(b))
            }

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a & b)
            }

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a | b)
            }

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a ^ b)
            }
        }
    };
}

// 64-bit integers: multiply wraps per lane, everything else in the
// multiply family plus min/max is unsupported, matching the 128-bit tier.
macro_rules! quad_register {
    ($name:ident, $elem:ty, $count:expr) => {
        #[doc = concat!("Scalar stand-in for the packed ", stringify!($elem), " register.")]
        #[derive(Copy, Clone, Debug)]
        pub struct $name {
            pub(crate) lanes: [$elem; $count],
        }

        lane_plumbing!($name, $elem, $count);

        impl LaneOps for $name {
            lane_common_ops!($name, $elem, $count);

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a.wrapping_add(b))
            }

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a.wrapping_sub(b))
            }

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a.wrapping_mul(b))
            }

            #[track_caller]
            fn div(self, _rhs: Self) -> Self {
                error::unsupported("Divide", stringify!($name))
            }

            #[track_caller]
            fn fmadd(self, _b: Self, _c: Self) -> Self {
                error::unsupported("MultiplyAdd", stringify!($name))
            }

            #[track_caller]
            fn lane_min(self, _rhs: Self) -> Self {
                error::unsupported("Min", stringify!($name))
            }

            #[track_caller]
            fn lane_max(self, _rhs: Self) -> Self {
                error::unsupported("Max", stringify!($name))
            }

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a & b)
            }

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a | b)
            }

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                self.map2(rhs, |a, b| a ^ b)
            }
        }
    };
}

float_register!(F32x4, f32, 4);
float_register!(F64x2, f64, 2);

byte_register!(I8x16, i8, 16);
byte_register!(U8x16, u8, 16);

int_register!(I16x8, i16, 8, f32);
int_register!(U16x8, u16, 8, f32);
int_register!(I32x4, i32, 4, f64);
int_register!(U32x4, u32, 4, f64);

quad_register!(I64x2, i64, 2);
quad_register!(U64x2, u64, 2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_matches_packed_semantics() {
        let a = I16x8::splat(i16::MAX);
        let b = I16x8::splat(1);

        assert_eq!(a.add(b).to_lanes(), [i16::MIN; 8]);
    }

    #[test]
    #[should_panic(expected = "unsupported lane operation")]
    fn test_integer_divide_is_unsupported() {
        let a = U32x4::splat(8);
        let _ = a.div(a);
    }

    #[test]
    fn test_float_bitwise_goes_through_bits() {
        let a = F32x4::splat(-1.5);
        let mask = F32x4::splat(f32::from_bits(0x7fff_ffff));

        assert_eq!(a.bitand(mask).to_lanes(), [1.5; 4]);
    }
}
