//! Generic register wrapper.
//!
//! `Register<R>` is a zero-cost newtype over any lane representation that
//! implements [`LaneOps`]. It hosts the operator surface (arithmetic and
//! bitwise operators, comparisons, scalar broadcast on the right-hand side)
//! and forwards every operation to the representation's dispatch set, so a
//! tier switch changes which representation is plugged in, never the calling
//! code.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Not, Sub, SubAssign,
};

use num::Zero;

use crate::simd::traits::{LaneOps, LaneScalar};

/// Fixed-width vector of lanes with value semantics.
#[derive(Copy, Clone)]
pub struct Register<R: LaneOps> {
    inner: R,
}

impl<R: LaneOps> Register<R> {
    /// Broadcasts one scalar into every lane.
    #[inline(always)]
    pub fn splat(value: R::Element) -> Self {
        Self {
            inner: R::splat(value),
        }
    }

    /// Builds a register lane by lane. The argument is the representation's
    /// fixed-arity array, so passing the wrong number of lanes does not
    /// compile.
    #[inline(always)]
    pub fn from_lanes(lanes: R::Array) -> Self {
        Self {
            inner: R::from_lanes(lanes),
        }
    }

    /// Copies all lanes out in order.
    #[inline(always)]
    pub fn to_lanes(self) -> R::Array {
        self.inner.to_lanes()
    }

    /// Returns a copy of lane `index`.
    #[inline(always)]
    #[track_caller]
    pub fn extract(self, index: usize) -> R::Element {
        self.inner.extract(index)
    }

    /// Returns a register equal to `self` except lane `index` holds `value`.
    #[inline(always)]
    #[track_caller]
    pub fn insert(self, index: usize, value: R::Element) -> Self {
        let mut lanes = self.inner.to_lanes();
        lanes.as_mut()[index] = value;
        Self::from_lanes(lanes)
    }

    /// Number of lanes in this register.
    #[inline(always)]
    pub const fn lane_count() -> usize {
        R::COUNT
    }

    /// Per-lane smaller element of the two registers.
    #[inline(always)]
    #[track_caller]
    pub fn lane_min(self, rhs: Self) -> Self {
        Self {
            inner: self.inner.lane_min(rhs.inner),
        }
    }

    /// Per-lane larger element of the two registers.
    #[inline(always)]
    #[track_caller]
    pub fn lane_max(self, rhs: Self) -> Self {
        Self {
            inner: self.inner.lane_max(rhs.inner),
        }
    }

    /// Per lane `self + b * c`.
    #[inline(always)]
    #[track_caller]
    pub fn fmadd(self, b: Self, c: Self) -> Self {
        Self {
            inner: self.inner.fmadd(b.inner, c.inner),
        }
    }
}

impl<R: LaneOps> fmt::Debug for Register<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Register").field(&self.inner.to_lanes()).finish()
    }
}

/// All lanes zero.
impl<R: LaneOps> Default for Register<R> {
    #[inline(always)]
    fn default() -> Self {
        Self::splat(R::Element::zero())
    }
}

macro_rules! binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:ident) => {
        impl<R: LaneOps> $trait for Register<R> {
            type Output = Self;

            #[inline(always)]
            #[track_caller]
            fn $method(self, rhs: Self) -> Self {
                Self {
                    inner: self.inner.$op(rhs.inner),
                }
            }
        }

        impl<R: LaneOps> $assign_trait for Register<R> {
            #[inline(always)]
            #[track_caller]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait::$method(*self, rhs);
            }
        }
    };
}

// Scalar on the right broadcasts into every lane first. Spelled out per
// element type: a blanket `impl Add<R::Element>` would be rejected as
// overlapping the register-register impl, since coherence cannot rule out
// `R::Element == Register<R>`.
macro_rules! scalar_rhs_op {
    ($elem:ty, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:ident) => {
        impl<R: LaneOps<Element = $elem>> $trait<$elem> for Register<R> {
            type Output = Self;

            #[inline(always)]
            #[track_caller]
            fn $method(self, rhs: $elem) -> Self {
                Self {
                    inner: self.inner.$op(R::splat(rhs)),
                }
            }
        }

        impl<R: LaneOps<Element = $elem>> $assign_trait<$elem> for Register<R> {
            #[inline(always)]
            #[track_caller]
            fn $assign_method(&mut self, rhs: $elem) {
                *self = $trait::$method(*self, rhs);
            }
        }
    };
}

macro_rules! scalar_rhs_ops {
    ($($elem:ty),* $(,)?) => {$(
        scalar_rhs_op!($elem, Add, add, AddAssign, add_assign, add);
        scalar_rhs_op!($elem, Sub, sub, SubAssign, sub_assign, sub);
        scalar_rhs_op!($elem, Mul, mul, MulAssign, mul_assign, mul);
        scalar_rhs_op!($elem, Div, div, DivAssign, div_assign, div);
        scalar_rhs_op!($elem, BitAnd, bitand, BitAndAssign, bitand_assign, bitand);
        scalar_rhs_op!($elem, BitOr, bitor, BitOrAssign, bitor_assign, bitor);
        scalar_rhs_op!($elem, BitXor, bitxor, BitXorAssign, bitxor_assign, bitxor);
    )*};
}

binary_op!(Add, add, AddAssign, add_assign, add);
binary_op!(Sub, sub, SubAssign, sub_assign, sub);
binary_op!(Mul, mul, MulAssign, mul_assign, mul);
binary_op!(Div, div, DivAssign, div_assign, div);
binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, bitand);
binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, bitor);
binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, bitxor);

scalar_rhs_ops!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

/// Bit complement of every lane, via XOR against an all-ones broadcast.
impl<R: LaneOps> Not for Register<R> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self {
            inner: self.inner.bitxor(R::splat(R::Element::ALL_BITS)),
        }
    }
}

/// Equal only when every lane pair is equal.
impl<R: LaneOps> PartialEq for Register<R> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.inner.all_eq(other.inner)
    }
}

/// All-lanes ordering.
///
/// Each comparison operator holds only when its per-lane predicate holds on
/// every lane, so `!(a < b)` does not imply `a >= b`. The operators are
/// overridden accordingly and `partial_cmp` reports `None` for any pair of
/// registers whose lanes disagree.
impl<R: LaneOps> PartialOrd for Register<R> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.inner.all_eq(other.inner) {
            Some(Ordering::Equal)
        } else if self.inner.all_gt(other.inner) {
            Some(Ordering::Greater)
        } else if self.inner.all_lt(other.inner) {
            Some(Ordering::Less)
        } else {
            None
        }
    }

    #[inline(always)]
    fn lt(&self, other: &Self) -> bool {
        self.inner.all_lt(other.inner)
    }

    #[inline(always)]
    fn le(&self, other: &Self) -> bool {
        self.inner.all_le(other.inner)
    }

    #[inline(always)]
    fn gt(&self, other: &Self) -> bool {
        self.inner.all_gt(other.inner)
    }

    #[inline(always)]
    fn ge(&self, other: &Self) -> bool {
        self.inner.all_ge(other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{F32x4, I16x8, U16x8};

    #[test]
    fn test_default_is_all_zero() {
        let z = Register::<I16x8>::default();
        assert_eq!(z.to_lanes(), [0i16; 8]);
    }

    #[test]
    fn test_insert_replaces_one_lane() {
        let v = Register::<I16x8>::splat(3).insert(5, 9);

        assert_eq!(v.extract(5), 9);
        assert_eq!(v.extract(4), 3);
    }

    #[test]
    fn test_scalar_rhs_broadcasts() {
        let v = Register::<I16x8>::splat(10);

        assert_eq!(v + 5, Register::splat(15));
        assert_eq!(v * 3, Register::splat(30));

        let mut w = v;
        w += 1;
        assert_eq!(w, Register::splat(11));
    }

    #[test]
    fn test_complement_flips_every_bit() {
        let v = Register::<U16x8>::splat(0x00ff);
        assert_eq!(!v, Register::splat(0xff00));
    }

    #[test]
    fn test_mixed_lanes_order_as_none() {
        let a = Register::<I16x8>::from_lanes([1, 9, 1, 9, 1, 9, 1, 9]);
        let b = Register::<I16x8>::splat(5);

        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b));
        assert!(!(a >= b));
    }

    #[test]
    fn test_all_lanes_ge_allows_equal_lanes() {
        let a = Register::<F32x4>::from_lanes([1.0, 2.0, 2.0, 3.0]);
        let b = Register::<F32x4>::from_lanes([1.0, 1.0, 2.0, 2.0]);

        assert!(a >= b);
        assert!(!(a > b));
        assert_eq!(a.partial_cmp(&b), None);
    }

    #[test]
    fn test_add_then_sub_round_trips() {
        let a = Register::<I16x8>::from_lanes([1, -2, 3, -4, 5, -6, 7, i16::MAX]);
        let b = Register::<I16x8>::splat(123);

        assert_eq!(a + b - b, a);
    }

    #[test]
    fn test_min_max_partition_the_lanes() {
        let a = Register::<F32x4>::from_lanes([1.0, 8.0, 3.0, 6.0]);
        let b = Register::<F32x4>::from_lanes([2.0, 7.0, 4.0, 5.0]);

        let lo = a.lane_min(b);
        let hi = a.lane_max(b);

        assert_eq!(lo.to_lanes(), [1.0, 7.0, 3.0, 5.0]);
        assert_eq!(hi.to_lanes(), [2.0, 8.0, 4.0, 6.0]);
    }
}
