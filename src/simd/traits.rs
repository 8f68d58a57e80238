//! Core traits of the lane-register dispatch set.
//!
//! `Lanes` is pure compile-time metadata: it maps a concrete lane
//! representation to its scalar element type, its fixed-arity array form and
//! its lane count. `LaneOps` is the per-operation dispatch interface; every
//! concrete representation a tier enables implements it, using the native
//! instruction where one exists and either a documented emulation or the
//! fatal unsupported-operation path where none does.

use std::fmt::Debug;

use num::{One, Zero};

/// Bounds every lane element satisfies.
///
/// `ALL_BITS` is the all-ones bit pattern of the element, used for the
/// register complement (XOR against an all-ones broadcast) regardless of
/// whether that pattern is a meaningful number for the element type.
pub trait LaneScalar: Copy + PartialEq + PartialOrd + Debug + Zero + One {
    const ALL_BITS: Self;
}

impl LaneScalar for i8 {
    const ALL_BITS: Self = -1;
}

impl LaneScalar for u8 {
    const ALL_BITS: Self = u8::MAX;
}

impl LaneScalar for i16 {
    const ALL_BITS: Self = -1;
}

impl LaneScalar for u16 {
    const ALL_BITS: Self = u16::MAX;
}

impl LaneScalar for i32 {
    const ALL_BITS: Self = -1;
}

impl LaneScalar for u32 {
    const ALL_BITS: Self = u32::MAX;
}

impl LaneScalar for i64 {
    const ALL_BITS: Self = -1;
}

impl LaneScalar for u64 {
    const ALL_BITS: Self = u64::MAX;
}

impl LaneScalar for f32 {
    // Not a number; complement is a bit operation, not an arithmetic one.
    const ALL_BITS: Self = f32::from_bits(u32::MAX);
}

impl LaneScalar for f64 {
    const ALL_BITS: Self = f64::from_bits(u64::MAX);
}

/// Compile-time metadata of a concrete lane representation.
pub trait Lanes {
    /// Scalar type of one lane.
    type Element: LaneScalar;

    /// Fixed-arity array with exactly one slot per lane, e.g. `[i16; 8]`.
    /// Constructing from this type makes a wrong argument count a
    /// compile-time error.
    type Array: Copy + AsRef<[Self::Element]> + AsMut<[Self::Element]> + PartialEq + Debug;

    /// Number of lanes, `size_of::<representation>() / size_of::<Element>()`.
    const COUNT: usize;
}

/// The per-operation dispatch set, one implementation per lane
/// representation.
///
/// All operations are pure functions over stack-resident values: no heap, no
/// shared state. Comparison operations reduce the per-lane predicate to a
/// single all-lanes bool — "equal" means every lane equal, "greater" means
/// every lane of `self` strictly greater, and so on. A pair whose lanes
/// relate differently satisfies none of them.
///
/// Operations with no native instruction and no defined emulation must not
/// return a value: they divert to [`crate::error::unsupported`], which
/// panics with a diagnostic naming the operation, the representation and the
/// call site.
pub trait LaneOps: Lanes + Copy {
    /// Fills every lane with one scalar value.
    fn splat(value: Self::Element) -> Self;

    /// Builds a value lane by lane, in array order.
    fn from_lanes(lanes: Self::Array) -> Self;

    /// Copies the lanes out in order.
    fn to_lanes(self) -> Self::Array;

    /// Returns a copy of lane `index`.
    ///
    /// Bounds are enforced with a `debug_assert!`: checked builds abort on a
    /// violation, release builds read through an unchecked access.
    fn extract(self, index: usize) -> Self::Element;

    fn add(self, rhs: Self) -> Self;

    fn sub(self, rhs: Self) -> Self;

    fn mul(self, rhs: Self) -> Self;

    /// Per-lane division. Defined for float representations only; integer
    /// division is an unsupported operation on every tier.
    fn div(self, rhs: Self) -> Self;

    /// Per lane `self + b * c`, with a single rounding step for floats.
    /// Narrow integer representations emulate this through a widen-to-float
    /// roundtrip with truncation back, where the tier allows it.
    fn fmadd(self, b: Self, c: Self) -> Self;

    /// Per-lane smaller element of the two inputs.
    fn lane_min(self, rhs: Self) -> Self;

    /// Per-lane larger element of the two inputs.
    fn lane_max(self, rhs: Self) -> Self;

    fn bitand(self, rhs: Self) -> Self;

    fn bitor(self, rhs: Self) -> Self;

    fn bitxor(self, rhs: Self) -> Self;

    /// True only if every lane of `self` equals the corresponding lane of
    /// `rhs`.
    fn all_eq(self, rhs: Self) -> bool;

    /// True only if every lane of `self` is strictly greater.
    fn all_gt(self, rhs: Self) -> bool;

    /// True only if no lane of `self` is less.
    fn all_ge(self, rhs: Self) -> bool;

    /// True only if every lane of `self` is strictly less.
    fn all_lt(self, rhs: Self) -> bool;

    /// True only if no lane of `self` is greater.
    fn all_le(self, rhs: Self) -> bool;
}
