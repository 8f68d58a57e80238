//! Behavior of the generic register across lane representations.

use lanewise::simd::{F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, LaneOps, Register, U16x8, U32x4, U8x16};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x1a5e)
}

macro_rules! splat_reaches_every_lane {
    ($($repr:ty => $value:expr),* $(,)?) => {$({
        let v = Register::<$repr>::splat($value);
        for i in 0..Register::<$repr>::lane_count() {
            assert_eq!(v.extract(i), $value);
        }
    })*};
}

#[test]
fn test_splat_reaches_every_lane_on_every_representation() {
    splat_reaches_every_lane!(
        I8x16 => -7i8,
        U8x16 => 200u8,
        I16x8 => -1234i16,
        U16x8 => 0x8001u16,
        I32x4 => i32::MIN,
        U32x4 => u32::MAX,
        I64x2 => -1i64,
        F32x4 => 1.5f32,
        F64x2 => -0.25f64,
    );
}

#[test]
fn test_add_sub_round_trip_wraps_consistently() {
    let mut rng = rng();

    for _ in 0..200 {
        let a_lanes: [i16; 8] = rng.random();
        let b_lanes: [i16; 8] = rng.random();

        let a = Register::<I16x8>::from_lanes(a_lanes);
        let b = Register::<I16x8>::from_lanes(b_lanes);

        assert_eq!(a + b - b, a);
        assert_eq!(a - b + b, a);
    }
}

#[test]
fn test_add_sub_round_trip_unsigned() {
    let mut rng = rng();

    for _ in 0..200 {
        let a = Register::<U32x4>::from_lanes(rng.random());
        let b = Register::<U32x4>::from_lanes(rng.random());

        assert_eq!(a + b - b, a);
    }
}

#[test]
fn test_mixed_lanes_satisfy_no_comparison() {
    // Lane 0 greater, lane 1 less: the all-lanes policy rejects every
    // ordering, including equality.
    let a = Register::<I32x4>::from_lanes([9, 1, 9, 1]);
    let b = Register::<I32x4>::splat(5);

    assert!(!(a == b));
    assert!(a != b);
    assert!(!(a < b));
    assert!(!(a > b));
    assert!(!(a <= b));
    assert!(!(a >= b));
    assert_eq!(a.partial_cmp(&b), None);
}

#[test]
fn test_uniform_lanes_order_totally() {
    let a = Register::<F64x2>::splat(2.0);
    let b = Register::<F64x2>::splat(3.0);

    assert!(a < b);
    assert!(a <= b);
    assert!(b > a);
    assert!(b >= a);
    assert!(a != b);
}

#[test]
fn test_min_max_reconstruct_the_lane_multiset() {
    let mut rng = rng();

    for _ in 0..200 {
        let a_lanes: [i16; 8] = rng.random();
        let b_lanes: [i16; 8] = rng.random();

        let a = Register::<I16x8>::from_lanes(a_lanes);
        let b = Register::<I16x8>::from_lanes(b_lanes);

        let lo = a.lane_min(b).to_lanes();
        let hi = a.lane_max(b).to_lanes();

        for i in 0..8 {
            let mut got = [lo[i], hi[i]];
            let mut expected = [a_lanes[i], b_lanes[i]];
            got.sort_unstable();
            expected.sort_unstable();
            assert_eq!(got, expected);
        }
    }
}

#[test]
fn test_fused_multiply_add_on_floats() {
    let a = Register::<F32x4>::splat(1.0);
    let b = Register::<F32x4>::from_lanes([1.0, 2.0, 3.0, 4.0]);
    let c = Register::<F32x4>::splat(10.0);

    assert_eq!(a.fmadd(b, c).to_lanes(), [11.0, 21.0, 31.0, 41.0]);
}

#[test]
fn test_fused_multiply_add_integer_emulation_truncates_back() {
    let a = Register::<I16x8>::splat(100);
    let b = Register::<I16x8>::splat(20);
    let c = Register::<I16x8>::splat(30);

    assert_eq!(a.fmadd(b, c), Register::splat(700));
}

#[test]
fn test_bitwise_operators_and_complement() {
    let a = Register::<U16x8>::splat(0b1100);
    let b = Register::<U16x8>::splat(0b1010);

    assert_eq!(a & b, Register::splat(0b1000));
    assert_eq!(a | b, Register::splat(0b1110));
    assert_eq!(a ^ b, Register::splat(0b0110));
    assert_eq!(!Register::<U16x8>::splat(0), Register::splat(u16::MAX));
}

#[test]
fn test_compound_assignment_with_scalar() {
    let mut v = Register::<I32x4>::from_lanes([1, 2, 3, 4]);

    v += 1;
    assert_eq!(v.to_lanes(), [2, 3, 4, 5]);

    v *= 10;
    assert_eq!(v.to_lanes(), [20, 30, 40, 50]);

    v -= 1;
    assert_eq!(v.to_lanes(), [19, 29, 39, 49]);
}

#[test]
fn test_float_division() {
    let a = Register::<F32x4>::from_lanes([2.0, 4.0, 8.0, 16.0]);
    let b = Register::<F32x4>::splat(2.0);

    assert_eq!((a / b).to_lanes(), [1.0, 2.0, 4.0, 8.0]);
}

#[test]
#[should_panic(expected = "unsupported lane operation")]
fn test_integer_division_halts() {
    let a = Register::<I16x8>::splat(6);
    let b = Register::<I16x8>::splat(3);
    let _ = a / b;
}

#[test]
#[should_panic(expected = "unsupported lane operation")]
fn test_byte_multiply_halts() {
    let a = Register::<I8x16>::splat(2);
    let _ = a * a;
}

#[test]
#[should_panic(expected = "unsupported lane operation")]
fn test_wide_integer_min_halts() {
    let a = Register::<I64x2>::splat(1);
    let b = Register::<I64x2>::splat(2);
    let _ = a.lane_min(b);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "out of bounds")]
fn test_out_of_range_extract_aborts_in_checked_builds() {
    let v = Register::<F32x4>::splat(0.0);
    let _ = v.extract(4);
}

#[test]
fn test_wide_integer_multiply_is_emulated() {
    let a = Register::<I64x2>::from_lanes([3_000_000_000, -5]);
    let b = Register::<I64x2>::from_lanes([4, 7]);

    assert_eq!((a * b).to_lanes(), [12_000_000_000, -35]);
}

#[cfg(avx2)]
mod extended_tier {
    use super::*;
    use lanewise::simd::{F32x8, I16x16, I32x8, U8x32};

    #[test]
    fn test_wide_registers_share_the_contract() {
        let a = Register::<F32x8>::splat(3.0);
        let b = Register::<F32x8>::splat(2.0);

        assert_eq!((a * b).to_lanes(), [6.0; 8]);
        assert!(a > b);
    }

    #[test]
    fn test_wide_unsigned_ordering() {
        let a = Register::<U8x32>::splat(200);
        let b = Register::<U8x32>::splat(100);

        assert!(a > b);
    }

    #[test]
    fn test_wide_integer_fmadd_widens_through_f64() {
        let a = Register::<I32x8>::splat(5);
        let b = Register::<I32x8>::splat(100_000);
        let c = Register::<I32x8>::splat(3);

        assert_eq!(a.fmadd(b, c), Register::splat(300_005));
    }

    #[test]
    #[should_panic(expected = "unsupported lane operation")]
    fn test_wide_narrow_integer_fmadd_halts() {
        let a = Register::<I16x16>::splat(1);
        let _ = a.fmadd(a, a);
    }
}

// LaneOps is also usable directly, without the wrapper.
#[test]
fn test_dispatch_set_is_reachable_without_the_wrapper() {
    let a = I16x8::splat(2);
    let b = I16x8::from_lanes([1, 2, 3, 4, 5, 6, 7, 8]);

    assert_eq!(a.mul(b).to_lanes(), [2, 4, 6, 8, 10, 12, 14, 16]);
    assert!(b.all_ge(I16x8::splat(1)));
}
