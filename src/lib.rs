//! Generic fixed-width SIMD lane registers.
//!
//! `lanewise` wraps the hardware's packed vector types behind one value
//! type, [`simd::Register`], generic over a concrete lane representation.
//! Construction, element access, arithmetic, bitwise operators and all-lanes
//! comparisons resolve at compile time to the representation's dispatch set,
//! so the wrapper adds no runtime cost over calling the intrinsics by hand.
//!
//! The build script fixes the instruction tier at compile time: 128-bit
//! registers always exist (hardware-backed on x86 with SSE4, scalar
//! elsewhere), and the 256-bit set appears additionally when the build
//! machine has AVX2. There is no runtime dispatch.
//!
//! ```
//! use lanewise::simd::{Register, F32x4};
//!
//! let a = Register::<F32x4>::from_lanes([1.0, 2.0, 3.0, 4.0]);
//! let b = Register::<F32x4>::splat(2.0);
//!
//! assert_eq!((a * b).to_lanes(), [2.0, 4.0, 6.0, 8.0]);
//! assert!(a.lane_max(b) >= b);
//! ```
//!
//! The [`morse`] module is a small consumer: a Morse-code encoder/decoder
//! that keeps each character's pulse pattern in a `Register<U16x8>` and
//! resolves it by whole-register equality against a fixed symbol table.
//!
//! Two failure classes exist and never mix: calling an operation with no
//! implementation for its representation is a programmer error and panics
//! with [`error::LanewiseError::UnsupportedLaneOperation`]; an unreadable
//! input file is logged and answered with an empty result.

pub mod error;
pub mod morse;
pub mod simd;
