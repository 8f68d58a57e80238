//! Lane registers and the generic wrapper over them.
//!
//! The build script probes the build machine and enables exactly one
//! baseline: `sse` (x86 with SSE4) or `fallback` (everything else). `avx2`
//! comes in addition to `sse` on machines that have it, so the ten 128-bit
//! shaped types below exist in every build under the same names.

pub mod register;
pub mod traits;

#[cfg(avx2)]
pub mod avx2;

#[cfg(sse)]
pub mod sse;

#[cfg(fallback)]
pub mod fallback;

#[cfg(sse)]
pub use sse::{F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8, U32x4, U64x2, U8x16};

#[cfg(fallback)]
pub use fallback::{F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8, U32x4, U64x2, U8x16};

#[cfg(avx2)]
pub use avx2::{F32x8, F64x4, I16x16, I32x8, I64x4, I8x32, U16x16, U32x8, U64x4, U8x32};

pub use register::Register;
pub use traits::{LaneOps, LaneScalar, Lanes};
