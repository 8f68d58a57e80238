//! 128-bit lane registers.
//!
//! The baseline tier. Every supported build has these ten types; the build
//! script enables SSE4 so the integer min/max and 32-bit multiply
//! instructions are available.

pub mod f32x4;
pub mod f64x2;
pub mod i16x8;
pub mod i32x4;
pub mod i64x2;
pub mod i8x16;
pub mod u16x8;
pub mod u32x4;
pub mod u64x2;
pub mod u8x16;

pub use f32x4::F32x4;
pub use f64x2::F64x2;
pub use i16x8::I16x8;
pub use i32x4::I32x4;
pub use i64x2::I64x2;
pub use i8x16::I8x16;
pub use u16x8::U16x8;
pub use u32x4::U32x4;
pub use u64x2::U64x2;
pub use u8x16::U8x16;
