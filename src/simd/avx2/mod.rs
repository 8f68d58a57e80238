//! 256-bit lane registers.
//!
//! Compiled only when the build script detects AVX2 on the build machine.
//! The 128-bit tier stays available alongside these types.

pub mod f32x8;
pub mod f64x4;
pub mod i16x16;
pub mod i32x8;
pub mod i64x4;
pub mod i8x32;
pub mod u16x16;
pub mod u32x8;
pub mod u64x4;
pub mod u8x32;

pub use f32x8::F32x8;
pub use f64x4::F64x4;
pub use i16x16::I16x16;
pub use i32x8::I32x8;
pub use i64x4::I64x4;
pub use i8x32::I8x32;
pub use u16x16::U16x16;
pub use u32x8::U32x8;
pub use u64x4::U64x4;
pub use u8x32::U8x32;
