//! A small math kernel for 2D rendering.
//!
//! Provides a 2-vector type, a row-major 3×3 homogeneous matrix for planar
//! affine transforms, and an independent column-major 4×4 homogeneous matrix
//! for code that talks to OpenGL-style APIs. Every type is plain `#[repr(C)]`
//! data that can be handed to a graphics API as a contiguous float buffer.
//!
//! # Crate features
//!
//! * `std`:
//!   Uses the floating-point functions of `std`. In particular this makes
//!   available the trigonometric functions needed by rotations.
//!   Enabled by default.
//!
//!   If this feature is disabled, the crate only depends on `core`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! * `bytemuck`:
//!   Implements [`Pod`][bytemuck::Pod] and [`Zeroable`][bytemuck::Zeroable]
//!   for the vector, color, and matrix types.
//!
//! With none of `std`, `libm`, or `mm` enabled, square roots are computed
//! with a fast approximation and rotations are unavailable.

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod math;

pub mod prelude {
    #[cfg(feature = "fp")]
    pub use crate::math::angle::atan2;
    pub use crate::math::{
        angle::{Angle, degs, rads, turns},
        color::{Color3, rgb},
        lerp, lerp_clamped,
        mat3::{FlatMat3, Mat3},
        mat4::Mat4,
        space::{Affine, Linear},
        vec::{Vec2, vec2},
        Lerp,
    };
}
