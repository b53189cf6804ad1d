//! Floating-point function backends.
//!
//! `core` has no square roots or trigonometry. This module picks the
//! implementation of the handful of functions the kernel needs, based on
//! the enabled crate features:
//!
//! * `std`: the inherent `f32` methods,
//! * `libm`: the `libm` crate,
//! * `mm`: the `micromath` crate,
//! * none of the above: a [fallback] that only provides what can be done
//!   without a math library.
//!
//! Whatever is chosen is re-exported as `float::f32`, so callers write
//! `f32::sqrt(x)` regardless of the backend.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::fabsf as abs;
    pub use libm::sqrtf as sqrt;

    pub use libm::atan2f as atan2;
    pub use libm::cosf as cos;
    pub use libm::sinf as sin;

    #[inline]
    pub fn sin_cos(x: f32) -> (f32, f32) {
        (sin(x), cos(x))
    }
}

#[cfg(feature = "mm")]
pub mod mm {
    use micromath::F32Ext as mm;

    #[inline]
    pub fn abs(x: f32) -> f32 {
        mm::abs(x)
    }
    /// Returns the approximate square root of `x`.
    ///
    /// Exact for zero and positive infinity.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        if x == 0.0 || x == f32::INFINITY {
            return x;
        }
        let y = mm::sqrt(x);
        // Two rounds of Newton's method
        let y = 0.5 * (y + (x / y));
        0.5 * (y + (x / y))
    }
    #[inline]
    pub fn sin(x: f32) -> f32 {
        mm::sin(x)
    }
    #[inline]
    pub fn cos(x: f32) -> f32 {
        mm::cos(x)
    }
    #[inline]
    pub fn sin_cos(x: f32) -> (f32, f32) {
        (sin(x), cos(x))
    }
    #[inline]
    pub fn atan2(y: f32, x: f32) -> f32 {
        if y == 0.0 && x == 0.0 {
            // micromath yields NaN, std and libm zero
            return 0.0;
        }
        mm::atan2(y, x)
    }
}

pub mod fallback {
    use super::fast_recip_sqrt;

    /// Returns the absolute value of `x`.
    #[inline]
    pub fn abs(x: f32) -> f32 {
        f32::from_bits(x.to_bits() & !(1 << 31))
    }
    /// Returns the approximate square root of `x`.
    ///
    /// Exact for zero and positive infinity; NaN for negative `x` and NaN.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        if x < 0.0 {
            return f32::NAN;
        }
        if x == 0.0 || !x.is_finite() {
            return x;
        }
        x * fast_recip_sqrt(x)
    }
}

/// Returns a fast approximation of the reciprocal square root of a number.
#[inline]
pub fn fast_recip_sqrt(x: f32) -> f32 {
    // https://en.wikipedia.org/wiki/Fast_inverse_square_root
    const MAGIC: u32 = 0x5f37_5a86;
    let y = f32::from_bits(MAGIC.saturating_sub(x.to_bits() >> 1));
    // Two rounds of Newton's method
    let y = y * (1.5 - 0.5 * x * y * y);
    y * (1.5 - 0.5 * x * y * y)
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f32 = core::primitive::f32;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f32;

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use mm as f32;

#[cfg(not(feature = "fp"))]
pub use fallback as f32;
