//! Angular quantities.
//!
//! The matrix families disagree on their raw angle unit: [`Mat3`] rotations
//! take degrees and [`Mat4`] rotations take radians. [`Angle`] lets callers
//! not care, via [`Mat3::rotate_by`] and [`Mat4::rotate_by`].
//!
//! [`Mat3`]: super::Mat3
//! [`Mat4`]: super::Mat4
//! [`Mat3::rotate_by`]: super::Mat3::rotate_by
//! [`Mat4::rotate_by`]: super::Mat4::rotate_by

use core::f32::consts::{PI, TAU};
use core::fmt::{self, Debug, Display};
use core::ops::{Add, Mul, Neg, Sub};

use crate::math::approx::ApproxEq;
#[cfg(feature = "fp")]
use crate::math::float::f32 as fp;
use crate::math::space::{Affine, Linear};

/// A scalar angular quantity.
///
/// Prevents confusion between degrees and radians by requiring the use of
/// one of the named constructors to create an `Angle`, as well as one of
/// the named getter methods to obtain the angle as a raw `f32` value.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle(f32);

const RADS_PER_DEG: f32 = PI / 180.0;

/// Returns an angle of `a` radians.
pub const fn rads(a: f32) -> Angle {
    Angle(a)
}

/// Returns an angle of `a` degrees.
pub fn degs(a: f32) -> Angle {
    Angle(a * RADS_PER_DEG)
}

/// Returns an angle of `a` turns.
pub fn turns(a: f32) -> Angle {
    Angle(a * TAU)
}

/// Returns the four-quadrant arctangent of `y` and `x` as an `Angle`.
///
/// The result is in the range (-180°, 180°]. If both arguments are zero,
/// returns zero.
///
/// # Examples
/// ```
/// # use planar_core::assert_approx_eq;
/// # use planar_core::math::angle::*;
/// assert_eq!(atan2(0.0, 1.0), degs(0.0));
/// assert_approx_eq!(atan2(2.0, 2.0), degs(45.0));
/// assert_approx_eq!(atan2(3.0, 0.0), degs(90.0));
/// ```
#[cfg(feature = "fp")]
pub fn atan2(y: f32, x: f32) -> Angle {
    Angle(fp::atan2(y, x))
}

impl Angle {
    /// A zero degree angle.
    pub const ZERO: Self = Self(0.0);
    /// A 90 degree angle.
    pub const RIGHT: Self = Self(TAU / 4.0);
    /// A 180 degree angle.
    pub const STRAIGHT: Self = Self(PI);
    /// A 360 degree angle.
    pub const FULL: Self = Self(TAU);

    /// Returns the value of `self` in radians.
    pub const fn to_rads(self) -> f32 {
        self.0
    }
    /// Returns the value of `self` in degrees.
    /// # Examples
    /// ```
    /// # use planar_core::math::turns;
    /// assert_eq!(turns(0.5).to_degs(), 180.0);
    /// ```
    pub fn to_degs(self) -> f32 {
        self.0 / RADS_PER_DEG
    }
    /// Returns the value of `self` in turns.
    pub fn to_turns(self) -> f32 {
        self.0 / TAU
    }
}

#[cfg(feature = "fp")]
impl Angle {
    /// Returns the sine of `self`.
    pub fn sin(self) -> f32 {
        fp::sin(self.0)
    }
    /// Returns the cosine of `self`.
    pub fn cos(self) -> f32 {
        fp::cos(self.0)
    }
    /// Simultaneously computes the sine and cosine of `self`.
    /// # Examples
    /// ```
    /// # use planar_core::assert_approx_eq;
    /// # use planar_core::math::angle::*;
    /// let (sin, cos) = degs(90.0).sin_cos();
    /// assert_approx_eq!(sin, 1.0);
    /// assert_approx_eq!(cos, 0.0);
    /// ```
    pub fn sin_cos(self) -> (f32, f32) {
        fp::sin_cos(self.0)
    }
}

impl ApproxEq for Angle {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}

impl Affine for Angle {
    type Diff = Self;
    const DIM: usize = 1;

    #[inline]
    fn add(&self, other: &Self) -> Self {
        *self + *other
    }
    #[inline]
    fn sub(&self, other: &Self) -> Self {
        *self - *other
    }
}

impl Linear for Angle {
    type Scalar = f32;

    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }
    #[inline]
    fn neg(&self) -> Self {
        -*self
    }
    #[inline]
    fn mul(&self, scalar: f32) -> Self {
        *self * scalar
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_degs(), f)?;
        f.write_str("°")
    }
}

impl Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Angle(")?;
        Display::fmt(self, f)?;
        f.write_str(")")
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}
impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}
impl Mul<f32> for Angle {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::{FRAC_PI_2, PI, TAU};

    use crate::assert_approx_eq;
    use crate::math::Lerp;

    use super::*;

    #[test]
    fn unit_conversions() {
        assert_eq!(rads(PI).to_degs(), 180.0);
        assert_eq!(degs(180.0).to_rads(), PI);
        assert_eq!(degs(90.0).to_rads(), FRAC_PI_2);
        assert_eq!(turns(1.0).to_rads(), TAU);
        assert_eq!(degs(360.0).to_turns(), 1.0);
    }

    #[test]
    fn straight_angle_is_exactly_pi() {
        assert_eq!(rads(core::f32::consts::PI).to_degs(), 180.0);
        assert_ne!(degs(180.0).to_rads(), 3.141596);
    }

    #[test]
    fn lerping() {
        assert_approx_eq!(degs(30.0).lerp(&degs(60.0), 0.2), degs(36.0));
    }

    #[test]
    fn display() {
        use std::format;
        assert_eq!(format!("{}", Angle::ZERO), "0°");
        assert_eq!(format!("{:?}", Angle::STRAIGHT), "Angle(180°)");
    }

    #[cfg(feature = "fp")]
    #[test]
    fn trig_functions() {
        assert_eq!(degs(0.0).sin(), 0.0);
        assert_eq!(degs(0.0).cos(), 1.0);
        assert_approx_eq!(degs(30.0).sin(), 0.5);
        assert_approx_eq!(degs(60.0).cos(), 0.5);
    }

    #[cfg(feature = "fp")]
    #[test]
    fn inverse_tangent() {
        assert_approx_eq!(atan2(0.0, 1.0), degs(0.0));
        assert_approx_eq!(atan2(1.0, 1.0), degs(45.0));
        assert_approx_eq!(atan2(1.0, -1.0), degs(135.0));
        assert_approx_eq!(atan2(-1.0, -1.0), degs(-135.0));
        assert_approx_eq!(atan2(0.0, 0.0), Angle::ZERO);
    }
}
