//! Vectors, matrices, and the odds and ends they need.
//!
//! There are two matrix families and they are deliberately *not* unified:
//!
//! * [`Mat3`] is row-major and its builder methods **prepend** the new
//!   elementary transform, `m.translate(v) == Mat3::translation(v) * m`.
//!   Its rotations take degrees.
//! * [`Mat4`] is column-major and its builder methods **append** the new
//!   elementary transform, `m.translate(v) == m * Mat4::translation(v)`.
//!   Its rotations take radians.
//!
//! Code written against either family relies on that family's order, so
//! the two must not be made consistent with each other.

pub use {
    angle::{Angle, degs, rads, turns},
    approx::ApproxEq,
    color::{Color3, rgb},
    mat3::{FlatMat3, Mat3},
    mat4::Mat4,
    space::{Affine, Linear},
    vec::{Vec2, vec2},
};
#[cfg(feature = "fp")]
pub use angle::atan2;

/// Implements an operator trait in terms of an op-assign trait.
macro_rules! impl_op {
    ($trait:ident :: $method:ident, $self:ty, $rhs:ty, $op:tt) => {
        impl $trait<$rhs> for $self {
            type Output = Self;
            #[inline]
            fn $method(mut self, rhs: $rhs) -> Self {
                self $op rhs; self
            }
        }
    };
}

pub mod angle;
pub mod approx;
pub mod color;
pub mod float;
pub mod mat3;
pub mod mat4;
pub mod space;
pub mod vec;

/// Trait for linear interpolation between two values.
pub trait Lerp: Sized {
    /// Linearly interpolates between `self` and `other`.
    ///
    /// if `t` = 0, returns `self`; if `t` = 1, returns `other`.
    /// Values of `t` outside `[0, 1]` are *not* clamped and extrapolate
    /// past the endpoints. For a clamping scalar version, see
    /// [`lerp_clamped`].
    ///
    /// # Examples
    /// ```
    /// use planar_core::math::{Lerp, vec2};
    ///
    /// assert_eq!(f32::lerp(&1.0, &5.0, 0.25), 2.0);
    /// assert_eq!(vec2(0.0, 0.0).lerp(&vec2(2.0, 4.0), 2.0), vec2(4.0, 8.0));
    /// ```
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Returns the (unweighted) average of `self` and `other`.
    fn midpoint(&self, other: &Self) -> Self {
        self.lerp(other, 0.5)
    }
}

impl<T> Lerp for T
where
    T: Affine<Diff: Linear<Scalar = f32>>,
{
    /// Returns `self + t * (other - self)`.
    ///
    /// # Examples
    /// ```
    /// use planar_core::math::*;
    ///
    /// assert_eq!(2.0_f32.lerp(&5.0, 0.0), 2.0);
    /// assert_eq!(2.0_f32.lerp(&5.0, 1.0), 5.0);
    /// assert_eq!(2.0_f32.lerp(&5.0, -1.0), -1.0);
    /// ```
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self.add(&other.sub(self).mul(t))
    }
}

/// Linearly interpolates between two values without clamping.
///
/// For examples and more information, see [`Lerp::lerp`].
#[inline]
pub fn lerp<T: Lerp>(t: f32, from: T, to: T) -> T {
    from.lerp(&to, t)
}

/// Linearly interpolates between two scalars, clamping `t` to `[0, 1]`.
///
/// Unlike [`lerp`], the result never leaves the closed range between `from`
/// and `to`. The endpoints are returned exactly when `t <= 0` or `t >= 1`.
/// A NaN `t` yields NaN.
///
/// # Examples
/// ```
/// use planar_core::math::lerp_clamped;
///
/// assert_eq!(lerp_clamped(0.5, 2.0, 4.0), 3.0);
/// assert_eq!(lerp_clamped(-5.0, 2.0, 4.0), 2.0);
/// assert_eq!(lerp_clamped(5.0, 2.0, 4.0), 4.0);
/// ```
#[inline]
pub fn lerp_clamped(t: f32, from: f32, to: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    (1.0 - t) * from + t * to
}
