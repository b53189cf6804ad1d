//! Two-dimensional vectors.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, AddAssign, Div, DivAssign, Index, Mul, MulAssign};
use core::ops::{Neg, Sub, SubAssign};

use crate::math::approx::ApproxEq;
use crate::math::float::f32 as fp;
use crate::math::space::{Affine, Linear};

/// A vector in ℝ², with single-precision components.
///
/// `Vec2` is plain data with the C layout `{ float x; float y; }`, so a
/// slice of vectors can be passed to a graphics API as-is.
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Returns a vector with components `x` and `y`.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2 { x, y }
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = vec2(0.0, 0.0);
    /// Unit vector in the direction of the positive x axis.
    pub const X: Self = vec2(1.0, 0.0);
    /// Unit vector in the direction of the positive y axis.
    pub const Y: Self = vec2(0.0, 1.0);

    /// Returns the zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the components of `self` as an array `[x, y]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Returns the component-wise sum of `self` and `other`.
    #[inline]
    #[must_use]
    pub fn add(self, other: &Self) -> Self {
        vec2(self.x + other.x, self.y + other.y)
    }

    /// Returns the component-wise difference of `self` and `other`.
    #[inline]
    #[must_use]
    pub fn sub(self, other: &Self) -> Self {
        vec2(self.x - other.x, self.y - other.y)
    }

    /// Returns `self` with both components multiplied by `s`.
    #[inline]
    #[must_use]
    pub fn mul(self, s: f32) -> Self {
        vec2(self.x * s, self.y * s)
    }

    /// Returns the dot product of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// # use planar_core::math::vec2;
    /// assert_eq!(vec2(1.0, 2.0).dot(&vec2(3.0, -1.0)), 1.0);
    /// // Perpendicular vectors have zero dot product
    /// assert_eq!(vec2(1.0, 1.0).dot(&vec2(-2.0, 2.0)), 0.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the two-dimensional cross product of `self` and `other`.
    ///
    /// This is the z component of the 3D cross product of the vectors
    /// extended with a zero z, or equivalently the determinant of the 2×2
    /// matrix with columns `self` and `other`. It is positive when `other`
    /// is counterclockwise from `self`.
    ///
    /// # Examples
    /// ```
    /// # use planar_core::math::{vec2, Vec2};
    /// assert_eq!(Vec2::X.cross(&Vec2::Y), 1.0);
    /// assert_eq!(Vec2::Y.cross(&Vec2::X), -1.0);
    /// ```
    #[inline]
    pub fn cross(&self, other: &Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the length of `self`, squared.
    #[inline]
    pub fn len_sqr(&self) -> f32 {
        self.dot(self)
    }

    /// Returns the Euclidean length of `self`.
    ///
    /// # Examples
    /// ```
    /// # use planar_core::assert_approx_eq;
    /// # use planar_core::math::vec2;
    /// assert_approx_eq!(vec2(3.0, 4.0).len(), 5.0);
    /// ```
    #[inline]
    pub fn len(&self) -> f32 {
        fp::sqrt(self.len_sqr())
    }

    /// Returns `self` scaled to unit length.
    ///
    /// The zero vector has no direction; normalizing it returns the zero
    /// vector rather than NaNs.
    ///
    /// # Examples
    /// ```
    /// # use planar_core::assert_approx_eq;
    /// # use planar_core::math::{vec2, Vec2};
    /// assert_approx_eq!(vec2(0.0, -3.0).normalize(), vec2(0.0, -1.0));
    /// assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Self {
        let len = self.len();
        if len > 0.0 {
            Vec2::mul(*self, len.recip())
        } else {
            Self::ZERO
        }
    }

    /// Returns the Euclidean distance between `self` and `other`.
    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        Vec2::sub(*self, other).len()
    }

    /// Returns the unit vector pointing from `self` towards `target`.
    ///
    /// If the two are equal, returns the zero vector.
    ///
    /// # Examples
    /// ```
    /// # use planar_core::assert_approx_eq;
    /// # use planar_core::math::{vec2, Vec2};
    /// let eye = vec2(1.0, 1.0);
    /// assert_approx_eq!(eye.look_at(&vec2(1.0, 5.0)), Vec2::Y);
    /// assert_eq!(eye.look_at(&eye), Vec2::ZERO);
    /// ```
    #[must_use]
    pub fn look_at(&self, target: &Self) -> Self {
        Vec2::sub(*target, self).normalize()
    }
}

//
// Local trait impls
//

impl Affine for Vec2 {
    type Diff = Self;
    const DIM: usize = 2;

    #[inline]
    fn add(&self, other: &Self) -> Self {
        Vec2::add(*self, other)
    }
    #[inline]
    fn sub(&self, other: &Self) -> Self {
        Vec2::sub(*self, other)
    }
}

impl Linear for Vec2 {
    type Scalar = f32;

    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }
    #[inline]
    fn neg(&self) -> Self {
        vec2(-self.x, -self.y)
    }
    #[inline]
    fn mul(&self, scalar: f32) -> Self {
        Vec2::mul(*self, scalar)
    }
}

impl ApproxEq for Vec2 {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.to_array().approx_eq_eps(&other.to_array(), eps)
    }
}

//
// Foreign trait impls
//

impl Debug for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2")?;
        Debug::fmt(&self.to_array(), f)
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        vec2(x, y)
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        vec2(x, y)
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        v.to_array()
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;

    /// Returns the component with index `i`, x being 0 and y 1.
    ///
    /// # Panics
    /// If `i` > 1.
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of bounds: {i}"),
        }
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = Vec2::add(*self, &rhs);
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = Vec2::sub(*self, &rhs);
    }
}

impl MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = Vec2::mul(*self, rhs);
    }
}

impl DivAssign<f32> for Vec2 {
    /// Divides both components of `self` by `rhs`.
    ///
    /// Division by zero follows IEEE 754 and yields infinities or NaNs.
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = vec2(self.x / rhs, self.y / rhs);
    }
}

impl Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Linear::neg(&self)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl_op!(Add::add, Vec2, Vec2, +=);
impl_op!(Sub::sub, Vec2, Vec2, -=);
impl_op!(Mul::mul, Vec2, f32, *=);
impl_op!(Div::div, Vec2, f32, /=);

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::math::Lerp;

    use super::*;

    #[test]
    fn zero() {
        assert_eq!(Vec2::zero(), vec2(0.0, 0.0));
        assert_eq!(Vec2::default(), Vec2::ZERO);
    }

    #[test]
    fn addition_and_subtraction() {
        let (a, b) = (vec2(1.0, 2.0), vec2(-2.0, 0.5));
        assert_eq!(a.add(&b), vec2(-1.0, 2.5));
        assert_eq!(a.add(&b), b.add(&a));
        assert_eq!(a.sub(&b), vec2(3.0, 1.5));
        assert_eq!(a.sub(&b), b.sub(&a).mul(-1.0));
    }

    #[test]
    fn scalar_multiplication() {
        assert_eq!(vec2(1.0, -2.0).mul(0.0), vec2(0.0, -0.0));
        assert_eq!(vec2(1.0, -2.0).mul(3.0), vec2(3.0, -6.0));
    }

    #[test]
    fn dot_product() {
        let (a, b) = (vec2(0.5, 0.5), vec2(-4.0, 3.0));
        assert_eq!(a.dot(&b), -0.5);
        assert_eq!(a.dot(&b), b.dot(&a));
        assert_eq!(vec2(3.0, 1.0).dot(&vec2(3.0, 1.0)), 10.0);
    }

    #[test]
    fn cross_product() {
        let (a, b) = (vec2(2.0, 1.0), vec2(-1.0, 3.0));
        assert_eq!(a.cross(&b), 7.0);
        assert_eq!(a.cross(&b), -b.cross(&a));
        // Parallel vectors
        assert_eq!(a.cross(&a.mul(-2.0)), 0.0);
    }

    #[test]
    fn length_and_distance() {
        assert_approx_eq!(vec2(3.0, 4.0).len(), 5.0);
        assert_eq!(vec2(-3.0, 4.0).len_sqr(), 25.0);
        assert_eq!(Vec2::ZERO.len(), 0.0);
        assert_approx_eq!(vec2(1.0, 1.0).distance(&vec2(4.0, 5.0)), 5.0);
        assert_approx_eq!(vec2(4.0, 5.0).distance(&vec2(1.0, 1.0)), 5.0);
    }

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
        assert_eq!(vec2(-0.0, 0.0).normalize(), Vec2::ZERO);
    }

    #[test]
    fn normalize_gives_unit_length() {
        for v in [vec2(3.0, 4.0), vec2(-1e-3, 2e-3), vec2(1e5, -7.0)] {
            assert_approx_eq!(v.normalize().len(), 1.0);
        }
        assert_approx_eq!(vec2(3.0, 4.0).normalize(), vec2(0.6, 0.8));
    }

    #[test]
    fn normalize_non_finite() {
        let n = vec2(f32::NAN, 1.0).normalize();
        // NaN length fails the > 0 test
        assert_eq!(n, Vec2::ZERO);
        let n = vec2(f32::INFINITY, 1.0).normalize();
        assert!(n.x.is_nan());
        assert_eq!(n.y, 0.0);
    }

    #[test]
    fn inherent_methods_win_over_operator_traits() {
        use core::ops::{Add, Mul, Sub};
        let (a, b) = (vec2(1.0, 2.0), vec2(3.0, 4.0));
        assert_eq!(a.add(&b), vec2(4.0, 6.0));
        assert_eq!(a.sub(&b), vec2(-2.0, -2.0));
        assert_eq!(a.mul(2.0), vec2(2.0, 4.0));
        // The operator forms still work by value
        assert_eq!(Add::add(a, b), a.add(&b));
        assert_eq!(Sub::sub(a, b), a.sub(&b));
        assert_eq!(Mul::mul(a, 2.0), a.mul(2.0));
    }

    #[test]
    fn lerp_does_not_clamp() {
        let (a, b) = (vec2(1.0, -2.0), vec2(3.0, 2.0));
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 0.5), vec2(2.0, 0.0));
        assert_eq!(a.lerp(&b, 2.0), vec2(5.0, 6.0));
        assert_eq!(a.lerp(&b, -1.0), vec2(-1.0, -6.0));
    }

    #[test]
    fn look_at() {
        assert_approx_eq!(
            vec2(2.0, 2.0).look_at(&vec2(-1.0, 2.0)),
            vec2(-1.0, 0.0)
        );
        assert_approx_eq!(
            Vec2::ZERO.look_at(&vec2(3.0, -4.0)),
            vec2(0.6, -0.8)
        );
        assert_eq!(vec2(1.0, 2.0).look_at(&vec2(1.0, 2.0)), Vec2::ZERO);
    }

    #[test]
    fn operators() {
        let mut v = vec2(1.0, 2.0);
        assert_eq!(v + vec2(1.0, 1.0), vec2(2.0, 3.0));
        assert_eq!(v - vec2(1.0, 1.0), vec2(0.0, 1.0));
        assert_eq!(v * 2.0, vec2(2.0, 4.0));
        assert_eq!(2.0 * v, vec2(2.0, 4.0));
        assert_eq!(v / 2.0, vec2(0.5, 1.0));
        assert_eq!(-v, vec2(-1.0, -2.0));

        v += vec2(1.0, 1.0);
        assert_eq!(v, vec2(2.0, 3.0));
        v -= vec2(0.5, 0.5);
        assert_eq!(v, vec2(1.5, 2.5));
        v *= 2.0;
        assert_eq!(v, vec2(3.0, 5.0));
        v /= 4.0;
        assert_eq!(v, vec2(0.75, 1.25));
    }

    #[test]
    fn division_by_zero_is_ieee() {
        let v = vec2(1.0, -1.0) / 0.0;
        assert_eq!(v, vec2(f32::INFINITY, f32::NEG_INFINITY));
    }

    #[test]
    fn conversions() {
        assert_eq!(Vec2::from([1.0, -2.0]), vec2(1.0, -2.0));
        assert_eq!(Vec2::from((1.0, -2.0)), vec2(1.0, -2.0));
        assert_eq!(<[f32; 2]>::from(vec2(1.0, -2.0)), [1.0, -2.0]);
        assert_eq!(vec2(1.0, -2.0)[0], 1.0);
        assert_eq!(vec2(1.0, -2.0)[1], -2.0);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let _ = vec2(1.0, 2.0)[2];
    }

    #[test]
    fn debug() {
        use std::format;
        assert_eq!(format!("{:?}", vec2(1.0, -2.0)), "Vec2[1.0, -2.0]");
    }

    #[test]
    fn layout() {
        use core::mem::{align_of, size_of};
        assert_eq!(size_of::<Vec2>(), 8);
        assert_eq!(align_of::<Vec2>(), 4);
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn as_bytes() {
        let v = vec2(1.0, 2.0);
        let fs: &[f32; 2] = bytemuck::cast_ref(&v);
        assert_eq!(fs, &[1.0, 2.0]);
    }
}
