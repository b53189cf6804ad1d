//! Column-major 4×4 matrices.
//!
//! [`Mat4`] stores its sixteen elements in OpenGL order, column by column,
//! so the storage can be uploaded as-is. Only the planar subset of 3D
//! transforms is provided: translation and scaling in the xy plane,
//! rotation about the z axis, and an orthographic projection. The z
//! coordinate is left untouched by all of them except the projection.
//!
//! Unlike [`Mat3`][super::Mat3], the builder methods *append* the
//! elementary transform: `m.translate(v)` equals `m * Mat4::translation(v)`,
//! and rotations take radians.

use core::fmt::{self, Debug, Formatter};
use core::ops::Mul;

#[cfg(feature = "fp")]
use crate::math::angle::{Angle, rads};
use crate::math::approx::ApproxEq;
use crate::math::vec::{Vec2, vec2};

/// A 4×4 matrix of `f32`s in column-major order.
///
/// The element at row `i`, column `j` is `m.0[j * 4 + i]`.
#[repr(C)]
#[derive(Copy, Clone, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Mat4(pub [f32; 16]);

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Returns a matrix with the given elements in column-major order.
    #[inline]
    pub const fn new(els: [f32; 16]) -> Self {
        Self(els)
    }

    /// Returns the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the element at row `row`, column `col`.
    ///
    /// # Panics
    /// If `row` or `col` is greater than 3.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < 4 && col < 4, "index out of bounds: ({row}, {col})");
        self.0[col * 4 + row]
    }

    /// Returns the row with index `i`.
    pub fn row(&self, i: usize) -> [f32; 4] {
        let m = &self.0;
        [m[i], m[4 + i], m[8 + i], m[12 + i]]
    }

    /// Returns the column with index `i`.
    pub fn col(&self, i: usize) -> [f32; 4] {
        let m = &self.0;
        [m[4 * i], m[4 * i + 1], m[4 * i + 2], m[4 * i + 3]]
    }

    /// Returns the matrix product `self × other`.
    ///
    /// Applying the result to a point is the same as applying `other`
    /// first, then `self`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let (a, b) = (&self.0, &other.0);
        let mut els = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                els[col * 4 + row] = (0..4)
                    .map(|k| a[k * 4 + row] * b[col * 4 + k])
                    .sum();
            }
        }
        Self(els)
    }

    /// Returns the matrix product `other × self`.
    ///
    /// Applying the result to a point is the same as applying `self`
    /// first, then `other`.
    ///
    /// # Examples
    /// ```
    /// # use planar_core::math::{Mat4, vec2};
    /// let view = Mat4::translation(vec2(10.0, 0.0));
    /// let proj = Mat4::scaling(vec2(0.5, 0.5));
    /// assert_eq!(view.then(&proj).apply(&vec2(2.0, 2.0)), vec2(6.0, 1.0));
    /// ```
    #[inline]
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        other.compose(self)
    }

    //
    // Elementary transforms
    //

    /// Returns a matrix that translates points by `offset` in the xy plane.
    pub const fn translation(offset: Vec2) -> Self {
        let mut m = Self::IDENTITY;
        m.0[12] = offset.x;
        m.0[13] = offset.y;
        m
    }

    /// Returns a matrix that scales points by `factor.x` along the x axis
    /// and `factor.y` along the y axis.
    pub const fn scaling(factor: Vec2) -> Self {
        let mut m = Self::IDENTITY;
        m.0[0] = factor.x;
        m.0[5] = factor.y;
        m
    }

    /// Returns a matrix that rotates points counterclockwise about the
    /// z axis by `radians` radians.
    ///
    /// # Examples
    /// ```
    /// # use std::f32::consts::FRAC_PI_2;
    /// # use planar_core::assert_approx_eq;
    /// # use planar_core::math::{Mat4, vec2};
    /// let m = Mat4::rotation(FRAC_PI_2);
    /// assert_approx_eq!(m.apply(&vec2(1.0, 0.0)), vec2(0.0, 1.0));
    /// ```
    #[cfg(feature = "fp")]
    pub fn rotation(radians: f32) -> Self {
        Self::rotation_by(rads(radians))
    }

    /// Returns a matrix that rotates points counterclockwise about the
    /// z axis by `angle`.
    #[cfg(feature = "fp")]
    pub fn rotation_by(angle: Angle) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.0[0] = c;
        m.0[1] = s;
        m.0[4] = -s;
        m.0[5] = c;
        m
    }

    /// Returns an orthographic projection that maps the box
    /// `left..right` × `bottom..top` × `-1..1` to clip space.
    ///
    /// Passing `bottom` > `top` gives the y-down convention of pixel
    /// coordinates. The result is unspecified (contains infinities or
    /// NaNs) if `left == right` or `bottom == top`.
    ///
    /// # Examples
    /// ```
    /// # use planar_core::math::{Mat4, vec2};
    /// let m = Mat4::ortho(0.0, 800.0, 600.0, 0.0);
    /// assert_eq!(m.apply(&vec2(0.0, 0.0)), vec2(-1.0, 1.0));
    /// assert_eq!(m.apply(&vec2(800.0, 600.0)), vec2(1.0, -1.0));
    /// ```
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        let (near, far) = (-1.0, 1.0);
        let (w, h, d) = (right - left, top - bottom, far - near);
        let mut m = Self::IDENTITY;
        m.0[0] = 2.0 / w;
        m.0[5] = 2.0 / h;
        m.0[10] = -2.0 / d;
        m.0[12] = -(right + left) / w;
        m.0[13] = -(top + bottom) / h;
        m.0[14] = -(far + near) / d;
        m
    }

    //
    // Composing builders
    //

    /// Returns `self × Mat4::translation(offset)`.
    ///
    /// The translation is applied to points *before* `self`.
    #[must_use]
    pub fn translate(&self, offset: Vec2) -> Self {
        self.compose(&Self::translation(offset))
    }

    /// Returns `self × Mat4::scaling(factor)`.
    ///
    /// The scaling is applied to points *before* `self`.
    #[must_use]
    pub fn scale(&self, factor: Vec2) -> Self {
        self.compose(&Self::scaling(factor))
    }

    /// Returns `self × Mat4::rotation(radians)`.
    ///
    /// The rotation is applied to points *before* `self`.
    #[cfg(feature = "fp")]
    #[must_use]
    pub fn rotate(&self, radians: f32) -> Self {
        self.compose(&Self::rotation(radians))
    }

    /// Returns `self × Mat4::rotation_by(angle)`.
    #[cfg(feature = "fp")]
    #[must_use]
    pub fn rotate_by(&self, angle: Angle) -> Self {
        self.compose(&Self::rotation_by(angle))
    }

    /// Maps the point `p` by `self`, treating it as `(p.x, p.y, 0, 1)`.
    ///
    /// The z and w coordinates of the result are discarded.
    pub fn apply(&self, p: &Vec2) -> Vec2 {
        let m = &self.0;
        vec2(
            m[0] * p.x + m[4] * p.y + m[12],
            m[1] * p.x + m[5] * p.y + m[13],
        )
    }

    /// Returns the elements of `self` in column-major order.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.0
    }

    /// Returns a pointer to the first of the sixteen contiguous elements of
    /// `self`, in column-major order.
    #[inline]
    pub const fn as_ptr(&self) -> *const f32 {
        self.0.as_ptr()
    }
}

impl ApproxEq for Mat4 {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}

impl Debug for Mat4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat4[")?;
        for i in 0..4 {
            writeln!(f, "    {:6.2?}", self.row(i))?;
        }
        write!(f, "]")
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(els: [f32; 16]) -> Self {
        Self(els)
    }
}

impl Mul for Mat4 {
    type Output = Self;

    /// Returns the matrix product `self × rhs`. See [`Mat4::compose`].
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}
