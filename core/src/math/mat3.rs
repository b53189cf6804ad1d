//! Row-major 3×3 matrices for planar affine transforms.
//!
//! A [`Mat3`] maps a 2D point `p` by multiplying the column vector
//! `(p.x, p.y, 1)` from the left. The upper-left 2×2 block holds rotation
//! and scale, the third column holds translation, and the bottom row is
//! `(0, 0, 1)` by convention (not enforced).
//!
//! The builder methods [`translate`][Mat3::translate],
//! [`rotate`][Mat3::rotate], and [`scale`][Mat3::scale] *prepend* an
//! elementary transform: `m.rotate(a)` equals `Mat3::rotation(a) * m`,
//! so the transforms are applied to a point in the order they are chained.

use core::fmt::{self, Debug, Formatter};
use core::ops::Mul;

use crate::math::approx::ApproxEq;
#[cfg(feature = "fp")]
use crate::math::angle::{Angle, atan2, degs};
use crate::math::vec::{Vec2, vec2};

/// A 3×3 matrix of `f32`s in row-major order.
///
/// The element at row `i`, column `j` is `m.0[i][j]`.
#[repr(C)]
#[derive(Copy, Clone, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Mat3(pub [[f32; 3]; 3]);

/// The elements of a [`Mat3`] as one contiguous array.
///
/// This is an export format for uploading to a graphics API; it is derived
/// from a `Mat3` with [`Mat3::to_flat`] or [`Mat3::to_flat_cols`] and can
/// be turned back into one with [`FlatMat3::to_mat3`].
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct FlatMat3(pub [f32; 9]);

impl Mat3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0], //
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Returns a matrix with the given rows.
    #[inline]
    pub const fn new(rows: [[f32; 3]; 3]) -> Self {
        Self(rows)
    }

    /// Returns the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the row with index `i`.
    ///
    /// # Panics
    /// If `i` > 2.
    #[inline]
    pub fn row(&self, i: usize) -> [f32; 3] {
        self.0[i]
    }

    /// Returns the column with index `i`.
    ///
    /// # Panics
    /// If `i` > 2.
    #[inline]
    pub fn col(&self, i: usize) -> [f32; 3] {
        [self.0[0][i], self.0[1][i], self.0[2][i]]
    }

    /// Returns the matrix product `self × other`.
    ///
    /// Applying the result to a point is the same as applying `other`
    /// first, then `self`.
    ///
    /// # Examples
    /// ```
    /// # use planar_core::math::{Mat3, vec2};
    /// let a = Mat3::translation(vec2(1.0, 2.0));
    /// let b = Mat3::scaling(vec2(2.0, 2.0));
    /// assert_eq!(a.compose(&b).apply(&vec2(1.0, 1.0)), vec2(3.0, 4.0));
    /// ```
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let mut els = [[0.0; 3]; 3];
        for (i, row) in els.iter_mut().enumerate() {
            let r = self.row(i);
            for (j, el) in row.iter_mut().enumerate() {
                let c = other.col(j);
                *el = r[0] * c[0] + r[1] * c[1] + r[2] * c[2];
            }
        }
        Self(els)
    }

    /// Returns the matrix product `other × self`.
    ///
    /// Applying the result to a point is the same as applying `self`
    /// first, then `other`.
    #[inline]
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        other.compose(self)
    }

    //
    // Elementary transforms
    //

    /// Returns a matrix that translates points by `offset`.
    pub const fn translation(offset: Vec2) -> Self {
        Self([
            [1.0, 0.0, offset.x], //
            [0.0, 1.0, offset.y],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Returns a matrix that scales points by `factor.x` along the x axis
    /// and `factor.y` along the y axis.
    pub const fn scaling(factor: Vec2) -> Self {
        Self([
            [factor.x, 0.0, 0.0], //
            [0.0, factor.y, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Returns a matrix that rotates points counterclockwise about the
    /// origin by `degrees` degrees.
    ///
    /// # Examples
    /// ```
    /// # use planar_core::assert_approx_eq;
    /// # use planar_core::math::{Mat3, vec2};
    /// let m = Mat3::rotation(90.0);
    /// assert_approx_eq!(m.apply(&vec2(1.0, 0.0)), vec2(0.0, 1.0));
    /// ```
    #[cfg(feature = "fp")]
    pub fn rotation(degrees: f32) -> Self {
        Self::rotation_by(degs(degrees))
    }

    /// Returns a matrix that rotates points counterclockwise about the
    /// origin by `angle`.
    #[cfg(feature = "fp")]
    pub fn rotation_by(angle: Angle) -> Self {
        let (s, c) = angle.sin_cos();
        Self([
            [c, -s, 0.0], //
            [s, c, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Returns an orthographic projection from pixel coordinates to clip
    /// coordinates.
    ///
    /// Pixel space has its origin in the top-left corner with y pointing
    /// down; clip space spans `-1.0..=1.0` on both axes with y pointing up.
    /// Thus (0, 0) maps to (-1, 1) and (`width`, `height`) to (1, -1).
    ///
    /// The result is unspecified (contains infinities or NaNs) if `width`
    /// or `height` is zero.
    ///
    /// # Examples
    /// ```
    /// # use planar_core::math::{Mat3, vec2};
    /// let m = Mat3::ortho(800.0, 600.0);
    /// assert_eq!(m.apply(&vec2(0.0, 0.0)), vec2(-1.0, 1.0));
    /// assert_eq!(m.apply(&vec2(400.0, 300.0)), vec2(0.0, 0.0));
    /// assert_eq!(m.apply(&vec2(800.0, 600.0)), vec2(1.0, -1.0));
    /// ```
    pub fn ortho(width: f32, height: f32) -> Self {
        Self([
            [2.0 / width, 0.0, -1.0],
            [0.0, -2.0 / height, 1.0],
            [0.0, 0.0, 1.0],
        ])
    }

    //
    // Composing builders
    //

    /// Returns `self` followed by a translation by `offset`.
    ///
    /// Equivalent to `Mat3::translation(offset).compose(self)`.
    #[must_use]
    pub fn translate(&self, offset: Vec2) -> Self {
        self.then(&Self::translation(offset))
    }

    /// Returns `self` followed by a scaling by `factor`.
    ///
    /// Equivalent to `Mat3::scaling(factor).compose(self)`.
    #[must_use]
    pub fn scale(&self, factor: Vec2) -> Self {
        self.then(&Self::scaling(factor))
    }

    /// Returns `self` followed by a counterclockwise rotation of `degrees`
    /// degrees about the origin.
    ///
    /// Equivalent to `Mat3::rotation(degrees).compose(self)`.
    #[cfg(feature = "fp")]
    #[must_use]
    pub fn rotate(&self, degrees: f32) -> Self {
        self.then(&Self::rotation(degrees))
    }

    /// Returns `self` followed by a counterclockwise rotation of `angle`
    /// about the origin.
    #[cfg(feature = "fp")]
    #[must_use]
    pub fn rotate_by(&self, angle: Angle) -> Self {
        self.then(&Self::rotation_by(angle))
    }

    /// Returns `self` followed by a rotation that turns the positive x axis
    /// to point in the direction `dir`.
    ///
    /// If `dir` is the zero vector, the rotation is zero degrees.
    ///
    /// # Examples
    /// ```
    /// # use planar_core::assert_approx_eq;
    /// # use planar_core::math::{Mat3, vec2};
    /// let m = Mat3::identity().look_at(vec2(-2.0, 0.0));
    /// assert_approx_eq!(m.apply(&vec2(1.0, 0.0)), vec2(-1.0, 0.0));
    /// ```
    #[cfg(feature = "fp")]
    #[must_use]
    pub fn look_at(&self, dir: Vec2) -> Self {
        self.rotate(atan2(dir.y, dir.x).to_degs())
    }

    //
    // Application
    //

    /// Maps the point `p` by `self`, treating it as `(p.x, p.y, 1)`.
    ///
    /// The third homogeneous coordinate of the result is discarded.
    pub fn apply(&self, p: &Vec2) -> Vec2 {
        let [a, b] = [self.row(0), self.row(1)];
        vec2(
            a[0] * p.x + a[1] * p.y + a[2],
            b[0] * p.x + b[1] * p.y + b[2],
        )
    }

    /// Maps the direction `v` by `self`, treating it as `(v.x, v.y, 0)`.
    ///
    /// Translation has no effect on directions.
    pub fn apply_vec(&self, v: &Vec2) -> Vec2 {
        let [a, b] = [self.row(0), self.row(1)];
        vec2(a[0] * v.x + a[1] * v.y, b[0] * v.x + b[1] * v.y)
    }

    //
    // Export
    //

    /// Returns the elements of `self` in row-major order.
    ///
    /// # Examples
    /// ```
    /// # use planar_core::math::{Mat3, vec2};
    /// let m = Mat3::translation(vec2(5.0, 6.0));
    /// assert_eq!(m.to_flat().0, [1.0, 0.0, 5.0, 0.0, 1.0, 6.0, 0.0, 0.0, 1.0]);
    /// ```
    pub fn to_flat(&self) -> FlatMat3 {
        let mut flat = [0.0; 9];
        flat.copy_from_slice(self.as_slice());
        FlatMat3(flat)
    }

    /// Returns the elements of `self` in column-major order.
    ///
    /// This is the layout expected by APIs such as OpenGL when matrices are
    /// uploaded without transposition.
    ///
    /// # Examples
    /// ```
    /// # use planar_core::math::{Mat3, vec2};
    /// let m = Mat3::translation(vec2(5.0, 6.0));
    /// assert_eq!(m.to_flat_cols().0, [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 5.0, 6.0, 1.0]);
    /// ```
    pub fn to_flat_cols(&self) -> FlatMat3 {
        let [c0, c1, c2] = [self.col(0), self.col(1), self.col(2)];
        FlatMat3([
            c0[0], c0[1], c0[2], //
            c1[0], c1[1], c1[2],
            c2[0], c2[1], c2[2],
        ])
    }

    /// Returns the nine elements of `self` as a row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.0.as_flattened()
    }

    /// Returns a pointer to the first of the nine contiguous elements of
    /// `self`, in row-major order.
    ///
    /// The pointer is valid for as long as `self` is borrowed.
    #[inline]
    pub fn as_ptr(&self) -> *const f32 {
        self.as_slice().as_ptr()
    }
}

impl FlatMat3 {
    /// Reassembles a matrix from row-major flat elements, as returned by
    /// [`Mat3::to_flat`].
    pub fn to_mat3(&self) -> Mat3 {
        let [a, b, c, d, e, f, g, h, i] = self.0;
        Mat3([[a, b, c], [d, e, f], [g, h, i]])
    }

    /// Returns a pointer to the first element of `self`.
    #[inline]
    pub fn as_ptr(&self) -> *const f32 {
        self.0.as_ptr()
    }
}

//
// Local trait impls
//

impl ApproxEq for Mat3 {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}

//
// Foreign trait impls
//

impl Debug for Mat3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat3[")?;
        for row in &self.0 {
            writeln!(f, "    {:6.2?}", row)?;
        }
        write!(f, "]")
    }
}

impl From<[[f32; 3]; 3]> for Mat3 {
    fn from(rows: [[f32; 3]; 3]) -> Self {
        Self(rows)
    }
}

impl From<Mat3> for FlatMat3 {
    fn from(m: Mat3) -> Self {
        m.to_flat()
    }
}

impl From<FlatMat3> for Mat3 {
    fn from(f: FlatMat3) -> Self {
        f.to_mat3()
    }
}

impl Mul for Mat3 {
    type Output = Self;

    /// Returns the matrix product `self × rhs`. See [`Mat3::compose`].
    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}
