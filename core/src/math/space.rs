//! Traits for values that can be added, subtracted, and scaled.

/// Trait for types representing elements of an affine space.
///
/// Points can be offset by a difference and subtracted from each other,
/// but not added together or scaled. This is all that is needed for
/// linear interpolation, see [`Lerp`][super::Lerp].
pub trait Affine: Sized {
    /// The (signed) difference of two values of `Self`.
    type Diff: Linear;

    /// The number of scalar components of `Self`.
    const DIM: usize;

    /// Adds `diff` to `self` component-wise.
    fn add(&self, diff: &Self::Diff) -> Self;

    /// Subtracts `other` from `self`, returning the (signed) difference.
    ///
    /// `sub` is anti-commutative: `v.sub(w) == w.sub(v).neg()`.
    fn sub(&self, other: &Self) -> Self::Diff;
}

/// Trait for types representing elements of a linear (vector) space.
///
/// A `Linear` type is an [`Affine`] type that is its own difference type,
/// has an additive identity [`zero`][Self::zero], and an additive inverse
/// [`neg`][Self::neg] for every value.
pub trait Linear: Affine<Diff = Self> {
    /// The scalar type associated with `Self`.
    type Scalar: Sized;

    /// Returns the additive identity of `Self`.
    fn zero() -> Self;

    /// Returns the additive inverse of `self`.
    fn neg(&self) -> Self;

    /// Multiplies all components of `self` by `scalar`.
    fn mul(&self, scalar: Self::Scalar) -> Self;
}

impl Affine for f32 {
    type Diff = Self;
    const DIM: usize = 1;

    #[inline]
    fn add(&self, other: &Self) -> Self {
        self + other
    }
    #[inline]
    fn sub(&self, other: &Self) -> Self {
        self - other
    }
}

impl Linear for f32 {
    type Scalar = Self;

    #[inline]
    fn zero() -> Self {
        0.0
    }
    #[inline]
    fn neg(&self) -> Self {
        -*self
    }
    #[inline]
    fn mul(&self, scalar: Self) -> Self {
        self * scalar
    }
}
