//! Approximate equality of floating-point values.

use core::iter::zip;

use super::float::f32 as fp;

/// Trait for comparing values for approximate equality.
///
/// Transforms built from sines and cosines rarely hit their exact expected
/// values. Rotating by 90° should map the x axis to the y axis, but the
/// cosine of `π/2` in single precision is about `-4.4e-8`, not zero.
/// `ApproxEq` compares values component-wise, allowing a difference that is
/// *relative* to the magnitude of the components, with an absolute floor of
/// epsilon for components whose magnitude is less than one.
///
/// Infinities and NaNs are never approximately equal to anything.
pub trait ApproxEq<Other: ?Sized = Self> {
    /// Returns whether `self` and `other` are approximately equal,
    /// using [`Self::relative_epsilon`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, Self::relative_epsilon())
    }

    /// Returns whether `self` and `other` are approximately equal,
    /// using the relative epsilon `rel_eps`.
    fn approx_eq_eps(&self, other: &Other, rel_eps: f32) -> bool;

    /// Returns the default relative epsilon.
    ///
    /// This is coarser when no precise floating-point backend is enabled.
    fn relative_epsilon() -> f32 {
        if cfg!(any(feature = "std", feature = "libm")) {
            1e-6
        } else {
            5e-3
        }
    }
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: f32) -> bool {
        let diff = fp::abs(self - other);
        diff <= rel_eps * fp::abs(*self).max(1.0)
    }
}

impl<T: ApproxEq> ApproxEq for [T] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: f32) -> bool {
        self.len() == other.len()
            && zip(self, other).all(|(s, o)| s.approx_eq_eps(o, rel_eps))
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: f32) -> bool {
        self.as_slice().approx_eq_eps(other.as_slice(), rel_eps)
    }
}

/// Asserts that two values are approximately equal.
///
/// Requires an [`ApproxEq`] impl for the left operand, and `Debug` impls
/// for both unless a custom message is given.
///
/// # Panics
///
/// If the given values are not approximately equal.
///
/// # Examples
/// ```
/// # use planar_core::assert_approx_eq;
/// assert_approx_eq!(0.1_f32 + 0.2, 0.3);
///
/// // A custom epsilon can be given
/// assert_approx_eq!(100.0_f32, 101.0, eps = 0.01);
/// ```
/// The epsilon, if present, must come before the message:
/// ```should_panic
/// # use planar_core::assert_approx_eq;
/// assert_approx_eq!(3.14_f32, 3.0, eps = 0.001, "{} is not close enough", 3.14);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, eps = $eps:literal) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "assertion failed: `{a:?} ≅ {b:?}` (eps = {})", $eps
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
    ($a:expr, $b:expr, eps = $eps:literal, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, $eps),
                $fmt $(, $args)*
            )
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_of_either_sign() {
        assert_approx_eq!(0.0_f32, -0.0);
        assert_approx_eq!(-0.0_f32, 0.0);
    }

    #[test]
    fn small_absolute_difference() {
        assert_approx_eq!(0.0_f32, 1e-7);
        assert_approx_eq!(1.0_f32, 1.0000001);
        assert_approx_eq!(-1.0_f32, -0.9999999);
    }

    #[test]
    fn relative_to_magnitude() {
        assert_approx_eq!(1.0e7_f32, 1.0e7 + 1.0);
        assert!(!1.0e7_f32.approx_eq_eps(&1.001e7, 1e-6));
    }

    #[test]
    fn arrays() {
        assert_approx_eq!([1.0_f32, 2.0, 3.0], [1.0, 2.0000001, 3.0]);
        assert!(![1.0_f32, 2.0].approx_eq(&[1.0, 2.5]));
        assert!(![1.0_f32, 2.0][..].approx_eq(&[1.0][..]));
    }

    #[test]
    #[should_panic]
    fn one_not_approx_eq_to_1_01() {
        assert_approx_eq!(1.0_f32, 1.01);
    }

    #[test]
    #[should_panic]
    fn inf_not_approx_eq_to_inf() {
        assert_approx_eq!(f32::INFINITY, f32::INFINITY);
    }

    #[test]
    #[should_panic]
    fn nan_not_approx_eq_to_nan() {
        assert_approx_eq!(f32::NAN, f32::NAN);
    }
}
