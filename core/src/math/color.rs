//! RGB colors.

use core::fmt::{self, Debug, Formatter};

use crate::math::approx::ApproxEq;

/// An RGB color with `f32` channels, nominally in the range `0.0..=1.0`.
///
/// The kernel does no arithmetic on colors; `Color3` exists so that vertex
/// and uniform data can carry a color with the C layout
/// `{ float r; float g; float b; }`. Values outside the nominal range are
/// stored as given.
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Color3 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Returns a color with red, green, and blue channels `r`, `g`, and `b`.
#[inline]
pub const fn rgb(r: f32, g: f32, b: f32) -> Color3 {
    Color3 { r, g, b }
}

impl Color3 {
    pub const BLACK: Self = rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = rgb(1.0, 1.0, 1.0);

    /// Returns the channels of `self` as an array `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f32; 3]> for Color3 {
    #[inline]
    fn from([r, g, b]: [f32; 3]) -> Self {
        rgb(r, g, b)
    }
}

impl From<Color3> for [f32; 3] {
    #[inline]
    fn from(c: Color3) -> Self {
        c.to_array()
    }
}

impl ApproxEq for Color3 {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.to_array().approx_eq_eps(&other.to_array(), eps)
    }
}

impl Debug for Color3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Color3")?;
        Debug::fmt(&self.to_array(), f)
    }
}
