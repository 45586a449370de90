//! Shared scalar types used by the color models and the window geometry.

use bitflags::bitflags;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value used for all intermediate math.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value used for all intermediate math.
pub type Component = f64;

bitflags! {
    /// Names the five representations held by a
    /// [`ColorConverter`](crate::ColorConverter).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Models : u8 {
        /// Red, green, blue and alpha.
        const RGBA = 1 << 0;
        /// Hue, saturation and value.
        const HSV = 1 << 1;
        /// Hue, saturation and lightness.
        const HSL = 1 << 2;
        /// Cyan, magenta, yellow and black.
        const CMYK = 1 << 3;
        /// Hexadecimal RGB notation.
        const HEX = 1 << 4;
    }
}

impl Models {
    /// The models that have to be recomputed after `self` was set.
    pub fn derived(self) -> Self {
        Self::all() - self
    }
}
