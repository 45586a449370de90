//! Model a color with the HSL (hue, saturation, lightness) notation.

use std::fmt;

use crate::color::Models;

colorwin_macros::gen_model! {
    /// A color specified with a hue in degrees and saturation and lightness
    /// in percent.
    pub struct Hsl {
        /// The hue in `[0, 360)`.
        hue: i32,
        /// The saturation in `[0, 100]`.
        saturation: i32,
        /// The lightness in `[0, 100]`.
        lightness: i32,
    }
}

impl super::Model for Hsl {
    const MODEL: Models = Models::HSL;
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°, {}%, {}%", self.hue, self.saturation, self.lightness)
    }
}
