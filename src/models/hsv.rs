//! Model a color with the HSV (hue, saturation, value) notation.

use std::fmt;

use crate::color::Models;

colorwin_macros::gen_model! {
    /// A color specified with a hue in degrees and saturation and value in
    /// percent.
    pub struct Hsv {
        /// The hue in `[0, 360)`.
        hue: i32,
        /// The saturation in `[0, 100]`.
        saturation: i32,
        /// The value in `[0, 100]`.
        value: i32,
    }
}

impl super::Model for Hsv {
    const MODEL: Models = Models::HSV;
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°, {}%, {}%", self.hue, self.saturation, self.value)
    }
}
