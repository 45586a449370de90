//! Model a color with cyan, magenta, yellow and black ink percentages.

use std::fmt;

use crate::color::Models;

colorwin_macros::gen_model! {
    /// A color specified as four ink percentages in `[0, 100]`.
    pub struct Cmyk {
        /// Cyan.
        cyan: i32,
        /// Magenta.
        magenta: i32,
        /// Yellow.
        yellow: i32,
        /// Black (key).
        black: i32,
    }
}

impl super::Model for Cmyk {
    const MODEL: Models = Models::CMYK;
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}%, {}%, {}%, {}%",
            self.cyan, self.magenta, self.yellow, self.black
        )
    }
}
