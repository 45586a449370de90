//! Model a color with red, green, blue and alpha channels.

use std::fmt;

use crate::color::Models;

colorwin_macros::gen_model! {
    /// A color with red, green and blue channels in `[0, 255]` and an alpha
    /// channel given as a percentage in `[0, 100]`.
    pub struct Rgba {
        /// The red channel.
        red: i32,
        /// The green channel.
        green: i32,
        /// The blue channel.
        blue: i32,
        /// The opacity in percent.
        alpha: i32,
    }
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 100);

    /// Return the red, green and blue channels without alpha.
    pub const fn rgb(&self) -> [i32; 3] {
        [self.red, self.green, self.blue]
    }

    /// Render as a CSS `rgba()` color, alpha mapped into `[0, 1]`.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.red,
            self.green,
            self.blue,
            self.alpha as f64 / 100.0
        )
    }
}

impl super::Model for Rgba {
    const MODEL: Models = Models::RGBA;
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}%",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_percent_alpha() {
        assert_eq!(Rgba::new(74, 126, 186, 70).to_string(), "74, 126, 186, 70%");
    }

    #[test]
    fn css_alpha_is_a_fraction() {
        assert_eq!(Rgba::new(1, 2, 3, 50).to_css(), "rgba(1,2,3,0.5)");
        assert_eq!(Rgba::BLACK.to_css(), "rgba(0,0,0,1)");
    }

    #[test]
    fn generated_constructors() {
        let c = Rgba::from([1, 2, 3, 4]);
        assert_eq!(c, Rgba::new(1, 2, 3, 4));
        assert_eq!(c.to_array(), [1, 2, 3, 4]);
        assert_eq!(c.rgb(), [1, 2, 3]);
    }
}
