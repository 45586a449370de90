//! A [`ColorConverter`] holds one color in all five representations and keeps
//! them in sync. Whichever representation was set last is the authority, the
//! other four are always derived from it through [`Rgba`].

use std::str::FromStr;

use crate::{
    color::Models,
    models::{Cmyk, Hex, Hsl, Hsv, Model, Rgba},
    Result,
};

/// One color in every supported representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorConverter {
    rgba: Rgba,
    hsv: Hsv,
    hsl: Hsl,
    cmyk: Cmyk,
    hex: Hex,
    authority: Models,
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new(Rgba::BLACK)
    }
}

impl ColorConverter {
    /// Create a converter with the given color as the authority.
    pub fn new(rgba: Rgba) -> Self {
        let mut converter = Self {
            rgba,
            hsv: Hsv::default(),
            hsl: Hsl::default(),
            cmyk: Cmyk::default(),
            hex: Hex::default(),
            authority: Models::RGBA,
        };
        converter.set_rgba(rgba);
        converter
    }

    /// Set the color from red, green, blue and alpha channels.
    pub fn set_rgba(&mut self, rgba: Rgba) {
        self.rgba = rgba;
        self.derive_from_rgba(Rgba::MODEL);
    }

    /// Set the color from the HSV notation. Alpha is kept.
    pub fn set_hsv(&mut self, hsv: Hsv) {
        self.hsv = hsv;
        self.rgba = hsv.to_rgba(self.rgba.alpha);
        self.derive_from_rgba(Hsv::MODEL);
    }

    /// Set the color from the HSL notation. Alpha is kept.
    pub fn set_hsl(&mut self, hsl: Hsl) {
        self.hsl = hsl;
        self.rgba = hsl.to_rgba(self.rgba.alpha);
        self.derive_from_rgba(Hsl::MODEL);
    }

    /// Set the color from ink percentages. Alpha is kept.
    pub fn set_cmyk(&mut self, cmyk: Cmyk) {
        self.cmyk = cmyk;
        self.rgba = cmyk.to_rgba(self.rgba.alpha);
        self.derive_from_rgba(Cmyk::MODEL);
    }

    /// Set the color from the hexadecimal notation. Alpha is kept.
    pub fn set_hex(&mut self, hex: Hex) {
        self.hex = hex;
        self.rgba = hex.to_rgba(self.rgba.alpha);
        self.derive_from_rgba(Hex::MODEL);
    }

    /// Parse and set six hexadecimal digits. On error nothing changes.
    pub fn set_hex_str(&mut self, hex: &str) -> Result<()> {
        let hex = Hex::from_str(hex)?;
        self.set_hex(hex);
        Ok(())
    }

    /// Set only the alpha percentage. No other representation carries alpha,
    /// so nothing is derived.
    pub fn set_alpha(&mut self, alpha: i32) {
        self.rgba.alpha = alpha;
    }

    /// Recompute every model except `source` from the current RGBA value.
    fn derive_from_rgba(&mut self, source: Models) {
        let derived = source.derived();

        if derived.contains(Models::HSV) {
            self.hsv = self.rgba.to_hsv();
        }
        if derived.contains(Models::HSL) {
            self.hsl = self.rgba.to_hsl();
        }
        if derived.contains(Models::CMYK) {
            self.cmyk = self.rgba.to_cmyk();
        }
        if derived.contains(Models::HEX) {
            self.hex = self.rgba.to_hex();
        }

        self.authority = source;
        log::trace!("color set from {:?}: {}", source, self.rgba);
    }

    /// The current color as RGBA.
    pub fn rgba(&self) -> Rgba {
        self.rgba
    }

    /// The current color in the HSV notation.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// The current color in the HSL notation.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// The current color as ink percentages.
    pub fn cmyk(&self) -> Cmyk {
        self.cmyk
    }

    /// The current color in hexadecimal notation.
    pub fn hex(&self) -> Hex {
        self.hex
    }

    /// The hue shown on hue axes. An HSL authority keeps its own hue, which
    /// may differ from the derived HSV hue for achromatic colors.
    pub fn hue(&self) -> i32 {
        if self.authority == Models::HSL {
            self.hsl.hue
        } else {
            self.hsv.hue
        }
    }

    /// The representation that was set last.
    pub fn authority(&self) -> Models {
        self.authority
    }

    /// The display string of the given representation, e.g. `"#4A7EBA"` or
    /// `"212°, 60%, 73%"`. Returns `None` unless exactly one model is named.
    pub fn display(&self, model: Models) -> Option<String> {
        if model == Models::RGBA {
            Some(self.rgba.to_string())
        } else if model == Models::HSV {
            Some(self.hsv.to_string())
        } else if model == Models::HSL {
            Some(self.hsl.to_string())
        } else if model == Models::CMYK {
            Some(self.cmyk.to_string())
        } else if model == Models::HEX {
            Some(self.hex.to_string())
        } else {
            None
        }
    }
}
