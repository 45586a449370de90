//! Conversions between the color models. Every conversion goes either from
//! [`Rgba`] to another model or from another model back to [`Rgba`], so a
//! value is never more than one rounding step away from its source.
//!
//! Intermediate math is done in `f64` regardless of the `f64` feature so that
//! the rounded integer results do not depend on the build configuration.
//!
//! NOTE: [`Hsv::to_rgba`] floors its channels while every other conversion
//!       rounds to the nearest integer. Changing this changes the output for
//!       a large share of inputs.

use crate::models::{Cmyk, Hex, Hsl, Hsv, Rgba};

impl Rgba {
    /// Convert to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        let (hue, min, max) = util::hue_with_min_max(self);
        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        Hsv::new(
            util::round(hue * 360.0),
            util::round(saturation * 100.0),
            util::round(max * 100.0),
        )
    }

    /// Convert to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let (hue, min, max) = util::hue_with_min_max(self);
        let delta = max - min;
        let lightness = (max + min) / 2.0;

        let saturation = if max == min {
            0.0
        } else if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        Hsl::new(
            util::round(hue * 360.0),
            util::round(saturation * 100.0),
            util::round(lightness * 100.0),
        )
    }

    /// Convert to cyan, magenta, yellow and black inks.
    pub fn to_cmyk(&self) -> Cmyk {
        let [red, green, blue] = util::normalized(self);

        let black = (1.0 - red).min(1.0 - green).min(1.0 - blue);

        // Pure black has no chromatic inks.
        let [cyan, magenta, yellow] = if black == 1.0 {
            [0.0; 3]
        } else {
            [red, green, blue].map(|channel| (1.0 - channel - black) / (1.0 - black))
        };

        Cmyk::new(
            util::round(cyan * 100.0),
            util::round(magenta * 100.0),
            util::round(yellow * 100.0),
            util::round(black * 100.0),
        )
    }

    /// Pack the channels into the hexadecimal notation. Alpha is dropped.
    pub fn to_hex(&self) -> Hex {
        Hex::from_rgb(self.red, self.green, self.blue)
    }
}

impl Hsv {
    /// Convert to red, green and blue channels, attaching the given alpha.
    pub fn to_rgba(&self, alpha: i32) -> Rgba {
        let hue = self.hue as f64 / 360.0;
        let saturation = self.saturation as f64 / 100.0;
        let value = self.value as f64 / 100.0;

        let [red, green, blue] = if saturation == 0.0 {
            [value; 3]
        } else {
            let sector = (hue * 6.0).floor();
            let fraction = hue * 6.0 - sector;
            let p = value * (1.0 - saturation);
            let q = value * (1.0 - fraction * saturation);
            let t = value * (1.0 - (1.0 - fraction) * saturation);

            match (sector as i64).rem_euclid(6) {
                0 => [value, t, p],
                1 => [q, value, p],
                2 => [p, value, t],
                3 => [p, q, value],
                4 => [t, p, value],
                _ => [value, p, q],
            }
        };

        Rgba::new(
            (red * 255.0).floor() as i32,
            (green * 255.0).floor() as i32,
            (blue * 255.0).floor() as i32,
            alpha,
        )
    }
}

impl Hsl {
    /// Convert to red, green and blue channels, attaching the given alpha.
    pub fn to_rgba(&self, alpha: i32) -> Rgba {
        let hue = self.hue as f64 / 360.0;
        let saturation = self.saturation as f64 / 100.0;
        let lightness = self.lightness as f64 / 100.0;

        let [red, green, blue] = if saturation == 0.0 {
            [lightness; 3]
        } else {
            let q = if lightness < 0.5 {
                lightness * (1.0 + saturation)
            } else {
                lightness + saturation - lightness * saturation
            };
            let p = 2.0 * lightness - q;

            [
                util::hue_to_rgb(p, q, hue + 1.0 / 3.0),
                util::hue_to_rgb(p, q, hue),
                util::hue_to_rgb(p, q, hue - 1.0 / 3.0),
            ]
        };

        Rgba::new(
            util::round(red * 255.0),
            util::round(green * 255.0),
            util::round(blue * 255.0),
            alpha,
        )
    }
}

impl Cmyk {
    /// Convert to red, green and blue channels, attaching the given alpha.
    pub fn to_rgba(&self, alpha: i32) -> Rgba {
        let black = self.black as f64 / 100.0;
        let channel = |ink: i32| {
            let ink = ink as f64 / 100.0;
            util::round((1.0 - (ink * (1.0 - black) + black).min(1.0)) * 255.0)
        };

        Rgba::new(
            channel(self.cyan),
            channel(self.magenta),
            channel(self.yellow),
            alpha,
        )
    }
}

impl Hex {
    /// Unpack to red, green and blue channels, attaching the given alpha.
    pub fn to_rgba(&self, alpha: i32) -> Rgba {
        let [red, green, blue] = self.to_rgb();
        Rgba::new(red, green, blue, alpha)
    }
}

mod util {
    use crate::models::Rgba;

    /// Round half up to the nearest integer.
    pub fn round(value: f64) -> i32 {
        (value + 0.5).floor() as i32
    }

    pub fn normalized(rgba: &Rgba) -> [f64; 3] {
        rgba.rgb().map(|channel| channel as f64 / 255.0)
    }

    /// Calculate the hue as a fraction of a full turn and return it along with
    /// the min and max normalized channels. Achromatic colors have a hue of 0.
    pub fn hue_with_min_max(rgba: &Rgba) -> (f64, f64, f64) {
        let [red, green, blue] = normalized(rgba);

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let hue = if max == min {
            0.0
        } else if max == red {
            (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        (hue / 6.0, min, max)
    }

    /// Piecewise hue helper for HSL, `t` is wrapped into `[0, 1]` once.
    pub fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }
}
