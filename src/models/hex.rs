//! Hexadecimal RGB notation. Not a color model of its own, but a packed
//! rendering of the red, green and blue channels.

use std::{fmt, str::FromStr};

use crate::{color::Models, Error};

/// Six hexadecimal digits packing red, green and blue, without the leading
/// `#`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hex {
    value: u32,
}

impl Hex {
    const MASK: u32 = 0xFF_FFFF;

    /// Pack the given channels as `blue | green << 8 | red << 16`. Bits
    /// outside the 24-bit range are discarded.
    pub const fn from_rgb(red: i32, green: i32, blue: i32) -> Self {
        let value = (blue as u32) | ((green as u32) << 8) | ((red as u32) << 16);
        Self {
            value: value & Self::MASK,
        }
    }

    /// Create from an already packed 24-bit value.
    pub const fn from_value(value: u32) -> Self {
        Self {
            value: value & Self::MASK,
        }
    }

    /// The packed 24-bit value.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Unpack into red, green and blue channels.
    pub const fn to_rgb(&self) -> [i32; 3] {
        [
            ((self.value >> 16) & 255) as i32,
            ((self.value >> 8) & 255) as i32,
            (self.value & 255) as i32,
        ]
    }

    /// The six uppercase digits without a leading `#`.
    pub fn digits(&self) -> String {
        // Adding 0x1000000 forces a seventh digit that is then dropped, which
        // zero pads the remaining six.
        let padded = format!("{:X}", 0x100_0000 + self.value);
        padded[1..].to_owned()
    }
}

impl super::Model for Hex {
    const MODEL: Models = Models::HEX;
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.digits())
    }
}

impl FromStr for Hex {
    type Err = Error;

    /// Parse exactly six hexadecimal digits, optionally preceded by `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(s.to_owned()));
        }

        u32::from_str_radix(digits, 16)
            .map(Self::from_value)
            .map_err(|_| Error::InvalidHex(s.to_owned()))
    }
}
