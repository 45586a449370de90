//! The five color representations kept in sync by the
//! [`ColorConverter`](crate::ColorConverter). Every channel is an integer and
//! every conversion rounds immediately.

use std::fmt::Display;

use crate::color::Models;

pub mod cmyk;
pub mod hex;
pub mod hsl;
pub mod hsv;
pub mod rgba;

pub use cmyk::Cmyk;
pub use hex::Hex;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgba::Rgba;

/// A trait implemented by every color representation.
pub trait Model: Copy + Display {
    /// The flag naming this representation.
    const MODEL: Models;
}
