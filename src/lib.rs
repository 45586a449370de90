//! colorwin keeps a color in sync across the RGBA, HSV, HSL, CMYK and hex
//! notations and provides the interactive windows a color picker is built
//! from: squares, wheels and strips that map a selector position to color
//! channels and back.

#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
mod test;

mod color;
mod convert;
mod converter;
mod error;
pub mod math;
pub mod models;
mod picker;
mod pixmap;
pub mod surface;
pub mod window;

pub use color::{Component, Models};
pub use converter::ColorConverter;
pub use error::{Error, Result};
pub use models::{Cmyk, Hex, Hsl, Hsv, Model, Rgba};
pub use picker::{Layout, Picker, PickerConfig, Role};
pub use pixmap::PixmapSurface;
pub use surface::{Surface, SurfaceProvider};
pub use window::{Window, WindowConfig, WindowKind};
