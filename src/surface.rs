//! The drawing contract every color window renders through. A host binds each
//! window to two equally sized surfaces, one for the background and one for
//! the selector indicator, and hands them out through a [`SurfaceProvider`].

use std::collections::HashMap;

use crate::{
    math::{ClientPoint, Point, Size},
    Component,
};

/// An 8-bit color with straight (not premultiplied) alpha, as written to a
/// surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
    /// The opacity.
    pub alpha: u8,
}

impl Pixel {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    /// Create a pixel from all four channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create an opaque pixel.
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// Return this pixel with the opacity replaced by `alpha` in `[0, 1]`.
    pub fn with_alpha(self, alpha: Component) -> Self {
        Self {
            alpha: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// Interpolate every channel towards `other`.
    pub fn mix(self, other: Self, t: Component) -> Self {
        let channel = |a: u8, b: u8| {
            crate::math::lerp(a as Component, b as Component, t.clamp(0.0, 1.0)).round() as u8
        };
        Self::new(
            channel(self.red, other.red),
            channel(self.green, other.green),
            channel(self.blue, other.blue),
            channel(self.alpha, other.alpha),
        )
    }
}

/// A color stop of a linear gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: Component,
    /// Color at that position.
    pub color: Pixel,
}

/// How an area is painted.
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    /// A single color.
    Solid(Pixel),
    /// A linear gradient between two points, padded beyond them.
    Linear {
        /// Where offset 0 lies.
        start: Point,
        /// Where offset 1 lies.
        end: Point,
        /// The color stops, in increasing offset order.
        stops: Vec<GradientStop>,
    },
}

impl Fill {
    /// Create a linear gradient from `(offset, color)` pairs.
    pub fn linear(
        start: Point,
        end: Point,
        stops: impl IntoIterator<Item = (Component, Pixel)>,
    ) -> Self {
        Self::Linear {
            start,
            end,
            stops: stops
                .into_iter()
                .map(|(offset, color)| GradientStop { offset, color })
                .collect(),
        }
    }
}

/// Compositing applied when filling a whole surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Blend {
    /// Paint over the existing content.
    #[default]
    SourceOver,
    /// Keep the existing content only where the fill is opaque.
    DestinationIn,
    /// Keep whichever of existing content and fill does not overlap the
    /// other.
    Xor,
}

/// Per-corner radii of a rounded rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerRadius {
    /// Top left corner.
    pub upper_left: Component,
    /// Top right corner.
    pub upper_right: Component,
    /// Bottom left corner.
    pub lower_left: Component,
    /// Bottom right corner.
    pub lower_right: Component,
}

impl CornerRadius {
    /// The same radius on every corner.
    pub const fn uniform(radius: Component) -> Self {
        Self {
            upper_left: radius,
            upper_right: radius,
            lower_left: radius,
            lower_right: radius,
        }
    }

    /// Shrink any radius that does not fit twice into the shorter side.
    pub fn fit(self, size: Size) -> Self {
        let limit = size.width.min(size.height);
        let fit = |radius: Component| {
            if limit < 2.0 * radius {
                limit / 2.0
            } else {
                radius
            }
        };
        Self {
            upper_left: fit(self.upper_left),
            upper_right: fit(self.upper_right),
            lower_left: fit(self.lower_left),
            lower_right: fit(self.lower_right),
        }
    }
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self::uniform(7.0)
    }
}

/// Outlines used for clipping and stroking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// A rectangle anchored at the surface origin with rounded corners.
    RoundRect {
        /// Width and height.
        size: Size,
        /// Corner radii, already fitted to `size`.
        radius: CornerRadius,
    },
    /// A full circle.
    Circle {
        /// The center.
        center: Point,
        /// The radius.
        radius: Component,
    },
}

impl Shape {
    /// A rounded rectangle covering `size`, shrinking radii that don't fit.
    pub fn round_rect(size: Size, radius: CornerRadius) -> Self {
        Shape::RoundRect {
            size,
            radius: radius.fit(size),
        }
    }
}

/// A 2-D drawing surface.
pub trait Surface: Sized {
    /// Width and height in pixels.
    fn size(&self) -> Size;

    /// The top left corner of the surface in client coordinates, used to
    /// translate pointer events into surface coordinates.
    fn origin(&self) -> ClientPoint;

    /// Create a blank, transparent surface of the same size to be used as an
    /// offscreen layer.
    fn offscreen(&self) -> Self;

    /// Make every pixel transparent.
    fn clear(&mut self);

    /// Paint the whole surface.
    fn fill(&mut self, fill: &Fill, blend: Blend);

    /// Paint the inside of `shape` over the existing content.
    fn fill_shape(&mut self, shape: &Shape, fill: &Fill);

    /// Stroke the outline of `shape`.
    fn stroke_shape(&mut self, shape: &Shape, color: Pixel, width: Component);

    /// Keep the existing content only inside `shape`.
    fn clip(&mut self, shape: &Shape);

    /// Paint another surface of the same size over this one.
    fn draw_layer(&mut self, layer: &Self);

    /// Replace every pixel with the result of `shader`, which is called with
    /// the center of each pixel.
    fn shade(&mut self, shader: &dyn Fn(Point) -> Pixel);

    /// Read back a single pixel.
    fn pixel(&self, x: u32, y: u32) -> Option<Pixel>;

    /// The width in pixels.
    fn width(&self) -> Component {
        self.size().width
    }

    /// The height in pixels.
    fn height(&self) -> Component {
        self.size().height
    }
}

/// Hands out surfaces by the identifiers configured on a window.
pub trait SurfaceProvider<S: Surface> {
    /// Take the surface registered under `id`, if any.
    fn surface(&mut self, id: &str) -> Option<S>;
}

impl<S: Surface> SurfaceProvider<S> for HashMap<String, S> {
    fn surface(&mut self, id: &str) -> Option<S> {
        self.remove(id)
    }
}
