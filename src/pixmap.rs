//! A software [`Surface`] backed by a `tiny-skia` pixmap.

use image::RgbaImage;
use log::warn;
use tiny_skia::{
    BlendMode, ColorU8, FillRule, Mask, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Rect,
    SpreadMode, Stroke, Transform,
};

use crate::{
    error::{Error, Result},
    math::{ClientPoint, Point, Size},
    surface::{Blend, Fill, Pixel, Shape, Surface},
    Component,
};

/// A surface drawing into memory.
#[derive(Clone, Debug)]
pub struct PixmapSurface {
    pixmap: Pixmap,
    origin: ClientPoint,
}

impl PixmapSurface {
    /// Create a transparent surface placed at the client origin.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(Error::EmptySurface { width, height })?;
        Ok(Self {
            pixmap,
            origin: ClientPoint::origin(),
        })
    }

    /// Place the surface at `origin` in client coordinates.
    pub fn with_origin(mut self, origin: ClientPoint) -> Self {
        self.origin = origin;
        self
    }

    /// Move the surface, e.g. after the host layout changed.
    pub fn set_origin(&mut self, origin: ClientPoint) {
        self.origin = origin;
    }

    /// The underlying pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Copy the content into an image with straight alpha.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.pixmap.width(), self.pixmap.height(), |x, y| {
            let Pixel {
                red,
                green,
                blue,
                alpha,
            } = self.pixel(x, y).unwrap_or_default();
            image::Rgba([red, green, blue, alpha])
        })
    }

    fn whole(&self) -> Option<Rect> {
        Rect::from_xywh(
            0.0,
            0.0,
            self.pixmap.width() as f32,
            self.pixmap.height() as f32,
        )
    }
}

fn convert_color(pixel: Pixel) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(pixel.red, pixel.green, pixel.blue, pixel.alpha)
}

fn convert_point(point: Point) -> tiny_skia::Point {
    tiny_skia::Point::from_xy(point.x as f32, point.y as f32)
}

fn convert_blend(blend: Blend) -> BlendMode {
    match blend {
        Blend::SourceOver => BlendMode::SourceOver,
        Blend::DestinationIn => BlendMode::DestinationIn,
        Blend::Xor => BlendMode::Xor,
    }
}

fn convert_fill(fill: &Fill) -> Option<tiny_skia::Shader<'static>> {
    match fill {
        Fill::Solid(color) => Some(tiny_skia::Shader::SolidColor(convert_color(*color))),
        Fill::Linear { start, end, stops } => {
            let shader = tiny_skia::LinearGradient::new(
                convert_point(*start),
                convert_point(*end),
                stops
                    .iter()
                    .map(|stop| {
                        tiny_skia::GradientStop::new(stop.offset as f32, convert_color(stop.color))
                    })
                    .collect(),
                SpreadMode::Pad,
                Transform::identity(),
            );
            if shader.is_none() {
                warn!("skipping degenerate gradient from {start:?} to {end:?}");
            }
            shader
        }
    }
}

fn build_path(shape: &Shape) -> Option<Path> {
    match *shape {
        Shape::RoundRect { size, radius } => {
            let (width, height) = (size.width as f32, size.height as f32);
            let upper_left = radius.upper_left as f32;
            let upper_right = radius.upper_right as f32;
            let lower_left = radius.lower_left as f32;
            let lower_right = radius.lower_right as f32;

            let mut builder = PathBuilder::new();
            builder.move_to(upper_left, 0.0);
            builder.line_to(width - upper_right, 0.0);
            builder.quad_to(width, 0.0, width, upper_right);
            builder.line_to(width, height - lower_right);
            builder.quad_to(width, height, width - lower_right, height);
            builder.line_to(lower_left, height);
            builder.quad_to(0.0, height, 0.0, height - lower_left);
            builder.line_to(0.0, upper_left);
            builder.quad_to(0.0, 0.0, upper_left, 0.0);
            builder.close();
            builder.finish()
        }
        Shape::Circle { center, radius } => {
            PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
        }
    }
}

impl Surface for PixmapSurface {
    fn size(&self) -> Size {
        Size::new(
            self.pixmap.width() as Component,
            self.pixmap.height() as Component,
        )
    }

    fn origin(&self) -> ClientPoint {
        self.origin
    }

    fn offscreen(&self) -> Self {
        let mut layer = self.clone();
        layer.clear();
        layer
    }

    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn fill(&mut self, fill: &Fill, blend: Blend) {
        let (Some(shader), Some(rect)) = (convert_fill(fill), self.whole()) else {
            return;
        };
        let paint = Paint {
            shader,
            blend_mode: convert_blend(blend),
            ..Default::default()
        };
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    fn fill_shape(&mut self, shape: &Shape, fill: &Fill) {
        let (Some(shader), Some(path)) = (convert_fill(fill), build_path(shape)) else {
            return;
        };
        let paint = Paint {
            shader,
            anti_alias: true,
            ..Default::default()
        };
        self.pixmap.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn stroke_shape(&mut self, shape: &Shape, color: Pixel, width: Component) {
        let Some(path) = build_path(shape) else {
            return;
        };
        let paint = Paint {
            shader: tiny_skia::Shader::SolidColor(convert_color(color)),
            anti_alias: true,
            ..Default::default()
        };
        let stroke = Stroke {
            width: width as f32,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn clip(&mut self, shape: &Shape) {
        let Some(path) = build_path(shape) else {
            return;
        };
        let Some(mut mask) = Mask::new(self.pixmap.width(), self.pixmap.height()) else {
            return;
        };
        mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
        self.pixmap.apply_mask(&mask);
    }

    fn draw_layer(&mut self, layer: &Self) {
        self.pixmap.draw_pixmap(
            0,
            0,
            layer.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    fn shade(&mut self, shader: &dyn Fn(Point) -> Pixel) {
        let width = self.pixmap.width() as usize;
        for (index, pixel) in self.pixmap.pixels_mut().iter_mut().enumerate() {
            let center = Point::new(
                (index % width) as Component + 0.5,
                (index / width) as Component + 0.5,
            );
            let Pixel {
                red,
                green,
                blue,
                alpha,
            } = shader(center);
            *pixel = ColorU8::from_rgba(red, green, blue, alpha).premultiply();
        }
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.pixmap.width() || y >= self.pixmap.height() {
            return None;
        }
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some(Pixel::new(
            color.red(),
            color.green(),
            color.blue(),
            color.alpha(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CornerRadius;

    #[test]
    fn empty_surface_is_an_error() {
        assert_eq!(
            PixmapSurface::new(0, 10).unwrap_err(),
            Error::EmptySurface {
                width: 0,
                height: 10
            }
        );
    }

    #[test]
    fn solid_fill_and_clear() {
        let mut surface = PixmapSurface::new(8, 8).unwrap();
        surface.fill(&Fill::Solid(Pixel::opaque(10, 20, 30)), Blend::SourceOver);
        assert_eq!(surface.pixel(3, 3), Some(Pixel::opaque(10, 20, 30)));

        surface.clear();
        assert_eq!(surface.pixel(3, 3).unwrap().alpha, 0);
        assert!(surface.pixel(8, 0).is_none());
        assert!(surface.pixel(0, 8).is_none());
    }

    #[test]
    fn vertical_gradient_runs_top_to_bottom() {
        let mut surface = PixmapSurface::new(4, 100).unwrap();
        surface.fill(
            &Fill::linear(
                Point::new(2.0, 0.0),
                Point::new(2.0, 100.0),
                [(0.0, Pixel::WHITE), (1.0, Pixel::BLACK)],
            ),
            Blend::SourceOver,
        );
        let top = surface.pixel(1, 0).unwrap();
        let bottom = surface.pixel(1, 99).unwrap();
        assert!(top.red > 240);
        assert!(bottom.red < 15);
        assert_eq!(bottom.alpha, 255);
    }

    #[test]
    fn destination_in_keeps_only_the_mask() {
        let mut surface = PixmapSurface::new(10, 10).unwrap();
        surface.fill(&Fill::Solid(Pixel::WHITE), Blend::SourceOver);
        surface.fill(&Fill::Solid(Pixel::WHITE.with_alpha(0.0)), Blend::DestinationIn);
        assert_eq!(surface.pixel(5, 5).unwrap().alpha, 0);
    }

    #[test]
    fn round_rect_clip_cuts_corners() {
        let mut surface = PixmapSurface::new(40, 40).unwrap();
        surface.fill(&Fill::Solid(Pixel::WHITE), Blend::SourceOver);
        surface.clip(&Shape::round_rect(surface.size(), CornerRadius::default()));

        assert!(surface.pixel(0, 0).unwrap().alpha < 128);
        assert_eq!(surface.pixel(20, 20), Some(Pixel::WHITE));
    }

    #[test]
    fn shade_sees_pixel_centers() {
        let mut surface = PixmapSurface::new(3, 2).unwrap();
        surface.shade(&|p| {
            if p.x > 2.0 && p.y > 1.0 {
                Pixel::opaque(255, 0, 0)
            } else {
                Pixel::TRANSPARENT
            }
        });
        assert_eq!(surface.pixel(2, 1), Some(Pixel::opaque(255, 0, 0)));
        assert_eq!(surface.pixel(1, 1).unwrap().alpha, 0);
    }

    #[test]
    fn layers_and_images() {
        let mut surface = PixmapSurface::new(4, 4)
            .unwrap()
            .with_origin(ClientPoint::new(10.0, 20.0));
        let mut layer = surface.offscreen();
        assert_eq!(layer.origin(), ClientPoint::new(10.0, 20.0));

        layer.fill(&Fill::Solid(Pixel::opaque(0, 0, 255)), Blend::SourceOver);
        surface.draw_layer(&layer);

        let image = surface.to_image();
        assert_eq!(image.dimensions(), (4, 4));
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 255, 255]);
    }

    #[test]
    fn stroked_circle_leaves_center_untouched() {
        let mut surface = PixmapSurface::new(40, 40).unwrap();
        surface.stroke_shape(
            &Shape::Circle {
                center: Point::new(20.0, 20.0),
                radius: 9.0,
            },
            Pixel::WHITE,
            4.0,
        );
        assert_eq!(surface.pixel(20, 20).unwrap().alpha, 0);
        assert!(surface.pixel(29, 20).unwrap().alpha > 200);
    }
}
