use super::{Centering, Frame, Reading, Selector, WindowKind};
use crate::{
    converter::ColorConverter,
    math::{round, Point},
    surface::{Blend, Pixel, Surface},
    Component,
};

/// A strip fading the base color in over a checkerboard, read as opacity.
#[derive(Clone, Debug)]
pub struct Alpha<S> {
    block_size: u32,
    block_fill: Pixel,
    checkerboard: Option<S>,
}

impl<S> Default for Alpha<S> {
    fn default() -> Self {
        Self::new(5, Pixel::opaque(0xCC, 0xCC, 0xCC))
    }
}

impl<S> Alpha<S> {
    /// Use checkerboard blocks of `block_size` pixels, alternating white and
    /// `block_fill`.
    pub fn new(block_size: u32, block_fill: Pixel) -> Self {
        Self {
            block_size: block_size.max(1),
            block_fill,
            checkerboard: None,
        }
    }
}

impl<S: Surface> WindowKind<S> for Alpha<S> {
    fn name(&self) -> &'static str {
        "alpha"
    }

    fn default_centering(&self) -> Centering {
        Centering::VERTICALLY
    }

    fn init(&mut self, frame: &mut Frame<'_, S>) {
        let block_size = self.block_size as Component;
        let block_fill = self.block_fill;

        let mut layer = frame.surface.offscreen();
        layer.shade(&|p| {
            let column = (p.x / block_size).floor() as i64;
            let row = (p.y / block_size).floor() as i64;
            if (column + row) % 2 == 1 {
                block_fill
            } else {
                Pixel::WHITE
            }
        });
        self.checkerboard = Some(layer);
    }

    fn redraw(&mut self, frame: &mut Frame<'_, S>) {
        let Some(base) = frame.base_color else {
            return;
        };
        if let Some(checkerboard) = &self.checkerboard {
            frame.surface.draw_layer(checkerboard);
        }
        let base = base.pixel();
        let gradient = frame.axis_gradient([(0.0, base.with_alpha(0.0)), (1.0, base)]);
        frame.surface.fill(&gradient, Blend::SourceOver);
        frame.clip_round_rect();
    }

    fn read(&self, selector: &Selector) -> Reading {
        let (offset, length) = selector.axis();
        let (offset, length) = (offset as f64, length as f64);
        Reading::Alpha(round(offset / (length / 100.0)))
    }

    fn locate(&self, selector: &Selector, color: &ColorConverter) -> Point {
        let (_, length) = selector.axis();
        selector.on_axis(color.rgba().alpha as Component / 100.0 * length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        math::ClientPoint,
        models::Rgba,
        window::{BaseColor, Window, WindowConfig},
        PixmapSurface,
    };

    fn alpha() -> Window<PixmapSurface> {
        Window::from_surfaces(
            WindowConfig::default(),
            PixmapSurface::new(20, 200).unwrap(),
            PixmapSurface::new(20, 200).unwrap(),
            Alpha::default(),
        )
        .unwrap()
    }

    #[test]
    fn checkerboard_then_base_color() {
        let mut window = alpha();
        assert_eq!(window.picker_surface().pixel(10, 100), Some(Pixel::TRANSPARENT));

        window.set_base_color(BaseColor::from_hue(240));
        window.redraw();
        let surface = window.picker_surface();

        // The top is almost transparent, so the checkerboard shows through.
        let block = surface.pixel(7, 2).unwrap();
        assert!((195..=210).contains(&block.red));
        assert_eq!(block.alpha, 255);
        let blank = surface.pixel(12, 2).unwrap();
        assert!(blank.red > 245 && blank.green > 245);

        let bottom = surface.pixel(10, 197).unwrap();
        assert_eq!(bottom.alpha, 255);
        assert!(bottom.blue > 240 && bottom.red < 15);
    }

    #[test]
    fn reads_and_locates_alpha() {
        let mut window = alpha();
        window.move_to(ClientPoint::new(5.0, 100.0), true);
        assert_eq!(window.position(), Point::new(10.0, 100.0));
        assert_eq!(window.reading(), Reading::Alpha(50));

        window.move_to(ClientPoint::new(5.0, 1000.0), true);
        assert_eq!(window.reading(), Reading::Alpha(100));

        window.place(&ColorConverter::new(Rgba::new(74, 126, 186, 70)));
        assert_eq!(window.position(), Point::new(10.0, 140.0));
        assert_eq!(window.reading(), Reading::Alpha(70));
    }

    #[test]
    fn short_strip_reads_in_double_precision() {
        let mut window = Window::from_surfaces(
            WindowConfig::default(),
            PixmapSurface::new(20, 56).unwrap(),
            PixmapSurface::new(20, 56).unwrap(),
            Alpha::default(),
        )
        .unwrap();
        window.move_to(ClientPoint::new(5.0, 7.0), true);
        assert_eq!(window.reading(), Reading::Alpha(12));
    }
}
