use super::{Centering, Frame, Reading, Selector, WindowKind};
use crate::{
    converter::ColorConverter,
    math::{round, Point},
    surface::{Blend, Pixel, Surface},
    Component,
};

/// The hue strip, red at both ends.
const STOPS: [(Component, Pixel); 7] = [
    (0.0, Pixel::opaque(255, 0, 0)),
    (0.2, Pixel::opaque(255, 0, 255)),
    (0.35, Pixel::opaque(0, 0, 255)),
    (0.5, Pixel::opaque(0, 255, 255)),
    (0.65, Pixel::opaque(0, 255, 0)),
    (0.8, Pixel::opaque(255, 255, 0)),
    (1.0, Pixel::opaque(255, 0, 0)),
];

/// A strip of every hue. The far end of the strip is hue 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rainbow;

impl<S: Surface> WindowKind<S> for Rainbow {
    fn name(&self) -> &'static str {
        "rainbow"
    }

    fn default_centering(&self) -> Centering {
        Centering::VERTICALLY
    }

    fn redraw(&mut self, frame: &mut Frame<'_, S>) {
        let gradient = frame.axis_gradient(STOPS);
        frame.surface.fill(&gradient, Blend::SourceOver);
        frame.clip_round_rect();
    }

    fn read(&self, selector: &Selector) -> Reading {
        let (offset, length) = selector.axis();
        let (offset, length) = (offset as f64, length as f64);
        Reading::Hue(round(-((offset + 1.0 - length) * 361.0) / length) % 360)
    }

    fn locate(&self, selector: &Selector, color: &ColorConverter) -> Point {
        let (_, length) = selector.axis();
        selector.on_axis(length - color.hue() as Component / 360.0 * length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        math::ClientPoint,
        models::Rgba,
        window::{Window, WindowConfig},
        PixmapSurface,
    };

    fn rainbow() -> Window<PixmapSurface> {
        Window::from_surfaces(
            WindowConfig::default(),
            PixmapSurface::new(20, 200).unwrap(),
            PixmapSurface::new(20, 200).unwrap(),
            Rainbow,
        )
        .unwrap()
    }

    #[test]
    fn defaults_to_a_vertical_strip() {
        let window = rainbow();
        assert_eq!(window.config().centering, Centering::VERTICALLY);
        assert_eq!(window.position(), Point::new(10.0, 100.0));
    }

    #[test]
    fn reads_hue_from_the_far_end() {
        let mut window = rainbow();
        window.move_to(ClientPoint::new(3.0, 199.0), true);
        assert_eq!(window.position(), Point::new(10.0, 199.0));
        assert_eq!(window.reading(), Reading::Hue(0));

        window.move_to(ClientPoint::new(3.0, 0.0), true);
        assert_eq!(window.reading(), Reading::Hue(359));

        window.move_to(ClientPoint::new(3.0, 82.0), true);
        assert_eq!(window.reading(), Reading::Hue(211));
    }

    #[test]
    fn long_strip_wraps_at_the_near_end() {
        let mut window = Window::from_surfaces(
            WindowConfig::default(),
            PixmapSurface::new(20, 300).unwrap(),
            PixmapSurface::new(20, 300).unwrap(),
            Rainbow,
        )
        .unwrap();
        window.move_to(ClientPoint::new(3.0, 0.0), true);
        assert_eq!(window.reading(), Reading::Hue(0));

        window.move_to(ClientPoint::new(3.0, 1.0), true);
        assert_eq!(window.reading(), Reading::Hue(359));
    }

    #[test]
    fn locates_hue() {
        let mut window = rainbow();
        window.place(&ColorConverter::new(Rgba::new(74, 126, 186, 70)));
        assert_eq!(window.position(), Point::new(10.0, 82.0));
    }

    #[test]
    fn horizontal_strip_runs_along_x() {
        let mut window = Window::from_surfaces(
            WindowConfig::default().with_centering(Centering::HORIZONTALLY),
            PixmapSurface::new(200, 20).unwrap(),
            PixmapSurface::new(200, 20).unwrap(),
            Rainbow,
        )
        .unwrap();
        window.move_to(ClientPoint::new(199.0, 3.0), false);
        assert_eq!(window.position(), Point::new(199.0, 10.0));
        assert_eq!(window.reading(), Reading::Hue(0));

        // The gradient runs left to right, red first.
        let left = window.picker_surface().pixel(10, 10).unwrap();
        assert!(left.red > 200 && left.green < 30);
    }

    #[test]
    fn paints_hues_top_to_bottom() {
        let window = rainbow();
        let surface = window.picker_surface();

        let top = surface.pixel(10, 1).unwrap();
        assert!(top.red > 240 && top.green < 10 && top.blue < 30);

        let middle = surface.pixel(10, 99).unwrap();
        assert!(middle.red < 20 && middle.green > 230 && middle.blue > 230);

        // Rounded corners are cut away.
        assert!(surface.pixel(0, 0).unwrap().alpha < 128);
    }
}
