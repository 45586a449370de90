use super::{Centering, Frame, Reading, Selector, WindowKind};
use crate::{
    converter::ColorConverter,
    math::{round, Point},
    surface::{Blend, Pixel, Surface},
    Component,
};

/// A strip fading the base color to black, read as HSV value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dimming;

impl<S: Surface> WindowKind<S> for Dimming {
    fn name(&self) -> &'static str {
        "dimming"
    }

    fn default_centering(&self) -> Centering {
        Centering::VERTICALLY
    }

    fn redraw(&mut self, frame: &mut Frame<'_, S>) {
        let Some(base) = frame.base_color else {
            return;
        };
        let gradient = frame.axis_gradient([(0.0, base.pixel()), (1.0, Pixel::BLACK)]);
        frame.surface.fill(&gradient, Blend::SourceOver);
        frame.clip_round_rect();
    }

    fn read(&self, selector: &Selector) -> Reading {
        let (offset, length) = selector.axis();
        Reading::Value(round(100.0 - 100.0 * (offset as f64 / length as f64)))
    }

    fn locate(&self, selector: &Selector, color: &ColorConverter) -> Point {
        let (_, length) = selector.axis();
        selector.on_axis(length - 1.0 - color.hsv().value as Component / 100.0 * length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        math::ClientPoint,
        models::Hsv,
        window::{BaseColor, Window, WindowConfig},
        PixmapSurface,
    };

    fn dimming() -> Window<PixmapSurface> {
        Window::from_surfaces(
            WindowConfig::default(),
            PixmapSurface::new(20, 200).unwrap(),
            PixmapSurface::new(20, 200).unwrap(),
            Dimming,
        )
        .unwrap()
    }

    #[test]
    fn nothing_is_drawn_without_a_base_color() {
        let window = dimming();
        assert_eq!(window.picker_surface().pixel(10, 100), Some(Pixel::TRANSPARENT));
    }

    #[test]
    fn fades_to_black() {
        let mut window = dimming();
        window.set_base_color(BaseColor::from_hue(0));
        window.redraw();

        let top = window.picker_surface().pixel(10, 1).unwrap();
        let bottom = window.picker_surface().pixel(10, 198).unwrap();
        assert!(top.red > 240);
        assert!(bottom.red < 15);
        assert_eq!(bottom.alpha, 255);
    }

    #[test]
    fn reads_and_locates_value() {
        let mut window = dimming();
        window.move_to(ClientPoint::new(0.0, 0.0), true);
        assert_eq!(window.reading(), Reading::Value(100));
        window.move_to(ClientPoint::new(0.0, 50.0), true);
        assert_eq!(window.reading(), Reading::Value(75));

        let mut color = ColorConverter::default();
        color.set_hsv(Hsv::new(0, 0, 73));
        window.place(&color);
        assert_eq!(window.position(), Point::new(10.0, 53.0));
        // Rounding pulls the reading one step up.
        assert_eq!(window.reading(), Reading::Value(74));

        color.set_hsv(Hsv::new(0, 0, 0));
        window.place(&color);
        assert_eq!(window.position(), Point::new(10.0, 199.0));
    }
}
