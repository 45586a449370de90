use super::{Frame, Reading, Selector, WindowKind};
use crate::{
    converter::ColorConverter,
    math::{self, round, Point},
    models::Hsl,
    surface::{Fill, Pixel, Shape, Surface},
    Component,
};

/// A hue wheel. The angle around the center is the hue and the distance from
/// the center is the saturation. The selector moves freely but never leaves
/// the wheel.
#[derive(Clone, Debug)]
pub struct Circular<S> {
    wheel: Option<S>,
    degree: i32,
    distance: Component,
    dimming_factor: Component,
}

impl<S> Default for Circular<S> {
    fn default() -> Self {
        Self {
            wheel: None,
            degree: 0,
            distance: 0.0,
            dimming_factor: 0.0,
        }
    }
}

impl<S> Circular<S> {
    /// Angle of the selector around the center, in whole degrees.
    pub fn degree(&self) -> i32 {
        self.degree
    }

    /// Distance of the selector from the center.
    pub fn distance(&self) -> Component {
        self.distance
    }

    /// How dark the wheel is drawn.
    pub fn dimming_factor(&self) -> Component {
        self.dimming_factor
    }

    fn radius(selector: &Selector) -> Component {
        selector.size().width / 2.0
    }
}

impl<S: Surface> WindowKind<S> for Circular<S> {
    fn name(&self) -> &'static str {
        "circular"
    }

    fn initial_position(&self, selector: &Selector) -> Point {
        let size = selector.size();
        Point::new(size.width - 1.0, size.height - 1.0)
    }

    fn init(&mut self, frame: &mut Frame<'_, S>) {
        let size = frame.size();
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let reach = size.width / 2.0;
        let rim = reach - 1.0;

        let mut wheel = frame.surface.offscreen();
        wheel.shade(&|p| {
            let distance = (p - center).length();
            if distance > rim {
                return Pixel::TRANSPARENT;
            }
            let hue = round(math::angle(center, p) as f64) % 360;
            let [red, green, blue] = Hsl::new(hue, 100, 50)
                .to_rgba(100)
                .rgb()
                .map(|channel| channel.clamp(0, 255) as u8);
            Pixel::WHITE.mix(Pixel::opaque(red, green, blue), distance / reach)
        });
        self.wheel = Some(wheel);
    }

    fn redraw(&mut self, frame: &mut Frame<'_, S>) {
        let size = frame.size();
        frame.surface.clear();
        if let Some(wheel) = &self.wheel {
            frame.surface.draw_layer(wheel);
        }
        frame.surface.fill_shape(
            &Shape::Circle {
                center: Point::new(size.width / 2.0, size.height / 2.0),
                radius: size.width / 2.0 - 1.0,
            },
            &Fill::Solid(Pixel::BLACK.with_alpha(self.dimming_factor)),
        );
    }

    fn settle(&mut self, selector: &Selector, point: Point) -> Point {
        let center = selector.center();
        self.degree = round(math::angle(center, point) as f64) % 360;
        let (point, distance) = math::clamp_to_circle(center, point, Self::radius(selector));
        self.distance = distance;
        point
    }

    fn read(&self, selector: &Selector) -> Reading {
        Reading::HueSaturation {
            hue: self.degree,
            saturation: round(100.0 * self.distance as f64 / Self::radius(selector) as f64),
        }
    }

    fn locate(&self, selector: &Selector, color: &ColorConverter) -> Point {
        let center = selector.center();
        let radius = color.hsv().saturation as Component / 100.0 * Self::radius(selector);
        math::rotate(
            center,
            Point::new(center.x + radius, center.y),
            -(color.hue() as Component),
        )
    }

    fn polar(&self) -> Option<(i32, Component)> {
        Some((self.degree, self.distance))
    }

    fn set_dimming(&mut self, factor: Component) {
        self.dimming_factor = factor.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        math::ClientPoint,
        models::Hsv,
        window::{Window, WindowConfig},
        PixmapSurface,
    };

    fn circular() -> Window<PixmapSurface> {
        Window::from_surfaces(
            WindowConfig::default(),
            PixmapSurface::new(200, 200).unwrap(),
            PixmapSurface::new(200, 200).unwrap(),
            Circular::default(),
        )
        .unwrap()
    }

    #[test]
    fn starts_on_the_rim() {
        let window = circular();
        assert_eq!(window.degree(), Some(45));
        assert_component_eq!(window.distance().unwrap(), 100.0);
    }

    #[test]
    fn moves_stay_inside_the_wheel() {
        let mut window = circular();
        window.move_to(ClientPoint::new(150.0, 100.0), true);
        assert_eq!(window.position(), Point::new(150.0, 100.0));
        assert_eq!(
            window.reading(),
            Reading::HueSaturation {
                hue: 0,
                saturation: 50
            }
        );

        window.move_to(ClientPoint::new(100.0, -300.0), true);
        assert_component_eq!(window.position().x, 100.0);
        assert_component_eq!(window.position().y, 0.0);
        assert_eq!(
            window.reading(),
            Reading::HueSaturation {
                hue: 270,
                saturation: 100
            }
        );
    }

    #[test]
    fn positions_are_not_rounded() {
        let mut window = circular();
        window.move_to(ClientPoint::new(120.25, 100.0), false);
        assert_component_eq!(window.position().x, 120.25);
        assert_component_eq!(window.distance().unwrap(), 20.25);
    }

    #[test]
    fn locate_round_trips() {
        let mut window = circular();
        let mut color = ColorConverter::default();
        for (hue, saturation) in [(0, 50), (90, 100), (212, 60), (300, 20)] {
            color.set_hsv(Hsv::new(hue, saturation, 80));
            window.place(&color);
            assert_eq!(
                window.reading(),
                Reading::HueSaturation { hue, saturation }
            );
        }
    }

    #[test]
    fn paints_a_hue_wheel() {
        let window = circular();
        let surface = window.picker_surface();

        let center = surface.pixel(100, 100).unwrap();
        assert!(center.red > 245 && center.green > 245 && center.blue > 245);

        let red = surface.pixel(190, 100).unwrap();
        assert!(red.red > 240 && red.green < 60 && red.blue < 60);

        let blue = surface.pixel(100, 10).unwrap();
        assert!(blue.blue > 240 && blue.green < 60);

        assert_eq!(surface.pixel(1, 1).unwrap().alpha, 0);
    }

    #[test]
    fn dimming_darkens_the_wheel() {
        let mut window = circular();
        window.set_dimming(0.5);
        window.redraw();

        let center = window.picker_surface().pixel(100, 100).unwrap();
        assert!((120..=135).contains(&center.red));
        assert_eq!(center.alpha, 255);
    }
}
