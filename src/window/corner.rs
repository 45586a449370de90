use super::{Frame, Reading, Selector, WindowKind};
use crate::{
    converter::ColorConverter,
    math::{round, Point},
    surface::{Blend, Pixel, Surface},
    Component,
};

/// Saturation grows to the right and value to the top, so the pure base color
/// sits in the top right corner.
#[derive(Clone, Debug)]
pub struct Corner<S> {
    shading: Option<S>,
}

impl<S> Default for Corner<S> {
    fn default() -> Self {
        Self { shading: None }
    }
}

impl<S: Surface> WindowKind<S> for Corner<S> {
    fn name(&self) -> &'static str {
        "corner"
    }

    fn initial_position(&self, selector: &Selector) -> Point {
        let size = selector.size();
        Point::new(size.width - 1.0, size.height - 1.0)
    }

    fn init(&mut self, frame: &mut Frame<'_, S>) {
        let mut layer = frame.surface.offscreen();
        let white_to_black = frame.vertical_gradient([(0.0, Pixel::WHITE), (1.0, Pixel::BLACK)]);
        layer.fill(&white_to_black, Blend::SourceOver);
        let fade = frame.horizontal_gradient([(0.0, Pixel::TRANSPARENT), (1.0, Pixel::BLACK)]);
        layer.fill(&fade, Blend::Xor);
        self.shading = Some(layer);
    }

    fn redraw(&mut self, frame: &mut Frame<'_, S>) {
        let Some(base) = frame.base_color else {
            return;
        };
        let gradient = frame.vertical_gradient([(0.0, base.pixel()), (1.0, Pixel::BLACK)]);
        frame.surface.fill(&gradient, Blend::SourceOver);
        if let Some(shading) = &self.shading {
            frame.surface.draw_layer(shading);
        }
        frame.clip_round_rect();
    }

    fn read(&self, selector: &Selector) -> Reading {
        let (x, y) = selector.position().cast::<f64>().to_tuple();
        let size = selector.size().cast::<f64>();
        Reading::SaturationValue {
            saturation: round(x / size.width * 100.0),
            value: round(-((y - size.height) * 100.0) / size.height),
        }
    }

    fn locate(&self, selector: &Selector, color: &ColorConverter) -> Point {
        let hsv = color.hsv();
        let size = selector.size();
        Point::new(
            hsv.saturation as Component / 100.0 * size.width,
            size.height - hsv.value as Component / 100.0 * size.height,
        )
    }
}
