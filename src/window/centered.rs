use super::{Frame, Reading, Selector, WindowKind};
use crate::{
    converter::ColorConverter,
    math::{round, Point},
    surface::{Blend, Pixel, Surface},
    Component,
};

/// HSL saturation falls to the right and lightness falls to the bottom, so
/// the pure base color sits in the middle of the left edge.
#[derive(Clone, Debug)]
pub struct Centered<S> {
    tint: Option<S>,
}

impl<S> Default for Centered<S> {
    fn default() -> Self {
        Self { tint: None }
    }
}

impl<S: Surface> WindowKind<S> for Centered<S> {
    fn name(&self) -> &'static str {
        "centered"
    }

    fn init(&mut self, frame: &mut Frame<'_, S>) {
        self.tint = Some(frame.surface.offscreen());
    }

    fn redraw(&mut self, frame: &mut Frame<'_, S>) {
        let Some(base) = frame.base_color else {
            return;
        };
        let base = base.pixel();

        if let Some(tint) = &mut self.tint {
            tint.clear();
            tint.fill(
                &frame.vertical_gradient([
                    (0.0, Pixel::WHITE),
                    (0.5, base),
                    (1.0, Pixel::BLACK),
                ]),
                Blend::SourceOver,
            );
            tint.fill(
                &frame.horizontal_gradient([(0.0, base), (1.0, base.with_alpha(0.0))]),
                Blend::DestinationIn,
            );
        }

        let gray = frame.vertical_gradient([(0.0, Pixel::WHITE), (1.0, Pixel::BLACK)]);
        frame.surface.fill(&gray, Blend::SourceOver);
        if let Some(tint) = &self.tint {
            frame.surface.draw_layer(tint);
        }
        frame.clip_round_rect();
    }

    fn read(&self, selector: &Selector) -> Reading {
        let (x, y) = selector.position().cast::<f64>().to_tuple();
        let size = selector.size().cast::<f64>();
        Reading::SaturationLightness {
            saturation: round(100.0 - x / size.width * 100.0),
            lightness: round(100.0 - y / size.height * 100.0),
        }
    }

    fn locate(&self, selector: &Selector, color: &ColorConverter) -> Point {
        let hsl = color.hsl();
        let size = selector.size();
        Point::new(
            size.width - hsl.saturation as Component / 100.0 * size.width,
            size.height - hsl.lightness as Component / 100.0 * size.height,
        )
    }
}
