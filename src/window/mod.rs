//! Color windows. A [`Window`] binds a background surface and a selector
//! surface of the same size, tracks where the selector is and turns pointer
//! input into selector moves. What the window looks like and what a selector
//! position means is decided by its [`WindowKind`].

mod alpha;
mod centered;
mod circular;
mod corner;
mod dimming;
mod rainbow;

use std::fmt;

use bitflags::bitflags;
use log::{debug, error, trace};

pub use alpha::Alpha;
pub use centered::Centered;
pub use circular::Circular;
pub use corner::Corner;
pub use dimming::Dimming;
pub use rainbow::Rainbow;

use crate::{
    converter::ColorConverter,
    error::{Error, Result},
    math::{ClientPoint, Point, Size},
    models::{Hsv, Rgba},
    surface::{CornerRadius, Fill, Pixel, Shape, Surface, SurfaceProvider},
    Component,
};

/// Radius of the selector ring.
const INDICATOR_RADIUS: Component = 9.0;
/// Line width of the selector ring.
const INDICATOR_WIDTH: Component = 4.0;

bitflags! {
    /// Pins the selector to the middle of one axis.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Centering: u8 {
        /// Keep the selector on the horizontal center line, so only x moves.
        const HORIZONTALLY = 1 << 0;
        /// Keep the selector on the vertical center line, so only y moves.
        const VERTICALLY = 1 << 1;
    }
}

/// How a window is bound and shaped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WindowConfig {
    /// Identifier of the background surface.
    pub picker_id: String,
    /// Identifier of the selector surface.
    pub selector_id: String,
    /// Axis constraints for the selector. Empty means the window kind decides.
    pub centering: Centering,
    /// Radii of the rounded clip.
    pub corner_radius: CornerRadius,
}

impl WindowConfig {
    /// Bind to the two given surface identifiers.
    pub fn new(picker_id: impl Into<String>, selector_id: impl Into<String>) -> Self {
        Self {
            picker_id: picker_id.into(),
            selector_id: selector_id.into(),
            ..Default::default()
        }
    }

    /// Constrain the selector.
    pub fn with_centering(mut self, centering: Centering) -> Self {
        self.centering = centering;
        self
    }

    /// Round the corners with the given radii.
    pub fn with_corner_radius(mut self, corner_radius: CornerRadius) -> Self {
        self.corner_radius = corner_radius;
        self
    }
}

/// The fully saturated, fully bright color of a hue, which windows other than
/// the hue axis are tinted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BaseColor {
    /// Red, green and blue channels.
    pub rgb: [i32; 3],
}

impl BaseColor {
    /// The base color of `hue`.
    pub fn from_hue(hue: i32) -> Self {
        Hsv::new(hue, 100, 100).to_rgba(100).into()
    }

    /// The color as `rgb(r,g,b)`.
    pub fn css(&self) -> String {
        self.to_string()
    }

    /// The color as an opaque pixel.
    pub fn pixel(&self) -> Pixel {
        let [red, green, blue] = self.rgb.map(|channel| channel.clamp(0, 255) as u8);
        Pixel::opaque(red, green, blue)
    }
}

impl From<Rgba> for BaseColor {
    fn from(rgba: Rgba) -> Self {
        Self { rgb: rgba.rgb() }
    }
}

impl fmt::Display for BaseColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [red, green, blue] = self.rgb;
        write!(f, "rgb({red},{green},{blue})")
    }
}

/// What a selector position stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reading {
    /// A hue in degrees.
    Hue(i32),
    /// An opacity percentage.
    Alpha(i32),
    /// An HSV value percentage.
    Value(i32),
    /// HSL saturation and lightness.
    SaturationLightness {
        /// Saturation percentage.
        saturation: i32,
        /// Lightness percentage.
        lightness: i32,
    },
    /// HSV saturation and value.
    SaturationValue {
        /// Saturation percentage.
        saturation: i32,
        /// Value percentage.
        value: i32,
    },
    /// A hue with its saturation, read off a color wheel.
    HueSaturation {
        /// Hue in degrees.
        hue: i32,
        /// Saturation percentage.
        saturation: i32,
    },
}

/// The selector of a window: where it is and how it may move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selector {
    position: Point,
    size: Size,
    centering: Centering,
}

impl Selector {
    fn new(size: Size, centering: Centering) -> Self {
        Self {
            position: Point::origin(),
            size,
            centering,
        }
    }

    /// Current position in surface coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Size of the surfaces the selector moves on.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The axis constraints in effect.
    pub fn centering(&self) -> Centering {
        self.centering
    }

    /// The middle of the surface.
    pub fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// Apply the centering constraint, round to whole pixels and keep the
    /// point inside the surface.
    pub fn constrain(&self, point: Point) -> Point {
        let mut point = point;
        if self.centering.contains(Centering::HORIZONTALLY) {
            point.y = self.size.height / 2.0;
        }
        if self.centering.contains(Centering::VERTICALLY) {
            point.x = self.size.width / 2.0;
        }
        Point::new(
            point.x.round().clamp(0.0, (self.size.width - 1.0).max(0.0)),
            point.y.round().clamp(0.0, (self.size.height - 1.0).max(0.0)),
        )
    }

    /// Whether strips run along x instead of y.
    fn horizontal(&self) -> bool {
        self.centering.contains(Centering::HORIZONTALLY)
            && !self.centering.contains(Centering::VERTICALLY)
    }

    /// The position along the axis the selector is free to move on, and the
    /// length of that axis.
    pub fn axis(&self) -> (Component, Component) {
        if self.horizontal() {
            (self.position.x, self.size.width)
        } else {
            (self.position.y, self.size.height)
        }
    }

    /// How far along the free axis the selector is, in `[0, 1)`.
    pub fn axis_fraction(&self) -> Component {
        let (offset, length) = self.axis();
        offset / length
    }

    /// A point at `offset` along the free axis.
    pub fn on_axis(&self, offset: Component) -> Point {
        let center = self.center();
        if self.horizontal() {
            Point::new(offset, center.y)
        } else {
            Point::new(center.x, offset)
        }
    }
}

/// Drawing state handed to a [`WindowKind`].
pub struct Frame<'a, S> {
    /// The background surface.
    pub surface: &'a mut S,
    /// The tint of the window, if one was set.
    pub base_color: Option<BaseColor>,
    /// The axis constraints in effect.
    pub centering: Centering,
    /// Radii of the rounded clip.
    pub corner_radius: CornerRadius,
}

impl<S: Surface> Frame<'_, S> {
    /// Size of the background surface.
    pub fn size(&self) -> Size {
        self.surface.size()
    }

    /// A gradient from top to bottom.
    pub fn vertical_gradient(&self, stops: impl IntoIterator<Item = (Component, Pixel)>) -> Fill {
        let Size { width, height, .. } = self.size();
        Fill::linear(
            Point::new(width / 2.0, 0.0),
            Point::new(width / 2.0, height),
            stops,
        )
    }

    /// A gradient from left to right.
    pub fn horizontal_gradient(
        &self,
        stops: impl IntoIterator<Item = (Component, Pixel)>,
    ) -> Fill {
        let Size { width, height, .. } = self.size();
        Fill::linear(
            Point::new(0.0, height / 2.0),
            Point::new(width, height / 2.0),
            stops,
        )
    }

    /// A gradient along the axis the selector moves on.
    pub fn axis_gradient(&self, stops: impl IntoIterator<Item = (Component, Pixel)>) -> Fill {
        if self.centering.contains(Centering::VERTICALLY) {
            self.vertical_gradient(stops)
        } else {
            self.horizontal_gradient(stops)
        }
    }

    /// Round the corners off and outline the window.
    pub fn clip_round_rect(&mut self) {
        let shape = Shape::round_rect(self.size(), self.corner_radius);
        self.surface.clip(&shape);
        self.surface
            .stroke_shape(&shape, Pixel::BLACK.with_alpha(0.3), 1.0);
    }
}

/// The behavior of one kind of color window.
pub trait WindowKind<S: Surface> {
    /// A short name for log output.
    fn name(&self) -> &'static str;

    /// The centering used when the configuration sets none.
    fn default_centering(&self) -> Centering {
        Centering::empty()
    }

    /// Where the selector starts.
    fn initial_position(&self, selector: &Selector) -> Point {
        selector.center()
    }

    /// Prepare cached layers. Called once the surfaces are bound.
    fn init(&mut self, _frame: &mut Frame<'_, S>) {}

    /// Paint the background.
    fn redraw(&mut self, frame: &mut Frame<'_, S>);

    /// Turn a requested position into the one the selector takes. Called for
    /// every accepted move, so kinds may record state derived from the
    /// accepted position here (the wheel keeps its degree and distance).
    fn settle(&mut self, selector: &Selector, point: Point) -> Point {
        selector.constrain(point)
    }

    /// What the selector position stands for.
    fn read(&self, selector: &Selector) -> Reading;

    /// Where the selector belongs for the given color.
    fn locate(&self, selector: &Selector, color: &ColorConverter) -> Point;

    /// Angle and distance from the center, for windows that track them.
    fn polar(&self) -> Option<(i32, Component)> {
        None
    }

    /// Darken the window by `factor` in `[0, 1]`, for windows that support it.
    fn set_dimming(&mut self, _factor: Component) {}
}

/// A mouse button or touch contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// The main mouse button.
    Primary,
    /// The context menu button.
    Secondary,
    /// The wheel button.
    Middle,
    /// A touch contact.
    Touch,
}

impl PointerButton {
    fn drags(self) -> bool {
        matches!(self, PointerButton::Primary | PointerButton::Touch)
    }
}

/// Pointer input delivered by the host, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    /// A button went down or a touch started.
    Press {
        /// Which button.
        button: PointerButton,
        /// Where.
        point: ClientPoint,
    },
    /// The pointer moved. Hosts deliver this anywhere while a drag is active.
    Move {
        /// Where.
        point: ClientPoint,
    },
    /// A button went up or a touch ended.
    Release {
        /// Which button.
        button: PointerButton,
    },
    /// The pointer left the host or the touch was cancelled.
    Cancel,
}

/// Whether the selector follows the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// Not following.
    #[default]
    Idle,
    /// Following every move.
    Dragging,
}

type UpdateHook<S> = Box<dyn FnMut(&Window<S>)>;

/// A color window.
pub struct Window<S: Surface> {
    config: WindowConfig,
    picker: S,
    selector_surface: S,
    selector: Selector,
    kind: Box<dyn WindowKind<S>>,
    base_color: Option<BaseColor>,
    drag: DragState,
    on_update: Option<UpdateHook<S>>,
}

impl<S: Surface> fmt::Debug for Window<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("kind", &self.kind.name())
            .field("config", &self.config)
            .field("selector", &self.selector)
            .field("base_color", &self.base_color)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Window<S> {
    /// Look up both surfaces of `config` and build a window around them.
    pub fn new(
        config: WindowConfig,
        provider: &mut impl SurfaceProvider<S>,
        kind: impl WindowKind<S> + 'static,
    ) -> Result<Self> {
        let picker = Self::lookup(provider, &config.picker_id)?;
        let selector = Self::lookup(provider, &config.selector_id)?;
        Self::from_surfaces(config, picker, selector, kind)
    }

    fn lookup(provider: &mut impl SurfaceProvider<S>, id: &str) -> Result<S> {
        provider.surface(id).ok_or_else(|| {
            error!("no surface with id `{id}`");
            Error::MissingSurface { id: id.to_string() }
        })
    }

    /// Build a window around surfaces the caller already holds.
    pub fn from_surfaces(
        mut config: WindowConfig,
        picker: S,
        selector_surface: S,
        kind: impl WindowKind<S> + 'static,
    ) -> Result<Self> {
        let size = picker.size();
        if size != selector_surface.size() {
            let dimensions = |size: Size| (size.width as u32, size.height as u32);
            let err = Error::SurfaceSizeMismatch {
                picker: dimensions(size),
                selector: dimensions(selector_surface.size()),
            };
            error!("{err}");
            return Err(err);
        }

        let mut kind: Box<dyn WindowKind<S>> = Box::new(kind);
        if config.centering.is_empty() {
            config.centering = kind.default_centering();
        }

        let mut selector = Selector::new(size, config.centering);
        let start = kind.initial_position(&selector);
        selector.position = kind.settle(&selector, start);

        let mut window = Self {
            config,
            picker,
            selector_surface,
            selector,
            kind,
            base_color: None,
            drag: DragState::Idle,
            on_update: None,
        };
        window.init();
        debug!(
            "created {} window {}x{} at {:?}",
            window.kind.name(),
            size.width,
            size.height,
            window.selector.position
        );
        Ok(window)
    }

    /// Install the hook called after every direct move.
    pub fn on_update(&mut self, hook: impl FnMut(&Window<S>) + 'static) {
        self.on_update = Some(Box::new(hook));
    }

    /// Rebuild cached layers and repaint everything.
    pub fn init(&mut self) {
        let mut frame = Frame {
            surface: &mut self.picker,
            base_color: self.base_color,
            centering: self.selector.centering,
            corner_radius: self.config.corner_radius,
        };
        self.kind.init(&mut frame);
        self.redraw();
        self.draw_indicator();
    }

    /// Repaint the background.
    pub fn redraw(&mut self) {
        trace!("redrawing {} window", self.kind.name());
        let mut frame = Frame {
            surface: &mut self.picker,
            base_color: self.base_color,
            centering: self.selector.centering,
            corner_radius: self.config.corner_radius,
        };
        self.kind.redraw(&mut frame);
    }

    fn draw_indicator(&mut self) {
        self.selector_surface.clear();
        self.selector_surface.stroke_shape(
            &Shape::Circle {
                center: self.selector.position,
                radius: INDICATOR_RADIUS,
            },
            Pixel::WHITE,
            INDICATOR_WIDTH,
        );
    }

    /// Move the selector. A `direct` move comes from the user: `point` is in
    /// client coordinates and the update hook fires. Otherwise `point` is
    /// already in surface coordinates and no hook fires.
    pub fn move_to(&mut self, point: ClientPoint, direct: bool) {
        let local = if direct {
            let origin = self.selector_surface.origin();
            Point::new(point.x - origin.x, point.y - origin.y)
        } else {
            point.cast_unit()
        };

        self.selector.position = self.kind.settle(&self.selector, local);
        self.draw_indicator();
        trace!(
            "{} selector at {:?}, direct: {direct}",
            self.kind.name(),
            self.selector.position
        );

        if direct {
            if let Some(mut hook) = self.on_update.take() {
                hook(self);
                self.on_update = Some(hook);
            }
        }
    }

    /// Move the selector to where `color` belongs, without firing the hook.
    pub fn place(&mut self, color: &ColorConverter) {
        let point = self.kind.locate(&self.selector, color);
        self.move_to(point.cast_unit(), false);
    }

    /// Feed pointer input. Returns `true` when it moved the selector directly.
    pub fn handle(&mut self, input: PointerInput) -> bool {
        match (self.drag, input) {
            (_, PointerInput::Press { button, point }) if button.drags() => {
                if !self.contains(point) {
                    return false;
                }
                debug!("{} drag started", self.kind.name());
                self.drag = DragState::Dragging;
                self.move_to(point, true);
                true
            }
            (DragState::Dragging, PointerInput::Move { point }) => {
                self.move_to(point, true);
                true
            }
            (DragState::Dragging, PointerInput::Release { button }) if button.drags() => {
                debug!("{} drag stopped", self.kind.name());
                self.drag = DragState::Idle;
                false
            }
            (DragState::Dragging, PointerInput::Cancel) => {
                debug!("{} drag cancelled", self.kind.name());
                self.drag = DragState::Idle;
                false
            }
            _ => false,
        }
    }

    fn contains(&self, point: ClientPoint) -> bool {
        let origin = self.selector_surface.origin();
        let size = self.selector.size;
        (origin.x..origin.x + size.width).contains(&point.x)
            && (origin.y..origin.y + size.height).contains(&point.y)
    }

    /// What the selector currently stands for.
    pub fn reading(&self) -> Reading {
        self.kind.read(&self.selector)
    }

    /// Where the selector would go for `color`.
    pub fn locate(&self, color: &ColorConverter) -> Point {
        self.kind.locate(&self.selector, color)
    }

    /// Tint the window. Takes effect on the next redraw.
    pub fn set_base_color(&mut self, base_color: BaseColor) {
        self.base_color = Some(base_color);
    }

    /// Darken the window, if its kind supports it. Takes effect on the next
    /// redraw.
    pub fn set_dimming(&mut self, factor: Component) {
        self.kind.set_dimming(factor);
    }

    /// The tint, if one was set.
    pub fn base_color(&self) -> Option<BaseColor> {
        self.base_color
    }

    /// The selector.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Current selector position in surface coordinates.
    pub fn position(&self) -> Point {
        self.selector.position
    }

    /// Angle of the selector around the center, for circular windows.
    pub fn degree(&self) -> Option<i32> {
        self.kind.polar().map(|(degree, _)| degree)
    }

    /// Distance of the selector from the center, for circular windows.
    pub fn distance(&self) -> Option<Component> {
        self.kind.polar().map(|(_, distance)| distance)
    }

    /// Whether the selector follows the pointer.
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// The configuration, with the effective centering filled in.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Size of both surfaces.
    pub fn size(&self) -> Size {
        self.selector.size
    }

    /// The background surface.
    pub fn picker_surface(&self) -> &S {
        &self.picker
    }

    /// The selector surface.
    pub fn selector_surface(&self) -> &S {
        &self.selector_surface
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, collections::HashMap, rc::Rc};

    use super::*;
    use crate::{math::round, surface::Blend, PixmapSurface};

    /// Reads the raw position, paints nothing.
    struct Plain;

    impl WindowKind<PixmapSurface> for Plain {
        fn name(&self) -> &'static str {
            "plain"
        }

        fn redraw(&mut self, frame: &mut Frame<'_, PixmapSurface>) {
            frame
                .surface
                .fill(&Fill::Solid(Pixel::WHITE), Blend::SourceOver);
        }

        fn read(&self, selector: &Selector) -> Reading {
            let p = selector.position();
            Reading::SaturationValue {
                saturation: round(p.x as f64),
                value: round(p.y as f64),
            }
        }

        fn locate(&self, _selector: &Selector, color: &ColorConverter) -> Point {
            Point::new(color.hsv().saturation as Component, color.hsv().value as Component)
        }
    }

    fn surfaces(width: u32, height: u32) -> HashMap<String, PixmapSurface> {
        let origin = ClientPoint::new(100.0, 50.0);
        let mut surfaces = HashMap::new();
        for id in ["picker", "selector"] {
            let surface = PixmapSurface::new(width, height)
                .unwrap()
                .with_origin(origin);
            surfaces.insert(id.to_string(), surface);
        }
        surfaces
    }

    fn window(centering: Centering) -> Window<PixmapSurface> {
        let config = WindowConfig::new("picker", "selector").with_centering(centering);
        Window::new(config, &mut surfaces(200, 100), Plain).unwrap()
    }

    #[test]
    fn missing_surface_fails() {
        let config = WindowConfig::new("picker", "nope");
        let err = Window::new(config, &mut surfaces(10, 10), Plain).unwrap_err();
        assert_eq!(err, Error::MissingSurface { id: "nope".into() });
    }

    #[test]
    fn mismatched_surfaces_fail() {
        let err = Window::from_surfaces(
            WindowConfig::default(),
            PixmapSurface::new(10, 10).unwrap(),
            PixmapSurface::new(10, 12).unwrap(),
            Plain,
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::SurfaceSizeMismatch {
                picker: (10, 10),
                selector: (10, 12)
            }
        );
    }

    #[test]
    fn starts_in_the_middle_and_paints() {
        let window = window(Centering::empty());
        assert_eq!(window.position(), Point::new(100.0, 50.0));
        assert_eq!(window.picker_surface().pixel(5, 5), Some(Pixel::WHITE));
        assert_eq!(window.degree(), None);
    }

    #[test]
    fn direct_moves_subtract_the_origin() {
        let mut window = window(Centering::empty());
        window.move_to(ClientPoint::new(130.4, 70.6), true);
        assert_eq!(window.position(), Point::new(30.0, 21.0));

        window.move_to(ClientPoint::new(30.0, 20.0), false);
        assert_eq!(window.position(), Point::new(30.0, 20.0));
    }

    #[test]
    fn moves_are_clamped_inside() {
        let mut window = window(Centering::empty());
        window.move_to(ClientPoint::new(-50.0, 500.0), false);
        assert_eq!(window.position(), Point::new(0.0, 99.0));
        window.move_to(ClientPoint::new(1000.0, -3.0), false);
        assert_eq!(window.position(), Point::new(199.0, 0.0));
    }

    #[test]
    fn centering_pins_the_other_axis() {
        let mut window = window(Centering::HORIZONTALLY);
        window.move_to(ClientPoint::new(20.0, 3.0), false);
        assert_eq!(window.position(), Point::new(20.0, 50.0));
        assert_eq!(window.selector().axis(), (20.0, 200.0));

        let mut window = self::window(Centering::VERTICALLY);
        window.move_to(ClientPoint::new(20.0, 3.0), false);
        assert_eq!(window.position(), Point::new(100.0, 3.0));
        assert_eq!(window.selector().axis(), (3.0, 100.0));

        let mut window = self::window(Centering::all());
        window.move_to(ClientPoint::new(20.0, 3.0), false);
        assert_eq!(window.position(), Point::new(100.0, 50.0));
    }

    #[test]
    fn hook_fires_only_on_direct_moves() {
        let mut window = window(Centering::empty());
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        window.on_update(move |window| {
            assert!(matches!(window.reading(), Reading::SaturationValue { .. }));
            seen.set(seen.get() + 1);
        });

        window.move_to(ClientPoint::new(10.0, 10.0), false);
        assert_eq!(calls.get(), 0);
        window.move_to(ClientPoint::new(110.0, 60.0), true);
        assert_eq!(calls.get(), 1);
        window.move_to(ClientPoint::new(110.0, 60.0), true);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn drag_state_machine() {
        let mut window = window(Centering::empty());
        let inside = ClientPoint::new(150.0, 80.0);

        assert!(!window.handle(PointerInput::Move { point: inside }));
        assert!(!window.handle(PointerInput::Press {
            button: PointerButton::Secondary,
            point: inside
        }));
        assert!(!window.handle(PointerInput::Press {
            button: PointerButton::Primary,
            point: ClientPoint::new(0.0, 0.0)
        }));
        assert_eq!(window.drag_state(), DragState::Idle);

        assert!(window.handle(PointerInput::Press {
            button: PointerButton::Primary,
            point: inside
        }));
        assert_eq!(window.drag_state(), DragState::Dragging);
        assert_eq!(window.position(), Point::new(50.0, 30.0));

        // Moves outside the surface still track, clamped.
        assert!(window.handle(PointerInput::Move {
            point: ClientPoint::new(0.0, 0.0)
        }));
        assert_eq!(window.position(), Point::new(0.0, 0.0));

        assert!(!window.handle(PointerInput::Release {
            button: PointerButton::Primary
        }));
        assert!(!window.handle(PointerInput::Move { point: inside }));
        assert_eq!(window.position(), Point::new(0.0, 0.0));

        window.handle(PointerInput::Press {
            button: PointerButton::Touch,
            point: inside,
        });
        window.handle(PointerInput::Cancel);
        assert_eq!(window.drag_state(), DragState::Idle);
    }

    #[test]
    fn indicator_follows_the_selector() {
        let mut window = window(Centering::empty());
        window.move_to(ClientPoint::new(40.0, 40.0), false);
        let ring = window.selector_surface();
        assert!(ring.pixel(49, 40).unwrap().alpha > 200);
        assert_eq!(ring.pixel(40, 40).unwrap().alpha, 0);
        assert_eq!(ring.pixel(100, 50).unwrap().alpha, 0);
    }

    #[test]
    fn place_uses_locate() {
        let mut window = window(Centering::empty());
        let color = ColorConverter::new(Rgba::new(74, 126, 186, 70));
        window.place(&color);
        assert_eq!(window.position(), Point::new(60.0, 73.0));
    }

    #[test]
    fn base_color_from_hue() {
        let base = BaseColor::from_hue(180);
        assert_eq!(base.css(), "rgb(0,255,255)");
        assert_eq!(BaseColor::from_hue(0).pixel(), Pixel::opaque(255, 0, 0));
    }
}
