//! A complete picker: one color shared by a main window, an axis strip and an
//! alpha strip.

use log::{debug, warn};

use crate::{
    converter::ColorConverter,
    error::Result,
    math::Point,
    models::{Cmyk, Hex, Hsl, Hsv, Rgba},
    surface::{Surface, SurfaceProvider},
    window::{
        Alpha, BaseColor, Centered, Circular, Corner, Dimming, PointerInput, Rainbow, Reading,
        Window, WindowConfig,
    },
};

/// Which windows a picker is made of.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// A hue strip next to a saturation/lightness square.
    #[default]
    Centered,
    /// A hue strip next to a saturation/value square.
    Corner,
    /// A value strip next to a hue wheel.
    Circular,
}

/// One of the three windows of a picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The two dimensional window.
    Main,
    /// The strip completing the main window's model, hue or value.
    Axis,
    /// The opacity strip.
    Alpha,
}

impl Role {
    const ALL: [Role; 3] = [Role::Main, Role::Axis, Role::Alpha];
}

/// Window configurations for a picker.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PickerConfig {
    /// The main window.
    pub main: WindowConfig,
    /// The axis strip.
    pub axis: WindowConfig,
    /// The opacity strip.
    pub alpha: WindowConfig,
}

impl PickerConfig {
    /// Bind the windows to surfaces named `<prefix>-<role>-picker` and
    /// `<prefix>-<role>-selector`, with roles `main`, `axis` and `alpha`.
    pub fn with_prefix(prefix: &str) -> Self {
        let config = |role: &str| {
            WindowConfig::new(
                format!("{prefix}-{role}-picker"),
                format!("{prefix}-{role}-selector"),
            )
        };
        Self {
            main: config("main"),
            axis: config("axis"),
            alpha: config("alpha"),
        }
    }
}

/// A color picker session.
#[derive(Debug)]
pub struct Picker<S: Surface> {
    layout: Layout,
    converter: ColorConverter,
    main: Window<S>,
    axis: Window<S>,
    alpha: Window<S>,
}

impl<S: Surface + 'static> Picker<S> {
    /// The color every picker starts with.
    pub const INITIAL_COLOR: Rgba = Rgba::new(74, 126, 186, 70);

    /// Build the windows of `layout` and show the initial color.
    pub fn new(
        layout: Layout,
        config: PickerConfig,
        provider: &mut impl SurfaceProvider<S>,
    ) -> Result<Self> {
        let PickerConfig { main, axis, alpha } = config;

        let (main, axis) = match layout {
            Layout::Centered => (
                Window::new(main, provider, Centered::default())?,
                Window::new(axis, provider, Rainbow)?,
            ),
            Layout::Corner => (
                Window::new(main, provider, Corner::default())?,
                Window::new(axis, provider, Rainbow)?,
            ),
            Layout::Circular => (
                Window::new(main, provider, Circular::default())?,
                Window::new(axis, provider, Dimming)?,
            ),
        };
        let alpha = Window::new(alpha, provider, Alpha::default())?;

        let mut picker = Self {
            layout,
            converter: ColorConverter::new(Self::INITIAL_COLOR),
            main,
            axis,
            alpha,
        };
        picker.publish();
        Ok(picker)
    }
}

impl<S: Surface> Picker<S> {
    /// Feed pointer input to the window in `role`. Returns `true` when the
    /// color changed.
    pub fn handle(&mut self, role: Role, input: PointerInput) -> bool {
        if !self.window_mut(role).handle(input) {
            return false;
        }

        match role {
            Role::Alpha => match self.alpha.reading() {
                Reading::Alpha(alpha) => self.converter.set_alpha(alpha),
                reading => warn!("unexpected alpha reading {reading:?}"),
            },
            Role::Main | Role::Axis => {
                self.combine_readings();
                let base = BaseColor::from_hue(self.converter.hue());
                for other in Role::ALL.into_iter().filter(|other| *other != role) {
                    let window = self.window_mut(other);
                    window.set_base_color(base);
                    window.redraw();
                }
                self.window_mut(role).set_base_color(base);
            }
        }

        debug!("picked {}", self.converter.rgba());
        true
    }

    /// Turn the main and axis selectors into a color.
    fn combine_readings(&mut self) {
        match (self.main.reading(), self.axis.reading()) {
            (
                Reading::SaturationLightness {
                    saturation,
                    lightness,
                },
                Reading::Hue(hue),
            ) => self.converter.set_hsl(Hsl::new(hue, saturation, lightness)),
            (Reading::SaturationValue { saturation, value }, Reading::Hue(hue)) => {
                self.converter.set_hsv(Hsv::new(hue, saturation, value))
            }
            (Reading::HueSaturation { hue, saturation }, Reading::Value(value)) => {
                self.main.set_dimming(self.axis.selector().axis_fraction());
                self.converter.set_hsv(Hsv::new(hue, saturation, value))
            }
            readings => warn!("cannot combine readings {readings:?}"),
        }
    }

    /// Show the converter's color in every window: tint them, move every
    /// selector where the color belongs and repaint.
    pub fn publish(&mut self) {
        let base = BaseColor::from_hue(self.converter.hue());
        for role in Role::ALL {
            let converter = &self.converter;
            let window = match role {
                Role::Main => &mut self.main,
                Role::Axis => &mut self.axis,
                Role::Alpha => &mut self.alpha,
            };
            window.set_base_color(base);
            window.place(converter);
        }
        if self.layout == Layout::Circular {
            self.main.set_dimming(self.axis.selector().axis_fraction());
        }
        for role in Role::ALL {
            self.window_mut(role).redraw();
        }
        debug!("published {} with base {base}", self.converter.rgba());
    }

    /// Show a color given as RGBA.
    pub fn set_rgba(&mut self, rgba: Rgba) {
        self.converter.set_rgba(rgba);
        self.publish();
    }

    /// Show a color given in the HSV notation.
    pub fn set_hsv(&mut self, hsv: Hsv) {
        self.converter.set_hsv(hsv);
        self.publish();
    }

    /// Show a color given in the HSL notation.
    pub fn set_hsl(&mut self, hsl: Hsl) {
        self.converter.set_hsl(hsl);
        self.publish();
    }

    /// Show a color given as ink percentages.
    pub fn set_cmyk(&mut self, cmyk: Cmyk) {
        self.converter.set_cmyk(cmyk);
        self.publish();
    }

    /// Show a color given in hexadecimal notation.
    pub fn set_hex(&mut self, hex: Hex) {
        self.converter.set_hex(hex);
        self.publish();
    }

    /// Parse and show six hexadecimal digits. On error nothing changes.
    pub fn set_hex_str(&mut self, hex: &str) -> Result<()> {
        self.converter.set_hex_str(hex)?;
        self.publish();
        Ok(())
    }

    /// Change only the opacity.
    pub fn set_alpha(&mut self, alpha: i32) {
        self.converter.set_alpha(alpha);
        self.alpha.place(&self.converter);
    }

    /// The current color.
    pub fn converter(&self) -> &ColorConverter {
        &self.converter
    }

    /// Which windows this picker is made of.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The window in `role`.
    pub fn window(&self, role: Role) -> &Window<S> {
        match role {
            Role::Main => &self.main,
            Role::Axis => &self.axis,
            Role::Alpha => &self.alpha,
        }
    }

    fn window_mut(&mut self, role: Role) -> &mut Window<S> {
        match role {
            Role::Main => &mut self.main,
            Role::Axis => &mut self.axis,
            Role::Alpha => &mut self.alpha,
        }
    }

    /// Where the selector of `role` is.
    pub fn position(&self, role: Role) -> Point {
        self.window(role).position()
    }
}
