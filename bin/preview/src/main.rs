//! Render every picker layout, selectors included, into PNG images.
//!
//! Usage: `colorwin-preview [output directory] [hex color]`

use std::{collections::HashMap, error::Error, path::PathBuf};

use colorwin::{
    math::ClientPoint, Layout, Picker, PickerConfig, PixmapSurface, Role, Surface,
};
use image::{imageops, RgbaImage};

const MAIN_SIZE: u32 = 200;
const STRIP_WIDTH: u32 = 20;
const GAP: u32 = 10;

/// Surfaces for one picker, laid out left to right: main, axis, alpha.
fn surfaces(prefix: &str) -> Result<HashMap<String, PixmapSurface>, colorwin::Error> {
    let mut surfaces = HashMap::new();
    let mut x = 0;
    for (role, width) in [("main", MAIN_SIZE), ("axis", STRIP_WIDTH), ("alpha", STRIP_WIDTH)] {
        for kind in ["picker", "selector"] {
            let surface = PixmapSurface::new(width, MAIN_SIZE)?
                .with_origin(ClientPoint::new(x as _, 0.0));
            surfaces.insert(format!("{prefix}-{role}-{kind}"), surface);
        }
        x += width + GAP;
    }
    Ok(surfaces)
}

fn render(picker: &Picker<PixmapSurface>) -> RgbaImage {
    let width = MAIN_SIZE + 2 * (STRIP_WIDTH + GAP);
    let mut image = RgbaImage::from_pixel(width, MAIN_SIZE, image::Rgba([64, 64, 64, 255]));
    for role in [Role::Main, Role::Axis, Role::Alpha] {
        let window = picker.window(role);
        let origin = window.selector_surface().origin();
        for surface in [window.picker_surface(), window.selector_surface()] {
            imageops::overlay(
                &mut image,
                &surface.to_image(),
                origin.x as i64,
                origin.y as i64,
            );
        }
    }
    image
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let output = PathBuf::from(args.next().unwrap_or_else(|| "preview".to_string()));
    let color = args.next();
    std::fs::create_dir_all(&output)?;

    for (name, layout) in [
        ("centered", Layout::Centered),
        ("corner", Layout::Corner),
        ("circular", Layout::Circular),
    ] {
        let mut picker = Picker::new(layout, PickerConfig::with_prefix(name), &mut surfaces(name)?)?;
        if let Some(color) = &color {
            picker.set_hex_str(color)?;
        }

        let path = output.join(format!("{name}.png"));
        render(&picker).save(&path)?;
        log::info!(
            "{} -> {} ({})",
            name,
            path.display(),
            picker.converter().hex()
        );
    }

    Ok(())
}
