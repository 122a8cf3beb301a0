//! The built-in demo scenes

use crate::algebra::color::{Color, bool_to_color, gray, intensity_to_color};
use crate::algebra::combine::{blend, sum};
use crate::algebra::image::Image;
use crate::demos::registry::{Demo, Registry};
use crate::io::bitmap::Bitmap;
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, NOISE_LATTICE_SIZE};
use crate::io::error::Result;
use crate::modulation::{
    Displacement, Wave, pulse, wave_color, wave_intensity_about, wave_scale, wave_translate,
};
use crate::patterns::{checkerboard, disk, grid, lattice_noise, rings, vertical_stripes};
use crate::render::animation::Animation;
use crate::spatial::{Coord, rotate, scale, swirl, translate_by};
use std::path::PathBuf;

const SIZE: (usize, usize) = (DEFAULT_WIDTH, DEFAULT_HEIGHT);
const CENTER: Coord = Coord::new(DEFAULT_WIDTH as f64 / 2.0, DEFAULT_HEIGHT as f64 / 2.0);

/// Inputs the standard demos capture when the registry is built
#[derive(Clone, Debug)]
pub struct CatalogOptions {
    /// Seed for the noise demo
    pub seed: u64,
    /// Bitmap for the `bitmap` demo; the demo is only registered when set
    pub bitmap: Option<PathBuf>,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            bitmap: None,
        }
    }
}

fn checker(square_size: f64, dark: Color, light: Color) -> Result<Image<Color>> {
    Ok(checkerboard(square_size)?.map(bool_to_color(dark, light)))
}

/// Build the registry of built-in demos
///
/// # Errors
///
/// Returns an error only if two demos share a name
pub fn standard_registry(options: &CatalogOptions) -> Result<Registry> {
    let mut registry = Registry::new();

    registry.register("grid", "White grid lines on a dark field", SIZE, || {
        Ok(Demo::Still(grid(
            20.0,
            2.0,
            Color::WHITE,
            Color::rgb(20, 20, 60),
        )?))
    })?;

    registry.register("rings", "Concentric rings around the canvas center", SIZE, || {
        let rings = rings(12.0)?.map(bool_to_color(Color::MAGENTA, Color::BLACK));
        Ok(Demo::Still(rings.transform(&translate_by::<Color>(CENTER))))
    })?;

    registry.register(
        "interference",
        "Two radial waves superposed",
        SIZE,
        || {
            let wave = Wave::new(0.0, 0.5, 0.5, 30.0)?;
            let left = wave_intensity_about(wave, Coord::new(140.0, 200.0));
            let right = wave_intensity_about(wave, Coord::new(260.0, 200.0));
            let field = left.combine(&right, |a, b| (a + b) / 2.0);
            Ok(Demo::Still(
                field.map(intensity_to_color(Color::BLACK, Color::CYAN)),
            ))
        },
    )?;

    registry.register(
        "primaries",
        "Additive sum of red, green and blue disks",
        SIZE,
        || {
            let spots = [
                (Coord::new(170.0, 170.0), Color::RED),
                (Coord::new(230.0, 170.0), Color::GREEN),
                (Coord::new(200.0, 225.0), Color::BLUE),
            ]
            .map(|(center, color)| disk(center, 80.0).map(bool_to_color(color, Color::BLACK)));
            Ok(Demo::Still(sum(spots)?))
        },
    )?;

    registry.register(
        "blend",
        "Checkerboard fading into rings along a radial wave",
        SIZE,
        || {
            let squares = checker(25.0, Color::RED, Color::BLUE)?;
            let rings = rings(10.0)?
                .map(bool_to_color(Color::YELLOW, Color::BLACK))
                .transform(&translate_by::<Color>(CENTER));
            let weight = wave_intensity_about(Wave::new(0.0, 0.5, 0.5, 120.0)?, CENTER);
            Ok(Demo::Still(blend(&squares, &rings, &weight)))
        },
    )?;

    let seed = options.seed;
    registry.register("static", "Seeded blocky noise", SIZE, move || {
        Ok(Demo::Still(
            lattice_noise(seed, NOISE_LATTICE_SIZE, 8.0)?.map(gray),
        ))
    })?;

    registry.register(
        "spin",
        "Checkerboard rotating about the canvas center",
        SIZE,
        || {
            let base = checker(40.0, Color::BLACK, Color::WHITE)?;
            Ok(Demo::Animated(Animation::transformed(base, |time| {
                Ok(rotate::<Color>(time * 0.5, CENTER))
            })))
        },
    )?;

    registry.register(
        "zoom",
        "Checkerboard zooming in and out about the center",
        SIZE,
        || {
            let base = checker(30.0, Color::BLACK, Color::YELLOW)?;
            Ok(Demo::Animated(Animation::transformed(base, |time| {
                scale::<Color>(1.5 + time.sin(), CENTER)
            })))
        },
    )?;

    registry.register(
        "ripple",
        "Concentric magnification ripple over a checkerboard",
        SIZE,
        || {
            let base = checker(20.0, Color::BLACK, Color::WHITE)?;
            let wave = Wave::new(0.0, 1.0, 0.2, 80.0)?;
            Ok(Demo::Animated(Animation::transformed(base, move |time| {
                wave_scale::<Color>(wave.advanced(time, 20.0), CENTER)
            })))
        },
    )?;

    registry.register(
        "pulse",
        "Brightness ripple travelling outward over a grid",
        SIZE,
        || {
            let base = grid(20.0, 4.0, Color::CYAN, Color::rgb(0, 40, 80))?;
            let wave = Wave::new(0.0, 0.75, 0.5, 60.0)?;
            Ok(Demo::Animated(Animation::transformed(base, move |time| {
                Ok(wave_color(wave.advanced(time, 30.0), CENTER))
            })))
        },
    )?;

    registry.register(
        "wavy",
        "Vertical stripes displaced by a travelling wave",
        SIZE,
        || {
            let base = vertical_stripes(15.0)?.map(bool_to_color(Color::GREEN, Color::BLACK));
            let wave = Wave::new(0.0, 0.0, 12.0, 100.0)?;
            Ok(Demo::Animated(Animation::transformed(base, move |time| {
                Ok(wave_translate::<Color>(
                    wave.advanced(time, 25.0),
                    Displacement::Horizontal,
                ))
            })))
        },
    )?;

    registry.register(
        "swirl",
        "Checkerboard twisted back and forth about the center",
        SIZE,
        || {
            let base = checker(25.0, Color::BLUE, Color::WHITE)?;
            Ok(Demo::Animated(Animation::transformed(base, |time| {
                Ok(swirl::<Color>(0.02 * (time * 0.5).sin(), CENTER))
            })))
        },
    )?;

    registry.register(
        "heartbeat",
        "A disk whose brightness pulses with time",
        SIZE,
        || {
            let glow = pulse(Wave::new(0.0, 0.6, 0.4, 1.5)?);
            let spot = disk(CENTER, 120.0).map(bool_to_color(Color::RED, Color::BLACK));
            Ok(Demo::Animated(Animation::try_new(move |time| {
                let level = glow.at(time)?;
                Ok(spot.combine(&level, Color::scale))
            })))
        },
    )?;

    if let Some(path) = options.bitmap.clone() {
        registry.register(
            "bitmap",
            "A bitmap tiled across the plane, rotating about the center",
            SIZE,
            move || {
                let tiled = Bitmap::open(&path)?.into_image();
                Ok(Demo::Animated(Animation::transformed(tiled, |time| {
                    Ok(rotate::<Color>(time * 0.3, CENTER))
                })))
            },
        )?;
    }

    Ok(registry)
}
