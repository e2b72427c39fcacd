//! Command-line surface shared by the `flame` and `flame-serial` binaries.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::accumulator::Accumulator;
use crate::chaos::{render, render_parallel};
use crate::color::{Color, Palette};
use crate::error::{FlameError, Result};
use crate::output::write_image;
use crate::presets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaletteChoice {
    Fire,
    Rgb,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Background {
    Black,
    White,
}

impl From<Background> for Color {
    fn from(background: Background) -> Color {
        match background {
            Background::Black => Color::BLACK,
            Background::White => Color::WHITE,
        }
    }
}

/// Fractal flame renderer
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct RenderArgs {
    /// Built-in flame to render
    #[arg(short, long, default_value = "shark-fin", value_parser = presets::NAMES)]
    pub preset: String,

    /// Image width in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Samples drawn per pixel
    #[arg(short, long, default_value_t = 50)]
    pub density: u32,

    #[arg(long, value_enum, default_value_t = PaletteChoice::Fire)]
    pub palette: PaletteChoice,

    /// Control colors of a random palette
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(2..))]
    pub colors: u32,

    #[arg(long, value_enum, default_value_t = Background::Black)]
    pub background: Background,

    /// Seed for the random source; drawn from the OS when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Independent orbits rendered in parallel (default: one per thread)
    #[arg(long)]
    pub orbits: Option<usize>,

    /// Output image; the format follows the extension
    #[arg(short, long, default_value = "flame.png")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Serial,
    Parallel,
}

/// Installs the stderr subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Renders the requested preset and writes the image.
///
/// `--orbits` is only meaningful to the parallel renderer; the serial one
/// rejects it.
pub fn run(args: &RenderArgs, mode: Mode) -> Result<Accumulator> {
    if mode == Mode::Serial && args.orbits.is_some() {
        return Err(FlameError::UnsupportedOption {
            option: "--orbits",
            mode: "serial",
        });
    }
    let preset = presets::by_name(&args.preset)?;
    let (width, height) = (args.width as usize, args.height as usize);
    let frame = preset
        .frame
        .expand_to_aspect_ratio(width as f64 / height as f64)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!(preset = preset.name, width, height, density = args.density, seed, ?mode, "rendering");

    let accumulator = match mode {
        Mode::Serial => render(
            preset.flame.transformations(),
            frame,
            width,
            height,
            args.density,
            &mut rng,
        )?,
        Mode::Parallel => render_parallel(
            preset.flame.transformations(),
            frame,
            width,
            height,
            args.density,
            args.orbits.unwrap_or_else(rayon::current_num_threads),
            seed,
        )?,
    };

    let palette = match args.palette {
        PaletteChoice::Fire => Palette::fire(),
        PaletteChoice::Rgb => Palette::rgb(),
        PaletteChoice::Random => Palette::random(args.colors as usize, &mut rng)?,
    };
    write_image(&accumulator, &palette, args.background.into(), &args.output)?;
    info!(output = %args.output.display(), "done");
    Ok(accumulator)
}
