//! Writes a resolved accumulator to an image file through `plotters`.

use std::fmt::Display;
use std::path::Path;

use plotters::prelude::{BitMapBackend, IntoDrawingArea, RGBColor};
use tracing::debug;

use crate::accumulator::Accumulator;
use crate::color::{Color, Palette};
use crate::error::{FlameError, Result};

fn image_error(e: impl Display) -> FlameError {
    FlameError::Image(e.to_string())
}

/// Encodes every cell as one pixel. The image format follows the file
/// extension. Grid row 0 is the bottom of the view, so rows are flipped.
pub fn write_image(
    accumulator: &Accumulator,
    palette: &Palette,
    background: Color,
    path: &Path,
) -> Result<()> {
    let (width, height) = (accumulator.width(), accumulator.height());
    let root = BitMapBackend::new(path, (width as u32, height as u32)).into_drawing_area();
    for y in 0..height {
        let row = (height - 1 - y) as i32;
        for x in 0..width {
            let (r, g, b) = accumulator.color(palette, background, x, y)?.to_rgb8();
            root.draw_pixel((x as i32, row), &RGBColor(r, g, b))
                .map_err(image_error)?;
        }
    }
    root.present().map_err(image_error)?;
    debug!(path = %path.display(), width, height, "image written");
    Ok(())
}
