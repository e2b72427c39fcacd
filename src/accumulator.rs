//! Per-pixel histogram of the sampled point cloud.
//!
//! The builder maps world coordinates of a view [`Rectangle`] onto a
//! `width x height` grid whose cell `(0, 0)` is the rectangle's bottom-left
//! corner. Every recorded hit bumps its cell's count and folds the hit's
//! color index into the cell's running mean. [`AccumulatorBuilder::build`]
//! freezes the grid and fixes the log-density denominator used for tone
//! mapping.

use crate::affine::AffineTransformation;
use crate::color::{Color, Palette};
use crate::error::{FlameError, Result};
use crate::geometry::{Point, Rectangle};

#[derive(Debug, Clone, PartialEq)]
pub struct AccumulatorBuilder {
    frame: Rectangle,
    width: usize,
    height: usize,
    to_grid: AffineTransformation,
    hits: Vec<u64>,
    color_indices: Vec<f64>,
}

impl AccumulatorBuilder {
    pub fn new(frame: Rectangle, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FlameError::EmptyGrid { width, height });
        }
        let to_grid = AffineTransformation::new_scaling(
            width as f64 / frame.width(),
            height as f64 / frame.height(),
        )
        .compose_with(&AffineTransformation::new_translation(
            -frame.left(),
            -frame.bottom(),
        ));
        Ok(AccumulatorBuilder {
            frame,
            width,
            height,
            to_grid,
            hits: vec![0; width * height],
            color_indices: vec![0.0; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid cell of a world point, if it lands on the grid.
    fn cell_of(&self, p: Point) -> Option<usize> {
        let q = self.to_grid.transform_point(p);
        let (x, y) = (q.x.floor(), q.y.floor());
        if x >= 0.0 && y >= 0.0 && x < self.width as f64 && y < self.height as f64 {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    /// Records a hit at `p`. Points outside the frame are dropped, as are
    /// points the frame accepts on one axis only but that fall off the grid.
    ///
    /// A non-finite `color_index` drops the hit; other values are clamped to
    /// `[0, 1]`, so every stored mean stays a valid palette index.
    pub fn hit(&mut self, p: Point, color_index: f64) {
        if !color_index.is_finite() || !self.frame.contains(p) {
            return;
        }
        let color_index = color_index.clamp(0.0, 1.0);
        if let Some(cell) = self.cell_of(p) {
            self.hits[cell] += 1;
            let mean = &mut self.color_indices[cell];
            *mean += (color_index - *mean) / self.hits[cell] as f64;
        }
    }

    /// Folds another builder's hits into this one. Counts add; color
    /// indices combine as a count-weighted mean. Both builders must cover
    /// the same frame with the same grid.
    pub fn merge(&mut self, other: &AccumulatorBuilder) -> Result<()> {
        if self.frame != other.frame {
            return Err(FlameError::FrameMismatch {
                expected: self.frame,
                found: other.frame,
            });
        }
        if (self.width, self.height) != (other.width, other.height) {
            return Err(FlameError::GridMismatch {
                expected: (self.width, self.height),
                found: (other.width, other.height),
            });
        }
        let cells = self.hits.iter_mut().zip(self.color_indices.iter_mut());
        let others = other.hits.iter().zip(other.color_indices.iter());
        for ((hits, mean), (&other_hits, &other_mean)) in cells.zip(others) {
            if other_hits == 0 {
                continue;
            }
            let total = *hits + other_hits;
            *mean = (*mean * *hits as f64 + other_mean * other_hits as f64) / total as f64;
            *hits = total;
        }
        Ok(())
    }

    pub fn build(&self) -> Accumulator {
        let max_hits = self.hits.iter().copied().max().unwrap_or(0);
        Accumulator {
            width: self.width,
            height: self.height,
            hits: self.hits.clone(),
            color_indices: self.color_indices.clone(),
            max_hits,
            denominator: (max_hits as f64 + 1.0).ln(),
        }
    }
}

/// Frozen histogram, ready for per-pixel color resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    width: usize,
    height: usize,
    hits: Vec<u64>,
    color_indices: Vec<f64>,
    max_hits: u64,
    denominator: f64,
}

impl Accumulator {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn max_hit_count(&self) -> u64 {
        self.max_hits
    }

    /// Hits recorded over the whole grid.
    pub fn total_hits(&self) -> u64 {
        self.hits.iter().sum()
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(FlameError::CellOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    pub fn hit_count(&self, x: usize, y: usize) -> Result<u64> {
        Ok(self.hits[self.offset(x, y)?])
    }

    /// `ln(hits + 1) / ln(max_hits + 1)`, or 0 when nothing was hit.
    pub fn intensity(&self, x: usize, y: usize) -> Result<f64> {
        let hits = self.hit_count(x, y)?;
        if self.denominator == 0.0 {
            return Ok(0.0);
        }
        Ok(((hits as f64 + 1.0).ln() / self.denominator).min(1.0))
    }

    /// Background blended towards the cell's palette color by its intensity.
    pub fn color(&self, palette: &Palette, background: Color, x: usize, y: usize) -> Result<Color> {
        let offset = self.offset(x, y)?;
        let foreground = palette.color_for_index(self.color_indices[offset])?;
        background.mix_with(foreground, self.intensity(x, y)?)
    }
}
