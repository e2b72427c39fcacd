//! Error type shared by every constructor and query in the crate.

use std::fmt;

use crate::geometry::Rectangle;

/// Failures raised by flame construction and per-pixel queries.
#[derive(Debug, Clone, PartialEq)]
pub enum FlameError {
    /// A color channel was outside `[0, 1]`.
    ChannelOutOfRange { channel: &'static str, value: f64 },
    /// A blend proportion was outside `[0, 1]`.
    ProportionOutOfRange(f64),
    /// A palette needs at least two control colors.
    TooFewColors(usize),
    /// A palette was indexed outside `[0, 1]`.
    PaletteIndexOutOfRange(f64),
    /// A flame transformation carries exactly one weight per variation.
    WrongWeightCount(usize),
    /// Variation weights must be non-negative.
    NegativeWeight { index: usize, weight: f64 },
    /// No variation exists at this index.
    VariationIndexOutOfRange(usize),
    /// No transformation exists at this index of a flame builder.
    TransformationIndexOutOfRange { index: usize, len: usize },
    /// Rectangles cannot have negative extents.
    NegativeDimension { width: f64, height: f64 },
    /// Aspect ratios must be positive and finite.
    InvalidAspectRatio(f64),
    /// Accumulator grids must be at least one cell wide and high.
    EmptyGrid { width: usize, height: usize },
    /// A cell query fell outside the accumulator grid.
    CellOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// Two accumulators of different shapes cannot be merged.
    GridMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Accumulators covering different views cannot be merged.
    FrameMismatch {
        expected: Rectangle,
        found: Rectangle,
    },
    /// A command-line option has no effect in the selected mode.
    UnsupportedOption {
        option: &'static str,
        mode: &'static str,
    },
    /// No built-in flame goes by this name.
    UnknownPreset(String),
    /// The image encoder failed.
    Image(String),
}

impl fmt::Display for FlameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelOutOfRange { channel, value } => {
                write!(f, "{channel} channel {value} is outside [0, 1]")
            }
            Self::ProportionOutOfRange(t) => write!(f, "blend proportion {t} is outside [0, 1]"),
            Self::TooFewColors(n) => {
                write!(f, "a palette needs at least 2 colors, got {n}")
            }
            Self::PaletteIndexOutOfRange(i) => write!(f, "palette index {i} is outside [0, 1]"),
            Self::WrongWeightCount(n) => {
                write!(f, "expected one weight per variation (6), got {n}")
            }
            Self::NegativeWeight { index, weight } => {
                write!(f, "weight {weight} for variation {index} is negative")
            }
            Self::VariationIndexOutOfRange(i) => write!(f, "no variation at index {i}"),
            Self::TransformationIndexOutOfRange { index, len } => {
                write!(f, "transformation index {index} out of range (len {len})")
            }
            Self::NegativeDimension { width, height } => {
                write!(f, "rectangle dimensions {width}x{height} must be non-negative")
            }
            Self::InvalidAspectRatio(r) => write!(f, "invalid aspect ratio {r}"),
            Self::EmptyGrid { width, height } => {
                write!(f, "accumulator grid {width}x{height} must be non-empty")
            }
            Self::CellOutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "cell ({x}, {y}) outside {width}x{height} grid"),
            Self::GridMismatch { expected, found } => write!(
                f,
                "cannot merge a {}x{} grid into a {}x{} grid",
                found.0, found.1, expected.0, expected.1
            ),
            Self::FrameMismatch { expected, found } => write!(
                f,
                "cannot merge a grid over {found:?} into a grid over {expected:?}"
            ),
            Self::UnsupportedOption { option, mode } => {
                write!(f, "{option} is not supported by the {mode} renderer")
            }
            Self::UnknownPreset(name) => write!(f, "unknown preset '{name}'"),
            Self::Image(msg) => write!(f, "image output failed: {msg}"),
        }
    }
}

impl std::error::Error for FlameError {}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FlameError>;
