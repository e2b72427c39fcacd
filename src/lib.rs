//! Fractal flame rendering.
//!
//! A flame is a handful of [`FlameTransformation`]s, each an affine map
//! followed by a weighted blend of nonlinear [`Variation`]s. The chaos game
//! repeatedly pushes a single point through randomly chosen
//! transformations; the points it visits are binned into an
//! [`Accumulator`], whose log-scaled hit counts and averaged color indices
//! resolve to pixel colors against a [`Palette`].
//!
//! ```no_run
//! use flame::{presets, render, Color, Palette};
//! use rand::SeedableRng;
//!
//! let preset = presets::shark_fin()?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let acc = render(preset.flame.transformations(), preset.frame, 500, 400, 50, &mut rng)?;
//! let pixel = acc.color(&Palette::fire(), Color::BLACK, 250, 200)?;
//! println!("{:06x}", pixel.as_packed_rgb());
//! # Ok::<(), flame::FlameError>(())
//! ```

pub mod accumulator;
pub mod affine;
pub mod chaos;
pub mod cli;
pub mod color;
pub mod error;
pub mod flame;
pub mod geometry;
pub mod output;
pub mod presets;
pub mod transformation;
pub mod variation;

pub use accumulator::{Accumulator, AccumulatorBuilder};
pub use affine::AffineTransformation;
pub use chaos::{render, render_parallel, Renderer};
pub use color::{Color, Palette};
pub use error::{FlameError, Result};
pub use flame::{Flame, FlameBuilder, OrbitState};
pub use geometry::{Point, Rectangle};
pub use transformation::{FlameTransformation, FlameTransformationBuilder};
pub use variation::Variation;
