//! The chaos game: a randomly driven orbit whose points feed an
//! accumulator.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info, info_span};

use crate::accumulator::{Accumulator, AccumulatorBuilder};
use crate::error::{FlameError, Result};
use crate::flame::{step, OrbitState};
use crate::geometry::Rectangle;
use crate::transformation::FlameTransformation;

/// Steps discarded before the orbit is recorded.
pub const WARM_UP_ITERATIONS: usize = 20;

/// A single orbit and the histogram it is filling.
///
/// Rendering can proceed in batches through [`Renderer::run`], with
/// [`Renderer::snapshot`] taken in between.
pub struct Renderer<'a> {
    transformations: &'a [FlameTransformation],
    picker: Option<Uniform<usize>>,
    state: OrbitState,
    builder: AccumulatorBuilder,
    samples: u64,
}

impl<'a> Renderer<'a> {
    /// Sets up the grid and runs the warm-up from the origin.
    pub fn new<R: Rng + ?Sized>(
        transformations: &'a [FlameTransformation],
        frame: Rectangle,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let builder = AccumulatorBuilder::new(frame, width, height)?;
        Ok(Self::with_builder(transformations, builder, rng))
    }

    /// Warms up a fresh orbit that records into `builder`, keeping the hits
    /// it already holds.
    pub fn with_builder<R: Rng + ?Sized>(
        transformations: &'a [FlameTransformation],
        builder: AccumulatorBuilder,
        rng: &mut R,
    ) -> Self {
        let picker = (!transformations.is_empty()).then(|| Uniform::new(0, transformations.len()));
        let mut renderer = Renderer {
            transformations,
            picker,
            state: OrbitState::START,
            builder,
            samples: 0,
        };
        for _ in 0..WARM_UP_ITERATIONS {
            renderer.advance(rng);
        }
        debug!(point = ?renderer.state.point, "orbit warmed up");
        renderer
    }

    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(picker) = self.picker.as_ref() else {
            return false;
        };
        let index = picker.sample(rng);
        let Some(state) = step(self.transformations, self.state, index) else {
            return false;
        };
        self.state = state;
        true
    }

    /// Draws `samples` more points, recording each one.
    pub fn run<R: Rng + ?Sized>(&mut self, samples: u64, rng: &mut R) {
        for _ in 0..samples {
            if !self.advance(rng) {
                return;
            }
            self.builder.hit(self.state.point, self.state.color);
            self.samples += 1;
        }
    }

    pub fn state(&self) -> OrbitState {
        self.state
    }

    /// Points drawn since the warm-up.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn snapshot(&self) -> Accumulator {
        self.builder.build()
    }

    pub fn into_builder(self) -> AccumulatorBuilder {
        self.builder
    }
}

fn sample_count(width: usize, height: usize, density: u32) -> u64 {
    u64::from(density) * width as u64 * height as u64
}

/// Renders `density * width * height` samples of a single orbit.
///
/// An empty transformation list yields an accumulator without hits.
pub fn render<R: Rng + ?Sized>(
    transformations: &[FlameTransformation],
    frame: Rectangle,
    width: usize,
    height: usize,
    density: u32,
    rng: &mut R,
) -> Result<Accumulator> {
    let _span = info_span!("render", width, height, density).entered();
    let mut renderer = Renderer::new(transformations, frame, width, height, rng)?;
    renderer.run(sample_count(width, height, density), rng);
    let accumulator = renderer.snapshot();
    info!(
        samples = renderer.samples(),
        kept = accumulator.total_hits(),
        max_hits = accumulator.max_hit_count(),
        "render complete"
    );
    Ok(accumulator)
}

/// Random source of orbit `orbit` in a parallel render seeded with `seed`.
/// Distinct `(seed, orbit)` pairs key distinct ChaCha streams.
fn orbit_rng(seed: u64, orbit: u64) -> StdRng {
    let mut key = <StdRng as SeedableRng>::Seed::default();
    key[..8].copy_from_slice(&seed.to_le_bytes());
    key[8..16].copy_from_slice(&orbit.to_le_bytes());
    StdRng::from_seed(key)
}

/// Splits the samples over `orbits` independent orbits on the rayon pool.
///
/// There are never more orbits than samples. Each orbit warms up on its own
/// and draws from [`orbit_rng`]. Orbits handled by the same rayon job share
/// one accumulator; those partials are merged pairwise.
pub fn render_parallel(
    transformations: &[FlameTransformation],
    frame: Rectangle,
    width: usize,
    height: usize,
    density: u32,
    orbits: usize,
    seed: u64,
) -> Result<Accumulator> {
    let _span = info_span!("render_parallel", width, height, density, orbits).entered();
    let total = sample_count(width, height, density);
    let orbits = (orbits as u64).clamp(1, total.max(1));
    let empty = AccumulatorBuilder::new(frame, width, height)?;

    let merged = (0..orbits)
        .into_par_iter()
        .try_fold(
            || empty.clone(),
            |builder, orbit| {
                let samples = total / orbits + u64::from(orbit < total % orbits);
                let mut rng = orbit_rng(seed, orbit);
                let mut renderer = Renderer::with_builder(transformations, builder, &mut rng);
                renderer.run(samples, &mut rng);
                debug!(orbit, samples, "orbit finished");
                Ok::<_, FlameError>(renderer.into_builder())
            },
        )
        .try_reduce(
            || empty.clone(),
            |mut merged, partial| {
                merged.merge(&partial)?;
                Ok(merged)
            },
        )?;
    let accumulator = merged.build();
    info!(
        samples = total,
        kept = accumulator.total_hits(),
        max_hits = accumulator.max_hit_count(),
        "render complete"
    );
    Ok(accumulator)
}
