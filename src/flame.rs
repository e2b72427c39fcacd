//! A flame is a set of transformations driven together by the chaos game.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::accumulator::Accumulator;
use crate::affine::AffineTransformation;
use crate::error::{FlameError, Result};
use crate::geometry::{Point, Rectangle};
use crate::transformation::{FlameTransformation, FlameTransformationBuilder};
use crate::variation::Variation;

/// Position of an orbit together with its running color index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    pub point: Point,
    pub color: f64,
}

impl OrbitState {
    pub const START: OrbitState = OrbitState {
        point: Point::ORIGIN,
        color: 0.0,
    };
}

impl Default for OrbitState {
    fn default() -> Self {
        Self::START
    }
}

/// Color index attached to the `index`-th transformation of a flame:
/// 0, 1, 1/2, 1/4, 3/4, 1/8, 3/8, 5/8, 7/8, 1/16, ...
pub fn transformation_color(index: usize) -> f64 {
    match index {
        0 => 0.0,
        1 => 1.0,
        _ => {
            let k = index - 1;
            let step = 1usize << (usize::BITS - 1 - k.leading_zeros());
            (2 * (k - step) + 1) as f64 / (2 * step) as f64
        }
    }
}

/// Advances `state` through the `index`-th transformation, or returns
/// `None` when there is no such transformation.
pub(crate) fn step(
    transformations: &[FlameTransformation],
    state: OrbitState,
    index: usize,
) -> Option<OrbitState> {
    let transformation = transformations.get(index)?;
    Some(OrbitState {
        point: transformation.transform_point(state.point),
        color: (state.color + transformation_color(index)) / 2.0,
    })
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Flame {
    transformations: Vec<FlameTransformation>,
}

impl Flame {
    pub fn new(transformations: Vec<FlameTransformation>) -> Self {
        Flame { transformations }
    }

    pub fn transformations(&self) -> &[FlameTransformation] {
        &self.transformations
    }

    pub fn is_empty(&self) -> bool {
        self.transformations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transformations.len()
    }

    /// The pure transition: `None` if `index` names no transformation.
    pub fn step(&self, state: OrbitState, index: usize) -> Option<OrbitState> {
        step(&self.transformations, state, index)
    }

    /// Steps through a uniformly chosen transformation; `None` for an
    /// empty flame.
    pub fn step_random<R: Rng + ?Sized>(
        &self,
        state: OrbitState,
        rng: &mut R,
    ) -> Option<OrbitState> {
        if self.is_empty() {
            return None;
        }
        let index = Uniform::new(0, self.len()).sample(rng);
        self.step(state, index)
    }

    pub fn render<R: Rng + ?Sized>(
        &self,
        frame: Rectangle,
        width: usize,
        height: usize,
        density: u32,
        rng: &mut R,
    ) -> Result<Accumulator> {
        crate::chaos::render(&self.transformations, frame, width, height, density, rng)
    }
}

/// Editable flame. Transformations are addressed by their position in the
/// list; [`FlameBuilder::build`] hands out an independent snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlameBuilder {
    transformations: Vec<FlameTransformationBuilder>,
}

impl FlameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, index: usize) -> Result<&FlameTransformationBuilder> {
        let len = self.transformations.len();
        self.transformations
            .get(index)
            .ok_or(FlameError::TransformationIndexOutOfRange { index, len })
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut FlameTransformationBuilder> {
        let len = self.transformations.len();
        self.transformations
            .get_mut(index)
            .ok_or(FlameError::TransformationIndexOutOfRange { index, len })
    }

    pub fn transformation_count(&self) -> usize {
        self.transformations.len()
    }

    /// Appends a transformation and returns its index.
    pub fn add_transformation(&mut self, transformation: FlameTransformationBuilder) -> usize {
        self.transformations.push(transformation);
        self.transformations.len() - 1
    }

    /// Removes a transformation; later ones shift down by one.
    pub fn remove_transformation(&mut self, index: usize) -> Result<FlameTransformationBuilder> {
        self.get(index)?;
        Ok(self.transformations.remove(index))
    }

    pub fn affine_transformation(&self, index: usize) -> Result<AffineTransformation> {
        Ok(self.get(index)?.affine())
    }

    pub fn set_affine_transformation(
        &mut self,
        index: usize,
        affine: AffineTransformation,
    ) -> Result<()> {
        self.get_mut(index)?.set_affine(affine);
        Ok(())
    }

    pub fn variation_weight(&self, index: usize, variation: Variation) -> Result<f64> {
        self.get(index)?.weight(variation.index())
    }

    pub fn set_variation_weight(
        &mut self,
        index: usize,
        variation: Variation,
        weight: f64,
    ) -> Result<()> {
        self.get_mut(index)?.set_weight(variation.index(), weight)
    }

    pub fn build(&self) -> Flame {
        Flame::new(self.transformations.iter().map(|t| t.build()).collect())
    }
}

impl From<&Flame> for FlameBuilder {
    fn from(flame: &Flame) -> Self {
        FlameBuilder {
            transformations: flame.transformations.iter().map(Into::into).collect(),
        }
    }
}
