//! Flame transformations: an affine map followed by a weighted blend of
//! variations.

use crate::affine::AffineTransformation;
use crate::error::{FlameError, Result};
use crate::geometry::Point;
use crate::variation::Variation;

#[derive(Debug, Clone, PartialEq)]
pub struct FlameTransformation {
    affine: AffineTransformation,
    weights: [f64; Variation::COUNT],
}

fn check_weight(index: usize, weight: f64) -> Result<()> {
    if !(weight >= 0.0) {
        return Err(FlameError::NegativeWeight { index, weight });
    }
    Ok(())
}

impl FlameTransformation {
    /// `weights` must hold one non-negative weight per variation, in
    /// `Variation::ALL` order.
    pub fn new(affine: AffineTransformation, weights: &[f64]) -> Result<Self> {
        let weights: [f64; Variation::COUNT] = weights
            .try_into()
            .map_err(|_| FlameError::WrongWeightCount(weights.len()))?;
        for (index, &weight) in weights.iter().enumerate() {
            check_weight(index, weight)?;
        }
        Ok(FlameTransformation { affine, weights })
    }

    pub fn affine(&self) -> AffineTransformation {
        self.affine
    }

    pub fn weight(&self, variation: Variation) -> f64 {
        self.weights[variation.index()]
    }

    pub fn weights(&self) -> &[f64; Variation::COUNT] {
        &self.weights
    }

    pub fn transform_point(&self, p: Point) -> Point {
        let p = self.affine.transform_point(p);
        Variation::ALL
            .iter()
            .zip(self.weights.iter())
            .filter(|&(_, &w)| w > 0.0)
            .fold(Point::ORIGIN, |sum, (v, &w)| {
                let q = v.transform_point(p);
                Point::new(sum.x + w * q.x, sum.y + w * q.y)
            })
    }
}

/// Editable counterpart of [`FlameTransformation`].
#[derive(Debug, Clone, PartialEq)]
pub struct FlameTransformationBuilder {
    affine: AffineTransformation,
    weights: [f64; Variation::COUNT],
}

impl FlameTransformationBuilder {
    /// Identity map with every weight at zero.
    pub fn new() -> Self {
        FlameTransformationBuilder {
            affine: AffineTransformation::IDENTITY,
            weights: [0.0; Variation::COUNT],
        }
    }

    pub fn affine(&self) -> AffineTransformation {
        self.affine
    }

    pub fn set_affine(&mut self, affine: AffineTransformation) {
        self.affine = affine;
    }

    pub fn weight(&self, index: usize) -> Result<f64> {
        self.weights
            .get(index)
            .copied()
            .ok_or(FlameError::VariationIndexOutOfRange(index))
    }

    pub fn set_weight(&mut self, index: usize, weight: f64) -> Result<()> {
        check_weight(index, weight)?;
        let slot = self
            .weights
            .get_mut(index)
            .ok_or(FlameError::VariationIndexOutOfRange(index))?;
        *slot = weight;
        Ok(())
    }

    pub fn build(&self) -> FlameTransformation {
        FlameTransformation {
            affine: self.affine,
            weights: self.weights,
        }
    }
}

impl Default for FlameTransformationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&FlameTransformation> for FlameTransformationBuilder {
    fn from(t: &FlameTransformation) -> Self {
        FlameTransformationBuilder {
            affine: t.affine,
            weights: t.weights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(p: Point, q: Point) -> bool {
        (p.x - q.x).abs() < 1e-12 && (p.y - q.y).abs() < 1e-12
    }

    #[test]
    fn rejects_wrong_weight_count() {
        let err = FlameTransformation::new(AffineTransformation::IDENTITY, &[1.0; 5]);
        assert_eq!(err, Err(FlameError::WrongWeightCount(5)));
        assert!(FlameTransformation::new(AffineTransformation::IDENTITY, &[0.0; 7]).is_err());
    }

    #[test]
    fn rejects_negative_weight() {
        let err = FlameTransformation::new(
            AffineTransformation::IDENTITY,
            &[1.0, 0.0, -0.5, 0.0, 0.0, 0.0],
        );
        assert_eq!(
            err,
            Err(FlameError::NegativeWeight {
                index: 2,
                weight: -0.5
            })
        );
    }

    #[test]
    fn linear_identity_is_identity() {
        let t = FlameTransformation::new(
            AffineTransformation::IDENTITY,
            &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        )
        .unwrap();
        let p = Point::new(0.3, -0.7);
        assert_eq!(t.transform_point(p), p);
    }

    #[test]
    fn affine_applies_before_blend() {
        let affine = AffineTransformation::new_translation(1.0, 1.0);
        let t = FlameTransformation::new(affine, &[0.5, 0.0, 0.0, 0.0, 0.0, 0.25]).unwrap();
        let p = Point::new(0.0, 1.0);
        let moved = Point::new(1.0, 2.0);
        let bubble = Variation::Bubble.transform_point(moved);
        let expected = Point::new(0.5 * 1.0 + 0.25 * bubble.x, 0.5 * 2.0 + 0.25 * bubble.y);
        assert!(close(t.transform_point(p), expected));
    }

    #[test]
    fn all_zero_weights_collapse_to_origin() {
        let t = FlameTransformation::new(AffineTransformation::new_scaling(3.0, 3.0), &[0.0; 6])
            .unwrap();
        assert_eq!(t.transform_point(Point::new(1.0, 1.0)), Point::ORIGIN);
    }

    #[test]
    fn builder_reads_and_writes_weights() {
        let mut b = FlameTransformationBuilder::new();
        b.set_weight(3, 0.75).unwrap();
        assert_eq!(b.weight(3), Ok(0.75));
        assert_eq!(b.weight(6), Err(FlameError::VariationIndexOutOfRange(6)));
        assert_eq!(
            b.set_weight(6, 1.0),
            Err(FlameError::VariationIndexOutOfRange(6))
        );
        assert!(b.set_weight(0, -1.0).is_err());

        b.set_affine(AffineTransformation::new_rotation(1.0));
        let t = b.build();
        assert_eq!(t.weight(Variation::Swirl), 0.75);
        assert_eq!(t.affine(), AffineTransformation::new_rotation(1.0));
        assert_eq!(FlameTransformationBuilder::from(&t), b);
    }
}
