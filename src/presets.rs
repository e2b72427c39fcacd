//! Built-in flames, each with the view that frames it.

use crate::affine::AffineTransformation;
use crate::error::{FlameError, Result};
use crate::flame::Flame;
use crate::geometry::{Point, Rectangle};
use crate::transformation::FlameTransformation;

#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub frame: Rectangle,
    pub flame: Flame,
}

pub const NAMES: [&str; 3] = ["shark-fin", "turbulence", "ifs"];

fn transformation(coefficients: [f64; 6], weights: [f64; 6]) -> Result<FlameTransformation> {
    let [a, b, c, d, e, f] = coefficients;
    FlameTransformation::new(AffineTransformation::new(a, b, c, d, e, f), &weights)
}

fn preset(
    name: &'static str,
    center: (f64, f64),
    size: (f64, f64),
    transformations: &[([f64; 6], [f64; 6])],
) -> Result<Preset> {
    let transformations = transformations
        .iter()
        .map(|&(coefficients, weights)| transformation(coefficients, weights))
        .collect::<Result<Vec<_>>>()?;
    Ok(Preset {
        name,
        frame: Rectangle::new(Point::new(center.0, center.1), size.0, size.1)?,
        flame: Flame::new(transformations),
    })
}

pub fn shark_fin() -> Result<Preset> {
    preset(
        "shark-fin",
        (-0.25, 0.0),
        (5.0, 4.0),
        &[
            (
                [-0.4113504, -0.7124804, -0.4, 0.7124795, -0.4113508, 0.8],
                [1.0, 0.1, 0.0, 0.0, 0.0, 0.0],
            ),
            (
                [-0.3957339, 0.0, -1.6, 0.0, -0.3957337, 0.2],
                [0.0, 0.0, 0.0, 0.0, 0.8, 1.0],
            ),
            (
                [0.4810169, 0.0, 1.0, 0.0, 0.4810169, 0.9],
                [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            ),
        ],
    )
}

pub fn turbulence() -> Result<Preset> {
    preset(
        "turbulence",
        (0.1, 0.1),
        (3.0, 3.0),
        &[
            (
                [0.7124807, -0.4113509, -0.3, 0.4113513, 0.7124808, -0.7],
                [0.5, 0.0, 0.0, 0.4, 0.0, 0.0],
            ),
            (
                [0.3731079, -0.6462417, 0.4, 0.6462414, 0.3731076, 0.3],
                [1.0, 0.0, 0.1, 0.0, 0.0, 0.0],
            ),
            (
                [0.0842641, -0.314478, -0.1, 0.314478, 0.0842641, 0.3],
                [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            ),
        ],
    )
}

/// Four purely linear maps: a plain iterated function system.
pub fn ifs() -> Result<Preset> {
    const LINEAR: [f64; 6] = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0];
    preset(
        "ifs",
        (-0.3, 0.2),
        (4.2, 2.8),
        &[
            ([-0.870, -0.100, -0.930, -0.350, 0.500, -0.500], LINEAR),
            ([0.590, -0.620, -0.800, -0.110, 0.100, -0.900], LINEAR),
            ([-0.056, 0.310, 0.920, 0.170, 0.000, -0.100], LINEAR),
            ([0.910, -0.190, 0.330, 0.240, -0.600, 0.900], LINEAR),
        ],
    )
}

pub fn by_name(name: &str) -> Result<Preset> {
    match name {
        "shark-fin" => shark_fin(),
        "turbulence" => turbulence(),
        "ifs" => ifs(),
        other => Err(FlameError::UnknownPreset(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_named_preset_builds() {
        for name in NAMES {
            let preset = by_name(name).unwrap();
            assert_eq!(preset.name, name);
            assert!(!preset.flame.is_empty());
        }
    }

    #[test]
    fn unknown_preset() {
        assert_eq!(
            by_name("mandelbrot"),
            Err(FlameError::UnknownPreset("mandelbrot".into()))
        );
    }

    #[test]
    fn shark_fin_shape() {
        let preset = shark_fin().unwrap();
        assert_eq!(preset.flame.len(), 3);
        assert_eq!(preset.frame.left(), -2.75);
        assert_eq!(preset.frame.top(), 2.0);
    }
}
