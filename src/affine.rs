//! Affine maps of the plane.
//!
//! `x' = a*x + b*y + c`, `y' = d*x + e*y + f`.

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransformation {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl AffineTransformation {
    pub const IDENTITY: AffineTransformation = AffineTransformation {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 0.0,
        e: 1.0,
        f: 0.0,
    };

    /// Any six coefficients are accepted, singular maps included.
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        AffineTransformation { a, b, c, d, e, f }
    }

    pub fn new_translation(dx: f64, dy: f64) -> Self {
        Self::new(1.0, 0.0, dx, 0.0, 1.0, dy)
    }

    /// Counter-clockwise rotation about the origin.
    pub fn new_rotation(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, -sin, 0.0, sin, cos, 0.0)
    }

    pub fn new_scaling(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, 0.0, sy, 0.0)
    }

    pub fn new_shear_x(s: f64) -> Self {
        Self::new(1.0, s, 0.0, 0.0, 1.0, 0.0)
    }

    pub fn new_shear_y(s: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, s, 1.0, 0.0)
    }

    /// The coefficients in `(a, b, c, d, e, f)` order.
    pub fn coefficients(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    pub fn translation_x(&self) -> f64 {
        self.c
    }

    pub fn translation_y(&self) -> f64 {
        self.f
    }

    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.b * p.y + self.c,
            self.d * p.x + self.e * p.y + self.f,
        )
    }

    /// Returns the map applying `other` first, then `self`.
    pub fn compose_with(&self, other: &AffineTransformation) -> AffineTransformation {
        AffineTransformation {
            a: self.a * other.a + self.b * other.d,
            b: self.a * other.b + self.b * other.e,
            c: self.a * other.c + self.b * other.f + self.c,
            d: self.d * other.a + self.e * other.d,
            e: self.d * other.b + self.e * other.e,
            f: self.d * other.c + self.e * other.f + self.f,
        }
    }
}

impl Default for AffineTransformation {
    fn default() -> Self {
        Self::IDENTITY
    }
}
