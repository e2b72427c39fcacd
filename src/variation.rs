//! The fixed library of nonlinear warps blended by a flame transformation.

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variation {
    Linear,
    Sinusoidal,
    Spherical,
    Swirl,
    Horseshoe,
    Bubble,
}

impl Variation {
    /// Every variation, in index order.
    pub const ALL: [Variation; 6] = [
        Variation::Linear,
        Variation::Sinusoidal,
        Variation::Spherical,
        Variation::Swirl,
        Variation::Horseshoe,
        Variation::Bubble,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn from_index(index: usize) -> Option<Variation> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Variation::Linear => 0,
            Variation::Sinusoidal => 1,
            Variation::Spherical => 2,
            Variation::Swirl => 3,
            Variation::Horseshoe => 4,
            Variation::Bubble => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variation::Linear => "Linear",
            Variation::Sinusoidal => "Sinusoidal",
            Variation::Spherical => "Spherical",
            Variation::Swirl => "Swirl",
            Variation::Horseshoe => "Horseshoe",
            Variation::Bubble => "Bubble",
        }
    }

    /// Warps `p`. Spherical and Horseshoe map the origin to itself rather
    /// than dividing by a zero radius.
    pub fn transform_point(self, p: Point) -> Point {
        let Point { x, y } = p;
        match self {
            Variation::Linear => p,
            Variation::Sinusoidal => Point::new(x.sin(), y.sin()),
            Variation::Spherical => {
                let r2 = x * x + y * y;
                if r2 == 0.0 {
                    return Point::ORIGIN;
                }
                Point::new(x / r2, y / r2)
            }
            Variation::Swirl => {
                let (sin, cos) = (x * x + y * y).sin_cos();
                Point::new(x * sin - y * cos, x * cos + y * sin)
            }
            Variation::Horseshoe => {
                let r = p.r();
                if r == 0.0 {
                    return Point::ORIGIN;
                }
                Point::new((x - y) * (x + y) / r, 2.0 * x * y / r)
            }
            Variation::Bubble => {
                let r2 = x * x + y * y + 4.0;
                Point::new(4.0 * x / r2, 4.0 * y / r2)
            }
        }
    }
}
