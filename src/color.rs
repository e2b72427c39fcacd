//! RGB colors with channels in `[0, 1]` and piecewise-linear palettes.

use crate::error::{FlameError, Result};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

fn check_channel(channel: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(FlameError::ChannelOutOfRange { channel, value })
    }
}

/// Quantizes a `[0, 1]` channel to `0..=255`.
fn quantize(value: f64) -> u32 {
    (value * 255.0).floor() as u32
}

impl Color {
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    pub const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GREEN: Color = Color {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };
    pub const BLUE: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };

    pub fn new(r: f64, g: f64, b: f64) -> Result<Self> {
        Ok(Color {
            r: check_channel("red", r)?,
            g: check_channel("green", g)?,
            b: check_channel("blue", b)?,
        })
    }

    pub fn red(&self) -> f64 {
        self.r
    }

    pub fn green(&self) -> f64 {
        self.g
    }

    pub fn blue(&self) -> f64 {
        self.b
    }

    /// `(1 - t) * self + t * other`, channel by channel.
    pub fn mix_with(&self, other: Color, t: f64) -> Result<Color> {
        if !(0.0..=1.0).contains(&t) {
            return Err(FlameError::ProportionOutOfRange(t));
        }
        let lerp = |a: f64, b: f64| ((1.0 - t) * a + t * b).clamp(0.0, 1.0);
        Ok(Color {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
        })
    }

    /// `0xRRGGBB`, each channel `floor(c * 255)`.
    pub fn as_packed_rgb(&self) -> u32 {
        (quantize(self.r) << 16) | (quantize(self.g) << 8) | quantize(self.b)
    }

    /// Channels as bytes, for encoders.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let packed = self.as_packed_rgb();
        ((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }
}

/// Ordered control colors spread evenly over `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.len() < 2 {
            return Err(FlameError::TooFewColors(colors.len()));
        }
        Ok(Palette { colors })
    }

    /// `count` uniformly random control colors.
    pub fn random<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Self> {
        let colors = (0..count)
            .map(|_| Color {
                r: rng.gen(),
                g: rng.gen(),
                b: rng.gen(),
            })
            .collect();
        Palette::new(colors)
    }

    /// Black, red, yellow, white.
    pub fn fire() -> Self {
        Palette {
            colors: vec![
                Color::BLACK,
                Color::RED,
                Color {
                    r: 1.0,
                    g: 1.0,
                    b: 0.0,
                },
                Color::WHITE,
            ],
        }
    }

    pub fn rgb() -> Self {
        Palette {
            colors: vec![Color::RED, Color::GREEN, Color::BLUE],
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn color_for_index(&self, index: f64) -> Result<Color> {
        if !(0.0..=1.0).contains(&index) {
            return Err(FlameError::PaletteIndexOutOfRange(index));
        }
        let segments = self.colors.len() - 1;
        let scaled = index * segments as f64;
        // index == 1 lands on the start of a segment past the end.
        let lower = (scaled.floor() as usize).min(segments - 1);
        let proportion = (scaled - lower as f64).clamp(0.0, 1.0);
        self.colors[lower].mix_with(self.colors[lower + 1], proportion)
    }
}
