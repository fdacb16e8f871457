use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

pub const PARTICLE_COUNT: usize = 80;

pub const X_PERCENT_RANGE: std::ops::Range<f32> = 0.0..100.0;
pub const DELAY_SECS_RANGE: std::ops::Range<f32> = 0.0..2.0;
pub const FALL_SECS_RANGE: std::ops::Range<f32> = 2.0..5.0;
pub const SIZE_PX_RANGE: std::ops::Range<f32> = 6.0..14.0;

const GOLD: Rgb = Rgb::new(0xff, 0xd7, 0x00);
const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

/// Used when the game ends in a tie
pub const NEUTRAL_SEED: Rgb = Rgb::new(0xc0, 0xc0, 0xc0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn scale(self, num: u16, den: u16) -> Self {
        let s = |c: u8| (u16::from(c) * num / den).min(255) as u8;
        Self::new(s(self.r), s(self.g), s(self.b))
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color {0:?}, expected the form #rrggbb")]
pub struct ParseRgbError(String);

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRgbError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseRgbError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// The seed color followed by fixed accents
pub fn palette(seed: Rgb) -> [Rgb; 5] {
    [seed, seed.scale(3, 2), seed.scale(2, 3), GOLD, WHITE]
}

/// One falling piece of confetti
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    pub x_percent: f32,
    pub delay_secs: f32,
    pub fall_secs: f32,
    pub size_px: f32,
    pub color: Rgb,
}

pub fn launch<R: Rng + ?Sized>(seed: Rgb, rng: &mut R) -> Vec<Particle> {
    let colors = palette(seed);
    (0..PARTICLE_COUNT)
        .map(|_| Particle {
            x_percent: rng.random_range(X_PERCENT_RANGE),
            delay_secs: rng.random_range(DELAY_SECS_RANGE),
            fall_secs: rng.random_range(FALL_SECS_RANGE),
            size_px: rng.random_range(SIZE_PX_RANGE),
            color: colors[rng.random_range(0..colors.len())],
        })
        .collect()
}
