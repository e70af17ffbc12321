use std::f32::consts::TAU;
use std::ops::Range;

use egui::{Color32, Pos2, Vec2};
use rand::Rng;

/// Number of stars allocated per renderer start.
pub const STAR_COUNT: usize = 200;

/// Amber used for every star and halo.
pub const STAR_TINT: Color32 = Color32::from_rgb(251, 191, 36);

pub const RADIUS_RANGE: Range<f32> = 0.5..2.5;
pub const OPACITY_RANGE: Range<f32> = 0.2..1.0;
/// Radians per millisecond.
pub const TWINKLE_SPEED_RANGE: Range<f32> = 0.005..0.025;

/// Instantaneous opacity above which a halo is drawn.
pub const GLOW_THRESHOLD: f32 = 0.8;
pub const GLOW_RADIUS_SCALE: f32 = 2.0;
pub const GLOW_OPACITY_SCALE: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Pos2,
    pub radius: f32,
    /// Peak opacity; the twinkle never exceeds it.
    pub opacity: f32,
    pub twinkle_speed: f32,
    pub phase: f32,
}

impl Star {
    /// Places a star uniformly inside `bounds` with randomized appearance.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        Self {
            position: Pos2::new(sample(rng, 0.0..bounds.x), sample(rng, 0.0..bounds.y)),
            radius: sample(rng, RADIUS_RANGE),
            opacity: sample(rng, OPACITY_RANGE),
            twinkle_speed: sample(rng, TWINKLE_SPEED_RANGE),
            phase: sample(rng, 0.0..TAU),
        }
    }

    pub fn field<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, count: usize) -> Vec<Self> {
        (0..count).map(|_| Self::random(rng, bounds)).collect()
    }

    pub fn opacity_at(&self, elapsed_ms: f64) -> f32 {
        twinkle(self.opacity, self.twinkle_speed, self.phase, elapsed_ms)
    }

    /// Whether the star is bright enough at this instant to carry a halo.
    pub fn glows_at(&self, elapsed_ms: f64) -> bool {
        self.opacity_at(elapsed_ms) > GLOW_THRESHOLD
    }
}

/// `base × (0.7 + 0.3 × sin(t × speed + phase))`, always within
/// `[0.4 × base, base]`.
pub fn twinkle(base: f32, speed: f32, phase: f32, elapsed_ms: f64) -> f32 {
    let wave = (elapsed_ms * f64::from(speed) + f64::from(phase)).sin() as f32;
    base * (0.7 + 0.3 * wave.clamp(-1.0, 1.0))
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: Range<f32>) -> f32 {
    if range.is_empty() {
        range.start
    } else {
        rng.gen_range(range)
    }
}
