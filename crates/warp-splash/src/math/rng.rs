//! Seedable pseudo-random number generator (xorshift64) and the
//! distributions the procedural fields sample from.

use glam::Vec2;
use std::f32::consts::TAU;

/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic, fast, no-std compatible.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound).
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Uniform float in [0, 1). Uses the top 24 bits so every value is exact in f32.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in [min, max).
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Normally distributed sample (Box-Muller) clamped to [min, max].
    pub fn gaussian(&mut self, min: f32, max: f32, mean: f32, std_dev: f32) -> f32 {
        // 1 - u keeps u1 in (0, 1] so ln never sees zero
        let u1 = 1.0 - self.next_f32();
        let u2 = self.next_f32();
        let std_normal = (-2.0 * u1.ln()).sqrt() * (TAU * u2).sin();
        (mean + std_dev * std_normal).clamp(min, max)
    }

    /// Point uniformly distributed by area inside the ring [r_min, r_max] around `center`.
    ///
    /// Angle is uniform; the radius density is `p(r) = A·r` with
    /// `A = 2 / (r_max² - r_min²)`, sampled by its inverse CDF
    /// `r = sqrt(2u / A + r_min²)`.
    pub fn annulus(&mut self, r_min: f32, r_max: f32, center: Vec2) -> Vec2 {
        let theta = self.next_f32() * TAU;
        let span = r_max * r_max - r_min * r_min;
        let r = if span <= 0.0 {
            r_min
        } else {
            let a = 2.0 / span;
            (2.0 * self.next_f32() / a + r_min * r_min).sqrt()
        };
        center + Vec2::new(r * theta.cos(), r * theta.sin())
    }

    /// Pick one element uniformly. `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_int(items.len() as u32) as usize)
    }
}
