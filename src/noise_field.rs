//! Multi-octave coherent noise evaluation.
//!
//! Wraps a Perlin generator in fractional Brownian motion: each octave's
//! amplitude decays by `persistence` and its frequency grows by `lacunarity`,
//! and the sum is normalized back into roughly [-1, 1]. Tile periods wrap the
//! sampled coordinates so maps can repeat seamlessly at period boundaries.

use noise::{NoiseFn, Perlin};

/// A seeded 2D coherent-noise field.
///
/// The `base` value offsets the permutation table, decorrelating fields that
/// are sampled at the same coordinates.
pub struct NoiseField {
    perlin: Perlin,
}

impl NoiseField {
    pub fn new(base: u32) -> Self {
        Self {
            perlin: Perlin::new(base),
        }
    }

    /// Evaluate the field at `(x, y)`.
    ///
    /// `period_x`/`period_y` give the tile period in input units; a period of
    /// zero disables wrapping on that axis. Output is deterministic for fixed
    /// inputs and lies in approximately [-1, 1].
    pub fn evaluate(
        &self,
        x: f64,
        y: f64,
        octaves: u32,
        persistence: f64,
        lacunarity: f64,
        period_x: usize,
        period_y: usize,
    ) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_value = 0.0;

        for _ in 0..octaves {
            let sx = wrap(x * frequency, period_x as f64 * frequency);
            let sy = wrap(y * frequency, period_y as f64 * frequency);
            total += amplitude * self.perlin.get([sx, sy]);
            max_value += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        if max_value > 0.0 {
            total / max_value
        } else {
            0.0
        }
    }
}

/// Fold a coordinate into [0, period); period 0 means no tiling.
fn wrap(value: f64, period: f64) -> f64 {
    if period > 0.0 {
        value.rem_euclid(period)
    } else {
        value
    }
}
