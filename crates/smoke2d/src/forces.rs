//! Body forces and decay: buoyancy, turbulence, the cursor impulse and
//! per-tick dissipation.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::grid::Grid;
use crate::params::{FORCE_DENSITY_THRESHOLD, MIN_FORCE_DISTANCE, SmokeParams};

/// Hot, dense cells rise: pull Y velocity upward (negative) in proportion to
/// the product of density and temperature.
pub fn apply_buoyancy(grid: &mut Grid, buoyancy: f32) {
    for y in 1..grid.height - 1 {
        for x in 1..grid.width - 1 {
            let idx = grid.cell_index(x, y);
            grid.vel_y[idx] -= buoyancy * grid.density[idx] * grid.temperature[idx];
        }
    }
}

/// Add zero-mean uniform noise to both velocity components of every interior
/// cell. The draws happen regardless of `amount`, so runs with different
/// amplitudes stay on the same random sequence.
pub fn apply_turbulence(grid: &mut Grid, rng: &mut ChaCha8Rng, amount: f32) {
    for y in 1..grid.height - 1 {
        for x in 1..grid.width - 1 {
            let idx = grid.cell_index(x, y);
            grid.vel_x[idx] += rng.gen_range(-1.0..1.0) * amount;
            grid.vel_y[idx] += rng.gen_range(-1.0..1.0) * amount;
        }
    }
}

/// Push smoke away from the cursor.
///
/// Only cells carrying visible smoke react, and the force falls off linearly
/// to zero at `force_radius`. The direction divisor is floored so a cell
/// sitting exactly under the cursor cannot blow up.
pub fn apply_impulse(grid: &mut Grid, cursor: Vec2, params: &SmokeParams) {
    for y in 1..grid.height - 1 {
        for x in 1..grid.width - 1 {
            let idx = grid.cell_index(x, y);
            if grid.density[idx] <= FORCE_DENSITY_THRESHOLD {
                continue;
            }

            let offset = Vec2::new(x as f32, y as f32) - cursor;
            let dist = offset.length();
            if dist >= params.force_radius {
                continue;
            }

            let falloff = 1.0 - dist / params.force_radius;
            let dir = offset / dist.max(MIN_FORCE_DISTANCE);
            grid.vel_x[idx] += dir.x * params.force_strength * falloff;
            grid.vel_y[idx] += dir.y * params.force_strength * falloff;
        }
    }
}

/// Multiplicative decay of density and temperature over the whole grid.
pub fn dissipate(grid: &mut Grid, density_decay: f32, temperature_decay: f32) {
    for d in grid.density.iter_mut() {
        *d *= density_decay;
    }
    for t in grid.temperature.iter_mut() {
        *t *= temperature_decay;
    }
}
