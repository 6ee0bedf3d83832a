//! Vorticity confinement.
//!
//! Semi-Lagrangian advection and the coarse grid smear out small eddies.
//! Confinement measures the curl of the velocity field, finds where rotation
//! is concentrated, and pushes velocity along the curl gradient to feed the
//! swirls back in.

use crate::grid::Grid;
use crate::params::MIN_VORTICITY_GRADIENT;

/// Central-difference curl of the velocity field over interior cells.
///
/// Edge cells of the curl buffer are never written and stay zero, which the
/// gradient stencil below relies on.
pub fn compute_curl(grid: &mut Grid) {
    let width = grid.width;
    for y in 1..grid.height - 1 {
        for x in 1..width - 1 {
            let idx = y * width + x;
            let dvy_dx = 0.5 * (grid.vel_y[idx + 1] - grid.vel_y[idx - 1]);
            let dvx_dy = 0.5 * (grid.vel_x[idx + width] - grid.vel_x[idx - width]);
            grid.curl[idx] = dvy_dx - dvx_dy;
        }
    }
}

/// Add the confinement force to interior velocities.
///
/// The force is the normalized gradient of |curl| rotated a quarter turn and
/// scaled by the local curl. Cells in a flat curl region (gradient magnitude
/// under [`MIN_VORTICITY_GRADIENT`]) are skipped, so a still field gets no
/// spurious kick.
pub fn apply_confinement(grid: &mut Grid, strength: f32) {
    compute_curl(grid);

    let width = grid.width;
    for y in 1..grid.height - 1 {
        for x in 1..width - 1 {
            let idx = y * width + x;

            let grad_x = 0.5 * (grid.curl[idx + 1].abs() - grid.curl[idx - 1].abs());
            let grad_y = 0.5 * (grid.curl[idx + width].abs() - grid.curl[idx - width].abs());
            let magnitude = (grad_x * grad_x + grad_y * grad_y).sqrt();
            if magnitude <= MIN_VORTICITY_GRADIENT {
                continue;
            }

            let nx = grad_x / magnitude;
            let ny = grad_y / magnitude;
            let curl = grid.curl[idx];

            grid.vel_x[idx] += ny * curl * strength;
            grid.vel_y[idx] -= nx * curl * strength;
        }
    }
}
