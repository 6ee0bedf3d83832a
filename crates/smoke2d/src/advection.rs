//! Semi-Lagrangian advection.
//!
//! Every interior cell traces backward along its own velocity and gathers the
//! advected quantity from the pre-step snapshot with bilinear interpolation.
//! Unconditionally stable: the source point is clamped to the valid sampling
//! window, so arbitrarily large velocities just saturate at the walls.

use crate::grid::Grid;

/// Advect density, temperature and both velocity components through the
/// current velocity field.
///
/// Velocity self-advects from the same snapshot the scalars read, so the
/// trace is identical for all four fields. Boundary conditions are re-imposed
/// on everything afterwards.
pub fn advect(grid: &mut Grid) {
    grid.snapshot();

    let width = grid.width;
    let height = grid.height;
    let max_x = width as f32 - 1.5;
    let max_y = height as f32 - 1.5;

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let idx = y * width + x;

            // Trace back one tick and clamp into the sampling window.
            let src_x = (x as f32 - grid.prev_vel_x[idx]).clamp(0.5, max_x);
            let src_y = (y as f32 - grid.prev_vel_y[idx]).clamp(0.5, max_y);

            let x0 = src_x.floor() as usize;
            let y0 = src_y.floor() as usize;
            let tx = src_x - x0 as f32;
            let ty = src_y - y0 as f32;

            let i00 = y0 * width + x0;
            let i10 = i00 + 1;
            let i01 = i00 + width;
            let i11 = i01 + 1;

            let lerp2 = |field: &[f32]| {
                let top = field[i00] * (1.0 - tx) + field[i10] * tx;
                let bottom = field[i01] * (1.0 - tx) + field[i11] * tx;
                top * (1.0 - ty) + bottom * ty
            };

            grid.density[idx] = lerp2(&grid.prev_density);
            grid.temperature[idx] = lerp2(&grid.prev_temperature);
            grid.vel_x[idx] = lerp2(&grid.prev_vel_x);
            grid.vel_y[idx] = lerp2(&grid.prev_vel_y);
        }
    }

    grid.enforce_scalars();
    grid.enforce_velocity();
}
