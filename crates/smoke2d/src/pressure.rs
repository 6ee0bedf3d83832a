//! Pressure projection.
//!
//! Makes the velocity field (approximately) divergence-free: measure the
//! divergence, relax a pressure Poisson equation with Gauss-Seidel sweeps,
//! then subtract the pressure gradient from the velocity. Like the viscosity
//! pass, the in-place sweep order (columns outermost, rows ascending) is
//! load-bearing.

use crate::boundary::{self, FieldKind};
use crate::grid::Grid;

/// Central-difference divergence of the velocity field into `grid.divergence`.
pub fn compute_divergence(grid: &mut Grid) {
    let width = grid.width;
    for y in 1..grid.height - 1 {
        for x in 1..width - 1 {
            let idx = y * width + x;
            grid.divergence[idx] = 0.5
                * (grid.vel_x[idx + 1] - grid.vel_x[idx - 1] + grid.vel_y[idx + width]
                    - grid.vel_y[idx - width]);
        }
    }
    boundary::enforce(
        &mut grid.divergence,
        grid.width,
        grid.height,
        FieldKind::Scalar,
    );
}

/// Project the velocity field to be divergence-free.
///
/// The pressure field restarts from zero every call; the previous tick's
/// solution is not reused as a warm start.
pub fn project(grid: &mut Grid, iterations: usize) {
    compute_divergence(grid);

    let width = grid.width;
    let height = grid.height;

    grid.pressure.fill(0.0);
    for _ in 0..iterations {
        for x in 1..width - 1 {
            for y in 1..height - 1 {
                let idx = y * width + x;
                grid.pressure[idx] = 0.25
                    * (grid.pressure[idx - 1]
                        + grid.pressure[idx + 1]
                        + grid.pressure[idx - width]
                        + grid.pressure[idx + width]
                        - grid.divergence[idx]);
            }
        }
        boundary::enforce(&mut grid.pressure, width, height, FieldKind::Scalar);
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let idx = y * width + x;
            grid.vel_x[idx] -= 0.5 * (grid.pressure[idx + 1] - grid.pressure[idx - 1]);
            grid.vel_y[idx] -= 0.5 * (grid.pressure[idx + width] - grid.pressure[idx - width]);
        }
    }
    grid.enforce_velocity();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_abs_divergence(grid: &mut Grid) -> f32 {
        compute_divergence(grid);
        let mut sum = 0.0;
        for y in 1..grid.height - 1 {
            for x in 1..grid.width - 1 {
                sum += grid.divergence[grid.cell_index(x, y)].abs();
            }
        }
        sum
    }

    #[test]
    fn test_divergence_of_still_field_is_zero() {
        let mut grid = Grid::new(10, 10).unwrap();
        compute_divergence(&mut grid);
        assert!(grid.divergence.iter().all(|&d| d == 0.0));
    }

    #[test]
    fn test_divergence_of_a_source() {
        let mut grid = Grid::new(10, 10).unwrap();
        // Outflow from (5,5): right neighbor moves right, left neighbor left.
        let idx = grid.cell_index(5, 5);
        grid.vel_x[idx + 1] = 1.0;
        grid.vel_x[idx - 1] = -1.0;

        compute_divergence(&mut grid);

        assert!((grid.divergence[idx] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_projection_reduces_divergence() {
        let mut grid = Grid::new(20, 20).unwrap();
        // A divergent blob.
        for y in 1..19 {
            for x in 1..19 {
                let idx = grid.cell_index(x, y);
                grid.vel_x[idx] = (x as f32 - 10.0) * 0.1;
                grid.vel_y[idx] = (y as f32 - 10.0) * 0.1;
            }
        }
        let before = total_abs_divergence(&mut grid);

        project(&mut grid, 100);

        let after = total_abs_divergence(&mut grid);
        assert!(
            after < before * 0.1,
            "projection barely helped: {} -> {}",
            before,
            after
        );
    }

    #[test]
    fn test_projection_keeps_still_field_still() {
        let mut grid = Grid::new(12, 12).unwrap();
        project(&mut grid, 100);
        assert!(grid.vel_x.iter().all(|&v| v == 0.0));
        assert!(grid.vel_y.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_projection_restarts_pressure_from_zero() {
        let mut grid = Grid::new(12, 12).unwrap();
        grid.pressure.fill(5.0);

        project(&mut grid, 10);

        // Still field, zero divergence: pressure must relax back to zero
        // rather than keep the stale values.
        assert!(grid.pressure.iter().all(|&p| p == 0.0));
        assert!(grid.vel_x.iter().all(|&v| v == 0.0));
    }
}
