//! Viscous smoothing of the velocity field.
//!
//! A short in-place Gauss-Seidel relaxation that nudges each velocity sample
//! toward the average of its four neighbors. The sweep order (columns
//! outermost, rows ascending) is part of the solver's observable behavior
//! and must not be changed.

use crate::grid::Grid;

/// Relax both velocity components toward their neighborhood average.
///
/// Each iteration sweeps the interior in place, so updated values feed the
/// rest of the same sweep, then re-imposes the wall conditions.
pub fn diffuse_velocity(grid: &mut Grid, amount: f32, iterations: usize) {
    let width = grid.width;
    let height = grid.height;
    let inv = 1.0 / (1.0 + 4.0 * amount);

    for _ in 0..iterations {
        for x in 1..width - 1 {
            for y in 1..height - 1 {
                let idx = y * width + x;

                let neighbors_x = grid.vel_x[idx - 1]
                    + grid.vel_x[idx + 1]
                    + grid.vel_x[idx - width]
                    + grid.vel_x[idx + width];
                grid.vel_x[idx] = (grid.vel_x[idx] + amount * neighbors_x) * inv;

                let neighbors_y = grid.vel_y[idx - 1]
                    + grid.vel_y[idx + 1]
                    + grid.vel_y[idx - width]
                    + grid.vel_y[idx + width];
                grid.vel_y[idx] = (grid.vel_y[idx] + amount * neighbors_y) * inv;
            }
        }
        grid.enforce_velocity();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_field_is_a_fixed_point() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.vel_x.fill(1.0);

        diffuse_velocity(&mut grid, 0.008, 2);

        // Interior stays exactly uniform; only the side walls reflect.
        for y in 1..9 {
            for x in 1..9 {
                let idx = grid.cell_index(x, y);
                assert!((grid.vel_x[idx] - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_spike_spreads_to_neighbors() {
        let mut grid = Grid::new(12, 12).unwrap();
        let center = grid.cell_index(6, 6);
        grid.vel_x[center] = 1.0;

        diffuse_velocity(&mut grid, 0.1, 1);

        assert!(grid.vel_x[center] < 1.0);
        // The in-place sweep visits (6,5) before the spike and (6,7) after,
        // so both sides end up with some of it.
        let below = grid.cell_index(6, 7);
        let right = grid.cell_index(7, 6);
        assert!(grid.vel_x[below] > 0.0);
        assert!(grid.vel_x[right] > 0.0);
    }

    #[test]
    fn test_zero_amount_is_identity() {
        let mut grid = Grid::new(8, 8).unwrap();
        for y in 1..7 {
            for x in 1..7 {
                let idx = grid.cell_index(x, y);
                grid.vel_y[idx] = (x * y) as f32 * 0.01;
            }
        }
        let before = grid.vel_y.clone();

        diffuse_velocity(&mut grid, 0.0, 3);

        for y in 1..7 {
            for x in 1..7 {
                let idx = grid.cell_index(x, y);
                assert_eq!(grid.vel_y[idx], before[idx]);
            }
        }
    }
}
