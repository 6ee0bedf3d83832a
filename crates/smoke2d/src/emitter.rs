//! Continuous smoke sources.
//!
//! The default source is a candle-flame silhouette near the bottom of the
//! grid: three rows of decreasing width plus a single-cell tip. Each emitting
//! cell gets fresh density, a hot randomized temperature and a randomized
//! launch velocity with an upward bias.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::grid::Grid;
use crate::params::EMISSION_TEMPERATURE_FLOOR;

/// A set of cells that inject smoke every tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Emitter {
    cells: Vec<(usize, usize)>,
}

impl Emitter {
    /// Candle-shaped emitter centered horizontally near the bottom edge.
    ///
    /// Rows narrow from seven cells wide at `height - 2` to a one-cell tip at
    /// `height - 5`. Cells that fall outside the grid (small grids) are
    /// dropped rather than clamped.
    pub fn plume(width: usize, height: usize) -> Self {
        let cx = (width / 2) as i32;
        let base = height as i32 - 2;

        let mut cells = Vec::new();
        for (row, half_width) in [(0, 3), (1, 2), (2, 1), (3, 0)] {
            let y = base - row;
            for dx in -half_width..=half_width {
                let x = cx + dx;
                if x >= 0 && x < width as i32 && y >= 0 && y < height as i32 {
                    cells.push((x as usize, y as usize));
                }
            }
        }
        Self { cells }
    }

    /// Emitter over an explicit cell list. Out-of-grid cells are ignored at
    /// emission time, not here, so the list round-trips unchanged.
    pub fn with_cells(cells: Vec<(usize, usize)>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Inject one tick of smoke into every emitter cell.
    ///
    /// Density accumulates; temperature and velocity are overwritten so the
    /// source stays hot and lively no matter what drifted through it. Edge
    /// cells emit like any other; the next boundary pass rewrites them, but
    /// advection snapshots their contents first. Cells outside the grid are
    /// silently skipped.
    pub fn emit(&self, grid: &mut Grid, rng: &mut ChaCha8Rng, amount: f32) {
        for &(x, y) in &self.cells {
            if x >= grid.width || y >= grid.height {
                continue;
            }
            let idx = grid.cell_index(x, y);

            grid.density[idx] += amount;
            let jitter: f32 = rng.gen_range(-0.2..0.2);
            grid.temperature[idx] = (1.0 + jitter).max(EMISSION_TEMPERATURE_FLOOR);

            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed: f32 = rng.gen_range(0.3..0.7);
            grid.vel_x[idx] = speed * angle.cos();
            grid.vel_y[idx] = -0.5 + speed * angle.sin();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_plume_shape() {
        let emitter = Emitter::plume(64, 64);
        let cells = emitter.cells();
        // 7 + 5 + 3 + 1 cells.
        assert_eq!(cells.len(), 16);
        assert!(cells.contains(&(32, 62)));
        assert!(cells.contains(&(29, 62)));
        assert!(cells.contains(&(35, 62)));
        assert!(cells.contains(&(32, 59))); // tip
        assert!(!cells.contains(&(28, 62)));
    }

    #[test]
    fn test_plume_clips_to_small_grid() {
        let emitter = Emitter::plume(5, 5);
        assert!(!emitter.cells().is_empty());
        for &(x, y) in emitter.cells() {
            assert!(x < 5);
            assert!(y < 5);
        }
    }

    #[test]
    fn test_emit_accumulates_density() {
        let mut grid = Grid::new(16, 16).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let emitter = Emitter::with_cells(vec![(8, 8)]);

        emitter.emit(&mut grid, &mut rng, 0.25);
        emitter.emit(&mut grid, &mut rng, 0.25);

        let idx = grid.cell_index(8, 8);
        assert!((grid.density[idx] - 0.5).abs() < 1e-6);
        assert!(grid.temperature[idx] >= EMISSION_TEMPERATURE_FLOOR);
        assert!(grid.temperature[idx] <= 1.2);
    }

    #[test]
    fn test_emit_velocity_in_expected_range() {
        let mut grid = Grid::new(16, 16).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let emitter = Emitter::with_cells(vec![(5, 5)]);

        for _ in 0..50 {
            emitter.emit(&mut grid, &mut rng, 0.0);
            let idx = grid.cell_index(5, 5);
            assert!(grid.vel_x[idx].abs() < 0.7);
            assert!(grid.vel_y[idx] > -1.2 && grid.vel_y[idx] < 0.2);
        }
    }

    #[test]
    fn test_emit_reaches_edge_cells() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let emitter = Emitter::with_cells(vec![(0, 4), (7, 4), (4, 0), (4, 7)]);

        emitter.emit(&mut grid, &mut rng, 1.0);

        for &(x, y) in emitter.cells() {
            let idx = grid.cell_index(x, y);
            assert_eq!(grid.density[idx], 1.0, "edge cell ({}, {})", x, y);
            assert!(grid.temperature[idx] >= EMISSION_TEMPERATURE_FLOOR);
        }
        assert_eq!(grid.total_density(), 4.0);
    }

    #[test]
    fn test_emit_ignores_out_of_grid_cells() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let emitter = Emitter::with_cells(vec![(8, 4), (4, 8), (100, 100)]);

        emitter.emit(&mut grid, &mut rng, 1.0);

        assert_eq!(grid.total_density(), 0.0);
    }
}
