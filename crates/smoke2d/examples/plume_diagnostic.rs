//! Headless plume run with per-interval field statistics.
//!
//! Run with `RUST_LOG=debug cargo run --example plume_diagnostic` to also see
//! the solver's own tick logging.

use smoke2d::{pressure, SmokeSimulation};

fn main() -> Result<(), smoke2d::SmokeError> {
    env_logger::init();

    let mut sim = SmokeSimulation::new(96, 96)?;

    println!("tick | total density | max speed | mean |div|");
    for tick in 1..=600u32 {
        sim.step();

        if tick % 60 == 0 {
            pressure::compute_divergence(&mut sim.grid);
            println!(
                "{:4} | {:13.3} | {:9.4} | {:10.6}",
                tick,
                sim.grid.total_density(),
                sim.grid.max_speed(),
                sim.grid.mean_interior_divergence()
            );
        }
    }

    // Coarse ASCII density render, 2x2 cells per character.
    let grid = sim.snapshot();
    let shades = [' ', '.', ':', '*', '#', '@'];
    for y in (0..grid.height).step_by(4) {
        let mut line = String::with_capacity(grid.width / 2);
        for x in (0..grid.width).step_by(2) {
            let mut d = 0.0;
            for dy in 0..4 {
                for dx in 0..2 {
                    if let Some(cell) = grid.cell(x + dx, y + dy) {
                        d += cell.density;
                    }
                }
            }
            let level = ((d / 8.0) * shades.len() as f32) as usize;
            line.push(shades[level.min(shades.len() - 1)]);
        }
        println!("{}", line);
    }

    Ok(())
}
