//! Real-time 2D Eulerian smoke simulation.
//!
//! A fixed-size grid solver in the Stam style: density, temperature and a
//! collocated velocity field advance once per [`SmokeSimulation::step`] call
//! through emission, semi-Lagrangian advection, body forces, vorticity
//! confinement, viscous relaxation, pressure projection and dissipation.
//! Rendering and input are the caller's problem; the solver just exposes the
//! fields.
//!
//! ```
//! use smoke2d::SmokeSimulation;
//!
//! let mut sim = SmokeSimulation::new(64, 64)?;
//! for _ in 0..10 {
//!     sim.step();
//! }
//! assert!(sim.snapshot().total_density() > 0.0);
//! # Ok::<(), smoke2d::SmokeError>(())
//! ```

pub mod advection;
pub mod boundary;
pub mod emitter;
pub mod error;
pub mod forces;
pub mod grid;
pub mod params;
pub mod pressure;
pub mod viscosity;
pub mod vorticity;

pub use emitter::Emitter;
pub use error::SmokeError;
pub use grid::{CellSample, Grid};
pub use params::SmokeParams;

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The full simulation state: fields, parameters, emitter and RNG.
///
/// Deterministic: two simulations built with the same dimensions and
/// parameters produce bitwise-identical fields for the same call sequence.
#[derive(Clone, Debug)]
pub struct SmokeSimulation {
    pub grid: Grid,
    pub params: SmokeParams,
    emitter: Emitter,
    rng: ChaCha8Rng,
    cursor: Option<Vec2>,
    emission_enabled: bool,
    frame: u64,
}

impl SmokeSimulation {
    /// Build a simulation with default parameters and the candle-shaped
    /// emitter near the bottom edge.
    pub fn new(width: usize, height: usize) -> Result<Self, SmokeError> {
        Self::with_params(width, height, SmokeParams::default())
    }

    /// Build a simulation with explicit parameters.
    pub fn with_params(
        width: usize,
        height: usize,
        params: SmokeParams,
    ) -> Result<Self, SmokeError> {
        let grid = Grid::new(width, height)?;
        log::info!(
            "smoke sim {}x{}, {} pressure iterations, seed {}",
            width,
            height,
            params.pressure_iterations,
            params.seed
        );
        Ok(Self {
            grid,
            params,
            emitter: Emitter::plume(width, height),
            rng: ChaCha8Rng::seed_from_u64(params.seed),
            cursor: None,
            emission_enabled: true,
            frame: 0,
        })
    }

    /// Clear all fields and restart the random sequence from the seed.
    ///
    /// The emitter, cursor state and parameters survive the reset.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.rng = ChaCha8Rng::seed_from_u64(self.params.seed);
        self.frame = 0;
    }

    /// Replace the emitter.
    pub fn configure_emission(&mut self, emitter: Emitter) {
        self.emitter = emitter;
    }

    /// Adjust the per-tick emission strength, clamped to `[0, 1]`.
    pub fn set_emission_amount(&mut self, amount: f32) {
        self.params.emission_amount = amount.clamp(0.0, 1.0);
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Toggle per-tick emission without touching the emitter shape.
    pub fn set_emission_enabled(&mut self, enabled: bool) {
        self.emission_enabled = enabled;
    }

    /// Set or clear the cursor. While set, every step applies a radial
    /// impulse pushing smoke away from this position (in cell coordinates).
    pub fn set_cursor(&mut self, cursor: Option<Vec2>) {
        self.cursor = cursor;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Read-only view of the current fields.
    pub fn snapshot(&self) -> &Grid {
        &self.grid
    }

    /// Advance the simulation by one tick.
    pub fn step(&mut self) {
        // 1. Inject fresh smoke at the sources.
        if self.emission_enabled {
            self.emitter
                .emit(&mut self.grid, &mut self.rng, self.params.emission_amount);
        }

        // 2. Transport everything through the velocity field.
        advection::advect(&mut self.grid);

        // 3. Body forces: buoyancy, optional cursor impulse, turbulence.
        forces::apply_buoyancy(&mut self.grid, self.params.buoyancy);
        if let Some(cursor) = self.cursor {
            forces::apply_impulse(&mut self.grid, cursor, &self.params);
        }
        forces::apply_turbulence(&mut self.grid, &mut self.rng, self.params.turbulence_amount);

        // 4. Feed small-scale rotation back in, then re-clamp the walls.
        vorticity::apply_confinement(&mut self.grid, self.params.vorticity_strength);
        self.grid.enforce_velocity();

        // 5. Smooth and project the velocity field.
        viscosity::diffuse_velocity(
            &mut self.grid,
            self.params.viscosity_amount,
            self.params.viscosity_iterations,
        );
        pressure::project(&mut self.grid, self.params.pressure_iterations);

        // 6. Fade density and temperature.
        forces::dissipate(
            &mut self.grid,
            self.params.density_decay,
            self.params.temperature_decay,
        );

        self.frame += 1;
        if self.frame % 120 == 0 {
            log::debug!(
                "tick {}: total density {:.3}, max speed {:.3}",
                self.frame,
                self.grid.total_density(),
                self.grid.max_speed()
            );
        }
    }
}
