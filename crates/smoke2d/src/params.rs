//! Tuned solver constants.
//!
//! These values are empirical: they were dialed in by eye for a convincing
//! plume, not derived from a physical model. Keep them as named constants
//! rather than re-deriving "correct" physical values.

use serde::{Deserialize, Serialize};

/// Density added to each source cell per emission tick.
pub const EMISSION_AMOUNT: f32 = 0.25;

/// Cursor impulse radius, in grid cells.
pub const FORCE_RADIUS: f32 = 50.0;

/// Cursor impulse strength at zero distance.
pub const FORCE_STRENGTH: f32 = 0.5;

/// Uniform velocity noise amplitude injected every tick.
pub const TURBULENCE_AMOUNT: f32 = 0.08;

/// Vorticity confinement force scale.
pub const VORTICITY_STRENGTH: f32 = 0.015;

/// Buoyancy coefficient: upward pull per unit density x temperature.
pub const BUOYANCY: f32 = 0.15;

/// Multiplicative density decay per tick.
pub const DENSITY_DECAY: f32 = 0.998;

/// Multiplicative temperature decay per tick.
pub const TEMPERATURE_DECAY: f32 = 0.998;

/// Viscous relaxation blend weight.
pub const VISCOSITY_AMOUNT: f32 = 0.008;

/// Gauss-Seidel sweeps for viscous relaxation.
pub const VISCOSITY_ITERATIONS: usize = 2;

/// Gauss-Seidel sweeps for the pressure Poisson solve.
pub const PRESSURE_ITERATIONS: usize = 100;

/// Cells with less density than this ignore the cursor impulse.
pub const FORCE_DENSITY_THRESHOLD: f32 = 0.1;

/// Floor for the cursor-impulse distance (avoids divide-by-zero).
pub const MIN_FORCE_DISTANCE: f32 = 1e-6;

/// Vorticity-gradient magnitude below which confinement skips the cell.
pub const MIN_VORTICITY_GRADIENT: f32 = 1e-6;

/// Emitted temperature never drops below this.
pub const EMISSION_TEMPERATURE_FLOOR: f32 = 0.5;

/// Tunable solver configuration.
///
/// Defaults reproduce the reference plume. All stages read their knobs from
/// here; nothing is discovered at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmokeParams {
    pub emission_amount: f32,
    pub force_radius: f32,
    pub force_strength: f32,
    pub turbulence_amount: f32,
    pub vorticity_strength: f32,
    pub buoyancy: f32,
    pub density_decay: f32,
    pub temperature_decay: f32,
    pub viscosity_amount: f32,
    pub viscosity_iterations: usize,
    pub pressure_iterations: usize,
    /// Seed for the simulation's ChaCha8 generator (emission + turbulence).
    pub seed: u64,
}

impl Default for SmokeParams {
    fn default() -> Self {
        Self {
            emission_amount: EMISSION_AMOUNT,
            force_radius: FORCE_RADIUS,
            force_strength: FORCE_STRENGTH,
            turbulence_amount: TURBULENCE_AMOUNT,
            vorticity_strength: VORTICITY_STRENGTH,
            buoyancy: BUOYANCY,
            density_decay: DENSITY_DECAY,
            temperature_decay: TEMPERATURE_DECAY,
            viscosity_amount: VISCOSITY_AMOUNT,
            viscosity_iterations: VISCOSITY_ITERATIONS,
            pressure_iterations: PRESSURE_ITERATIONS,
            seed: 0,
        }
    }
}
