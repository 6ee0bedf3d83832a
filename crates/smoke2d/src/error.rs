//! Solver error types.

use thiserror::Error;

/// Errors raised by the smoke solver.
///
/// Stepping itself never fails: numeric edge cases are handled by clamping
/// (see the force and vorticity stages). The only structural failure is a
/// grid too small for the boundary logic to be valid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SmokeError {
    /// Grid dimensions leave no interior region for the solver to work on.
    #[error("grid must be at least 3x3, got {width}x{height}")]
    InvalidConfiguration { width: usize, height: usize },
}
