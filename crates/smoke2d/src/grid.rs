//! Flat row-major field storage for the smoke solver.
//!
//! All fields share the same W x H cell-centered layout (`idx = y * width + x`).
//! Velocity is collocated at cell centers (not staggered). Boundary cells are
//! rewritten by the boundary pass after every mutating stage and are never
//! authoritative in between.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::boundary::{self, FieldKind};
use crate::error::SmokeError;

/// Read-only per-cell view for an external renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellSample {
    pub density: f32,
    pub temperature: f32,
    pub velocity: Vec2,
}

/// Fixed-size 2D field state.
///
/// Live fields are mutated in place by the solver stages. The `prev_*`
/// buffers hold the advection snapshot; `divergence`, `pressure` and `curl`
/// are dedicated scalar scratch fields for the projection and confinement
/// stages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,

    /// Smoke density per cell, >= 0 (emission accumulates unbounded; decay
    /// pulls it back down).
    pub density: Vec<f32>,
    /// X velocity at cell centers. Never clamped.
    pub vel_x: Vec<f32>,
    /// Y velocity at cell centers (+Y is down, so plumes rise as -Y).
    pub vel_y: Vec<f32>,
    /// Temperature per cell.
    pub temperature: Vec<f32>,

    // Advection snapshot, read-only during the backward trace.
    pub(crate) prev_density: Vec<f32>,
    pub(crate) prev_vel_x: Vec<f32>,
    pub(crate) prev_vel_y: Vec<f32>,
    pub(crate) prev_temperature: Vec<f32>,

    /// Velocity divergence at cell centers (interior only).
    pub divergence: Vec<f32>,
    /// Pseudo-pressure from the Poisson relaxation.
    pub pressure: Vec<f32>,
    /// Curl of the velocity field, for vorticity confinement.
    pub curl: Vec<f32>,
}

impl Grid {
    /// Create a zeroed grid.
    ///
    /// Fails with [`SmokeError::InvalidConfiguration`] when either dimension
    /// is below 3: the boundary pass needs a non-empty interior.
    pub fn new(width: usize, height: usize) -> Result<Self, SmokeError> {
        if width < 3 || height < 3 {
            return Err(SmokeError::InvalidConfiguration { width, height });
        }

        let cell_count = width * height;
        log::debug!("creating {}x{} smoke grid", width, height);

        Ok(Self {
            width,
            height,
            density: vec![0.0; cell_count],
            vel_x: vec![0.0; cell_count],
            vel_y: vec![0.0; cell_count],
            temperature: vec![0.0; cell_count],
            prev_density: vec![0.0; cell_count],
            prev_vel_x: vec![0.0; cell_count],
            prev_vel_y: vec![0.0; cell_count],
            prev_temperature: vec![0.0; cell_count],
            divergence: vec![0.0; cell_count],
            pressure: vec![0.0; cell_count],
            curl: vec![0.0; cell_count],
        })
    }

    /// Zero every field, live and scratch.
    pub fn reset(&mut self) {
        self.density.fill(0.0);
        self.vel_x.fill(0.0);
        self.vel_y.fill(0.0);
        self.temperature.fill(0.0);
        self.prev_density.fill(0.0);
        self.prev_vel_x.fill(0.0);
        self.prev_vel_y.fill(0.0);
        self.prev_temperature.fill(0.0);
        self.divergence.fill(0.0);
        self.pressure.fill(0.0);
        self.curl.fill(0.0);
    }

    /// Index into any cell-centered field.
    #[inline]
    pub fn cell_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Read-only view of one cell.
    pub fn cell(&self, x: usize, y: usize) -> Option<CellSample> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.cell_index(x, y);
        Some(CellSample {
            density: self.density[idx],
            temperature: self.temperature[idx],
            velocity: Vec2::new(self.vel_x[idx], self.vel_y[idx]),
        })
    }

    /// Snapshot the live fields for the advection backward trace.
    pub(crate) fn snapshot(&mut self) {
        self.prev_density.copy_from_slice(&self.density);
        self.prev_vel_x.copy_from_slice(&self.vel_x);
        self.prev_vel_y.copy_from_slice(&self.vel_y);
        self.prev_temperature.copy_from_slice(&self.temperature);
    }

    /// Re-impose edge conditions on both velocity components.
    pub fn enforce_velocity(&mut self) {
        boundary::enforce(&mut self.vel_x, self.width, self.height, FieldKind::NormalX);
        boundary::enforce(&mut self.vel_y, self.width, self.height, FieldKind::NormalY);
    }

    /// Re-impose edge conditions on density and temperature.
    pub fn enforce_scalars(&mut self) {
        boundary::enforce(&mut self.density, self.width, self.height, FieldKind::Scalar);
        boundary::enforce(
            &mut self.temperature,
            self.width,
            self.height,
            FieldKind::Scalar,
        );
    }

    /// Total density across the whole grid.
    pub fn total_density(&self) -> f32 {
        self.density.iter().sum()
    }

    /// Mean absolute velocity divergence over interior cells.
    ///
    /// Reads the `divergence` buffer as last computed; call
    /// [`crate::pressure::compute_divergence`] first for a fresh value.
    pub fn mean_interior_divergence(&self) -> f32 {
        let mut sum = 0.0f32;
        let mut count = 0usize;
        for y in 1..self.height - 1 {
            for x in 1..self.width - 1 {
                sum += self.divergence[self.cell_index(x, y)].abs();
                count += 1;
            }
        }
        if count == 0 {
            0.0
        } else {
            sum / count as f32
        }
    }

    /// Maximum absolute velocity component, for diagnostics.
    pub fn max_speed(&self) -> f32 {
        let max_x = self.vel_x.iter().fold(0.0f32, |a, &b| a.max(b.abs()));
        let max_y = self.vel_y.iter().fold(0.0f32, |a, &b| a.max(b.abs()));
        max_x.max(max_y)
    }
}
