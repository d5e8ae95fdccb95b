//! FluidSolver - grid-based incompressible fluid ("stable fluids" family)
//!
//! Advances a 2D velocity field and a passive dye field on an
//! (N+2)×(N+2) lattice: implicit diffusion by Gauss-Seidel relaxation,
//! semi-Lagrangian advection with bilinear resampling, Poisson-based
//! divergence projection, solid-wall boundaries and vorticity confinement.
//!
//! The solver owns every buffer and exposes a narrow contract: configure,
//! inject impulses, advance one timestep, read back the clamped dye field.
//! It knows nothing about rendering, UI or audio - those callers live in
//! `simulation/` and beyond.
//!
//! Single-threaded by contract: `step` runs to completion on the calling
//! thread, every relaxation loop runs a fixed iteration count, and there is
//! no hidden randomness - identical inputs give identical fields.

use crate::domain::params::SimulationParameters;

use fields::Fields;

mod advect;
mod boundary;
mod fields;
mod impulse;
mod linsolve;
mod project;
mod step;
mod vorticity;

/// Interior dye snapshot handed to the presentation layer: `data` is
/// row-major, `size`² long, every value clamped to [0, 1].
pub struct DyeField {
    pub size: usize,
    pub data: Vec<f32>,
}

/// The solver core. All state is process memory; there is no persistence
/// and no internal locking - one caller, one thread.
pub struct FluidSolver {
    params: SimulationParameters,
    fields: Fields,
}

impl FluidSolver {
    pub fn new(params: SimulationParameters) -> Self {
        let fields = Fields::new(params.resolution);
        Self { params, fields }
    }

    #[inline]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.fields.n()
    }

    /// Adopt a new configuration. A changed `resolution` reallocates and
    /// zeroes every field (destructive reset, and any previously fetched
    /// dye data is stale); every other parameter change is hot and free.
    pub fn update_config(&mut self, params: SimulationParameters) {
        if params.resolution != self.params.resolution {
            self.fields = Fields::new(params.resolution);
        }
        self.params = params;
    }

    /// Zero velocity and dye without touching configuration or allocation.
    pub fn reset(&mut self) {
        self.fields.reset();
    }

    pub fn clear_dye(&mut self) {
        self.fields.clear_dye();
    }

    pub fn clear_velocity(&mut self) {
        self.fields.clear_velocity();
    }

    /// Splat dye around normalized viewport position (x, y) with a linear
    /// radial falloff. `audio_factor` boosts the injected amount.
    pub fn add_impulse(&mut self, x: f32, y: f32, radius: f32, strength: f32, audio_factor: f32) {
        impulse::add_impulse(self, x, y, radius, strength, audio_factor);
    }

    /// Add pointer-drag velocity to the single cell under (x, y).
    pub fn add_velocity_impulse(&mut self, x: f32, y: f32, vx: f32, vy: f32, force_strength: f32) {
        impulse::add_velocity_impulse(self, x, y, vx, vy, force_strength);
    }

    /// Advance the simulation by one timestep.
    pub fn step(&mut self, dt: f32) {
        step::step(self, dt);
    }

    /// Copy out the interior dye block, clamped to [0, 1].
    pub fn dye_field(&self) -> DyeField {
        let mut data = Vec::new();
        self.fields.extract_dye_into(&mut data);
        DyeField {
            size: self.fields.n(),
            data,
        }
    }

    /// Clamped interior dye copy into a caller-owned buffer (resized to N²).
    pub fn extract_dye_into(&self, out: &mut Vec<f32>) {
        self.fields.extract_dye_into(out);
    }
}

// Individual step phases, exposed to `simulation/` so its perf path can time
// them one by one while keeping the exact `step` ordering.
impl FluidSolver {
    pub(crate) fn diffuse_velocity(&mut self, dt: f32) {
        step::diffuse_velocity(self, dt);
    }

    pub(crate) fn project_diffused(&mut self) {
        step::project_diffused(self);
    }

    pub(crate) fn advect_velocity(&mut self, dt: f32) {
        step::advect_velocity(self, dt);
    }

    pub(crate) fn confine_vorticity(&mut self, dt: f32) {
        step::confine_vorticity(self, dt);
    }

    pub(crate) fn project_velocity(&mut self) {
        step::project_velocity(self);
    }

    pub(crate) fn diffuse_dye(&mut self, dt: f32) {
        step::diffuse_dye(self, dt);
    }

    pub(crate) fn advect_dye(&mut self, dt: f32) {
        step::advect_dye(self, dt);
    }

    pub(crate) fn dissipate_dye(&mut self) {
        step::dissipate_dye(self);
    }

    #[cfg(test)]
    pub(crate) fn fields(&self) -> &Fields {
        &self.fields
    }

    #[cfg(test)]
    pub(crate) fn fields_mut(&mut self) -> &mut Fields {
        &mut self.fields
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
