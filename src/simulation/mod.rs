//! SimCore - orchestration around the fluid solver
//!
//! Owns the solver, the fixed-timestep accumulator, the clamped dye
//! transfer buffer and the perf instrumentation. The `FluidSim` facade in
//! `facade.rs` is the WASM boundary; everything here is plain Rust and
//! runs under native `cargo test`.
//!
//! Responsibilities are split the usual way:
//! - Impulses and clears are in commands/
//! - Frame advancement (accumulator drain) is in step/
//! - Parameter plumbing is in init/

use crate::domain::params::{PresetBundle, SimulationParameters};
use crate::solver::FluidSolver;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
mod facade;

pub use facade::{AbiLayout, FluidSim};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Default fixed logical timestep (60 steps per simulated second).
pub const DEFAULT_FIXED_DT: f32 = 1.0 / 60.0;

/// Upper bound on fixed steps drained per frame; surplus backlog is dropped
/// so a long stall cannot trigger a runaway catch-up burst.
pub const DEFAULT_MAX_STEPS_PER_FRAME: u32 = 4;

/// The simulation session
pub struct SimCore {
    solver: FluidSolver,

    // Fixed-timestep accumulator
    fixed_dt: f32,
    max_steps_per_frame: u32,
    accumulator: f32,

    // State
    frame: u64,
    dye_transfer_buffer: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimCore {
    pub fn new(params: SimulationParameters) -> Self {
        init::create_sim_core(params)
    }

    pub fn resolution(&self) -> usize { self.solver.resolution() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn params(&self) -> &SimulationParameters { self.solver.params() }

    /// Adopt a new parameter set; a resolution change resizes and zeroes
    /// all solver state (and invalidates the dye transfer buffer).
    pub fn update_config(&mut self, params: SimulationParameters) {
        settings::update_config(self, params);
    }

    /// Parse and apply a preset JSON document.
    pub fn load_preset_json(&mut self, json: &str) -> Result<(), String> {
        let bundle = PresetBundle::from_json(json)?;
        self.update_config(bundle.params);
        Ok(())
    }

    /// Current parameters as a preset JSON document.
    pub fn get_preset_json(&self) -> String {
        settings::get_preset_json(self)
    }

    pub fn set_fixed_timestep(&mut self, dt: f32) {
        settings::set_fixed_timestep(self, dt);
    }

    pub fn set_max_steps_per_frame(&mut self, max_steps: u32) {
        settings::set_max_steps_per_frame(self, max_steps);
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Splat dye at a normalized viewport position
    pub fn add_impulse(&mut self, x: f32, y: f32, radius: f32, strength: f32, audio_factor: f32) {
        commands::add_impulse(self, x, y, radius, strength, audio_factor);
    }

    /// Push velocity into the cell under a normalized viewport position
    pub fn add_velocity_impulse(&mut self, x: f32, y: f32, vx: f32, vy: f32, force_strength: f32) {
        commands::add_velocity_impulse(self, x, y, vx, vy, force_strength);
    }

    /// Zero velocity and dye (keeps configuration and allocation)
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    pub fn clear_dye(&mut self) {
        commands::clear_dye(self);
    }

    pub fn clear_velocity(&mut self) {
        commands::clear_velocity(self);
    }

    /// Advance by a frame's worth of real time: drains the accumulator in
    /// fixed steps (capped) and returns how many were executed.
    pub fn advance(&mut self, elapsed_seconds: f32) -> u32 {
        step::advance(self, elapsed_seconds)
    }

    /// Run exactly one fixed step, bypassing the accumulator.
    pub fn step_once(&mut self) {
        let dt = self.fixed_dt;
        step::step_once(self, dt);
    }

    /// Refresh the clamped interior dye copy and return it as a slice.
    pub fn extract_dye(&mut self) -> &[f32] {
        let t0 = if self.perf_enabled { Some(PerfTimer::start()) } else { None };
        self.solver.extract_dye_into(&mut self.dye_transfer_buffer);
        if let Some(t0) = t0 {
            self.perf_stats.extract_ms = t0.elapsed_ms();
        }
        &self.dye_transfer_buffer
    }

    /// Freshly allocated clamped dye copy (the copy-out contract).
    pub fn get_dye_field(&self) -> Vec<f32> {
        let mut out = Vec::new();
        self.solver.extract_dye_into(&mut out);
        out
    }

    // === Zero-copy readback (JS renders straight from WASM memory) ===

    pub fn dye_ptr(&self) -> *const f32 {
        self.dye_transfer_buffer.as_ptr()
    }

    pub fn dye_len_elements(&self) -> usize {
        self.dye_transfer_buffer.len()
    }

    pub fn dye_len_bytes(&self) -> usize {
        self.dye_transfer_buffer.len() * std::mem::size_of::<f32>()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
