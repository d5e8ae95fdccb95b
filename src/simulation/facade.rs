use wasm_bindgen::prelude::*;

use crate::domain::params::{default_preset_json, SimulationParameters};

use super::perf_stats::PerfStats;
use super::SimCore;

/// One-shot snapshot of the readback buffer location, so the JS renderer
/// can build its Float32Array view without a call per field.
#[wasm_bindgen]
pub struct AbiLayout {
    dye_ptr: u32,
    dye_len_elements: u32,
    dye_len_bytes: u32,
    resolution: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn dye_ptr(&self) -> u32 { self.dye_ptr }
    #[wasm_bindgen(getter)]
    pub fn dye_len_elements(&self) -> u32 { self.dye_len_elements }
    #[wasm_bindgen(getter)]
    pub fn dye_len_bytes(&self) -> u32 { self.dye_len_bytes }
    #[wasm_bindgen(getter)]
    pub fn resolution(&self) -> u32 { self.resolution }
}

#[wasm_bindgen]
pub struct FluidSim {
    core: SimCore,
}

#[wasm_bindgen]
impl FluidSim {
    /// Create a simulation at the given grid resolution with factory
    /// defaults for everything else
    #[wasm_bindgen(constructor)]
    pub fn new(resolution: u32) -> Self {
        let params = SimulationParameters {
            resolution: resolution as usize,
            ..SimulationParameters::default()
        };
        Self {
            core: SimCore::new(params),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn resolution(&self) -> u32 { self.core.resolution() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Apply a preset JSON document (a resolution change is a destructive reset)
    pub fn load_preset(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_preset_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Current parameters as preset JSON
    pub fn get_preset_json(&self) -> String {
        self.core.get_preset_json()
    }

    /// The factory preset as JSON (for seeding the UI)
    pub fn default_preset(&self) -> String {
        default_preset_json()
    }

    // === Hot parameter setters (no reallocation) ===

    pub fn set_viscosity(&mut self, viscosity: f32) {
        let mut p = *self.core.params();
        p.viscosity = viscosity;
        self.core.update_config(p);
    }

    pub fn set_diffusion(&mut self, diffusion: f32) {
        let mut p = *self.core.params();
        p.diffusion = diffusion;
        self.core.update_config(p);
    }

    pub fn set_dissipation(&mut self, dissipation: f32) {
        let mut p = *self.core.params();
        p.dissipation = dissipation;
        self.core.update_config(p);
    }

    pub fn set_curl_strength(&mut self, curl_strength: f32) {
        let mut p = *self.core.params();
        p.curl_strength = curl_strength;
        self.core.update_config(p);
    }

    pub fn set_pressure_iterations(&mut self, iterations: u32) {
        let mut p = *self.core.params();
        p.pressure_iterations = iterations as usize;
        self.core.update_config(p);
    }

    /// Change grid resolution (destructive: zeroes all fields)
    pub fn set_resolution(&mut self, resolution: u32) {
        let mut p = *self.core.params();
        p.resolution = resolution as usize;
        self.core.update_config(p);
    }

    // === Orchestration loop tuning ===

    pub fn set_fixed_timestep(&mut self, dt: f32) {
        self.core.set_fixed_timestep(dt);
    }

    pub fn set_max_steps_per_frame(&mut self, max_steps: u32) {
        self.core.set_max_steps_per_frame(max_steps);
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === Per-frame input ===

    /// Splat dye at normalized viewport coordinates; out-of-viewport
    /// positions are silently ignored
    pub fn add_impulse(&mut self, x: f32, y: f32, radius: f32, strength: f32, audio_factor: f32) {
        self.core.add_impulse(x, y, radius, strength, audio_factor);
    }

    /// Push pointer-drag velocity into the cell under (x, y)
    pub fn add_velocity_impulse(&mut self, x: f32, y: f32, vx: f32, vy: f32, force_strength: f32) {
        self.core.add_velocity_impulse(x, y, vx, vy, force_strength);
    }

    // === Frame advancement ===

    /// Feed a frame's worth of elapsed real time; returns the number of
    /// fixed steps that ran
    pub fn advance(&mut self, elapsed_seconds: f32) -> u32 {
        self.core.advance(elapsed_seconds)
    }

    /// Run exactly one fixed step (bypasses the accumulator)
    pub fn step(&mut self) {
        self.core.step_once();
    }

    /// Zero velocity and dye; keeps configuration
    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn clear_dye(&mut self) {
        self.core.clear_dye();
    }

    pub fn clear_velocity(&mut self) {
        self.core.clear_velocity();
    }

    // === Dye readback ===

    /// Refresh the internal clamped dye copy and return a pointer to it
    /// (row-major N×N f32, values in [0,1])
    pub fn extract_dye(&mut self) -> *const f32 {
        self.core.extract_dye();
        self.core.dye_ptr()
    }

    /// Owned clamped dye copy (convenient, but allocates every call)
    pub fn get_dye_field(&self) -> Vec<f32> {
        self.core.get_dye_field()
    }

    pub fn dye_ptr(&self) -> *const f32 {
        self.core.dye_ptr()
    }

    pub fn dye_len_elements(&self) -> usize {
        self.core.dye_len_elements()
    }

    pub fn dye_len_bytes(&self) -> usize {
        self.core.dye_len_bytes()
    }

    pub fn abi_layout(&self) -> AbiLayout {
        AbiLayout {
            dye_ptr: self.core.dye_ptr() as u32,
            dye_len_elements: self.core.dye_len_elements() as u32,
            dye_len_bytes: self.core.dye_len_bytes() as u32,
            resolution: self.core.resolution() as u32,
        }
    }
}
