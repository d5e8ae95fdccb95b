//! Fluidium Engine - Real-time stable-fluids solver in WASM
//!
//! The browser shell (canvas presenter, control panels, audio analyser,
//! pointer plumbing) lives in JS; this crate owns the numerics.
//!
//! Architecture:
//! - core/          - Utility macros (zero-cost bounds checks)
//! - domain/        - Simulation parameters and preset JSON
//! - solver/        - The fluid solver core (grid fields + numerics)
//! - simulation/    - Orchestration (fixed timestep, perf) + WASM facade

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod solver;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Fluidium WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::params::{default_preset_json, PresetBundle, SimulationParameters};
pub use simulation::{FluidSim, PerfStats, SimCore};
pub use solver::{DyeField, FluidSolver};
