//! Simulation parameters and preset JSON plumbing.
//!
//! Presets are authored in the web UI and shipped as small JSON documents;
//! field names are camelCase to match them. Values are adopted as-is: the
//! solver does not second-guess the configuration source, and out-of-domain
//! values (negative viscosity, dissipation > 1, absurd curl strength) simply
//! produce visually unstable or divergent flow.

use serde::{Deserialize, Serialize};

/// Tunable physics of the solver.
///
/// `resolution` is the interior grid side length N (the solver allocates
/// (N+2)² cells including the ghost ring). Changing it through
/// `update_config` is a destructive reset; every other field is hot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulationParameters {
    /// Interior grid side length N (> 0, caller contract).
    pub resolution: usize,
    /// Kinematic viscosity ν for velocity diffusion.
    pub viscosity: f32,
    /// Dye diffusion rate κ.
    pub diffusion: f32,
    /// Per-step dye retention factor, (0, 1].
    pub dissipation: f32,
    /// Vorticity confinement strength ε; <= 0 disables the pass.
    pub curl_strength: f32,
    /// Iteration budget K for every relaxation solve (> 0).
    pub pressure_iterations: usize,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            resolution: 64,
            viscosity: 0.001,
            diffusion: 0.000_01,
            dissipation: 0.995,
            curl_strength: 20.0,
            pressure_iterations: 20,
        }
    }
}

/// A named preset document as exported by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PresetBundle {
    pub name: Option<String>,
    pub params: SimulationParameters,
}

impl Default for PresetBundle {
    fn default() -> Self {
        PresetBundle {
            name: None,
            params: SimulationParameters::default(),
        }
    }
}

impl PresetBundle {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn to_json(&self) -> String {
        // A preset is plain numeric data; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// The factory preset, as JSON (handy for the JS side to seed its UI).
pub fn default_preset_json() -> String {
    PresetBundle {
        name: Some("default".to_string()),
        params: SimulationParameters::default(),
    }
    .to_json()
}
