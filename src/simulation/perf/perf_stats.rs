use wasm_bindgen::prelude::*;

/// Per-frame performance snapshot, filled only while metrics are enabled.
///
/// Phase timings are summed across all fixed steps executed in the frame;
/// everything is zero when perf is disabled.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) frame_ms: f64,
    pub(super) diffuse_ms: f64,
    pub(super) project_ms: f64,
    pub(super) advect_ms: f64,
    pub(super) vorticity_ms: f64,
    pub(super) dye_ms: f64,
    pub(super) extract_ms: f64,
    pub(super) steps_run: u32,
    pub(super) accumulator_backlog: f32,
    pub(super) resolution: u32,
    pub(super) grid_cells: u32,
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn diffuse_ms(&self) -> f64 { self.diffuse_ms }
    #[wasm_bindgen(getter)]
    pub fn project_ms(&self) -> f64 { self.project_ms }
    #[wasm_bindgen(getter)]
    pub fn advect_ms(&self) -> f64 { self.advect_ms }
    #[wasm_bindgen(getter)]
    pub fn vorticity_ms(&self) -> f64 { self.vorticity_ms }
    #[wasm_bindgen(getter)]
    pub fn dye_ms(&self) -> f64 { self.dye_ms }
    #[wasm_bindgen(getter)]
    pub fn extract_ms(&self) -> f64 { self.extract_ms }
    #[wasm_bindgen(getter)]
    pub fn steps_run(&self) -> u32 { self.steps_run }
    #[wasm_bindgen(getter)]
    pub fn accumulator_backlog(&self) -> f32 { self.accumulator_backlog }
    #[wasm_bindgen(getter)]
    pub fn resolution(&self) -> u32 { self.resolution }
    #[wasm_bindgen(getter)]
    pub fn grid_cells(&self) -> u32 { self.grid_cells }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
