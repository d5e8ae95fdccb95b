use crate::domain::params::{PresetBundle, SimulationParameters};

use super::perf_stats::PerfStats;
use super::SimCore;

pub(super) fn update_config(core: &mut SimCore, params: SimulationParameters) {
    let resized = params.resolution != core.solver.resolution();
    core.solver.update_config(params);
    if resized {
        // Stale interior copy from the old grid; drop it rather than let a
        // caller render a mismatched size.
        let n = core.solver.resolution();
        core.dye_transfer_buffer.clear();
        core.dye_transfer_buffer.resize(n * n, 0.0);
    }
}

pub(super) fn get_preset_json(core: &SimCore) -> String {
    PresetBundle {
        name: None,
        params: *core.solver.params(),
    }
    .to_json()
}

pub(super) fn set_fixed_timestep(core: &mut SimCore, dt: f32) {
    if dt > 0.0 {
        core.fixed_dt = dt;
    }
}

pub(super) fn set_max_steps_per_frame(core: &mut SimCore, max_steps: u32) {
    core.max_steps_per_frame = max_steps.max(1);
}

pub(super) fn enable_perf_metrics(core: &mut SimCore, enabled: bool) {
    core.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(core: &SimCore) -> PerfStats {
    core.perf_stats.clone()
}
