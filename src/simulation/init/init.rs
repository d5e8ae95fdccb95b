use crate::domain::params::SimulationParameters;
use crate::solver::FluidSolver;

use super::perf_stats::PerfStats;
use super::{SimCore, DEFAULT_FIXED_DT, DEFAULT_MAX_STEPS_PER_FRAME};

pub(super) fn create_sim_core(params: SimulationParameters) -> SimCore {
    let n = params.resolution;
    SimCore {
        solver: FluidSolver::new(params),
        fixed_dt: DEFAULT_FIXED_DT,
        max_steps_per_frame: DEFAULT_MAX_STEPS_PER_FRAME,
        accumulator: 0.0,
        frame: 0,
        // Sized for the interior block; `extract_dye` keeps it in sync
        // after resolution changes.
        dye_transfer_buffer: vec![0.0; n * n],
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
