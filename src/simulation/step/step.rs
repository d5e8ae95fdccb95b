use super::{PerfTimer, SimCore};

/// Drain a frame's worth of real time through the fixed-step accumulator.
///
/// Impulses and dye reads happen once per rendered frame; this runs zero or
/// more fixed solver steps depending on how much real time has piled up.
/// The step count per frame is capped and any backlog beyond one step is
/// then dropped, so a stall (tab hidden, debugger pause) does not turn into
/// a catch-up burst.
pub(super) fn advance(core: &mut SimCore, elapsed_seconds: f32) -> u32 {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
        let n = core.solver.resolution() as u32;
        core.perf_stats.resolution = n;
        core.perf_stats.grid_cells = (n + 2) * (n + 2);
        // 9 f32 buffers of (n+2)^2 cells + the interior transfer copy
        core.perf_stats.memory_bytes =
            core.perf_stats.grid_cells.saturating_mul(9 * 4).saturating_add(n * n * 4);
    }
    let frame_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Negative elapsed time can only come from a caller clock glitch.
    core.accumulator += elapsed_seconds.max(0.0);

    let dt = core.fixed_dt;
    let mut steps = 0u32;
    while core.accumulator >= dt && steps < core.max_steps_per_frame {
        step_once(core, dt);
        core.accumulator -= dt;
        steps += 1;
    }
    if steps == core.max_steps_per_frame {
        core.accumulator = core.accumulator.min(core.fixed_dt);
    }

    if perf_on {
        core.perf_stats.steps_run = steps;
        core.perf_stats.accumulator_backlog = core.accumulator;
        if let Some(start) = frame_start {
            core.perf_stats.frame_ms = start.elapsed_ms();
        }
    }

    core.frame += 1;
    steps
}

/// One fixed solver step. With perf enabled the phases run individually
/// under timers, in the exact order `FluidSolver::step` uses.
pub(super) fn step_once(core: &mut SimCore, dt: f32) {
    if !core.perf_enabled {
        core.solver.step(dt);
        return;
    }

    let t0 = PerfTimer::start();
    core.solver.diffuse_velocity(dt);
    core.perf_stats.diffuse_ms += t0.elapsed_ms();

    let t0 = PerfTimer::start();
    core.solver.project_diffused();
    core.perf_stats.project_ms += t0.elapsed_ms();

    let t0 = PerfTimer::start();
    core.solver.advect_velocity(dt);
    core.perf_stats.advect_ms += t0.elapsed_ms();

    let t0 = PerfTimer::start();
    core.solver.confine_vorticity(dt);
    core.perf_stats.vorticity_ms += t0.elapsed_ms();

    let t0 = PerfTimer::start();
    core.solver.project_velocity();
    core.perf_stats.project_ms += t0.elapsed_ms();

    let t0 = PerfTimer::start();
    core.solver.diffuse_dye(dt);
    core.solver.advect_dye(dt);
    core.solver.dissipate_dye();
    core.perf_stats.dye_ms += t0.elapsed_ms();
}
