use super::SimCore;

pub(super) fn add_impulse(
    core: &mut SimCore,
    x: f32,
    y: f32,
    radius: f32,
    strength: f32,
    audio_factor: f32,
) {
    core.solver.add_impulse(x, y, radius, strength, audio_factor);
}

pub(super) fn add_velocity_impulse(
    core: &mut SimCore,
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    force_strength: f32,
) {
    core.solver.add_velocity_impulse(x, y, vx, vy, force_strength);
}

pub(super) fn reset(core: &mut SimCore) {
    core.solver.reset();
    core.accumulator = 0.0;
    core.frame = 0;
}

pub(super) fn clear_dye(core: &mut SimCore) {
    core.solver.clear_dye();
}

pub(super) fn clear_velocity(core: &mut SimCore) {
    core.solver.clear_velocity();
}
