//! User impulses (pointer dye brush, pointer drag forces).
//!
//! Coordinates arrive normalized to [0,1] viewport space. Anything landing
//! outside the interior grid is silently skipped: a pointer dragged off the
//! canvas is a normal event, not an error.

use super::FluidSolver;

pub(super) fn add_impulse(
    solver: &mut FluidSolver,
    x: f32,
    y: f32,
    radius: f32,
    strength: f32,
    audio_factor: f32,
) {
    if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
        return;
    }
    let n = solver.fields.n() as i32;
    let gx = (x * n as f32) as i32;
    let gy = (y * n as f32) as i32;
    let r = ((radius * n as f32) as i32).max(1);
    let rf = r as f32;
    let amount = strength * (1.0 + audio_factor) * 0.01;

    for dy in -r..=r {
        for dx in -r..=r {
            let cx = gx + dx;
            let cy = gy + dy;
            if cx < 0 || cy < 0 || cx >= n || cy >= n {
                continue;
            }
            let dist = ((dx * dx + dy * dy) as f32).sqrt();
            if dist > rf {
                continue;
            }
            // Linear radial falloff; the rim itself contributes nothing.
            let falloff = 1.0 - dist / rf;
            if falloff <= 0.0 {
                continue;
            }
            let idx = solver.fields.index((cx + 1) as usize, (cy + 1) as usize);
            solver.fields.density[idx] += amount * falloff;
        }
    }
}

pub(super) fn add_velocity_impulse(
    solver: &mut FluidSolver,
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    force_strength: f32,
) {
    if !(0.0..=1.0).contains(&x) || !(0.0..=1.0).contains(&y) {
        return;
    }
    let n = solver.fields.n() as i32;
    let gx = (x * n as f32) as i32;
    let gy = (y * n as f32) as i32;
    if gx < 0 || gy < 0 || gx >= n || gy >= n {
        return;
    }
    // Pointer velocity comes in px/s; 1/1000 brings it into grid scale.
    let idx = solver.fields.index((gx + 1) as usize, (gy + 1) as usize);
    solver.fields.vx[idx] += (vx / 1000.0) * force_strength;
    solver.fields.vy[idx] += (vy / 1000.0) * force_strength;
}
