//! Per-step orchestration: the fixed phase sequence of one `step(dt)`.

use super::advect::advect;
use super::boundary::FieldKind;
use super::linsolve::diffuse;
use super::project::project;
use super::vorticity::confine;
use super::FluidSolver;

/// One full timestep. Fixed sequence, no configuration branching apart from
/// the ε <= 0 skip inside the confinement pass:
///
/// velocity: diffuse -> project -> advect -> confine -> project
/// dye:      diffuse -> advect -> dissipate
pub(super) fn step(solver: &mut FluidSolver, dt: f32) {
    diffuse_velocity(solver, dt);
    project_diffused(solver);
    advect_velocity(solver, dt);
    confine_vorticity(solver, dt);
    project_velocity(solver);
    diffuse_dye(solver, dt);
    advect_dye(solver, dt);
    dissipate_dye(solver);
}

/// Diffuse current velocity into the Prev buffers under viscosity.
pub(super) fn diffuse_velocity(solver: &mut FluidSolver, dt: f32) {
    let f = &mut solver.fields;
    let n = f.n();
    let k = solver.params.pressure_iterations;
    let visc = solver.params.viscosity;
    diffuse(FieldKind::VelocityX, &mut f.vx_prev, &f.vx, visc, dt, n, k);
    diffuse(FieldKind::VelocityY, &mut f.vy_prev, &f.vy, visc, dt, n, k);
}

/// Remove divergence from the freshly diffused (Prev) velocity.
pub(super) fn project_diffused(solver: &mut FluidSolver) {
    let f = &mut solver.fields;
    let n = f.n();
    let k = solver.params.pressure_iterations;
    project(&mut f.vx_prev, &mut f.vy_prev, &mut f.pressure, &mut f.divergence, n, k);
}

/// Self-advect velocity: the Prev buffers are both the field being moved
/// and the velocity used for the backtrace.
pub(super) fn advect_velocity(solver: &mut FluidSolver, dt: f32) {
    let f = &mut solver.fields;
    let n = f.n();
    advect(FieldKind::VelocityX, &mut f.vx, &f.vx_prev, &f.vx_prev, &f.vy_prev, dt, n);
    advect(FieldKind::VelocityY, &mut f.vy, &f.vy_prev, &f.vx_prev, &f.vy_prev, dt, n);
}

pub(super) fn confine_vorticity(solver: &mut FluidSolver, dt: f32) {
    let f = &mut solver.fields;
    let n = f.n();
    let eps = solver.params.curl_strength;
    confine(&mut f.vx, &mut f.vy, &mut f.curl, eps, dt, n);
}

/// Re-enforce incompressibility on the post-advection velocity.
pub(super) fn project_velocity(solver: &mut FluidSolver) {
    let f = &mut solver.fields;
    let n = f.n();
    let k = solver.params.pressure_iterations;
    project(&mut f.vx, &mut f.vy, &mut f.pressure, &mut f.divergence, n, k);
}

pub(super) fn diffuse_dye(solver: &mut FluidSolver, dt: f32) {
    let f = &mut solver.fields;
    let n = f.n();
    let k = solver.params.pressure_iterations;
    let rate = solver.params.diffusion;
    diffuse(FieldKind::Scalar, &mut f.density_prev, &f.density, rate, dt, n, k);
}

/// Carry the dye along the final velocity field of this step.
pub(super) fn advect_dye(solver: &mut FluidSolver, dt: f32) {
    let f = &mut solver.fields;
    let n = f.n();
    advect(FieldKind::Scalar, &mut f.density, &f.density_prev, &f.vx, &f.vy, dt, n);
}

/// Multiply every dye cell (ghost ring included) by the retention factor.
pub(super) fn dissipate_dye(solver: &mut FluidSolver) {
    let d = solver.params.dissipation;
    for cell in solver.fields.density.iter_mut() {
        *cell *= d;
    }
}
