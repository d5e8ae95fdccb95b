//! Divergence projection (incompressibility enforcement).

use super::boundary::{apply_bounds, FieldKind};
use super::fields::at;
use super::linsolve::lin_solve;

/// Remove the divergent component of `(vx, vy)`.
///
/// Computes per-cell divergence, solves the discrete Poisson equation for a
/// pressure field with `iters` relaxation sweeps, then subtracts the pressure
/// gradient from the velocity. `pressure` and `divergence` are caller-owned
/// scratch; their previous contents are overwritten wholesale.
pub(crate) fn project(
    vx: &mut [f32],
    vy: &mut [f32],
    pressure: &mut [f32],
    divergence: &mut [f32],
    n: usize,
    iters: usize,
) {
    let w = n + 2;
    let h = -0.5 / n as f32;

    for j in 1..=n {
        for i in 1..=n {
            let idx = at(i, j, w);
            let div = h
                * ((*fast!(vx, [idx + 1]) - *fast!(vx, [idx - 1]))
                    + (*fast!(vy, [idx + w]) - *fast!(vy, [idx - w])));
            fast!(divergence, [idx] = div);
        }
    }
    pressure.fill(0.0);
    apply_bounds(FieldKind::Scalar, divergence, n);
    apply_bounds(FieldKind::Scalar, pressure, n);

    lin_solve(FieldKind::Scalar, pressure, divergence, 1.0, 4.0, n, iters);

    let scale = 0.5 * n as f32;
    for j in 1..=n {
        for i in 1..=n {
            let idx = at(i, j, w);
            let gx = scale * (*fast!(pressure, [idx + 1]) - *fast!(pressure, [idx - 1]));
            let gy = scale * (*fast!(pressure, [idx + w]) - *fast!(pressure, [idx - w]));
            fast!(vx, [idx] = *fast!(vx, [idx]) - gx);
            fast!(vy, [idx] = *fast!(vy, [idx]) - gy);
        }
    }
    apply_bounds(FieldKind::VelocityX, vx, n);
    apply_bounds(FieldKind::VelocityY, vy, n);
}
