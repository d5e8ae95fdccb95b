//! Vorticity confinement.
//!
//! Semi-Lagrangian advection and the relaxation solves smear out small
//! eddies; this pass measures the local curl, finds the gradient of its
//! magnitude, and pushes velocity perpendicular to that gradient so the
//! swirls that survive get reinforced instead of fading.

use super::boundary::{apply_bounds, FieldKind};
use super::fields::at;

const GRADIENT_EPSILON: f32 = 1e-5;

/// Apply the confinement force scaled by `epsilon` to `(vx, vy)`.
///
/// `curl` is solver-owned scratch, fully recomputed here every call.
/// `epsilon <= 0` disables the pass at zero cost.
pub(crate) fn confine(
    vx: &mut [f32],
    vy: &mut [f32],
    curl: &mut [f32],
    epsilon: f32,
    dt: f32,
    n: usize,
) {
    if epsilon <= 0.0 {
        return;
    }
    let w = n + 2;

    for j in 1..=n {
        for i in 1..=n {
            let idx = at(i, j, w);
            let c = 0.5
                * ((*fast!(vy, [idx + 1]) - *fast!(vy, [idx - 1]))
                    - (*fast!(vx, [idx + w]) - *fast!(vx, [idx - w])));
            fast!(curl, [idx] = c);
        }
    }

    for j in 1..=n {
        for i in 1..=n {
            let idx = at(i, j, w);
            // Gradient of |curl|, normalized; the epsilon keeps the division
            // finite where the field is locally flat.
            let gx = 0.5 * (fast!(curl, [idx + 1]).abs() - fast!(curl, [idx - 1]).abs());
            let gy = 0.5 * (fast!(curl, [idx + w]).abs() - fast!(curl, [idx - w]).abs());
            let len = (gx * gx + gy * gy).sqrt() + GRADIENT_EPSILON;
            let nx = gx / len;
            let ny = gy / len;

            let force = epsilon * *fast!(curl, [idx]);
            let dvx = ny * -force * dt;
            let dvy = nx * force * dt;
            fast!(vx, [idx] = *fast!(vx, [idx]) + dvx);
            fast!(vy, [idx] = *fast!(vy, [idx]) + dvy);
        }
    }

    apply_bounds(FieldKind::VelocityX, vx, n);
    apply_bounds(FieldKind::VelocityY, vy, n);
}
