//! Semi-Lagrangian advection.

use super::boundary::{apply_bounds, FieldKind};
use super::fields::at;

/// Move field `d0` through the velocity field `(vel_x, vel_y)` for `dt`,
/// writing the result into `d`.
///
/// Every destination cell traces backward along the local velocity by
/// `dt0 = dt * N` and bilinearly resamples the source buffer there. The
/// source coordinate is clamped to [0.5, N + 0.5] per axis, which keeps all
/// four sample taps inside the interior-plus-ghost band.
pub(crate) fn advect(
    kind: FieldKind,
    d: &mut [f32],
    d0: &[f32],
    vel_x: &[f32],
    vel_y: &[f32],
    dt: f32,
    n: usize,
) {
    let w = n + 2;
    let dt0 = dt * n as f32;
    let max = n as f32 + 0.5;

    for j in 1..=n {
        for i in 1..=n {
            let idx = at(i, j, w);
            let x = (i as f32 - dt0 * *fast!(vel_x, [idx])).clamp(0.5, max);
            let y = (j as f32 - dt0 * *fast!(vel_y, [idx])).clamp(0.5, max);

            // x, y >= 0.5, so truncation is floor
            let i0 = x as usize;
            let j0 = y as usize;
            let i1 = i0 + 1;
            let j1 = j0 + 1;

            let s1 = x - i0 as f32;
            let s0 = 1.0 - s1;
            let t1 = y - j0 as f32;
            let t0 = 1.0 - t1;

            let v = s0
                * (t0 * *fast!(d0, [at(i0, j0, w)]) + t1 * *fast!(d0, [at(i0, j1, w)]))
                + s1 * (t0 * *fast!(d0, [at(i1, j0, w)]) + t1 * *fast!(d0, [at(i1, j1, w)]));
            fast!(d, [idx] = v);
        }
    }

    apply_bounds(kind, d, n);
}
