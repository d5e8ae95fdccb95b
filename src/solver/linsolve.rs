//! Gauss-Seidel relaxation and the implicit diffusion solve built on it.

use super::boundary::{apply_bounds, FieldKind};
use super::fields::at;

/// Solve `x[i,j] = (x0[i,j] + a * neighbors) / c` by `iters` in-place sweeps.
///
/// Each sweep reads the most recently written neighbor values (Gauss-Seidel,
/// not double-buffered Jacobi); the visual character of the solver depends on
/// this, so it must stay single-buffered. Boundary conditions are refreshed
/// after every sweep: interior cells next to the ghost ring read ghost values
/// on the following sweep.
pub(crate) fn lin_solve(
    kind: FieldKind,
    x: &mut [f32],
    x0: &[f32],
    a: f32,
    c: f32,
    n: usize,
    iters: usize,
) {
    let w = n + 2;
    let c_inv = 1.0 / c;
    for _ in 0..iters {
        for j in 1..=n {
            for i in 1..=n {
                let idx = at(i, j, w);
                let neighbors = *fast!(x, [idx - 1])
                    + *fast!(x, [idx + 1])
                    + *fast!(x, [idx - w])
                    + *fast!(x, [idx + w]);
                let v = (*fast!(x0, [idx]) + a * neighbors) * c_inv;
                fast!(x, [idx] = v);
            }
        }
        apply_bounds(kind, x, n);
    }
}

/// Implicit diffusion of `x0` into `x` with rate `rate` over `dt`.
///
/// `a = dt * rate * N²` follows from discretizing ∂x/∂t = rate·∇²x on the
/// unit square; `x` is seeded from `x0` so the relaxation starts from the
/// undiffused field rather than stale buffer contents.
pub(crate) fn diffuse(
    kind: FieldKind,
    x: &mut [f32],
    x0: &[f32],
    rate: f32,
    dt: f32,
    n: usize,
    iters: usize,
) {
    let a = dt * rate * (n * n) as f32;
    x.copy_from_slice(x0);
    lin_solve(kind, x, x0, a, 1.0 + 4.0 * a, n, iters);
}
