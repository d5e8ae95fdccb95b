//! Solid-wall boundary conditions on the ghost ring.
//!
//! The domain is a closed box: the velocity component normal to a wall
//! reflects (ghost cell negates the adjacent interior value), everything
//! else passes through (ghost cell copies it). Corners average their two
//! edge-ghost neighbors.

use super::fields::at;

/// Which mirroring rule a field gets at the walls.
///
/// Internal detail of the solver; the public API never exposes this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Dye, pressure, divergence: copy at every wall.
    Scalar,
    /// x-velocity: negate at the left/right walls.
    VelocityX,
    /// y-velocity: negate at the top/bottom walls.
    VelocityY,
}

/// Rewrite the ghost ring of `x` from the adjacent interior values.
pub(crate) fn apply_bounds(kind: FieldKind, x: &mut [f32], n: usize) {
    let w = n + 2;
    for i in 1..=n {
        let left = x[at(1, i, w)];
        let right = x[at(n, i, w)];
        x[at(0, i, w)] = if kind == FieldKind::VelocityX { -left } else { left };
        x[at(n + 1, i, w)] = if kind == FieldKind::VelocityX { -right } else { right };

        let top = x[at(i, 1, w)];
        let bottom = x[at(i, n, w)];
        x[at(i, 0, w)] = if kind == FieldKind::VelocityY { -top } else { top };
        x[at(i, n + 1, w)] = if kind == FieldKind::VelocityY { -bottom } else { bottom };
    }

    x[at(0, 0, w)] = 0.5 * (x[at(1, 0, w)] + x[at(0, 1, w)]);
    x[at(0, n + 1, w)] = 0.5 * (x[at(1, n + 1, w)] + x[at(0, n, w)]);
    x[at(n + 1, 0, w)] = 0.5 * (x[at(n, 0, w)] + x[at(n + 1, 1, w)]);
    x[at(n + 1, n + 1, w)] = 0.5 * (x[at(n, n + 1, w)] + x[at(n + 1, n, w)]);
}
