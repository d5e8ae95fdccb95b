//! Fields - dense grid storage for the solver
//!
//! One flat Vec per physical quantity, (N+2)² cells each: the interior
//! N×N lattice plus a one-cell ghost ring used only for boundary
//! enforcement. Cell (x, y) lives at `x + (N+2) * y`.
//!
//! Everything is allocated once at construction and reallocated only on a
//! resolution change; the per-step code never allocates.

/// Linear index into an (n+2)-wide field, `w = n + 2`.
#[inline(always)]
pub(crate) fn at(x: usize, y: usize, w: usize) -> usize {
    x + w * y
}

/// All solver state for one grid resolution.
///
/// `pressure` and `divergence` are dedicated projection scratch rather than
/// a second life of the `*_prev` buffers; each phase reads and writes only
/// the buffers named in its signature.
pub struct Fields {
    n: usize,
    side: usize,

    pub vx: Vec<f32>,
    pub vy: Vec<f32>,
    pub vx_prev: Vec<f32>,
    pub vy_prev: Vec<f32>,
    pub density: Vec<f32>,
    pub density_prev: Vec<f32>,
    pub curl: Vec<f32>,
    pub pressure: Vec<f32>,
    pub divergence: Vec<f32>,
}

impl Fields {
    pub fn new(n: usize) -> Self {
        debug_assert!(n > 0, "grid resolution must be positive");
        let side = n + 2;
        let size = side * side;
        Self {
            n,
            side,
            vx: vec![0.0; size],
            vy: vec![0.0; size],
            vx_prev: vec![0.0; size],
            vy_prev: vec![0.0; size],
            density: vec![0.0; size],
            density_prev: vec![0.0; size],
            curl: vec![0.0; size],
            pressure: vec![0.0; size],
            divergence: vec![0.0; size],
        }
    }

    // === Dimensions ===
    #[inline]
    pub fn n(&self) -> usize { self.n }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        at(x, y, self.side)
    }

    /// Zero velocity, dye and the curl scratch; keeps the allocation.
    pub fn reset(&mut self) {
        self.clear_velocity();
        self.clear_dye();
        self.curl.fill(0.0);
        self.pressure.fill(0.0);
        self.divergence.fill(0.0);
    }

    pub fn clear_dye(&mut self) {
        self.density.fill(0.0);
        self.density_prev.fill(0.0);
    }

    pub fn clear_velocity(&mut self) {
        self.vx.fill(0.0);
        self.vy.fill(0.0);
        self.vx_prev.fill(0.0);
        self.vy_prev.fill(0.0);
    }

    /// Copy the interior N×N block of the dye field into `out` (row-major),
    /// clamped to [0, 1]. This is the only view of solver state that ever
    /// leaves the solver.
    pub fn extract_dye_into(&self, out: &mut Vec<f32>) {
        let n = self.n;
        out.resize(n * n, 0.0);
        for j in 0..n {
            let src_row = at(1, j + 1, self.side);
            let dst_row = j * n;
            for i in 0..n {
                out[dst_row + i] = self.density[src_row + i].clamp(0.0, 1.0);
            }
        }
    }
}
