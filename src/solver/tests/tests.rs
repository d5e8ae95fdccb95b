use super::boundary::{apply_bounds, FieldKind};
use super::fields::{at, Fields};
use super::*;
use crate::domain::params::SimulationParameters;

fn params(resolution: usize) -> SimulationParameters {
    SimulationParameters {
        resolution,
        ..SimulationParameters::default()
    }
}

fn total_dye(solver: &FluidSolver) -> f64 {
    solver.dye_field().data.iter().map(|&v| v as f64).sum()
}

#[test]
fn boundary_negates_normal_velocity_and_copies_scalars() {
    let n = 8;
    let w = n + 2;
    let mut field = vec![0.0f32; w * w];
    for j in 1..=n {
        for i in 1..=n {
            field[at(i, j, w)] = (i * 10 + j) as f32;
        }
    }

    let mut vx = field.clone();
    apply_bounds(FieldKind::VelocityX, &mut vx, n);
    for j in 1..=n {
        assert_eq!(vx[at(0, j, w)], -vx[at(1, j, w)]);
        assert_eq!(vx[at(n + 1, j, w)], -vx[at(n, j, w)]);
        // Tangential walls copy.
        assert_eq!(vx[at(j, 0, w)], vx[at(j, 1, w)]);
        assert_eq!(vx[at(j, n + 1, w)], vx[at(j, n, w)]);
    }

    let mut scalar = field.clone();
    apply_bounds(FieldKind::Scalar, &mut scalar, n);
    for j in 1..=n {
        assert_eq!(scalar[at(0, j, w)], scalar[at(1, j, w)]);
        assert_eq!(scalar[at(n + 1, j, w)], scalar[at(n, j, w)]);
        assert_eq!(scalar[at(j, 0, w)], scalar[at(j, 1, w)]);
        assert_eq!(scalar[at(j, n + 1, w)], scalar[at(j, n, w)]);
    }

    let mut vy = field;
    apply_bounds(FieldKind::VelocityY, &mut vy, n);
    for i in 1..=n {
        assert_eq!(vy[at(i, 0, w)], -vy[at(i, 1, w)]);
        assert_eq!(vy[at(i, n + 1, w)], -vy[at(i, n, w)]);
    }
}

#[test]
fn boundary_corners_average_edge_neighbors() {
    let n = 4;
    let w = n + 2;
    let mut field = vec![0.0f32; w * w];
    for j in 1..=n {
        for i in 1..=n {
            field[at(i, j, w)] = (i + j * 7) as f32;
        }
    }
    apply_bounds(FieldKind::Scalar, &mut field, n);
    assert_eq!(
        field[at(0, 0, w)],
        0.5 * (field[at(1, 0, w)] + field[at(0, 1, w)])
    );
    assert_eq!(
        field[at(n + 1, n + 1, w)],
        0.5 * (field[at(n, n + 1, w)] + field[at(n + 1, n, w)])
    );
}

#[test]
fn projection_drives_divergence_toward_zero() {
    // Smooth (low-frequency) divergent field: the regime the projection is
    // built for. The wide central-difference gradient and the compact
    // relaxation stencil only agree at low frequencies, so the tolerance is
    // checked there, with a sweep budget large enough for the Poisson solve
    // to converge on those modes.
    let n = 32usize;
    let w = n + 2;
    let mut solver = FluidSolver::new(SimulationParameters {
        resolution: n,
        pressure_iterations: 80,
        ..SimulationParameters::default()
    });

    let freq = 4.0 * std::f32::consts::PI;
    {
        let f = solver.fields_mut();
        for j in 1..=n {
            for i in 1..=n {
                let x = i as f32 / (n + 1) as f32;
                let y = j as f32 / (n + 1) as f32;
                f.vx[at(i, j, w)] = (freq * x).sin() * (freq * y).cos();
                f.vy[at(i, j, w)] = (freq * x).cos() * (freq * y).sin();
            }
        }
        apply_bounds(FieldKind::VelocityX, &mut f.vx, n);
        apply_bounds(FieldKind::VelocityY, &mut f.vy, n);
    }

    let divergence = |f: &Fields| -> f32 {
        let mut max = 0.0f32;
        for j in 4..=(n - 3) {
            for i in 4..=(n - 3) {
                let idx = at(i, j, w);
                let d = -0.5
                    * ((f.vx[idx + 1] - f.vx[idx - 1]) + (f.vy[idx + w] - f.vy[idx - w]))
                    / n as f32;
                max = max.max(d.abs());
            }
        }
        max
    };

    let before = divergence(solver.fields());
    assert!(before > 1e-3, "test field should start divergent");

    solver.project_velocity();

    let after = divergence(solver.fields());
    let vmax = solver
        .fields()
        .vx
        .iter()
        .chain(solver.fields().vy.iter())
        .fold(0.0f32, |m, &v| m.max(v.abs()));
    assert!(after < before * 0.25, "divergence barely reduced: {} -> {}", before, after);
    assert!(after < 2.5e-3 * vmax.max(1.0), "residual divergence too large: {}", after);
}

#[test]
fn projection_residual_stays_small_at_default_budget() {
    // Production configuration: 64² grid with the default K = 20 budget.
    // The compact relaxation stencil never fully cancels the wide-stencil
    // divergence, so the bound here is the empirical one for this scheme:
    // residual under 1% of the peak velocity magnitude.
    let n = 64usize;
    let w = n + 2;
    let mut solver = FluidSolver::new(params(n));
    assert_eq!(solver.params().pressure_iterations, 20);

    let freq = 4.0 * std::f32::consts::PI;
    {
        let f = solver.fields_mut();
        for j in 1..=n {
            for i in 1..=n {
                let x = i as f32 / (n + 1) as f32;
                let y = j as f32 / (n + 1) as f32;
                f.vx[at(i, j, w)] = (freq * x).sin() * (freq * y).cos();
                f.vy[at(i, j, w)] = (freq * x).cos() * (freq * y).sin();
            }
        }
        apply_bounds(FieldKind::VelocityX, &mut f.vx, n);
        apply_bounds(FieldKind::VelocityY, &mut f.vy, n);
    }

    let max_divergence = |f: &Fields| -> f32 {
        let mut max = 0.0f32;
        for j in 1..=n {
            for i in 1..=n {
                let idx = at(i, j, w);
                let d = -0.5
                    * ((f.vx[idx + 1] - f.vx[idx - 1]) + (f.vy[idx + w] - f.vy[idx - w]))
                    / n as f32;
                max = max.max(d.abs());
            }
        }
        max
    };

    let before = max_divergence(solver.fields());
    assert!(before > 1e-3, "test field should start divergent");

    solver.project_velocity();

    let after = max_divergence(solver.fields());
    let vmax = solver
        .fields()
        .vx
        .iter()
        .chain(solver.fields().vy.iter())
        .fold(0.0f32, |m, &v| m.max(v.abs()));
    assert!(
        after < 1e-2 * vmax,
        "relative residual too large: {} against vmax {}",
        after,
        vmax
    );
}

#[test]
fn dissipation_decays_dye_mass_step_over_step() {
    let mut solver = FluidSolver::new(SimulationParameters {
        dissipation: 0.99,
        curl_strength: 0.0,
        ..params(32)
    });
    solver.add_impulse(0.5, 0.5, 0.1, 25.0, 0.0);

    let mut prev = total_dye(&solver);
    assert!(prev > 0.0);
    for _ in 0..50 {
        solver.step(1.0 / 60.0);
        let mass = total_dye(&solver);
        assert!(mass < prev, "dye mass must strictly decrease");
        prev = mass;
    }
    // 0.99^50 ~ 0.605; diffusion loss only helps the decay.
    assert!(prev < total_dye_after_impulse_bound(&solver) * 0.65);
}

fn total_dye_after_impulse_bound(solver: &FluidSolver) -> f64 {
    // Fresh solver, same impulse: the mass right after injection.
    let mut reference = FluidSolver::new(*solver.params());
    reference.add_impulse(0.5, 0.5, 0.1, 25.0, 0.0);
    total_dye(&reference)
}

#[test]
fn unit_dissipation_approximately_conserves_mass_at_rest() {
    // d = 1 and zero velocity: only diffusion touches the dye, and the
    // copy-rule walls make the interior nearly lossless.
    let mut solver = FluidSolver::new(SimulationParameters {
        dissipation: 1.0,
        curl_strength: 0.0,
        ..params(32)
    });
    solver.add_impulse(0.5, 0.5, 0.1, 10.0, 0.0);
    let before = total_dye(&solver);
    for _ in 0..20 {
        solver.step(1.0 / 60.0);
    }
    let after = total_dye(&solver);
    assert!((after - before).abs() / before < 1e-2);
}

#[test]
fn out_of_viewport_impulses_are_no_ops() {
    let mut solver = FluidSolver::new(params(24));
    solver.add_impulse(0.3, 0.7, 0.05, 20.0, 0.5);
    solver.add_velocity_impulse(0.3, 0.7, 40.0, -25.0, 30.0);

    let density = solver.fields().density.clone();
    let vx = solver.fields().vx.clone();
    let vy = solver.fields().vy.clone();

    for &(x, y) in &[(-0.1, 0.5), (1.1, 0.5), (0.5, -0.1), (0.5, 1.2), (-3.0, 4.0)] {
        solver.add_impulse(x, y, 0.05, 20.0, 0.5);
        solver.add_velocity_impulse(x, y, 40.0, -25.0, 30.0);
    }

    assert_eq!(solver.fields().density, density);
    assert_eq!(solver.fields().vx, vx);
    assert_eq!(solver.fields().vy, vy);
}

#[test]
fn dye_impulse_applies_radial_falloff() {
    let mut solver = FluidSolver::new(params(64));
    solver.add_impulse(0.5, 0.5, 0.04, 25.0, 0.0);

    let f = solver.fields();
    let center = f.density[f.index(33, 33)];
    let ring = f.density[f.index(34, 33)];
    assert!(center > 0.0);
    assert!(ring > 0.0 && ring < center);
    // Cells at exactly the rim distance get zero weight.
    assert_eq!(f.density[f.index(36, 33)], 0.0);
}

#[test]
fn audio_factor_scales_injected_dye() {
    let mut quiet = FluidSolver::new(params(32));
    let mut loud = FluidSolver::new(params(32));
    quiet.add_impulse(0.5, 0.5, 0.1, 20.0, 0.0);
    loud.add_impulse(0.5, 0.5, 0.1, 20.0, 1.0);
    let q = total_dye(&quiet);
    let l = total_dye(&loud);
    assert!((l / q - 2.0).abs() < 1e-3, "audio factor 1.0 should double the splat");
}

#[test]
fn velocity_impulse_hits_a_single_cell() {
    let mut solver = FluidSolver::new(params(32));
    solver.add_velocity_impulse(0.5, 0.5, 500.0, -250.0, 10.0);

    let f = solver.fields();
    let idx = f.index(17, 17);
    assert!((f.vx[idx] - 5.0).abs() < 1e-6);
    assert!((f.vy[idx] + 2.5).abs() < 1e-6);
    let touched_x = f.vx.iter().filter(|v| **v != 0.0).count();
    let touched_y = f.vy.iter().filter(|v| **v != 0.0).count();
    assert_eq!(touched_x, 1);
    assert_eq!(touched_y, 1);
}

#[test]
fn resize_reallocates_and_zeroes_everything() {
    let mut solver = FluidSolver::new(params(32));
    solver.add_impulse(0.5, 0.5, 0.1, 25.0, 0.0);
    solver.add_velocity_impulse(0.5, 0.5, 100.0, 100.0, 50.0);
    solver.step(1.0 / 60.0);
    assert!(total_dye(&solver) > 0.0);

    solver.update_config(params(48));

    assert_eq!(solver.resolution(), 48);
    let dye = solver.dye_field();
    assert_eq!(dye.size, 48);
    assert!(dye.data.iter().all(|&v| v == 0.0));
    let f = solver.fields();
    assert_eq!(f.vx.len(), 50 * 50);
    assert!(f.vx.iter().all(|&v| v == 0.0));
    assert!(f.vy.iter().all(|&v| v == 0.0));
    assert!(f.density.iter().all(|&v| v == 0.0));
}

#[test]
fn non_resolution_config_changes_keep_fields() {
    let mut solver = FluidSolver::new(params(32));
    solver.add_impulse(0.5, 0.5, 0.1, 25.0, 0.0);
    let before = solver.fields().density.clone();

    let mut p = *solver.params();
    p.viscosity = 0.05;
    p.dissipation = 0.9;
    solver.update_config(p);

    assert_eq!(solver.fields().density, before);
    assert_eq!(solver.params().viscosity, 0.05);
}

#[test]
fn dye_extraction_clamps_to_unit_range() {
    let mut solver = FluidSolver::new(params(8));
    {
        let f = solver.fields_mut();
        let hot = f.index(3, 3);
        let cold = f.index(5, 5);
        f.density[hot] = 7.5;
        f.density[cold] = -2.0;
    }
    let dye = solver.dye_field();
    assert!(dye.data.iter().all(|&v| (0.0..=1.0).contains(&v)));
    assert_eq!(dye.data[2 * 8 + 2], 1.0);
    assert_eq!(dye.data[4 * 8 + 4], 0.0);
}

#[test]
fn extraction_excludes_ghost_ring() {
    let mut solver = FluidSolver::new(params(8));
    {
        let f = solver.fields_mut();
        // Poison the whole ghost ring; none of it may leak out.
        for i in 0..10 {
            let (a, b, c, d) = (f.index(i, 0), f.index(i, 9), f.index(0, i), f.index(9, i));
            f.density[a] = 9.0;
            f.density[b] = 9.0;
            f.density[c] = 9.0;
            f.density[d] = 9.0;
        }
    }
    let dye = solver.dye_field();
    assert_eq!(dye.data.len(), 64);
    assert!(dye.data.iter().all(|&v| v == 0.0));
}

#[test]
fn zero_curl_strength_skips_confinement() {
    let mut solver = FluidSolver::new(SimulationParameters {
        curl_strength: 0.0,
        ..params(16)
    });
    solver.add_velocity_impulse(0.5, 0.5, 300.0, 100.0, 20.0);
    let vx = solver.fields().vx.clone();
    let vy = solver.fields().vy.clone();

    solver.confine_vorticity(1.0 / 60.0);

    assert_eq!(solver.fields().vx, vx);
    assert_eq!(solver.fields().vy, vy);
}

#[test]
fn confinement_injects_rotation_where_curl_exists() {
    let mut solver = FluidSolver::new(SimulationParameters {
        curl_strength: 30.0,
        ..params(32)
    });
    // A shear pair produces curl between the two streams.
    solver.add_velocity_impulse(0.4, 0.45, 800.0, 0.0, 20.0);
    solver.add_velocity_impulse(0.4, 0.55, -800.0, 0.0, 20.0);
    let before: f32 = solver.fields().vy.iter().map(|v| v.abs()).sum();

    solver.confine_vorticity(1.0 / 60.0);

    let after: f32 = solver.fields().vy.iter().map(|v| v.abs()).sum();
    assert!(after > before, "confinement should add perpendicular velocity");
}

#[test]
fn steps_are_deterministic() {
    let run = || {
        let mut solver = FluidSolver::new(params(32));
        solver.add_impulse(0.4, 0.6, 0.06, 22.0, 0.25);
        solver.add_velocity_impulse(0.4, 0.6, 120.0, -80.0, 25.0);
        for _ in 0..30 {
            solver.step(1.0 / 60.0);
        }
        solver.dye_field().data
    };
    assert_eq!(run(), run());
}

#[test]
fn reset_and_clear_commands_zero_the_right_fields() {
    let mut solver = FluidSolver::new(params(16));
    solver.add_impulse(0.5, 0.5, 0.1, 25.0, 0.0);
    solver.add_velocity_impulse(0.5, 0.5, 200.0, 200.0, 20.0);
    solver.step(1.0 / 60.0);

    solver.clear_dye();
    assert_eq!(total_dye(&solver), 0.0);
    assert!(solver.fields().vx.iter().any(|&v| v != 0.0));

    solver.add_impulse(0.5, 0.5, 0.1, 25.0, 0.0);
    solver.clear_velocity();
    assert!(solver.fields().vx.iter().all(|&v| v == 0.0));
    assert!(solver.fields().vy.iter().all(|&v| v == 0.0));
    assert!(total_dye(&solver) > 0.0);

    solver.reset();
    assert_eq!(total_dye(&solver), 0.0);
    assert!(solver.fields().density.iter().all(|&v| v == 0.0));
}
