//! Cross-method scenario checks against closed-form spectra.

use approx::{ assert_abs_diff_eq, assert_relative_eq };
use std::f64::consts::PI;
use qwell::{
    grid::Grid,
    solve::{ self, Method },
};

// infinite square well of width L on [0, L]: E_n = n²π²/(2L²)
fn box_level(n: usize, len: f64) -> f64 {
    (n as f64 * PI / len).powi(2) / 2.0
}

#[test]
fn square_well_shooting_within_one_percent() {
    let grid = Grid::linspace(0.0, 1.0, 1001).unwrap();
    let e_max = 50.0 * PI.powi(2) / 2.0;
    let sols = solve::solve(
        &|_| 0.0,
        &grid,
        Method::Shooting {
            e_min: 0.0,
            e_max,
            resolution: 2000,
            epsilon: None,
            maxiters: None,
        },
        false,
    ).unwrap();
    assert!(sols.len() >= 3);
    for (k, sol) in sols.iter().take(3).enumerate() {
        let exact = box_level(k + 1, 1.0);
        assert!(sol.is_converged());
        assert!(
            (sol.e - exact).abs() / exact < 1e-2,
            "level {}: {} vs analytic {}", k + 1, sol.e, exact,
        );
    }
}

#[test]
fn square_well_fem_within_tenth_percent() {
    let grid = Grid::linspace(0.0, 1.0, 201).unwrap();
    let sols = solve::solve(
        &|_| 0.0,
        &grid,
        Method::FiniteElement { n_states: 3 },
        false,
    ).unwrap();
    for (k, sol) in sols.iter().enumerate() {
        let exact = box_level(k + 1, 1.0);
        assert!(
            (sol.e - exact).abs() / exact < 1e-3,
            "level {}: {} vs analytic {}", k + 1, sol.e, exact,
        );
    }
}

#[test]
fn harmonic_oscillator_methods_agree() {
    let grid = Grid::linspace(-6.0, 6.0, 1201).unwrap();
    let well = |x: f64| 0.5 * x * x;
    let mt = solve::solve(
        &well,
        &grid,
        Method::Shooting {
            e_min: 0.0,
            e_max: 5.0,
            resolution: 256,
            epsilon: Some(1e-9),
            maxiters: None,
        },
        true,
    ).unwrap();
    let fe = solve::solve(
        &well,
        &grid,
        Method::FiniteElement { n_states: 5 },
        true,
    ).unwrap();
    assert_eq!(mt.len(), 5);
    assert_eq!(fe.len(), 5);
    for (n, (a, b)) in mt.iter().zip(&fe).enumerate() {
        let analytic = n as f64 + 0.5;
        assert_abs_diff_eq!(a.e, analytic, epsilon = 1e-4);
        assert_abs_diff_eq!(b.e, analytic, epsilon = 1e-2);
        // both paths sample the wavefunction over the full grid
        assert_eq!(a.wf.as_ref().unwrap().len(), grid.len());
        assert_eq!(b.wf.as_ref().unwrap().len(), grid.len());
    }
}

#[test]
fn empty_interval_yields_no_solutions() {
    let grid = Grid::linspace(-6.0, 6.0, 601).unwrap();
    let sols = solve::solve(
        &|x: f64| 0.5 * x * x,
        &grid,
        Method::Shooting {
            e_min: -20.0,
            e_max: -1.0,
            resolution: 128,
            epsilon: None,
            maxiters: None,
        },
        true,
    ).unwrap();
    assert!(sols.is_empty());
}

#[test]
fn normalization_is_consistent_across_methods() {
    let grid = Grid::linspace(0.0, 1.0, 401).unwrap();
    let mt = solve::solve(
        &|_| 0.0,
        &grid,
        Method::Shooting {
            e_min: 1.0,
            e_max: 25.0,
            resolution: 512,
            epsilon: Some(1e-9),
            maxiters: None,
        },
        true,
    ).unwrap();
    let fe = solve::solve(
        &|_| 0.0,
        &grid,
        Method::FiniteElement { n_states: 2 },
        true,
    ).unwrap();
    // ground states overlap up to discretization error
    let overlap = qwell::utils::wf_dot(
        mt[0].wf.as_ref().unwrap(),
        fe[0].wf.as_ref().unwrap(),
        grid.dx(),
    );
    assert_relative_eq!(overlap, 1.0, max_relative = 1e-3);
}
