//! Finite-element solution of the stationary Schrödinger equation.
//!
//! The domain is discretized with piecewise-linear "hat" basis functions over
//! the interior nodes of a uniform [`Grid`], with hard-zero (Dirichlet)
//! conditions at both edges. Assembling the mass matrix `M`, the Laplacian
//! matrix `D²`, and the potential matrix `Vm` turns the weak form of the
//! equation into the generalized symmetric eigenvalue problem
//! ```text
//! (Vm - ħ²/2m D²) c = E M c
//! ```
//! which is solved directly, with no iterative search over energy. The problem is
//! reduced to standard form through the Cholesky factor of `M` and handed to
//! LAPACK's symmetric eigensolver.
//!
//! See [`docs`][crate::docs] for the derivation.

use ndarray as nd;
use ndarray_linalg::{ self as la, Cholesky, EighInto, Inverse, SolveTriangular };
use crate::{
    error::{ QError, QResult },
    grid::Grid,
    solve::Solution,
    units::{ HBAR, MASS },
    utils::{ wf_fix_sign, wf_normalized },
};

// 5-point Gauss-Legendre nodes and weights on [-1, 1], used for all
// per-element potential integrals
const GL_NODES: [f64; 5] = [
    -0.9061798459386640,
    -0.5384693101056831,
    0.0,
    0.5384693101056831,
    0.9061798459386640,
];
const GL_WEIGHTS: [f64; 5] = [
    0.2369268850561891,
    0.4786286704993665,
    0.5688888888888889,
    0.4786286704993665,
    0.2369268850561891,
];

// fixed-order Gauss-Legendre quadrature over [a, b]
fn quad<F>(f: F, a: f64, b: f64) -> f64
where F: Fn(f64) -> f64
{
    let c = 0.5 * (b - a);
    let m = 0.5 * (a + b);
    c * GL_NODES.iter().zip(&GL_WEIGHTS)
        .map(|(&t, &w)| w * f(m + c * t))
        .sum::<f64>()
}

/// Assemble the interior-node mass matrix ∫ φᵢ φⱼ dx.
///
/// Tridiagonal: 2h/3 on the diagonal, h/6 off it.
pub fn mass_matrix(n_int: usize, h: f64) -> nd::Array2<f64> {
    let mut M: nd::Array2<f64> = nd::Array2::from_diag_elem(n_int, 2.0 * h / 3.0);
    M.slice_mut(nd::s![1.., ..n_int - 1]).diag_mut().fill(h / 6.0);
    M.slice_mut(nd::s![..n_int - 1, 1..]).diag_mut().fill(h / 6.0);
    M
}

/// Assemble the interior-node Laplacian matrix ∫ φᵢ φⱼ″ dx = -∫ φᵢ′ φⱼ′ dx.
///
/// Tridiagonal: -2/h on the diagonal, 1/h off it.
pub fn laplacian_matrix(n_int: usize, h: f64) -> nd::Array2<f64> {
    let mut D2: nd::Array2<f64> = nd::Array2::from_diag_elem(n_int, -2.0 / h);
    D2.slice_mut(nd::s![1.., ..n_int - 1]).diag_mut().fill(1.0 / h);
    D2.slice_mut(nd::s![..n_int - 1, 1..]).diag_mut().fill(1.0 / h);
    D2
}

/// Assemble the interior-node potential matrix ∫ V(x) φᵢ φⱼ dx by per-element
/// Gauss-Legendre quadrature.
pub fn potential_matrix<F>(V: &F, grid: &Grid) -> nd::Array2<f64>
where F: Fn(f64) -> f64
{
    let x = grid.points();
    let h = grid.dx();
    let n = grid.len();
    let n_int = n - 2;
    // hat function of a node: rises over the element left of it, falls over
    // the element right of it
    let rise = move |x0: f64, xv: f64| (xv - x0) / h;
    let fall = move |x1: f64, xv: f64| (x1 - xv) / h;
    let mut Vm: nd::Array2<f64> = nd::Array2::zeros((n_int, n_int));
    for i in 1..n - 1 {
        Vm[[i - 1, i - 1]]
            = quad(|xv| V(xv) * rise(x[i - 1], xv).powi(2), x[i - 1], x[i])
            + quad(|xv| V(xv) * fall(x[i + 1], xv).powi(2), x[i], x[i + 1]);
    }
    for i in 1..n - 2 {
        let o = quad(
            |xv| V(xv) * rise(x[i], xv) * fall(x[i + 1], xv),
            x[i],
            x[i + 1],
        );
        Vm[[i - 1, i]] = o;
        Vm[[i, i - 1]] = o;
    }
    Vm
}

/// Compute the lowest `n_states` bound states in a potential directly from the
/// finite-element generalized eigenvalue problem.
///
/// Returned solutions are in ascending energy order; wavefunctions are sampled
/// over the full grid (zero at the Dirichlet edges), normalized, and
/// sign-fixed. The grid must hold at least 3 nodes and `n_states` may not
/// exceed the number of interior nodes.
pub fn solve_fem<F>(V: &F, grid: &Grid, n_states: usize) -> QResult<Vec<Solution>>
where F: Fn(f64) -> f64
{
    let n = grid.len();
    QError::check_fem_nodes(n)?;
    let n_int = n - 2;
    QError::check_fem_states(n_states, n_int)?;
    let h = grid.dx();

    let M = mass_matrix(n_int, h);
    let D2 = laplacian_matrix(n_int, h);
    let Vm = potential_matrix(V, grid);
    let H: nd::Array2<f64> = Vm - D2 * (HBAR * HBAR / (2.0 * MASS));

    // reduce H c = E M c to standard form with M = L Lᵀ:
    // (L⁻¹ H L⁻ᵀ) y = E y,  c = L⁻ᵀ y
    let L = M.cholesky(la::UPLO::Lower)?;
    let Y = L.solve_triangular(la::UPLO::Lower, la::Diag::NonUnit, &H)?;
    let C = L.solve_triangular(
        la::UPLO::Lower,
        la::Diag::NonUnit,
        &Y.t().to_owned(),
    )?;
    let (evals, yvecs): (nd::Array1<f64>, nd::Array2<f64>)
        = C.eigh_into(la::UPLO::Lower)?;
    let Lt = L.t().to_owned();
    let cvecs = Lt.solve_triangular(la::UPLO::Upper, la::Diag::NonUnit, &yvecs)?;

    // position representation over interior nodes, as M⁻¹ c
    let Minv = M.inv()?;
    let sols: Vec<Solution>
        = evals.iter().zip(cvecs.columns())
        .take(n_states)
        .map(|(&e, c)| {
            let nodal: nd::Array1<f64> = Minv.dot(&c);
            let mut wf: nd::Array1<f64> = nd::Array1::zeros(n);
            wf.slice_mut(nd::s![1..n - 1]).assign(&nodal);
            Solution {
                e,
                wf: Some(wf_fix_sign(wf_normalized(&wf, h))),
                root: None,
            }
        })
        .collect();
    Ok(sols)
}
