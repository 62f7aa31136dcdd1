#![allow(dead_code, non_snake_case)]

//! Provides functions and higher-level constructs for automated solution of the
//! one-dimensional, time-independent Schrödinger equation for bound states in
//! conservative potentials via two classical techniques:
//! - The shooting method: fixed-step fourth-order Runge-Kutta integration of
//!   the equation as a first-order system, coupled to a root search over the
//!   energy parameter (sign-change scan plus bisection refinement of the
//!   far-boundary residual).
//! - The finite-element method: assembly of mass, Laplacian, and potential
//!   matrices over a piecewise-linear "hat" basis and direct solution of the
//!   resulting generalized eigenvalue problem.
//!
//! Root searches report convergence explicitly: a search that exhausts its
//! iteration budget is flagged as such, a scan that brackets no sign change
//! yields an empty result, and a diverging trial wavefunction saturates at a
//! finite clamp bound instead of raising a floating-point fault.
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod units;
pub mod grid;
pub mod integrate;
pub mod shoot;
pub mod fem;
pub mod solve;
pub mod plot;
pub mod utils;

pub mod docs;

pub(crate) const DEF_EPSILON: f64 = 1e-6;
pub(crate) const DEF_MAXITERS: usize = 1000;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
