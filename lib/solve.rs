//! High-level orchestration of the two solver paths.
//!
//! [`solve`] takes a potential, a [`Grid`], and a [`Method`] selector, runs
//! the matching solver, and returns normalized, sign-fixed [`Solution`]s in
//! ascending energy order. [`System`] bundles a grid with its potential for
//! scenario code that solves the same well repeatedly.

use ndarray as nd;
use crate::{
    error::QResult,
    fem,
    grid::Grid,
    integrate,
    shoot::{ self, Root },
    utils::{ wf_fix_sign, wf_normalized },
    DEF_EPSILON,
    DEF_MAXITERS,
};

/// A single solution to the stationary Schrödinger equation.
///
/// This struct is usually only returned by a solver function; you probably
/// won't ever instantiate it yourself. The wavefunction is allowed to be
/// missing in the case that `compute_wf = false` is passed to a solver
/// function.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Energy
    pub e: f64,
    /// Wavefunction, sampled over the full grid
    pub wf: Option<nd::Array1<f64>>,
    /// Root-search diagnostics; present only on the shooting path
    pub root: Option<Root>,
}

impl Solution {
    /// Compare two `Solution`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }

    /// Return `true` unless this solution came from a root search that
    /// exhausted its iteration budget.
    pub fn is_converged(&self) -> bool {
        self.root.map_or(true, |r| r.is_converged())
    }

    /// Apply a scaling factor to the implicit length dimension associated with
    /// the wavefunction and energy.
    ///
    /// This performs the following:
    /// ```text
    /// wf → √a * wf
    /// e  → e / a²
    /// ```
    pub fn rescale(&mut self, a: f64) {
        self.e /= a.powi(2);
        if let Some(wf) = self.wf.as_mut() { *wf *= a.sqrt(); }
    }

    /// Like [`Self::rescale`], but create a copy of `self` with the specified
    /// scaling factor.
    pub fn rescaled(&self, a: f64) -> Self {
        let mut new = self.clone();
        new.rescale(a);
        new
    }
}

/// Solving method selector and parameters.
#[derive(Clone, Debug)]
pub enum Method {
    /// Use the [shooting method][shoot::solve_shooting]: scan an energy
    /// interval for sign changes of the boundary residual, then refine each
    /// bracket by bisection.
    Shooting {
        /// Lower edge of the energy search interval.
        e_min: f64,
        /// Upper edge of the energy search interval.
        e_max: f64,
        /// Number of evenly spaced scan energies.
        resolution: usize,
        /// Desired accuracy bound (default: `1e-6`).
        epsilon: Option<f64>,
        /// Maximum number of bisection iterations (default: `1000`).
        maxiters: Option<usize>,
    },
    /// Use the [finite-element method][fem::solve_fem]: assemble and solve the
    /// generalized eigenvalue problem directly.
    FiniteElement {
        /// Number of lowest-energy states to return.
        n_states: usize,
    },
}

impl Method {
    /// Return `true` if `self` is `Shooting`.
    pub fn is_shooting(&self) -> bool {
        matches!(self, Self::Shooting { .. })
    }

    /// Return `true` if `self` is `FiniteElement`.
    pub fn is_finite_element(&self) -> bool {
        matches!(self, Self::FiniteElement { .. })
    }
}

/// Master solving function for all [methods][Method].
///
/// Wavefunctions are normalized to unit L² norm with the first lobe pointing
/// up, so both methods agree on presentation. Pass `compute_wf = false` to
/// only calculate energies.
pub fn solve<F>(V: &F, grid: &Grid, method: Method, compute_wf: bool)
    -> QResult<Vec<Solution>>
where F: Fn(f64) -> f64
{
    match method {
        Method::Shooting { e_min, e_max, resolution, epsilon, maxiters } => {
            let roots = shoot::solve_shooting(
                V,
                shoot::DEF_INIT,
                grid,
                e_min,
                e_max,
                resolution,
                epsilon.unwrap_or(DEF_EPSILON),
                maxiters.unwrap_or(DEF_MAXITERS),
            )?;
            let sols: Vec<Solution>
                = roots.into_iter()
                .map(|root| {
                    let wf = compute_wf.then(|| {
                        let psi = integrate::integrate_psi(
                            V, root.e, shoot::DEF_INIT, grid);
                        wf_fix_sign(wf_normalized(&psi, grid.dx()))
                    });
                    Solution { e: root.e, wf, root: Some(root) }
                })
                .collect();
            Ok(sols)
        },
        Method::FiniteElement { n_states } => {
            let mut sols = fem::solve_fem(V, grid, n_states)?;
            if !compute_wf {
                sols.iter_mut().for_each(|s| { s.wf = None; });
            }
            Ok(sols)
        },
    }
}

/// Simple record to keep track of a coordinate grid and the potential defined
/// over it.
///
/// The sampled potential array is guaranteed to have the same length as the
/// grid; the closure is retained so solver paths can evaluate the potential
/// off-grid (the integrator at half-steps, the assembler inside elements).
#[derive(Clone, Debug)]
pub struct System<F> {
    // coordinate grid
    grid: Grid,
    // potential function
    V: F,
    // potential sampled over the grid points
    v: nd::Array1<f64>,
}

impl<F: Fn(f64) -> f64> System<F> {
    /// Create a new `System` from a validated grid and a potential function.
    pub fn new(grid: Grid, V: F) -> Self {
        let v = grid.sample(&V);
        Self { grid, V, v }
    }

    /// Create a new `System`, generating the grid from "linspace-style"
    /// arguments (start, inclusive end, and an array length).
    pub fn new_linspace(xargs: (f64, f64, usize), V: F) -> QResult<Self> {
        let grid = Grid::linspace(xargs.0, xargs.1, xargs.2)?;
        Ok(Self::new(grid, V))
    }

    /// Create a new `System`, generating the grid from "range-style" arguments
    /// (start, exclusive end, and a step size).
    pub fn new_range(xargs: (f64, f64, f64), V: F) -> QResult<Self> {
        let grid = Grid::range(xargs.0, xargs.1, xargs.2)?;
        Ok(Self::new(grid, V))
    }

    /// Get a reference to the coordinate grid.
    pub fn grid(&self) -> &Grid { &self.grid }

    /// Get a reference to the sampled potential array.
    pub fn potential(&self) -> &nd::Array1<f64> { &self.v }

    /// Get the grid spacing.
    pub fn dx(&self) -> f64 { self.grid.dx() }

    /// Get the length of the coordinate and potential arrays.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.grid.len() }

    /// Thin interface to [`solve`].
    pub fn solve(&self, method: Method, compute_wf: bool)
        -> QResult<Vec<Solution>>
    {
        solve(&self.V, &self.grid, method, compute_wf)
    }
}

#[cfg(test)]
mod tests {
    use approx::{ assert_abs_diff_eq, assert_relative_eq };
    use super::*;
    use crate::utils::wf_norm;

    fn qho() -> System<fn(f64) -> f64> {
        System::new_linspace((-6.0, 6.0, 1201), |x| 0.5 * x * x).unwrap()
    }

    #[test]
    fn methods_agree_on_qho() {
        let sys = qho();
        let mt = sys.solve(
            Method::Shooting {
                e_min: 0.0,
                e_max: 3.0,
                resolution: 100,
                epsilon: Some(1e-9),
                maxiters: None,
            },
            true,
        ).unwrap();
        assert_eq!(mt.len(), 3);
        let fe = sys.solve(Method::FiniteElement { n_states: 3 }, true).unwrap();
        for (n, (a, b)) in mt.iter().zip(&fe).enumerate() {
            let analytic = n as f64 + 0.5;
            assert_abs_diff_eq!(a.e, analytic, epsilon = 1e-4);
            assert_abs_diff_eq!(b.e, analytic, epsilon = 1e-2);
            assert!(a.is_converged());
            assert!(a.root.is_some());
            assert!(b.root.is_none());
        }
    }

    #[test]
    fn wavefunctions_are_normalized_and_aligned() {
        let sys = qho();
        let mt = sys.solve(
            Method::Shooting {
                e_min: 0.0,
                e_max: 2.0,
                resolution: 64,
                epsilon: Some(1e-9),
                maxiters: None,
            },
            true,
        ).unwrap();
        let fe = sys.solve(Method::FiniteElement { n_states: 2 }, true).unwrap();
        for sol in mt.iter().chain(&fe) {
            let wf = sol.wf.as_ref().unwrap();
            assert_eq!(wf.len(), sys.len());
            assert_relative_eq!(wf_norm(wf, sys.dx()), 1.0, max_relative = 1e-9);
        }
        // ground states from the two methods overlap up to discretization
        let overlap = crate::utils::wf_dot(
            mt[0].wf.as_ref().unwrap(),
            fe[0].wf.as_ref().unwrap(),
            sys.dx(),
        );
        assert_relative_eq!(overlap, 1.0, max_relative = 1e-3);
    }

    #[test]
    fn compute_wf_false_omits_wavefunctions() {
        let sys = qho();
        let sols = sys.solve(Method::FiniteElement { n_states: 2 }, false)
            .unwrap();
        assert!(sols.iter().all(|s| s.wf.is_none()));
    }

    #[test]
    fn rescaling() {
        let mut sol = Solution {
            e: 2.0,
            wf: Some(ndarray::Array1::ones(4)),
            root: None,
        };
        let scaled = sol.rescaled(2.0);
        assert_abs_diff_eq!(scaled.e, 0.5);
        assert_abs_diff_eq!(
            scaled.wf.as_ref().unwrap()[0],
            2.0_f64.sqrt(),
            epsilon = 1e-15,
        );
        sol.rescale(1.0);
        assert_abs_diff_eq!(sol.e, 2.0);
    }
}
