//! Fixed-step integration of the stationary Schrödinger equation.
//!
//! The second-order equation is rewritten as the coupled first-order system
//! ```text
//! ψ′ = φ
//! φ′ = 2 (V(x) - E) ψ
//! ```
//! (natural units, see [`units`][crate::units]) and advanced across a
//! [`Grid`] with the classic fourth-order Runge-Kutta scheme at the grid
//! spacing. No adaptive step control is performed.
//!
//! A diverging trial wavefunction is a physical outcome for off-eigenvalue
//! energies, not an error: state components saturate at [`PSI_CLAMP`] (sign
//! preserved) and the integration holds there, so the far-boundary residual
//! stays finite and sign-evaluable.

use ndarray as nd;
use crate::{ grid::Grid, units::SCHRO_PREFACTOR };

/// Wavefunction value and spatial derivative at a single grid point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct State {
    /// ψ
    pub psi: f64,
    /// ψ′
    pub dpsi: f64,
}

/// Saturation bound on |ψ| and |ψ′| during integration.
pub const PSI_CLAMP: f64 = 1e250;

fn saturate(v: f64) -> f64 {
    if v.is_nan() { PSI_CLAMP } else { v.clamp(-PSI_CLAMP, PSI_CLAMP) }
}

impl State {
    /// Create a new `State`.
    pub fn new(psi: f64, dpsi: f64) -> Self { Self { psi, dpsi } }

    /// Return `true` if either component sits at the saturation bound.
    pub fn is_saturated(&self) -> bool {
        self.psi.abs() >= PSI_CLAMP || self.dpsi.abs() >= PSI_CLAMP
    }

    fn saturated(self) -> Self {
        Self { psi: saturate(self.psi), dpsi: saturate(self.dpsi) }
    }

    // Euler step of size h along a derivative, used for RK4 stage points.
    fn stepped(self, h: f64, d: Self) -> Self {
        Self { psi: self.psi + h * d.psi, dpsi: self.dpsi + h * d.dpsi }
    }
}

// single RK4 step of size h from x, saturating the result
fn rk4_step<F>(V: &F, E: f64, x: f64, h: f64, s: State) -> State
where F: Fn(f64) -> f64
{
    let deriv = |xv: f64, sv: State| State {
        psi: sv.dpsi,
        dpsi: SCHRO_PREFACTOR * (V(xv) - E) * sv.psi,
    };
    let k1 = deriv(x, s);
    let k2 = deriv(x + h / 2.0, s.stepped(h / 2.0, k1));
    let k3 = deriv(x + h / 2.0, s.stepped(h / 2.0, k2));
    let k4 = deriv(x + h, s.stepped(h, k3));
    State {
        psi: s.psi + h / 6.0 * (k1.psi + 2.0 * k2.psi + 2.0 * k3.psi + k4.psi),
        dpsi: s.dpsi
            + h / 6.0 * (k1.dpsi + 2.0 * k2.dpsi + 2.0 * k3.dpsi + k4.dpsi),
    }.saturated()
}

/// Integrate across the grid for a fixed trial energy, returning one [`State`]
/// per grid point.
///
/// The output length always equals the grid length.
pub fn integrate<F>(V: &F, E: f64, init: State, grid: &Grid) -> Vec<State>
where F: Fn(f64) -> f64
{
    let h = grid.dx();
    let n = grid.len();
    let mut out: Vec<State> = Vec::with_capacity(n);
    let mut cur = init.saturated();
    out.push(cur);
    for &xk in grid.points().iter().take(n - 1) {
        if !cur.is_saturated() {
            cur = rk4_step(V, E, xk, h, cur);
        }
        out.push(cur);
    }
    out
}

/// Like [`integrate`], but keep only the wavefunction values.
pub fn integrate_psi<F>(V: &F, E: f64, init: State, grid: &Grid)
    -> nd::Array1<f64>
where F: Fn(f64) -> f64
{
    integrate(V, E, init, grid).into_iter().map(|s| s.psi).collect()
}

/// March across the grid and return only the final [`State`], allocating
/// nothing; this is the inner loop of the root search.
pub fn boundary_state<F>(V: &F, E: f64, init: State, grid: &Grid) -> State
where F: Fn(f64) -> f64
{
    let h = grid.dx();
    let n = grid.len();
    let mut cur = init.saturated();
    for &xk in grid.points().iter().take(n - 1) {
        if cur.is_saturated() { break; }
        cur = rk4_step(V, E, xk, h, cur);
    }
    cur
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use super::*;

    #[test]
    fn output_length_matches_grid() {
        let V = |x: f64| 0.5 * x * x;
        for n in [2, 10, 10000] {
            let grid = Grid::linspace(-5.0, 5.0, n).unwrap();
            let trace = integrate(&V, 0.5, State::new(0.0, 1e-3), &grid);
            assert_eq!(trace.len(), n);
        }
    }

    #[test]
    fn free_particle_sine() {
        // V = 0, E = k²/2: ψ(x) = sin(kx)/k from ψ(0) = 0, ψ′(0) = 1
        let k = 2.0;
        let grid = Grid::linspace(0.0, 3.0, 3001).unwrap();
        let trace = integrate(&|_| 0.0, k * k / 2.0, State::new(0.0, 1.0), &grid);
        let end = trace[trace.len() - 1];
        assert_relative_eq!(end.psi, (k * 3.0).sin() / k, epsilon = 1e-8);
        assert_relative_eq!(end.dpsi, (k * 3.0).cos(), epsilon = 1e-8);
    }

    #[test]
    fn divergence_saturates() {
        // far below the potential floor the solution grows like e^{√(2|E|)x},
        // overflowing f64 well before the end of this grid
        let grid = Grid::linspace(0.0, 50.0, 5001).unwrap();
        let trace = integrate(&|_| 0.0, -1000.0, State::new(0.0, 1.0), &grid);
        let end = trace[trace.len() - 1];
        assert!(end.psi.is_finite() && end.dpsi.is_finite());
        assert!(end.is_saturated());
        assert_eq!(trace.len(), grid.len());
    }

    #[test]
    fn pure_function() {
        let V = |x: f64| 0.5 * x * x;
        let grid = Grid::linspace(-5.0, 5.0, 501).unwrap();
        let a = integrate(&V, 1.3, State::new(0.0, 1e-3), &grid);
        let b = integrate(&V, 1.3, State::new(0.0, 1e-3), &grid);
        assert_eq!(a, b);
    }
}
