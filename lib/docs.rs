//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Units](#units)
//! - [The shooting method](#the-shooting-method)
//! - [The finite-element method](#the-finite-element-method)
//!
//! # Background
//! Solution of the one-dimensional time-independent Schrödinger equation
//! (TISE) amounts to solving equations of the form
//! ```text
//!   ħ²  ∂²ψ
//! - --- --- + V(x) ψ(x) = E ψ(x)
//!   2m  ∂x²
//! ```
//! for a (conservative) potential *V*(*x*). Solutions are eigenpairs of the
//! Hamiltonian operator: a wavefunction defined over *x* along with a
//! real-valued energy strictly greater than the minimum of *V*(*x*). Since
//! the Hamiltonian is Hermitian, bound-state wavefunctions can always be
//! taken real-valued, which is what this crate does throughout.
//!
//! For a bound state the wavefunction must decay in the classically forbidden
//! regions on both sides of the well. On a finite computational domain this
//! becomes the two-point boundary condition ψ(*x*₀) = ψ(*x*₁) = 0, and the
//! TISE becomes a boundary-value problem with the energy as an unknown
//! parameter.
//!
//! # Units
//! All solvers work in natural units where *ħ* = *m* = 1 (see
//! [`units`][crate::units]), reducing the TISE to
//! ```text
//! ψ″ = 2 (V(x) - E) ψ
//! ```
//! A physical system with mass *m* and length scale *a* maps onto this
//! convention through the energy scale *ħ*²/2*m* *a*²;
//! [`Units`][crate::units::Units] carries the scaling factors in both
//! directions.
//!
//! # The shooting method
//! The boundary-value problem is converted to an initial-value problem: fix
//! (ψ, ψ′) = (0, ε) at the near boundary, pick a trial energy *E*, and
//! integrate the first-order system
//! ```text
//! ψ′ = φ
//! φ′ = 2 (V(x) - E) ψ
//! ```
//! across the grid with the classic fourth-order Runge-Kutta scheme
//! ([`integrate`][crate::integrate]). Because the equation is linear in ψ,
//! the magnitude of the initial kick ε only sets an overall scale. The value
//! left over at the far boundary defines the boundary residual
//! ```text
//! R(E) = ψ(x_max; E)
//! ```
//! which vanishes exactly when *E* is an eigenvalue. *R* is a smooth function
//! of *E* that changes sign at every eigenvalue, so the search proceeds in
//! two stages ([`shoot`][crate::shoot]): a scan of the requested interval at
//! fixed resolution records every sign change between adjacent samples
//! (bracketing each candidate eigenvalue separately, since several may share
//! one interval), then bisection drives each bracket below tolerance. For
//! off-eigenvalue energies the trial wavefunction grows exponentially in the
//! forbidden region; the integrator saturates it at a large finite bound so
//! the sign of *R* survives even where its magnitude would overflow.
//!
//! # The finite-element method
//! Expanding ψ = Σ *c*ᵢ φᵢ over piecewise-linear hat functions centered on
//! the interior nodes of the grid and projecting the TISE onto each basis
//! function yields the generalized eigenvalue problem
//! ```text
//! (Vm - ½ D²) c = E M c
//!
//! M[i, j]  = ∫ φᵢ φⱼ dx
//! D²[i, j] = -∫ φᵢ′ φⱼ′ dx
//! Vm[i, j] = ∫ V(x) φᵢ φⱼ dx
//! ```
//! with all three matrices tridiagonal ([`fem`][crate::fem]). Dropping the
//! boundary rows and columns enforces the Dirichlet condition. The mass
//! matrix is symmetric positive definite, so the problem reduces to a
//! standard symmetric one through its Cholesky factor *M* = *L* *L*ᵀ,
//! ```text
//! (L⁻¹ H L⁻ᵀ) y = E y,  c = L⁻ᵀ y
//! ```
//! and every eigenvalue within reach of the discretization comes out of a
//! single `eigh` call with no search over energy. Eigenvalue accuracy for the
//! *n*-th state degrades like (*k*ₙ*h*)², so the node count bounds how far up
//! the spectrum the results stay meaningful.
