//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! Only invalid configuration is an error here; domain-level outcomes
//! (non-convergence, an empty root scan, a diverging trial wavefunction) are
//! ordinary data returned to the caller.
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

pub type QResult<T> = Result<T, QError>;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from solver and grid-construction functions.
#[derive(Debug, Error)]
pub enum QError {
    /// Returned when a coordinate grid would hold fewer than two points.
    #[error("coordinate grids must hold at least 2 points; got {0}")]
    GridTooShort(usize),

    /// Returned when grid bounds are non-finite or not strictly ascending.
    #[error("grid bounds must be finite and ascending; got [{0}, {1}]")]
    BadGridBounds(f64, f64),

    /// Returned when a grid step size is non-finite or non-positive.
    #[error("grid step sizes must be finite and greater than 0; got {0}")]
    BadGridStep(f64),

    /// Returned when an energy search interval is non-finite or inverted.
    #[error("energy search intervals must be finite and ascending; got [{0}, {1}]")]
    BadInterval(f64, f64),

    /// Returned when a scan holds fewer than two sample energies.
    #[error("energy scans must sample at least 2 points; got {0}")]
    BadResolution(usize),

    /// Returned when a non-positive `epsilon` value is encountered.
    #[error("epsilon values must be greater than 0; got {0}")]
    BadEpsilon(f64),

    /// Returned when a zero `maxiters` value is encountered.
    #[error("maxiters must be greater than 0; got {0}")]
    BadMaxiters(usize),

    /// Returned when bisection refinement is handed an interval whose
    /// endpoint residuals do not straddle zero.
    #[error("refinement interval [{0}, {1}] does not bracket a sign change")]
    NoSignChange(f64, f64),

    /// Returned when a finite-element grid holds too few nodes to have an
    /// interior.
    #[error("finite-element grids must hold at least 3 nodes; got {0}")]
    FemTooFewNodes(usize),

    /// Returned when more eigenstates are requested than the discretization
    /// can represent.
    #[error("requested {requested} eigenstates but the discretization holds only {available}")]
    FemTooManyStates {
        requested: usize,
        available: usize,
    },

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`LinalgError`]
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),

    /// Returned when plot emission fails to write its output files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl QError {
    pub(crate) fn check_npoints(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::GridTooShort(n))
    }

    pub(crate) fn check_bounds(a: f64, b: f64) -> Result<(), Self> {
        (a.is_finite() && b.is_finite() && a < b)
            .then_some(())
            .ok_or(Self::BadGridBounds(a, b))
    }

    pub(crate) fn check_step(dx: f64) -> Result<(), Self> {
        (dx.is_finite() && dx > 0.0).then_some(()).ok_or(Self::BadGridStep(dx))
    }

    pub(crate) fn check_interval(e_min: f64, e_max: f64) -> Result<(), Self> {
        (e_min.is_finite() && e_max.is_finite() && e_min < e_max)
            .then_some(())
            .ok_or(Self::BadInterval(e_min, e_max))
    }

    pub(crate) fn check_resolution(resolution: usize) -> Result<(), Self> {
        (resolution >= 2).then_some(()).ok_or(Self::BadResolution(resolution))
    }

    pub(crate) fn check_epsilon(epsilon: f64) -> Result<(), Self> {
        (epsilon > 0.0).then_some(()).ok_or(Self::BadEpsilon(epsilon))
    }

    pub(crate) fn check_maxiters(maxiters: usize) -> Result<(), Self> {
        (maxiters != 0).then_some(()).ok_or(Self::BadMaxiters(maxiters))
    }

    pub(crate) fn check_fem_nodes(n: usize) -> Result<(), Self> {
        (n >= 3).then_some(()).ok_or(Self::FemTooFewNodes(n))
    }

    pub(crate) fn check_fem_states(requested: usize, available: usize)
        -> Result<(), Self>
    {
        (requested >= 1 && requested <= available)
            .then_some(())
            .ok_or(Self::FemTooManyStates { requested, available })
    }
}
