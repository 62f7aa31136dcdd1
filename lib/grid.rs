//! Uniform coordinate grids.

use ndarray as nd;
use crate::error::{ QError, QResult };

/// An ordered sequence of uniformly spaced spatial sample points.
///
/// Construction is validated up front: a `Grid` always holds at least two
/// points with finite, strictly ascending bounds, so its step size is always
/// positive and finite. Everything downstream relies on this and performs no
/// further checking.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    // sample points, ascending
    x: nd::Array1<f64>,
    // uniform spacing
    dx: f64,
}

impl Grid {
    /// Create a new `Grid` from "linspace-style" arguments (start, inclusive
    /// end, and an array length).
    pub fn linspace(start: f64, end: f64, n: usize) -> QResult<Self> {
        QError::check_bounds(start, end)?;
        QError::check_npoints(n)?;
        let x = nd::Array1::linspace(start, end, n);
        let dx = (end - start) / (n - 1) as f64;
        Ok(Self { x, dx })
    }

    /// Create a new `Grid` from "range-style" arguments (start, exclusive end,
    /// and a step size).
    pub fn range(start: f64, end: f64, dx: f64) -> QResult<Self> {
        QError::check_bounds(start, end)?;
        QError::check_step(dx)?;
        let x = nd::Array1::range(start, end, dx);
        QError::check_npoints(x.len())?;
        Ok(Self { x, dx })
    }

    /// Get a reference to the sample-point array.
    pub fn points(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the grid spacing.
    pub fn dx(&self) -> f64 { self.dx }

    /// Get the number of sample points.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.x.len() }

    /// Get the first sample point.
    pub fn first(&self) -> f64 { self.x[0] }

    /// Get the last sample point.
    pub fn last(&self) -> f64 { self.x[self.x.len() - 1] }

    /// Sample a potential function over all grid points.
    pub fn sample<F>(&self, V: F) -> nd::Array1<f64>
    where F: FnMut(f64) -> f64
    {
        self.x.mapv(V)
    }
}
