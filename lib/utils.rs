//! Miscellaneous tools.

use ndarray::{ self as nd, Ix1 };
use crate::Arr1;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S>(y: &Arr1<S>, dx: f64) -> f64
where S: nd::Data<Elem = f64>
{
    let n: usize = y.len();
    (dx / 2.0) * (y[0] + 2.0 * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Calculate the norm of a wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S>(q: &Arr1<S>, dx: f64) -> f64
where S: nd::Data<Elem = f64>
{
    let n: usize = q.len();
    (dx / 2.0) * (
        q[0].powi(2)
        + 2.0 * q.iter().skip(1).take(n - 2).map(|qk| qk.powi(2)).sum::<f64>()
        + q[n - 1].powi(2)
    )
}

/// Calculate the inner product of two wavefunctions.
///
/// *Panics if either array has length less than 2*.
pub fn wf_dot<S, T>(q: &Arr1<S>, p: &Arr1<T>, dx: f64) -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let n: usize = q.len().min(p.len());
    (dx / 2.0) * (
        q[0] * p[0]
        + 2.0 * q.iter().zip(p).skip(1).take(n - 2)
            .map(|(qk, pk)| qk * pk)
            .sum::<f64>()
        + q[n - 1] * p[n - 1]
    )
}

/// Renormalize a wavefunction in place.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_renormalize<S>(q: &mut nd::ArrayBase<S, Ix1>, dx: f64)
where S: nd::DataMut<Elem = f64>
{
    let norm = wf_norm(q, dx).sqrt();
    q.iter_mut().for_each(|qk| { *qk /= norm; });
}

/// Return a normalized copy of a wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_normalized<S>(q: &Arr1<S>, dx: f64) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let norm = wf_norm(q, dx).sqrt();
    q.mapv(|qk| qk / norm)
}

/// Apply the sign convention: the first lobe of the wavefunction points up.
///
/// The sign of an eigenfunction is arbitrary; this flips the whole array if
/// the first element whose magnitude reaches 5% of the maximum is negative,
/// so repeated solves and different methods agree.
pub fn wf_fix_sign(q: nd::Array1<f64>) -> nd::Array1<f64> {
    let m: f64 = q.iter().fold(0.0, |acc, qk| acc.max(qk.abs()));
    let flip = q.iter()
        .find(|qk| qk.abs() >= 0.05 * m)
        .is_some_and(|qk| *qk < 0.0);
    if flip { -q } else { q }
}
