//! Gnuplot output for computed spectra.
//!
//! The presentation follows the usual bound-state figure: the potential drawn
//! once, with each eigenfunction scaled and offset vertically by its
//! eigenvalue so the level structure is visible at a glance. Unconverged
//! roots are labeled as such in the key so the figure itself surfaces where
//! the method broke down.
//!
//! Output is a plain-text `.dat` file (one gnuplot index block per curve) and
//! a ready-to-run `.gp` driver script; render with `gnuplot <base>.gp`.

use std::{
    fmt::Write as _,
    fs,
    path::Path,
};
use ndarray as nd;
use crate::{
    Arr1,
    error::{ LengthError, QResult },
    solve::Solution,
};

/// Format paired coordinate/value arrays as gnuplot-readable text, one
/// `x y` pair per line.
pub fn to_gnuplot_string<S, T>(x: &Arr1<S>, y: &Arr1<T>) -> String
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    x.iter().zip(y)
        .fold(String::new(), |mut acc, (xk, yk)| {
            let _ = writeln!(acc, "{xk:.9e} {yk:.9e}");
            acc
        })
}

/// Write the standard spectrum figure for a batch of solutions.
///
/// Creates `<base>.dat` holding the sampled potential (index 0) and each
/// eigenfunction as `scale * ψ + E` (indices 1..), and `<base>.gp` with plot
/// commands labeling every level `E_i` to `e_decimals` decimal places.
/// Solutions missing their wavefunction are skipped; present wavefunctions
/// must match the coordinate array in length.
pub fn eigen_plot<S>(
    base: &Path,
    x: &Arr1<S>,
    v: &Arr1<S>,
    sols: &[Solution],
    scale: f64,
    e_decimals: usize,
) -> QResult<()>
where S: nd::Data<Elem = f64>
{
    LengthError::check(x, v)?;
    for sol in sols.iter() {
        if let Some(wf) = sol.wf.as_ref() { LengthError::check(x, wf)?; }
    }
    let mut dat = String::new();
    dat.push_str("# index 0: x V(x)\n");
    dat.push_str(&to_gnuplot_string(x, v));
    let mut curves: Vec<(usize, String)> = Vec::new();
    for (i, sol) in sols.iter().enumerate() {
        let Some(wf) = sol.wf.as_ref() else { continue; };
        let offset = wf.mapv(|q| scale * q + sol.e);
        dat.push_str("\n\n");
        let _ = writeln!(dat, "# index {}: x {} * psi_{} + E_{}",
            curves.len() + 1, scale, i, i);
        dat.push_str(&to_gnuplot_string(x, &offset));
        let mut label = format!("E_{} = {:.*}", i, e_decimals, sol.e);
        if !sol.is_converged() { label.push_str(" (unconverged)"); }
        curves.push((i, label));
    }

    let dat_path = base.with_extension("dat");
    fs::write(&dat_path, dat)?;

    let dat_name = dat_path.file_name().unwrap_or_default().to_string_lossy();
    let mut gp = String::new();
    let _ = writeln!(gp, "set xlabel 'x'");
    let _ = writeln!(gp, "set ylabel 'psi_i + E_i'");
    let _ = writeln!(gp, "set key bottom left");
    let _ = writeln!(gp, "set terminal pngcairo size 900,600");
    let _ = writeln!(
        gp,
        "set output '{}'",
        base.with_extension("png")
            .file_name().unwrap_or_default().to_string_lossy(),
    );
    gp.push_str("plot \\\n");
    let _ = write!(gp, "    '{dat_name}' index 0 with lines title 'V(x)'");
    for (block, (_, label)) in curves.iter().enumerate() {
        let _ = write!(
            gp,
            ", \\\n    '{}' index {} with lines title '{}'",
            dat_name, block + 1, label,
        );
    }
    gp.push('\n');
    fs::write(base.with_extension("gp"), gp)?;
    Ok(())
}
