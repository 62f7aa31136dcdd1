use std::{ fs::File, path::PathBuf };
use anyhow::Result;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use qwell::{
    grid::Grid,
    plot,
    solve::{ self, Method, Solution },
    units,
};

// solve for eigenstates of the quantum harmonic oscillator with both methods
// and compare against the analytic levels n + 1/2 (ħ = m = ω = 1)

const N_POINTS: usize = 1201;
const N_STATES: usize = 6;

fn main() -> Result<()> {
    let grid = Grid::linspace(-6.0, 6.0, N_POINTS)?;
    let V = |x: f64| 0.5 * x * x;
    let v = grid.sample(V);

    let sols_mt: Vec<Solution> = solve::solve(
        &V,
        &grid,
        Method::Shooting {
            e_min: 0.0,
            e_max: N_STATES as f64,
            resolution: 400,
            epsilon: None,
            maxiters: None,
        },
        true,
    )?;
    let sols_fe: Vec<Solution>
        = solve::solve(&V, &grid, Method::FiniteElement { n_states: N_STATES }, true)?;

    println!("{} shooting solution(s) found", sols_mt.len());
    println!("{:>3} {:>12} {:>12} {:>12}", "n", "analytic", "shooting", "fem");
    for (n, (mt, fe)) in sols_mt.iter().zip(&sols_fe).enumerate() {
        println!(
            "{:>3} {:>12.6} {:>12.6}{} {:>12.6}",
            n,
            n as f64 + 0.5,
            mt.e,
            if mt.is_converged() { " " } else { "!" },
            fe.e,
        );
    }
    for sol in sols_mt.iter().filter(|s| !s.is_converged()) {
        println!(
            "WARNING: level at e = {:.6} exhausted its iteration budget \
            (residual {:.3e})",
            sol.e,
            sol.root.map(|r| r.residual).unwrap_or(f64::NAN),
        );
    }

    // the same well realized by an electron on a 1 nm length scale
    let uu = units::Units::from_mks(units::me, 1e-9);
    println!(
        "ground state for an electron at 1 nm: {:.3e} J",
        uu.from_nat_energy::<f64, f64>(sols_mt[0].e),
    );

    let e_mt: nd::Array1<f64> = sols_mt.iter().map(|sol| sol.e).collect();
    let e_fe: nd::Array1<f64> = sols_fe.iter().map(|sol| sol.e).collect();
    let wf_mt: nd::Array2<f64> = nd::stack(
        nd::Axis(0),
        &sols_mt.iter()
            .map(|sol| sol.wf.as_ref().unwrap().view())
            .collect::<Vec<_>>(),
    )?;
    let wf_fe: nd::Array2<f64> = nd::stack(
        nd::Axis(0),
        &sols_fe.iter()
            .map(|sol| sol.wf.as_ref().unwrap().view())
            .collect::<Vec<_>>(),
    )?;

    let outdir = PathBuf::from("output");
    std::fs::create_dir_all(&outdir)?;
    let mut npz = NpzWriter::new(File::create(outdir.join("qho.npz"))?);
    npz.add_array("x", grid.points())?;
    npz.add_array("v", &v)?;
    npz.add_array("e_mt", &e_mt)?;
    npz.add_array("wf_mt", &wf_mt)?;
    npz.add_array("e_fe", &e_fe)?;
    npz.add_array("wf_fe", &wf_fe)?;
    npz.finish()?;

    plot::eigen_plot(&outdir.join("qho_mt"), grid.points(), &v, &sols_mt, 0.5, 3)?;
    plot::eigen_plot(&outdir.join("qho_fe"), grid.points(), &v, &sols_fe, 0.5, 3)?;
    Ok(())
}
