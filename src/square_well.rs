use std::{ f64::consts::PI, fs::File, path::PathBuf };
use anyhow::Result;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use qwell::{
    grid::Grid,
    plot,
    solve::{ self, Method, Solution },
};

// eigenstates of the infinite square well of width L, realized as a flat
// potential on [0, L] with hard-zero boundaries; analytic levels are
// n²π²/(2L²) for n = 1, 2, ... (ħ = m = 1)

const L: f64 = 1.0;
const N_POINTS: usize = 1001;
const N_STATES: usize = 3;

fn analytic(n: usize) -> f64 {
    (n as f64 * PI / L).powi(2) / 2.0
}

fn main() -> Result<()> {
    let grid = Grid::linspace(0.0, L, N_POINTS)?;
    let V = |_: f64| 0.0;
    let v = grid.sample(V);

    // scan up to 50 ħ²π²/(2mL²): room for the first seven levels
    let e_max = 50.0 * PI.powi(2) / (2.0 * L.powi(2));
    let sols_mt: Vec<Solution> = solve::solve(
        &V,
        &grid,
        Method::Shooting {
            e_min: 0.0,
            e_max,
            resolution: 2000,
            epsilon: None,
            maxiters: None,
        },
        true,
    )?;
    let sols_fe: Vec<Solution>
        = solve::solve(&V, &grid, Method::FiniteElement { n_states: N_STATES }, true)?;

    println!("{} shooting solution(s) found below e = {:.3}", sols_mt.len(), e_max);
    println!(
        "{:>3} {:>12} {:>12} {:>10} {:>12} {:>10}",
        "n", "analytic", "shooting", "rel err", "fem", "rel err",
    );
    for n in 0..N_STATES {
        let exact = analytic(n + 1);
        let mt = sols_mt.get(n);
        let fe = sols_fe.get(n);
        println!(
            "{:>3} {:>12.6} {:>12.6} {:>10.2e} {:>12.6} {:>10.2e}",
            n + 1,
            exact,
            mt.map(|s| s.e).unwrap_or(f64::NAN),
            mt.map(|s| (s.e - exact).abs() / exact).unwrap_or(f64::NAN),
            fe.map(|s| s.e).unwrap_or(f64::NAN),
            fe.map(|s| (s.e - exact).abs() / exact).unwrap_or(f64::NAN),
        );
    }
    for sol in sols_mt.iter().filter(|s| !s.is_converged()) {
        println!(
            "WARNING: level at e = {:.6} exhausted its iteration budget",
            sol.e,
        );
    }

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
    let mut npz = NpzWriter::new(File::create(outdir.join("square_well.npz"))?);
    npz.add_array("x", grid.points())?;
    npz.add_array("v", &v)?;
    npz.add_array("e_mt", &e_mt)?;
    npz.add_array("wf_mt", &wf_mt)?;
    npz.add_array("e_fe", &e_fe)?;
    npz.add_array("wf_fe", &wf_fe)?;
    npz.finish()?;

    plot::eigen_plot(
        &outdir.join("square_well_mt"), grid.points(), &v, &sols_mt, 8.0, 2)?;
    plot::eigen_plot(
        &outdir.join("square_well_fe"), grid.points(), &v, &sols_fe, 8.0, 2)?;
    Ok(())
}
