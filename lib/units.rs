#![allow(non_upper_case_globals)]

//! Convenience functions and constructs to handle minutiae associated with
//! conversion to and from naturalized units.
//!
//! All solvers in this crate work in natural units where [`HBAR`] and [`MASS`]
//! are both equal to 1, so the stationary Schrödinger equation reads
//! ```text
//! ψ″ = 2 (V(x) - E) ψ
//! ```
//! with the prefactor given by [`SCHRO_PREFACTOR`]. [`Units`] maps physical
//! systems into this convention and solver output back out of it.
//!
//! Concrete physical constants are taken from NIST.

use std::f64::consts::PI;

/// Reduced Planck constant in the solver's natural unit system.
pub const HBAR: f64 = 1.0;

/// Particle mass in the solver's natural unit system.
pub const MASS: f64 = 1.0;

/// Constant prefactor 2m/ħ² of the stationary Schrödinger equation in the
/// solver's natural unit system.
pub const SCHRO_PREFACTOR: f64 = 2.0 * MASS / (HBAR * HBAR);

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// speed of light in vacuum (m s^-1)
pub const c: f64 = 2.99792458e8;
//             +/- 0 (exact)

/// Boltzmann's constant (J K^-1)
pub const kB: f64 = 1.380649e-23;
//              +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// proton mass (kg)
pub const mp: f64 = 1.67262192369e-27;
//              +/- 0.00000000051e-27

/// unified atomic mass unit (kg)
pub const mu: f64 = 1.66053906660e-27;
//              +/- 0.00000000050e-27

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// Hartree energy (J)
pub const Eh: f64 = 4.3597447222071e-18;
//              +/- 0.0000000000085e-18

/// A collection of natural unit scaling factors relative to some base unit
/// system.
///
/// Constructor methods produce scaling constants whose numerical values are
/// represented in the base unit system. Dividing a physical length by `a` (or
/// a physical energy by `e`) yields its value in the solver's natural units;
/// multiplying converts back.
#[derive(Copy, Clone, Debug)]
pub struct Units {
    /// Particle mass.
    pub m: f64,
    /// Base length scale.
    pub a: f64,
    /// Associated energy scale.
    pub e: f64,
}

impl Units {
    /// Construct from a mass and length scale given in meters/kilograms/seconds
    /// (MKS) units.
    pub fn from_mks(mass: f64, a: f64) -> Self {
        let e_unit = hbar.powi(2) / 2.0 / mass / a.powi(2);
        Self { m: mass, a, e: e_unit }
    }

    /// Construct from a mass and length scale in atomic (Bohr radii/electron
    /// masses) units (AU).
    pub fn from_au(mass: f64, a: f64) -> Self {
        let m_si = me * mass;
        let a_si = a0 * a;
        let e_unit = hbar.powi(2) / 2.0 / m_si / a_si.powi(2) / Eh;
        Self { m: mass, a, e: e_unit }
    }

    /// Convert a quantity with dimensions of length in the base unit system to
    /// natural units.
    pub fn to_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a.recip()
    }

    /// Convert a dimensionless quantity to one with length units in the base
    /// unit system.
    pub fn from_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a
    }

    /// Convert a quantity with dimensions of energy in the base unit system to
    /// natural units.
    pub fn to_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e.recip()
    }

    /// Convert a dimensionless quantity to one with energy units in the base
    /// unit system.
    pub fn from_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use super::*;

    #[test]
    fn mks_energy_scale() {
        // harmonic-oscillator ground-state length for a 30 kHz ⁸⁷Rb trap;
        // the associated energy scale must be ħω/2
        let mass = 87.0 * mu;
        let freq = 2.0 * PI * 30e3;
        let a = (hbar / mass / freq).sqrt();
        let uu = Units::from_mks(mass, a);
        assert_relative_eq!(uu.e, hbar * freq / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn roundtrip() {
        let uu = Units::from_mks(me, 1e-9);
        let x: f64 = 3.25;
        let back: f64 = uu.to_nat_length::<f64, f64>(uu.from_nat_length(x));
        assert_relative_eq!(back, x, max_relative = 1e-15);
        let en: f64 = uu.from_nat_energy::<f64, f64>(uu.to_nat_energy(0.5));
        assert_relative_eq!(en, 0.5, max_relative = 1e-15);
    }
}
