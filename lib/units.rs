#![allow(non_upper_case_globals)]

//! Constants and conversion factors for the Hartree atomic unit system.
//!
//! All operator construction in this crate is performed in Hartree atomic
//! units (ħ = mₑ = e = 1); dimensionful quantities cross the crate boundary
//! only through the conversion factors below. Concrete values are derived
//! from CODATA 2018.

/// reduced Planck constant
pub const hbar: f64 = 1.0;
//                +/- 0 (exact by definition of the unit system)

/// electron mass
pub const m_e: f64 = 1.0;
//               +/- 0 (exact by definition of the unit system)

/// proton mass (electron masses)
pub const m_p: f64 = 1836.15267343;
//                       +/- 0.00000011

/// one angstrom (Bohr radii)
pub const angstrom: f64 = 1.8897261246257702;

/// one electron-volt (Hartree)
pub const eV: f64 = 0.03674932217565499;

/// one femtosecond (atomic time units)
pub const femtosecond: f64 = 41.341374575751;

/// kinetic-energy prefactor ħ²/2mₑ
pub const k: f64 = hbar * hbar / (2.0 * m_e);
