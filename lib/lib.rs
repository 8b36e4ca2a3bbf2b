#![allow(non_snake_case)]

//! Provides the discretized operators — position, momentum, kinetic energy —
//! for a single quantum particle on a uniform finite-difference grid in one,
//! two, or three spatial dimensions, along with conversion of raw
//! eigensolver output into physically normalized, labeled eigenstates.
//!
//! Operators are held as sparse matrices over the flattened grid;
//! multi-dimensional operators are assembled from one-dimensional building
//! blocks via Kronecker (tensor) products. Diagonalization itself is left to
//! an external sparse eigensolver: this crate builds the kinetic term of the
//! Hamiltonian, the caller adds a potential term and diagonalizes, and
//! [`Eigenstates::decode`][eigenstates::Eigenstates::decode] turns the
//! solver's output back into labeled wavefunctions.
//!
//! All quantities are expressed in Hartree atomic units; see [`units`] for
//! the conversion factors and [`docs`] for theoretical background.

pub mod error;
pub mod units;
pub mod sparse;
pub mod grid;
pub mod operators;
pub mod eigenstates;

pub mod docs;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
