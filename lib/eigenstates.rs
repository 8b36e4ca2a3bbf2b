//! Conversion of raw eigensolver output into labeled, physically normalized
//! eigenstates.
//!
//! An external sparse eigensolver hands back a batch of energies and a flat
//! buffer of eigenvectors normalized in the discrete sense (`Σ |ψᵢ|² = 1`).
//! [`Eigenstates::decode`] reshapes each eigenvector into a tensor over the
//! grid, moves the state index to the leading position, rescales amplitudes
//! so the grid-weighted norm `Σ |ψᵢ|² dx^ndim` is 1, and converts energies
//! to electron-volts.

use std::fmt;
use ndarray as nd;
use crate::{
    Arr1,
    error::{ DecodeError, LengthError },
    grid::{ Dim, GridSpec },
    units,
};

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Tag identifying the particle kind and dimensionality of a batch of
/// eigenstates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StateType {
    SingleParticle1D,
    SingleParticle2D,
    SingleParticle3D,
}

impl StateType {
    /// The tag as a plain string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleParticle1D => "SingleParticle1D",
            Self::SingleParticle2D => "SingleParticle2D",
            Self::SingleParticle3D => "SingleParticle3D",
        }
    }
}

impl From<Dim> for StateType {
    fn from(dim: Dim) -> Self {
        match dim {
            Dim::One => Self::SingleParticle1D,
            Dim::Two => Self::SingleParticle2D,
            Dim::Three => Self::SingleParticle3D,
        }
    }
}

impl fmt::Display for StateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A batch of solved eigenstates over one grid.
///
/// This is the terminal artifact of the pipeline, handed to analysis and
/// visualization code; nothing in this crate consumes it further.
#[derive(Clone, Debug)]
pub struct Eigenstates {
    /// State energies (eV), in the order returned by the solver.
    pub energies: nd::Array1<f64>,
    /// One tensor of shape `[n; ndim]` per state, in energy order.
    pub states: Vec<nd::ArrayD<f64>>,
    /// Physical width of the grid the states live on.
    pub extent: f64,
    /// Grid points per axis.
    pub n: usize,
    /// Particle kind and dimensionality.
    pub kind: StateType,
}

impl Eigenstates {
    /// Decode raw eigensolver output over `grid` into normalized, labeled
    /// eigenstates.
    ///
    /// `energies` holds `max_states` values in Hartree; `eigenvectors` is a
    /// flat buffer of `max_states` concatenated eigenvectors, each of
    /// length [`grid.size()`][GridSpec::size] and normalized in the
    /// discrete sense. Within one eigenvector, tensor index
    /// `(i₁, …, i_ndim)` corresponds to flat element
    /// `i₁·n^(ndim-1) + … + i_ndim`, matching the row-major flattening the
    /// operators are built over.
    pub fn decode<S>(
        grid: &GridSpec,
        max_states: usize,
        energies: &Arr1<S>,
        eigenvectors: &[f64],
    ) -> DecodeResult<Self>
    where S: nd::Data<Elem = f64>
    {
        let size = grid.size();
        LengthError::check(energies.len(), max_states)?;
        LengthError::check(eigenvectors.len(), size * max_states)?;
        let shape: Vec<usize> = vec![grid.num_points(); grid.ndim()];
        let weight = grid.dx().powi(grid.ndim() as i32).sqrt();
        let states: Vec<nd::ArrayD<f64>>
            = eigenvectors.chunks_exact(size)
            .map(|state| {
                nd::ArrayD::from_shape_vec(
                    nd::IxDyn(&shape),
                    state.iter().map(|q| q / weight).collect(),
                )
                .expect("chunk length matches the grid shape")
            })
            .collect();
        Ok(Self {
            energies: energies.mapv(|e| e / units::eV),
            states,
            extent: grid.extent(),
            n: grid.num_points(),
            kind: grid.dim().into(),
        })
    }

    /// Number of decoded states.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.states.len() }

    /// Grid-weighted norm `Σ |ψᵢ|² dx^ndim` of state `k`; 1 for a
    /// physically normalized state.
    ///
    /// *Panics if `k` is out of bounds.*
    pub fn norm(&self, k: usize) -> f64 {
        let state = &self.states[k];
        let weight
            = (self.extent / self.n as f64).powi(state.ndim() as i32);
        state.iter().map(|q| q * q).sum::<f64>() * weight
    }
}
