//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! Every error here is fatal at this layer: there is no retry and no partial
//! result, and callers are expected to abort Hamiltonian construction on any
//! of them.
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;

/// Returned when a buffer does not have the length required by the grid it
/// is paired with.
#[derive(Debug, Error)]
#[error("encountered a buffer of length {0} where {1} was required")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check(got: usize, required: usize) -> Result<(), Self> {
        (got == required).then_some(()).ok_or(Self(got, required))
    }
}

/// Returned from [`GridSpec`][crate::grid::GridSpec] construction.
#[derive(Debug, Error)]
pub enum GridError {
    /// Returned when fewer than 2 grid points per axis are requested.
    #[error("grids must have at least 2 points per axis; got {0}")]
    BadNumPoints(usize),

    /// Returned when a non-positive spatial extent is encountered.
    #[error("spatial extents must be greater than 0; got {0}")]
    BadExtent(f64),
}

impl GridError {
    pub(crate) fn check_num_points(n: usize) -> Result<(), Self> {
        (n > 1).then_some(()).ok_or(Self::BadNumPoints(n))
    }

    pub(crate) fn check_extent(extent: f64) -> Result<(), Self> {
        (extent > 0.0).then_some(()).ok_or(Self::BadExtent(extent))
    }
}

/// Returned from operator-construction methods on
/// [`SingleParticle`][crate::operators::SingleParticle].
#[derive(Debug, Error)]
pub enum OperatorError {
    /// Returned when position or momentum operators are requested for a
    /// three-dimensional grid, for which their construction is not
    /// implemented.
    #[error("position and momentum operators are not implemented for 3D grids")]
    UnsupportedDimensionality,

    /// Returned when a non-positive particle mass is encountered.
    #[error("particle masses must be greater than 0; got {0}")]
    BadMass(f64),
}

impl OperatorError {
    pub(crate) fn check_mass(m: f64) -> Result<(), Self> {
        (m > 0.0).then_some(()).ok_or(Self::BadMass(m))
    }
}

/// Returned from
/// [`Eigenstates::decode`][crate::eigenstates::Eigenstates::decode].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// [`LengthError`]
    #[error("length error: {0}")]
    Length(#[from] LengthError),
}
