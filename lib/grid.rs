//! Uniform coordinate grids for one, two, and three spatial dimensions.
//!
//! A [`GridSpec`] fixes the sampling of the cubic domain
//! `[-extent/2, extent/2]^ndim` once, at construction; the coordinate
//! arrays and every operator built over the grid are derived from it as
//! pure functions. For a single particle the configuration-space
//! dimensionality equals the spatial dimensionality, so [`GridSpec::ndim`]
//! is fixed by the chosen [`Dim`] and never rewritten afterwards.

use ndarray as nd;
use crate::error::GridError;

pub type GridResult<T> = Result<T, GridError>;

/// Spatial dimensionality of a grid.
///
/// The set of supported dimensionalities is closed: operator builders match
/// on this once per construction instead of re-branching on a raw integer,
/// and a malformed axis count is unrepresentable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dim {
    /// One spatial axis.
    One,
    /// Two spatial axes.
    Two,
    /// Three spatial axes.
    Three,
}

impl Dim {
    /// Number of spatial axes.
    pub fn ndim(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Convert from a raw axis count.
    pub fn from_ndim(ndim: usize) -> Option<Self> {
        match ndim {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }
}

/// Immutable parameters of a uniform finite-difference grid, shared by all
/// operator builders.
#[derive(Copy, Clone, Debug)]
pub struct GridSpec {
    n: usize,
    extent: f64,
    dx: f64,
    dim: Dim,
}

impl GridSpec {
    /// Create a new `GridSpec` sampling a width of `extent` Bohr radii along
    /// each of the chosen axes with `n` points per axis.
    ///
    /// The grid weight is fixed to `dx = extent / n`; this is the spacing
    /// used in all operator scalings and normalization weights.
    pub fn new(dim: Dim, n: usize, extent: f64) -> GridResult<Self> {
        GridError::check_num_points(n)?;
        GridError::check_extent(extent)?;
        Ok(Self { n, extent, dx: extent / n as f64, dim })
    }

    /// Number of grid points per axis.
    pub fn num_points(&self) -> usize { self.n }

    /// Physical width of the domain along each axis.
    pub fn extent(&self) -> f64 { self.extent }

    /// Grid spacing `extent / n`.
    pub fn dx(&self) -> f64 { self.dx }

    /// Spatial dimensionality.
    pub fn dim(&self) -> Dim { self.dim }

    /// Configuration-space dimensionality; equal to the spatial
    /// dimensionality for a single particle.
    pub fn ndim(&self) -> usize { self.dim.ndim() }

    /// Total dimension `n^ndim` of the flattened grid, shared by every
    /// operator matrix built over it.
    pub fn size(&self) -> usize { self.n.pow(self.ndim() as u32) }

    /// Coordinate samples along a single axis: `n` points spanning
    /// `[-extent/2, extent/2]`, endpoints included.
    pub fn axis_coords(&self) -> nd::Array1<f64> {
        nd::Array1::linspace(-self.extent / 2.0, self.extent / 2.0, self.n)
    }

    /// Generate the coordinate arrays for this grid.
    ///
    /// Arrays are recomputed on each call, not cached.
    pub fn coordinates(&self) -> Coordinates {
        let ax = self.axis_coords();
        let n = self.n;
        match self.dim {
            Dim::One => Coordinates::One { x: ax },
            Dim::Two => Coordinates::Two {
                x: nd::Array2::from_shape_fn((n, n), |(_, j)| ax[j]),
                y: nd::Array2::from_shape_fn((n, n), |(i, _)| ax[i]),
            },
            Dim::Three => Coordinates::Three {
                x: nd::Array3::from_shape_fn((n, n, n), |(i, _, _)| ax[i]),
                y: nd::Array3::from_shape_fn((n, n, n), |(_, j, _)| ax[j]),
                z: nd::Array3::from_shape_fn((n, n, n), |(_, _, k)| ax[k]),
            },
        }
    }
}

/// Coordinate arrays of a grid, one per spatial axis.
///
/// In 2D the arrays are mesh-expanded with `x` varying along the second
/// (column) axis and `y` along the first; in 3D each coordinate varies
/// along its own axis in index order. The row-major flat index of a mesh
/// point is the row of that point in every operator matrix built over the
/// same grid.
#[derive(Clone, Debug)]
pub enum Coordinates {
    One {
        x: nd::Array1<f64>,
    },
    Two {
        x: nd::Array2<f64>,
        y: nd::Array2<f64>,
    },
    Three {
        x: nd::Array3<f64>,
        y: nd::Array3<f64>,
        z: nd::Array3<f64>,
    },
}
