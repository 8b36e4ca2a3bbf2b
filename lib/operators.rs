//! Discretized observables for a single particle on a uniform grid.
//!
//! All operators act on the row-major flattening of the grid, so the
//! operator for an axis is a Kronecker product placing the relevant 1D
//! matrix on that axis's slot and identities on the others; the factor
//! order follows the index order of the coordinate meshes in
//! [`grid`][crate::grid]. The kinetic-energy operator is the separable sum
//! of one such term per axis.

use num_complex::Complex64 as C64;
use crate::{
    error::OperatorError,
    grid::{ Dim, GridSpec },
    sparse::CsMat,
    units,
};

pub type OperatorResult<T> = Result<T, OperatorError>;

/// A single spinless particle, identified by its mass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SingleParticle {
    m: f64,
}

impl Default for SingleParticle {
    /// An electron.
    fn default() -> Self { Self { m: units::m_e } }
}

impl SingleParticle {
    /// Create a new particle of mass `m`, in electron masses.
    pub fn new(m: f64) -> OperatorResult<Self> {
        OperatorError::check_mass(m)?;
        Ok(Self { m })
    }

    /// Particle mass.
    pub fn mass(&self) -> f64 { self.m }

    /// Build the position and momentum operators and the identity over
    /// `grid`.
    ///
    /// Momentum along an axis is `-iħ` times the central-difference first
    /// derivative along that axis; position along an axis is the coordinate
    /// array on the diagonal. Both are Kronecker-expanded with identities on
    /// the remaining axes. The axis that varies fastest in the flat index
    /// takes the right-hand Kronecker slot, so in 2D
    /// `x̂ = I ⊗ diag(x)` and `p̂x = -iħ (I ⊗ D)` while `ŷ = diag(y) ⊗ I`
    /// and `p̂y = -iħ (D ⊗ I)`.
    ///
    /// Three-dimensional momentum and position operators are not
    /// implemented; requesting them returns
    /// [`OperatorError::UnsupportedDimensionality`] rather than a partial
    /// result.
    pub fn observables(&self, grid: &GridSpec) -> OperatorResult<Observables> {
        let n = grid.num_points();
        let mom = C64::new(0.0, -units::hbar);
        match grid.dim() {
            Dim::One => Ok(Observables {
                position: vec![CsMat::from_diag(&grid.axis_coords())],
                momentum: vec![derivative(grid).scaled_complex(mom)],
                identity: CsMat::eye(n),
            }),
            Dim::Two => {
                let eye: CsMat<f64> = CsMat::eye(n);
                let eye_c: CsMat<C64> = CsMat::eye(n);
                let r = CsMat::from_diag(&grid.axis_coords());
                let d = derivative(grid).scaled_complex(mom);
                Ok(Observables {
                    position: vec![eye.kron(&r), r.kron(&eye)],
                    momentum: vec![eye_c.kron(&d), d.kron(&eye_c)],
                    identity: eye.kron(&eye),
                })
            },
            Dim::Three => Err(OperatorError::UnsupportedDimensionality),
        }
    }

    /// Build the kinetic-energy operator `T̂` over `grid`.
    ///
    /// The 1D building block is the three-point finite-difference Laplacian
    /// scaled by `-ħ²/2` over `m dx²`; higher dimensions sum one Kronecker
    /// term per axis with identities on the remaining slots. Zero boundary
    /// values are implicit in the truncation of the stencil at the grid
    /// edges; no explicit boundary handling is performed.
    pub fn kinetic(&self, grid: &GridSpec) -> CsMat<f64> {
        let n = grid.num_points();
        let scale = -units::k / (self.m * grid.dx().powi(2));
        let T1 = CsMat::diags(n, n, &[(0, -2.0), (-1, 1.0), (1, 1.0)])
            .scaled(scale);
        match grid.dim() {
            Dim::One => T1,
            Dim::Two => {
                let eye: CsMat<f64> = CsMat::eye(n);
                T1.kron(&eye).add(&eye.kron(&T1))
            },
            Dim::Three => {
                let eye: CsMat<f64> = CsMat::eye(n);
                let eye2 = eye.kron(&eye);
                T1.kron(&eye2)
                    .add(&eye.kron(&T1.kron(&eye)))
                    .add(&eye2.kron(&T1))
            },
        }
    }
}

// central-difference first derivative, tridiag(-1, 0, +1) / 2dx
fn derivative(grid: &GridSpec) -> CsMat<f64> {
    let n = grid.num_points();
    CsMat::diags(n, n, &[(-1, -1.0), (1, 1.0)])
        .scaled((2.0 * grid.dx()).recip())
}

/// The observables of a single particle over one grid.
///
/// All matrices share the dimension [`GridSpec::size`] of the grid they
/// were built over; `position[k]` and `momentum[k]` act along axis `k` in
/// x, y order.
#[derive(Clone, Debug)]
pub struct Observables {
    /// Position operator along each axis (diagonal).
    pub position: Vec<CsMat<f64>>,
    /// Momentum operator along each axis.
    pub momentum: Vec<CsMat<C64>>,
    /// Identity operator of matching dimension.
    pub identity: CsMat<f64>,
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;

    fn grid(dim: Dim, n: usize, extent: f64) -> GridSpec {
        GridSpec::new(dim, n, extent).unwrap()
    }

    fn dot(a: &[f64], b: &[f64]) -> f64 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn rejects_bad_mass() {
        assert!(matches!(
            SingleParticle::new(-1.0),
            Err(OperatorError::BadMass(_)),
        ));
        assert!((SingleParticle::default().mass() - units::m_e).abs() < 1e-15);
    }

    #[test]
    fn operator_dimensions_match_grid() {
        let particle = SingleParticle::default();
        for (dim, size) in [(Dim::One, 6), (Dim::Two, 36)] {
            let g = grid(dim, 6, 3.0);
            let obs = particle.observables(&g).unwrap();
            assert_eq!(obs.position.len(), g.ndim());
            assert_eq!(obs.momentum.len(), g.ndim());
            assert_eq!(obs.identity.shape(), (size, size));
            for x in &obs.position { assert_eq!(x.shape(), (size, size)); }
            for p in &obs.momentum { assert_eq!(p.shape(), (size, size)); }
            assert_eq!(particle.kinetic(&g).shape(), (size, size));
        }
        // kinetic energy is defined in 3D even though momentum and position
        // are not
        let g = grid(Dim::Three, 4, 3.0);
        assert_eq!(particle.kinetic(&g).shape(), (64, 64));
    }

    #[test]
    fn unsupported_3d_observables() {
        let g = grid(Dim::Three, 4, 3.0);
        assert!(matches!(
            SingleParticle::default().observables(&g),
            Err(OperatorError::UnsupportedDimensionality),
        ));
    }

    #[test]
    fn identity_is_identity() {
        let g = grid(Dim::Two, 5, 2.0);
        let obs = SingleParticle::default().observables(&g).unwrap();
        assert_eq!(obs.identity.nnz(), 25);
        let id = obs.identity.to_dense();
        for i in 0..25 {
            for j in 0..25 {
                assert_eq!(id[[i, j]], if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn kinetic_is_symmetric() {
        let particle = SingleParticle::default();
        for dim in [Dim::One, Dim::Two, Dim::Three] {
            let g = grid(dim, 4, 2.0);
            let t = particle.kinetic(&g).to_dense();
            for i in 0..t.nrows() {
                for j in 0..t.ncols() {
                    assert!((t[[i, j]] - t[[j, i]]).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn momentum_is_anti_hermitian() {
        for dim in [Dim::One, Dim::Two] {
            let g = grid(dim, 5, 2.0);
            let obs = SingleParticle::default().observables(&g).unwrap();
            for p in &obs.momentum {
                let d = p.to_dense();
                for i in 0..d.nrows() {
                    for j in 0..d.ncols() {
                        // entries are purely imaginary, so anti-Hermiticity
                        // is antisymmetry of the underlying difference matrix
                        assert_eq!(d[[i, j]].re, 0.0);
                        assert!((d[[i, j]].im + d[[j, i]].im).abs() < 1e-12);
                    }
                }
            }
        }
    }

    #[test]
    fn position_is_diagonal_coordinate() {
        let g = grid(Dim::One, 8, 4.0);
        let obs = SingleParticle::default().observables(&g).unwrap();
        let x = obs.position[0].to_dense();
        let ax = g.axis_coords();
        for i in 0..8 {
            for j in 0..8 {
                let expected = if i == j { ax[i] } else { 0.0 };
                assert!((x[[i, j]] - expected).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn position_2d_matches_mesh() {
        let g = grid(Dim::Two, 4, 4.0);
        let obs = SingleParticle::default().observables(&g).unwrap();
        let x = obs.position[0].to_dense();
        let y = obs.position[1].to_dense();
        let ax = g.axis_coords();
        for i in 0..4 {
            for j in 0..4 {
                let flat = i * 4 + j;
                assert!((x[[flat, flat]] - ax[j]).abs() < 1e-15);
                assert!((y[[flat, flat]] - ax[i]).abs() < 1e-15);
            }
        }
    }

    #[test]
    fn momentum_axis_assignment_2d() {
        // differentiate the grid function f = x: exactly linear along the
        // fast mesh axis, constant along the slow one
        let n = 6;
        let g = grid(Dim::Two, n, 3.0);
        let obs = SingleParticle::default().observables(&g).unwrap();
        let ax = g.axis_coords();
        let f: Vec<C64> = (0..n * n).map(|r| C64::from(ax[r % n])).collect();
        let mut dfx = vec![C64::new(0.0, 0.0); n * n];
        let mut dfy = vec![C64::new(0.0, 0.0); n * n];
        obs.momentum[0].spmv(&f, &mut dfx);
        obs.momentum[1].spmv(&f, &mut dfy);
        let step = ax[1] - ax[0];
        let expected = C64::new(0.0, -units::hbar * step / g.dx());
        for i in 1..n - 1 {
            for j in 1..n - 1 {
                let r = i * n + j;
                assert!((dfx[r] - expected).norm() < 1e-12);
                assert!(dfy[r].norm() < 1e-12);
            }
        }
    }

    #[test]
    fn kinetic_1d_box_spectrum() {
        // 100 points over 30 Å, electron mass
        let n = 100;
        let g = grid(Dim::One, n, 30.0 * units::angstrom);
        let particle = SingleParticle::default();
        let T = particle.kinetic(&g);
        assert_eq!(T.shape(), (n, n));
        assert_eq!(T.nnz(), n + 2 * (n - 1));
        for (i, j, _) in T.iter() {
            assert!(i.abs_diff(j) <= 1);
        }
        // the exact eigenvectors of the truncated stencil are discrete sine
        // modes; their energies must track the analytic particle-in-a-box
        // spectrum (ħ²/2m)(kπ/L)² to within discretization error
        let L = g.extent();
        for k in 1..=3 {
            let v: Vec<f64> = (0..n)
                .map(|i| {
                    (k as f64 * PI * (i + 1) as f64 / (n + 1) as f64).sin()
                })
                .collect();
            let mut tv = vec![0.0; n];
            T.spmv(&v, &mut tv);
            let rayleigh = dot(&tv, &v) / dot(&v, &v);
            for i in 0..n {
                assert!((tv[i] - rayleigh * v[i]).abs() < 1e-9);
            }
            let analytic
                = units::k / particle.mass() * (k as f64 * PI / L).powi(2);
            assert!(
                ((rayleigh - analytic) / analytic).abs() < 0.03,
                "mode {}: discrete {:.6e} vs analytic {:.6e}",
                k, rayleigh, analytic,
            );
        }
    }

    #[test]
    fn kinetic_2d_separable_spectrum() {
        // the product of two 1D sine modes is an exact eigenvector with the
        // sum of the 1D energies
        let n = 8;
        let g = grid(Dim::Two, n, 4.0);
        let particle = SingleParticle::default();
        let T = particle.kinetic(&g);
        let mode_energy = |k: usize| {
            let theta = k as f64 * PI / (n + 1) as f64;
            2.0 * units::k / (particle.mass() * g.dx().powi(2))
                * (1.0 - theta.cos())
        };
        let (kx, ky) = (1, 2);
        let v: Vec<f64> = (0..n * n)
            .map(|r| {
                let (i, j) = (r / n, r % n);
                (ky as f64 * PI * (i + 1) as f64 / (n + 1) as f64).sin()
                    * (kx as f64 * PI * (j + 1) as f64 / (n + 1) as f64).sin()
            })
            .collect();
        let mut tv = vec![0.0; n * n];
        T.spmv(&v, &mut tv);
        let expected = mode_energy(kx) + mode_energy(ky);
        for r in 0..n * n {
            assert!((tv[r] - expected * v[r]).abs() < 1e-12);
        }
    }
}
