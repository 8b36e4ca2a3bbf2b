//! Theoretical background.
//!
//! # Contents
//! - [Discretization](#discretization)
//! - [Tensor-product structure](#tensor-product-structure)
//! - [Units and normalization](#units-and-normalization)
//!
//! # Discretization
//! The time-independent Schrödinger equation for a single particle of mass
//! *m* in a potential *V*,
//! ```text
//!     ħ²
//! (- --- ∇² + V) ψ = E ψ
//!    2 m
//! ```
//! is discretized on a uniform grid of *N* points per axis spanning
//! `[-extent/2, extent/2]`. Derivative operators become banded matrices
//! acting on the flattened sample vector: the central-difference first
//! derivative
//! ```text
//!         ψ[i + 1] - ψ[i - 1]
//! ψ'[i] = -------------------
//!                2 δx
//! ```
//! is the antisymmetric tridiagonal matrix with ∓1 on the sub-/
//! super-diagonal, and the three-point Laplacian
//! ```text
//!          ψ[i + 1] - 2 ψ[i] + ψ[i - 1]
//! ψ''[i] = ----------------------------
//!                      δx²
//! ```
//! is the symmetric tridiagonal matrix with -2 on the diagonal and +1 on
//! both neighbors, each scaled by the appropriate power of the grid weight
//! *δx*. Both stencils have an *O*(*δx*²) error term[^1]. Samples outside
//! the grid are simply absent from the truncated stencil, which is
//! equivalent to pinning the wavefunction to zero just beyond both edges:
//! the spectrum of the bare kinetic operator is exactly that of a
//! particle-in-a-box whose walls sit one sample outside the grid.
//!
//! The momentum operator follows from the first derivative as
//! `p = -iħ ∂/∂x`; its discretization is anti-Hermitian up to the `-iħ`
//! prefactor, making the operator itself Hermitian, as an observable must
//! be. The position operator is the coordinate samples on the diagonal.
//!
//! # Tensor-product structure
//! A multi-dimensional grid is the Cartesian product of identical 1D grids,
//! flattened in row-major order, so an operator acting along a single axis
//! is the Kronecker product of the 1D operator on that axis's slot with
//! identities on all others. In 2D, with the first (slow) flat-index axis
//! called *y* and the second (fast) axis called *x*,
//! ```text
//! x̂ = I ⊗ diag(x)    p̂x = -iħ (I ⊗ D)
//! ŷ = diag(y) ⊗ I    p̂y = -iħ (D ⊗ I)
//! ```
//! and the Laplacian separates into one kinetic term per axis:
//! ```text
//! T = T₁ ⊗ I + I ⊗ T₁                          (2D)
//! T = T₁ ⊗ I ⊗ I + I ⊗ T₁ ⊗ I + I ⊗ I ⊗ T₁    (3D)
//! ```
//! Each Kronecker factor is sparse and the product preserves sparsity, so
//! the full *N*^ndim-dimensional operator stays a few-diagonals matrix and
//! is built directly in compressed form from whole batches of
//! `(row, col, value)` triplets.
//!
//! # Units and normalization
//! All construction happens in Hartree atomic units (`ħ = mₑ = e = 1`), in
//! which the kinetic prefactor `ħ²/2mₑ` is exactly 1/2 and lengths are Bohr
//! radii; see [`units`][crate::units] for the conversion factors.
//!
//! An eigensolver working on the bare matrices knows nothing about the grid
//! weight: it returns eigenvectors normalized in the discrete sense
//! ```text
//! Σᵢ |ψᵢ|² = 1
//! ```
//! while a physical wavefunction sampled on the grid must satisfy
//! ```text
//! Σᵢ |ψᵢ|² δx^ndim = 1
//! ```
//! so every decoded amplitude is divided by `√(δx^ndim)`. Energies come
//! back in Hartree and are converted to electron-volts for presentation.
//!
//! [^1]: Fornberg, "Generation of finite difference formulas on arbitrarily
//!       spaced grids," *Math. Comp.* **51**, 699-706 (1988).
