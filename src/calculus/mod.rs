//! Green-Gauss finite-volume calculus operators.
//!
//! All operators integrate face fluxes over each cell and normalize by the
//! cell volume:
//!
//! ∇φ_c   ≈ (1/V_c) Σ_f φ_f S_f
//! ∇·u_c  ≈ (1/V_c) Σ_f u_f · S_f
//! ∇²φ_c  ≈ (1/V_c) Σ_f |S_f| (φ_N − φ_O) / |d_ON|
//!
//! where S_f is the outward face area vector. Interior face values are
//! linearly interpolated; boundary faces use the stored patch values
//! (`ZeroGradient` patches mirror the owner cell). Results carry
//! `Calculated` patches with owner-cell extrapolated boundary values.

mod gradient;
mod laplacian;

pub use gradient::{div, grad_scalar, grad_vector};
pub use laplacian::laplacian;
