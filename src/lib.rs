//! # tke-budget
//!
//! Turbulence-kinetic-energy transport-budget terms for time-averaged
//! flow fields on unstructured finite-volume meshes.
//!
//! This crate provides the building blocks for the budget evaluation:
//! - Fixed-size tensor values (vector, tensor, symmetric tensor)
//! - A cell-centred unstructured finite-volume mesh
//! - Volume fields with per-patch boundary values
//! - A named-field registry with overwrite-in-place commit semantics
//! - Green-Gauss calculus operators (gradient, divergence, Laplacian)
//! - The six budget-term evaluators and their driving loop

pub mod budget;
pub mod calculus;
pub mod field;
pub mod mesh;
pub mod tensor;

// Re-export main types for convenience
pub use budget::{
    base_fields, BudgetError, BudgetTerm, TkeBudget, TkeBudgetConfig, OUTPUT_PREFIX,
};
pub use calculus::{div, grad_scalar, grad_vector, laplacian};
pub use field::{
    CommitOutcome, FieldData, FieldError, FieldKind, FieldRegistry, PatchField, PatchKind,
    ScalarField, SymmTensorField, TensorField, VectorField, VolField,
};
pub use mesh::{FvMesh, Patch};
pub use tensor::{double_dot, SymmTensor, Tensor, Vector};
