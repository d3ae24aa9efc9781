//! Mesh representation.
//!
//! Provides the cell-centred unstructured finite-volume mesh that the
//! calculus operators and budget evaluators run on:
//! - face-addressed topology (owner/neighbour) with interior faces first
//! - boundary faces grouped into contiguous named patches
//! - a uniform hexahedral box builder for tests and examples

mod fv_mesh;

pub use fv_mesh::{FvMesh, Patch};
