//! Mesh-resident fields and the named-field registry.
//!
//! A [`VolField`] stores one value per cell plus per-patch boundary values;
//! the [`FieldRegistry`] is the shared, name-keyed store that base fields
//! are read from and derived fields are committed into.

mod registry;
mod volume_field;

pub use registry::{CommitOutcome, FieldData, FieldError, FieldKind, FieldRegistry};
pub use volume_field::{
    PatchField, PatchKind, ScalarField, SymmTensorField, TensorField, VectorField, VolField,
};
