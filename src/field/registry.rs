//! Named-field registry: the shared store base fields are read from and
//! derived fields are committed into.
//!
//! The registry owns every field behind an `Rc<RefCell<..>>` handle.
//! Evaluation is single-threaded (one pass at a time, no internal
//! locking); the shared handle is what lets an in-place overwrite be
//! observed by anyone still holding a reference to the field.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use super::volume_field::{ScalarField, SymmTensorField, TensorField, VectorField};

/// The closed set of storable field types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    Vector,
    SymmTensor,
    Tensor,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::Scalar => "scalar",
            FieldKind::Vector => "vector",
            FieldKind::SymmTensor => "symmetric tensor",
            FieldKind::Tensor => "tensor",
        };
        write!(f, "{s}")
    }
}

/// A field of any storable type.
#[derive(Clone, Debug)]
pub enum FieldData {
    Scalar(ScalarField),
    Vector(VectorField),
    SymmTensor(SymmTensorField),
    Tensor(TensorField),
}

impl FieldData {
    #[inline]
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldData::Scalar(_) => FieldKind::Scalar,
            FieldData::Vector(_) => FieldKind::Vector,
            FieldData::SymmTensor(_) => FieldKind::SymmTensor,
            FieldData::Tensor(_) => FieldKind::Tensor,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FieldData::Scalar(f) => f.name(),
            FieldData::Vector(f) => f.name(),
            FieldData::SymmTensor(f) => f.name(),
            FieldData::Tensor(f) => f.name(),
        }
    }

    fn set_name(&mut self, name: &str) {
        match self {
            FieldData::Scalar(f) => f.set_name(name),
            FieldData::Vector(f) => f.set_name(name),
            FieldData::SymmTensor(f) => f.set_name(name),
            FieldData::Tensor(f) => f.set_name(name),
        }
    }

    /// In-place value assignment between two fields of the same kind.
    fn assign(&mut self, src: &FieldData) {
        match (self, src) {
            (FieldData::Scalar(d), FieldData::Scalar(s)) => d.assign(s),
            (FieldData::Vector(d), FieldData::Vector(s)) => d.assign(s),
            (FieldData::SymmTensor(d), FieldData::SymmTensor(s)) => d.assign(s),
            (FieldData::Tensor(d), FieldData::Tensor(s)) => d.assign(s),
            _ => unreachable!("assign requires matching field kinds"),
        }
    }
}

/// Error type for registry operations.
#[derive(Debug, Error)]
pub enum FieldError {
    /// A required base field is absent from the registry.
    #[error("required field '{0}' is not registered")]
    MissingField(String),

    /// A field exists under the name but with a different type.
    #[error("field '{name}' is a {found} field, expected {expected}")]
    TypeMismatch {
        name: String,
        expected: FieldKind,
        found: FieldKind,
    },

    /// Attempt to register a second field under an existing name.
    #[error("field '{0}' is already registered")]
    DuplicateField(String),
}

/// Result of committing a derived field into the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// No field existed under the name; a new entry was created.
    Created,
    /// A field of the same kind existed; its values were overwritten in
    /// place.
    Updated,
    /// A field of a different kind holds the name; nothing was mutated.
    Rejected { existing: FieldKind },
}

/// Name-keyed store of mesh-resident fields.
///
/// Iteration order (`names`) is registration order, so repeated passes
/// over the registry are reproducible.
#[derive(Default)]
pub struct FieldRegistry {
    fields: HashMap<String, Rc<RefCell<FieldData>>>,
    order: Vec<String>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a field under its own name. Registering a name twice is an
    /// error; use [`commit`](Self::commit) for overwrite semantics.
    pub fn register(&mut self, data: FieldData) -> Result<(), FieldError> {
        let name = data.name().to_string();
        if self.fields.contains_key(&name) {
            return Err(FieldError::DuplicateField(name));
        }
        self.order.push(name.clone());
        self.fields.insert(name, Rc::new(RefCell::new(data)));
        Ok(())
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Kind of the field stored under `name`, if any.
    pub fn kind_of(&self, name: &str) -> Option<FieldKind> {
        self.fields.get(name).map(|rc| rc.borrow().kind())
    }

    /// Shared handle to a stored field.
    pub fn get(&self, name: &str) -> Option<Rc<RefCell<FieldData>>> {
        self.fields.get(name).cloned()
    }

    /// Registered names in registration order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.order
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a scalar field, cloning its values out.
    pub fn scalar(&self, name: &str) -> Result<ScalarField, FieldError> {
        match &*self.entry(name)?.borrow() {
            FieldData::Scalar(f) => Ok(f.clone()),
            other => Err(self.mismatch(name, FieldKind::Scalar, other.kind())),
        }
    }

    /// Look up a vector field, cloning its values out.
    pub fn vector(&self, name: &str) -> Result<VectorField, FieldError> {
        match &*self.entry(name)?.borrow() {
            FieldData::Vector(f) => Ok(f.clone()),
            other => Err(self.mismatch(name, FieldKind::Vector, other.kind())),
        }
    }

    /// Look up a symmetric-tensor field, cloning its values out.
    pub fn symm_tensor(&self, name: &str) -> Result<SymmTensorField, FieldError> {
        match &*self.entry(name)?.borrow() {
            FieldData::SymmTensor(f) => Ok(f.clone()),
            other => Err(self.mismatch(name, FieldKind::SymmTensor, other.kind())),
        }
    }

    /// Look up a general tensor field, cloning its values out.
    pub fn tensor(&self, name: &str) -> Result<TensorField, FieldError> {
        match &*self.entry(name)?.borrow() {
            FieldData::Tensor(f) => Ok(f.clone()),
            other => Err(self.mismatch(name, FieldKind::Tensor, other.kind())),
        }
    }

    /// Commit a derived field under `name`.
    ///
    /// - no existing entry: store `data` (renamed to `name`) → `Created`
    /// - existing entry of the same kind: overwrite values in place
    ///   through the shared handle → `Updated`
    /// - existing entry of a different kind: leave it untouched →
    ///   `Rejected`
    pub fn commit(&mut self, name: &str, data: FieldData) -> CommitOutcome {
        if let Some(rc) = self.fields.get(name) {
            let mut existing = rc.borrow_mut();
            if existing.kind() == data.kind() {
                existing.assign(&data);
                CommitOutcome::Updated
            } else {
                CommitOutcome::Rejected {
                    existing: existing.kind(),
                }
            }
        } else {
            let mut data = data;
            data.set_name(name);
            self.order.push(name.to_string());
            self.fields
                .insert(name.to_string(), Rc::new(RefCell::new(data)));
            CommitOutcome::Created
        }
    }

    fn entry(&self, name: &str) -> Result<&Rc<RefCell<FieldData>>, FieldError> {
        self.fields
            .get(name)
            .ok_or_else(|| FieldError::MissingField(name.to_string()))
    }

    fn mismatch(&self, name: &str, expected: FieldKind, found: FieldKind) -> FieldError {
        FieldError::TypeMismatch {
            name: name.to_string(),
            expected,
            found,
        }
    }
}
