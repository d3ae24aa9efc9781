//! Cell-centred volume fields with per-patch boundary values.

use crate::mesh::FvMesh;
use crate::tensor::{SymmTensor, Tensor, Vector};

/// How a patch's boundary values relate to the interior solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatchKind {
    /// Values derived from the interior (operator results, extrapolation)
    Calculated,
    /// Prescribed boundary values
    FixedValue,
    /// Zero normal gradient; values mirror the owner cell
    ZeroGradient,
}

/// Boundary values of a field on one patch.
#[derive(Clone, Debug, PartialEq)]
pub struct PatchField<T> {
    pub kind: PatchKind,
    /// One value per patch face, in patch-local face order
    pub values: Vec<T>,
}

/// A named field with one value per cell and boundary values on every patch.
#[derive(Clone, Debug, PartialEq)]
pub struct VolField<T> {
    name: String,
    cells: Vec<T>,
    boundary: Vec<PatchField<T>>,
}

pub type ScalarField = VolField<f64>;
pub type VectorField = VolField<Vector>;
pub type SymmTensorField = VolField<SymmTensor>;
pub type TensorField = VolField<Tensor>;

impl<T: Clone> VolField<T> {
    /// Build a field with the same value everywhere (cells and boundary).
    pub fn uniform(mesh: &FvMesh, name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            cells: vec![value.clone(); mesh.n_cells],
            boundary: mesh
                .patches
                .iter()
                .map(|p| PatchField {
                    kind: PatchKind::Calculated,
                    values: vec![value.clone(); p.n_faces],
                })
                .collect(),
        }
    }

    /// Sample a function of position at cell centres and boundary face
    /// centres. Boundary patches are marked `FixedValue` since the face
    /// values are exact.
    pub fn from_fn(mesh: &FvMesh, name: impl Into<String>, f: impl Fn(&Vector) -> T) -> Self {
        Self {
            name: name.into(),
            cells: mesh.cell_centres.iter().map(&f).collect(),
            boundary: mesh
                .patches
                .iter()
                .map(|p| PatchField {
                    kind: PatchKind::FixedValue,
                    values: (0..p.n_faces)
                        .map(|i| f(&mesh.face_centres[p.face(i)]))
                        .collect(),
                })
                .collect(),
        }
    }

    /// Construct from raw parts. Shapes must match the mesh the field will
    /// be used with.
    pub fn from_parts(name: impl Into<String>, cells: Vec<T>, boundary: Vec<PatchField<T>>) -> Self {
        Self {
            name: name.into(),
            cells,
            boundary,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Boundary values, one `PatchField` per mesh patch.
    #[inline]
    pub fn boundary(&self) -> &[PatchField<T>] {
        &self.boundary
    }

    #[inline]
    pub fn boundary_mut(&mut self) -> &mut [PatchField<T>] {
        &mut self.boundary
    }

    /// Apply `f` to every cell and boundary value, keeping patch kinds.
    pub fn map<U>(&self, name: impl Into<String>, f: impl Fn(&T) -> U) -> VolField<U> {
        VolField {
            name: name.into(),
            cells: self.cells.iter().map(&f).collect(),
            boundary: self
                .boundary
                .iter()
                .map(|p| PatchField {
                    kind: p.kind,
                    values: p.values.iter().map(&f).collect(),
                })
                .collect(),
        }
    }

    /// Combine two fields value-by-value. Patch kinds are taken from `self`.
    pub fn zip_with<U, V>(
        &self,
        other: &VolField<U>,
        name: impl Into<String>,
        f: impl Fn(&T, &U) -> V,
    ) -> VolField<V> {
        debug_assert_eq!(self.cells.len(), other.cells.len());
        debug_assert_eq!(self.boundary.len(), other.boundary.len());
        VolField {
            name: name.into(),
            cells: self
                .cells
                .iter()
                .zip(&other.cells)
                .map(|(a, b)| f(a, b))
                .collect(),
            boundary: self
                .boundary
                .iter()
                .zip(&other.boundary)
                .map(|(pa, pb)| {
                    debug_assert_eq!(pa.values.len(), pb.values.len());
                    PatchField {
                        kind: pa.kind,
                        values: pa
                            .values
                            .iter()
                            .zip(&pb.values)
                            .map(|(a, b)| f(a, b))
                            .collect(),
                    }
                })
                .collect(),
        }
    }

    /// Overwrite this field's values (cells, boundary values and kinds)
    /// with those of `src`, in place. The field keeps its name and its
    /// allocation identity, so existing references observe the update.
    pub fn assign(&mut self, src: &VolField<T>) {
        debug_assert_eq!(self.cells.len(), src.cells.len());
        debug_assert_eq!(self.boundary.len(), src.boundary.len());
        self.cells.clone_from_slice(&src.cells);
        for (dst, s) in self.boundary.iter_mut().zip(&src.boundary) {
            debug_assert_eq!(dst.values.len(), s.values.len());
            dst.kind = s.kind;
            dst.values.clone_from_slice(&s.values);
        }
    }
}
