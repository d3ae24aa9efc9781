//! Green-Gauss gradient and divergence.

use crate::field::{PatchField, PatchKind, ScalarField, TensorField, VectorField, VolField};
use crate::mesh::FvMesh;
use crate::tensor::{Tensor, Vector};

/// Value of `phi` on boundary face `i` of patch `patch_idx`.
///
/// `ZeroGradient` patches mirror the owner cell; everything else uses the
/// stored face value.
fn boundary_value<T: Copy>(mesh: &FvMesh, phi: &VolField<T>, patch_idx: usize, i: usize) -> T {
    let patch = &phi.boundary()[patch_idx];
    match patch.kind {
        PatchKind::ZeroGradient => phi.cells()[mesh.owner[mesh.patches[patch_idx].face(i)]],
        _ => patch.values[i],
    }
}

/// Wrap per-cell operator results in a field with owner-extrapolated
/// `Calculated` boundary patches.
fn calculated<T: Copy>(mesh: &FvMesh, name: &str, cells: Vec<T>) -> VolField<T> {
    let boundary = mesh
        .patches
        .iter()
        .map(|p| PatchField {
            kind: PatchKind::Calculated,
            values: (0..p.n_faces).map(|i| cells[mesh.owner[p.face(i)]]).collect(),
        })
        .collect();
    VolField::from_parts(name, cells, boundary)
}

/// Gradient of a scalar field: `∇φ`, a vector field.
pub fn grad_scalar(mesh: &FvMesh, phi: &ScalarField) -> VectorField {
    debug_assert_eq!(phi.cells().len(), mesh.n_cells);
    let mut acc = vec![Vector::zeros(); mesh.n_cells];

    for f in 0..mesh.n_interior_faces() {
        let (o, n) = (mesh.owner[f], mesh.neighbour[f]);
        let phi_f = 0.5 * (phi.cells()[o] + phi.cells()[n]);
        let flux = mesh.face_areas[f] * phi_f;
        acc[o] += flux;
        acc[n] -= flux;
    }
    for (pi, patch) in mesh.patches.iter().enumerate() {
        for i in 0..patch.n_faces {
            let f = patch.face(i);
            acc[mesh.owner[f]] += mesh.face_areas[f] * boundary_value(mesh, phi, pi, i);
        }
    }
    for (g, v) in acc.iter_mut().zip(&mesh.cell_volumes) {
        *g /= *v;
    }

    calculated(mesh, "grad", acc)
}

/// Gradient of a vector field: `(∇U)_ij = ∂U_j/∂x_i`, a tensor field.
pub fn grad_vector(mesh: &FvMesh, u: &VectorField) -> TensorField {
    debug_assert_eq!(u.cells().len(), mesh.n_cells);
    let mut acc = vec![Tensor::zeros(); mesh.n_cells];

    for f in 0..mesh.n_interior_faces() {
        let (o, n) = (mesh.owner[f], mesh.neighbour[f]);
        let u_f = 0.5 * (u.cells()[o] + u.cells()[n]);
        let flux = mesh.face_areas[f] * u_f.transpose();
        acc[o] += flux;
        acc[n] -= flux;
    }
    for (pi, patch) in mesh.patches.iter().enumerate() {
        for i in 0..patch.n_faces {
            let f = patch.face(i);
            let u_b = boundary_value(mesh, u, pi, i);
            acc[mesh.owner[f]] += mesh.face_areas[f] * u_b.transpose();
        }
    }
    for (g, v) in acc.iter_mut().zip(&mesh.cell_volumes) {
        *g /= *v;
    }

    calculated(mesh, "grad", acc)
}

/// Divergence of a vector field: `∇·u`, a scalar field.
pub fn div(mesh: &FvMesh, u: &VectorField) -> ScalarField {
    debug_assert_eq!(u.cells().len(), mesh.n_cells);
    let mut acc = vec![0.0; mesh.n_cells];

    for f in 0..mesh.n_interior_faces() {
        let (o, n) = (mesh.owner[f], mesh.neighbour[f]);
        let u_f = 0.5 * (u.cells()[o] + u.cells()[n]);
        let flux = mesh.face_areas[f].dot(&u_f);
        acc[o] += flux;
        acc[n] -= flux;
    }
    for (pi, patch) in mesh.patches.iter().enumerate() {
        for i in 0..patch.n_faces {
            let f = patch.face(i);
            let u_b = boundary_value(mesh, u, pi, i);
            acc[mesh.owner[f]] += mesh.face_areas[f].dot(&u_b);
        }
    }
    for (d, v) in acc.iter_mut().zip(&mesh.cell_volumes) {
        *d /= *v;
    }

    calculated(mesh, "div", acc)
}
