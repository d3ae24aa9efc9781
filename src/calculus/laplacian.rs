//! Orthogonal two-point Laplacian.

use crate::field::{PatchField, PatchKind, ScalarField, VolField};
use crate::mesh::FvMesh;

/// Laplacian of a scalar field: `∇²φ`, a scalar field.
///
/// Uses the orthogonal two-point flux `|S_f| (φ_N − φ_O) / |d_ON|` across
/// interior faces and the one-sided equivalent on boundary faces.
/// `ZeroGradient` patches contribute no diffusive flux.
pub fn laplacian(mesh: &FvMesh, phi: &ScalarField) -> ScalarField {
    debug_assert_eq!(phi.cells().len(), mesh.n_cells);
    let mut acc = vec![0.0; mesh.n_cells];

    for f in 0..mesh.n_interior_faces() {
        let (o, n) = (mesh.owner[f], mesh.neighbour[f]);
        let dist = (mesh.cell_centres[n] - mesh.cell_centres[o]).norm();
        let flux = mesh.face_areas[f].norm() * (phi.cells()[n] - phi.cells()[o]) / dist;
        acc[o] += flux;
        acc[n] -= flux;
    }
    for (pi, patch) in mesh.patches.iter().enumerate() {
        let pf = &phi.boundary()[pi];
        if pf.kind == PatchKind::ZeroGradient {
            continue;
        }
        for i in 0..patch.n_faces {
            let f = patch.face(i);
            let o = mesh.owner[f];
            let dist = (mesh.face_centres[f] - mesh.cell_centres[o]).norm();
            acc[o] += mesh.face_areas[f].norm() * (pf.values[i] - phi.cells()[o]) / dist;
        }
    }
    for (l, v) in acc.iter_mut().zip(&mesh.cell_volumes) {
        *l /= *v;
    }

    let boundary = mesh
        .patches
        .iter()
        .map(|p| PatchField {
            kind: PatchKind::Calculated,
            values: (0..p.n_faces).map(|i| acc[mesh.owner[p.face(i)]]).collect(),
        })
        .collect();
    VolField::from_parts("laplacian", acc, boundary)
}
