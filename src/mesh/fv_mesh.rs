//! Cell-centred unstructured finite-volume mesh.
//!
//! The mesh is face-addressed: every face stores its area vector, centre
//! and owner cell; interior faces additionally store a neighbour cell.
//! Face ordering convention:
//! - faces `0..n_interior_faces` are interior, area vector pointing from
//!   owner to neighbour
//! - boundary faces follow, grouped into contiguous patches, area vector
//!   pointing out of the domain
//!
//! This is the minimum geometry the Green-Gauss operators need: no point
//! or cell-shape information is kept.

use crate::tensor::Vector;

/// A contiguous range of boundary faces sharing a name.
#[derive(Clone, Debug)]
pub struct Patch {
    /// Patch name (e.g. "x_min")
    pub name: String,
    /// Index of the patch's first face in the global face list
    pub start: usize,
    /// Number of faces in the patch
    pub n_faces: usize,
}

impl Patch {
    /// Global face index of local patch face `i`.
    #[inline]
    pub fn face(&self, i: usize) -> usize {
        debug_assert!(i < self.n_faces);
        self.start + i
    }
}

/// Cell-centred unstructured mesh with face-addressed connectivity.
#[derive(Clone)]
pub struct FvMesh {
    /// Number of cells
    pub n_cells: usize,

    /// Face area vectors: interior faces point owner → neighbour,
    /// boundary faces point out of the domain
    pub face_areas: Vec<Vector>,

    /// Face centres
    pub face_centres: Vec<Vector>,

    /// Owner cell of each face
    pub owner: Vec<usize>,

    /// Neighbour cell of each interior face; `neighbour.len()` is the
    /// number of interior faces
    pub neighbour: Vec<usize>,

    /// Cell centres
    pub cell_centres: Vec<Vector>,

    /// Cell volumes (positive)
    pub cell_volumes: Vec<f64>,

    /// Boundary patches, covering faces `n_interior_faces()..n_faces()`
    pub patches: Vec<Patch>,
}

impl FvMesh {
    /// Total number of faces.
    #[inline]
    pub fn n_faces(&self) -> usize {
        self.face_areas.len()
    }

    /// Number of interior (two-cell) faces.
    #[inline]
    pub fn n_interior_faces(&self) -> usize {
        self.neighbour.len()
    }

    /// Number of boundary faces.
    #[inline]
    pub fn n_boundary_faces(&self) -> usize {
        self.n_faces() - self.n_interior_faces()
    }

    /// Look up a patch by name.
    pub fn patch(&self, name: &str) -> Option<&Patch> {
        self.patches.iter().find(|p| p.name == name)
    }

    /// Build a uniform hexahedral mesh of `nx * ny * nz` cells filling an
    /// axis-aligned box of extent `(lx, ly, lz)` with its corner at the
    /// origin.
    ///
    /// Six boundary patches are created, one per box side:
    /// `x_min`, `x_max`, `y_min`, `y_max`, `z_min`, `z_max`.
    pub fn uniform_box(nx: usize, ny: usize, nz: usize, lx: f64, ly: f64, lz: f64) -> Self {
        assert!(nx > 0 && ny > 0 && nz > 0, "mesh must have at least one cell per axis");
        assert!(lx > 0.0 && ly > 0.0 && lz > 0.0, "box extents must be positive");

        let (dx, dy, dz) = (lx / nx as f64, ly / ny as f64, lz / nz as f64);
        let n_cells = nx * ny * nz;
        let cell = |i: usize, j: usize, k: usize| i + nx * (j + ny * k);
        let centre = |i: usize, j: usize, k: usize| {
            Vector::new(
                (i as f64 + 0.5) * dx,
                (j as f64 + 0.5) * dy,
                (k as f64 + 0.5) * dz,
            )
        };

        let mut cell_centres = Vec::with_capacity(n_cells);
        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    cell_centres.push(centre(i, j, k));
                }
            }
        }
        let cell_volumes = vec![dx * dy * dz; n_cells];

        let mut face_areas = Vec::new();
        let mut face_centres = Vec::new();
        let mut owner = Vec::new();
        let mut neighbour = Vec::new();

        // Interior faces, x- then y- then z-normal.
        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx - 1 {
                    face_areas.push(Vector::new(dy * dz, 0.0, 0.0));
                    face_centres.push(Vector::new(
                        (i as f64 + 1.0) * dx,
                        (j as f64 + 0.5) * dy,
                        (k as f64 + 0.5) * dz,
                    ));
                    owner.push(cell(i, j, k));
                    neighbour.push(cell(i + 1, j, k));
                }
            }
        }
        for k in 0..nz {
            for j in 0..ny - 1 {
                for i in 0..nx {
                    face_areas.push(Vector::new(0.0, dx * dz, 0.0));
                    face_centres.push(Vector::new(
                        (i as f64 + 0.5) * dx,
                        (j as f64 + 1.0) * dy,
                        (k as f64 + 0.5) * dz,
                    ));
                    owner.push(cell(i, j, k));
                    neighbour.push(cell(i, j + 1, k));
                }
            }
        }
        for k in 0..nz - 1 {
            for j in 0..ny {
                for i in 0..nx {
                    face_areas.push(Vector::new(0.0, 0.0, dx * dy));
                    face_centres.push(Vector::new(
                        (i as f64 + 0.5) * dx,
                        (j as f64 + 0.5) * dy,
                        (k as f64 + 1.0) * dz,
                    ));
                    owner.push(cell(i, j, k));
                    neighbour.push(cell(i, j, k + 1));
                }
            }
        }

        // Boundary faces, one patch per box side.
        let mut patches = Vec::with_capacity(6);
        let mut start_patch = |name: &str, faces: &mut Vec<(Vector, Vector, usize)>| {
            let start = face_areas.len();
            for (area, fc, own) in faces.drain(..) {
                face_areas.push(area);
                face_centres.push(fc);
                owner.push(own);
            }
            patches.push(Patch {
                name: name.to_string(),
                start,
                n_faces: face_areas.len() - start,
            });
        };

        let mut faces = Vec::new();
        for k in 0..nz {
            for j in 0..ny {
                faces.push((
                    Vector::new(-dy * dz, 0.0, 0.0),
                    Vector::new(0.0, (j as f64 + 0.5) * dy, (k as f64 + 0.5) * dz),
                    cell(0, j, k),
                ));
            }
        }
        start_patch("x_min", &mut faces);
        for k in 0..nz {
            for j in 0..ny {
                faces.push((
                    Vector::new(dy * dz, 0.0, 0.0),
                    Vector::new(lx, (j as f64 + 0.5) * dy, (k as f64 + 0.5) * dz),
                    cell(nx - 1, j, k),
                ));
            }
        }
        start_patch("x_max", &mut faces);
        for k in 0..nz {
            for i in 0..nx {
                faces.push((
                    Vector::new(0.0, -dx * dz, 0.0),
                    Vector::new((i as f64 + 0.5) * dx, 0.0, (k as f64 + 0.5) * dz),
                    cell(i, 0, k),
                ));
            }
        }
        start_patch("y_min", &mut faces);
        for k in 0..nz {
            for i in 0..nx {
                faces.push((
                    Vector::new(0.0, dx * dz, 0.0),
                    Vector::new((i as f64 + 0.5) * dx, ly, (k as f64 + 0.5) * dz),
                    cell(i, ny - 1, k),
                ));
            }
        }
        start_patch("y_max", &mut faces);
        for j in 0..ny {
            for i in 0..nx {
                faces.push((
                    Vector::new(0.0, 0.0, -dx * dy),
                    Vector::new((i as f64 + 0.5) * dx, (j as f64 + 0.5) * dy, 0.0),
                    cell(i, j, 0),
                ));
            }
        }
        start_patch("z_min", &mut faces);
        for j in 0..ny {
            for i in 0..nx {
                faces.push((
                    Vector::new(0.0, 0.0, dx * dy),
                    Vector::new((i as f64 + 0.5) * dx, (j as f64 + 0.5) * dy, lz),
                    cell(i, j, nz - 1),
                ));
            }
        }
        start_patch("z_max", &mut faces);

        Self {
            n_cells,
            face_areas,
            face_centres,
            owner,
            neighbour,
            cell_centres,
            cell_volumes,
            patches,
        }
    }
}
