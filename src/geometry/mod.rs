//! Procedural creature geometry
//!
//! Every builder is a pure function of its dimensions. Fish and shark bodies
//! are hand-authored unit-space tables scaled by half-length/height/width;
//! kelp is generated row by row.
//!
//! Local frame: +X is the nose (length), +Y up (height), +Z right (width).

pub mod fish;
pub mod kelp;
pub mod shark;
pub mod vertex;

pub use fish::fish_mesh;
pub use kelp::kelp_mesh;
pub use shark::shark_mesh;
pub use vertex::MeshVertex;

use glam::Vec3;

/// Triangulated surface with derived per-vertex normals
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    triangles: Vec<[u16; 3]>,
    normals: Vec<Vec3>,
}

impl Mesh {
    /// Build a mesh from positions and triangles, computing normals
    pub fn new(positions: Vec<Vec3>, triangles: Vec<[u16; 3]>) -> Self {
        let normals = compute_normals(&positions, &triangles);
        Self {
            positions,
            triangles,
            normals,
        }
    }

    /// Scale a unit-space vertex table anisotropically and build the mesh
    pub fn from_table(table: &[[f32; 3]], scale: Vec3, triangles: &[[u16; 3]]) -> Self {
        let positions = table.iter().map(|&p| Vec3::from(p) * scale).collect();
        Self::new(positions, triangles.to_vec())
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn triangles(&self) -> &[[u16; 3]] {
        &self.triangles
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Interleaved position + normal vertices
    pub fn vertices(&self) -> Vec<MeshVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(&p, &n)| MeshVertex::new(p, n))
            .collect()
    }

    /// Flattened triangle index list
    pub fn index_data(&self) -> Vec<u16> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Axis-aligned extent (min, max); zero for an empty mesh
    pub fn bounds(&self) -> (Vec3, Vec3) {
        if self.positions.is_empty() {
            return (Vec3::ZERO, Vec3::ZERO);
        }
        self.positions.iter().fold(
            (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
            |(lo, hi), &p| (lo.min(p), hi.max(p)),
        )
    }
}

/// Unnormalized face normal (length is twice the triangle area)
#[inline]
fn face_normal(positions: &[Vec3], tri: [u16; 3]) -> Vec3 {
    let p0 = positions[tri[0] as usize];
    let p1 = positions[tri[1] as usize];
    let p2 = positions[tri[2] as usize];
    (p1 - p0).cross(p2 - p0)
}

/// Area-weighted vertex normals
///
/// Double-sided fin pairs cancel out on vertices that belong only to the fin;
/// those take the normal of their first face instead. Unreferenced vertices
/// point up.
pub fn compute_normals(positions: &[Vec3], triangles: &[[u16; 3]]) -> Vec<Vec3> {
    let mut sums = vec![Vec3::ZERO; positions.len()];
    let mut first_face: Vec<Option<Vec3>> = vec![None; positions.len()];

    for &tri in triangles {
        let n = face_normal(positions, tri);
        for &i in &tri {
            let i = i as usize;
            sums[i] += n;
            if first_face[i].is_none() {
                first_face[i] = n.try_normalize();
            }
        }
    }

    sums.into_iter()
        .zip(first_face)
        .map(|(sum, first)| {
            sum.try_normalize()
                .filter(|_| sum.length_squared() > 1e-12)
                .or(first)
                .unwrap_or(Vec3::Y)
        })
        .collect()
}

/// Append the reversed copy of each triangle so both faces render
pub(crate) fn double_sided(triangles: &[[u16; 3]]) -> impl Iterator<Item = [u16; 3]> + '_ {
    triangles
        .iter()
        .flat_map(|&[a, b, c]| [[a, b, c], [a, c, b]])
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Mesh;

    /// Indices in range, unit normals, no degenerate faces
    pub fn assert_valid(mesh: &Mesh) {
        let n = mesh.vertex_count();
        assert_eq!(mesh.normals().len(), n);
        for tri in mesh.triangles() {
            for &i in tri {
                assert!((i as usize) < n, "index {i} out of range ({n} vertices)");
            }
            assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
        }
        for (i, normal) in mesh.normals().iter().enumerate() {
            assert!(
                (normal.length() - 1.0).abs() < 1e-4,
                "vertex {i} normal {normal:?} is not unit length"
            );
        }
    }
}
