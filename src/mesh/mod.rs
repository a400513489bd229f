//! Mesh buffer generation for a tessellated sphere
//!
//! Generates engine-agnostic mesh data from the leaf triangle list.

use crate::sphere::TessellatedSphere;
use crate::subdivide::TriangleShading;

/// Engine-agnostic mesh data output
///
/// Contains raw vertex data suitable for any rendering engine:
/// - Bevy: Convert to `Mesh` with attributes
/// - Godot: Convert to `ArrayMesh`
/// - wgpu: Use directly as vertex buffers
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions (3D coordinates)
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals (unit length)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Generate render buffers from a tessellated sphere
///
/// Vertices are not shared between triangles: flat-shaded triangles carry
/// their own copy of the face normal at each corner, so adjacent triangles
/// must not share vertex entries. Indices are therefore sequential.
pub fn generate_mesh(sphere: &TessellatedSphere) -> MeshData {
    let mut mesh = MeshData::default();
    mesh.positions.reserve(sphere.triangle_count() * 3);
    mesh.normals.reserve(sphere.triangle_count() * 3);
    mesh.indices.reserve(sphere.triangle_count() * 3);

    for triangle in sphere.triangles() {
        let base = mesh.positions.len() as u32;

        for (i, vertex) in triangle.vertices.iter().enumerate() {
            let normal = match triangle.shading {
                TriangleShading::Flat(normal) => normal,
                TriangleShading::PerVertex(normals) => normals[i],
            };
            mesh.positions
                .push([vertex.x as f32, vertex.y as f32, vertex.z as f32]);
            mesh.normals
                .push([normal.x as f32, normal.y as f32, normal.z as f32]);
        }

        mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PlatonicSolid, SphereConfigBuilder};

    fn sphere(depth: u32, flat: bool) -> TessellatedSphere {
        let config = SphereConfigBuilder::new()
            .solid(PlatonicSolid::Icosahedron)
            .depth(depth)
            .unwrap()
            .flat_shading(flat)
            .build()
            .unwrap();
        TessellatedSphere::generate(config)
    }

    #[test]
    fn test_generate_mesh() {
        let sphere = sphere(2, false);
        let mesh = generate_mesh(&sphere);

        assert!(!mesh.is_empty());
        assert_eq!(mesh.vertex_count(), sphere.triangle_count() * 3);
        assert_eq!(mesh.triangle_count(), sphere.triangle_count());
        assert_eq!(mesh.positions.len(), mesh.normals.len());
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn test_mesh_indices_sequential() {
        let mesh = generate_mesh(&sphere(1, false));
        for (i, index) in mesh.indices.iter().enumerate() {
            assert_eq!(*index as usize, i);
        }
    }

    #[test]
    fn test_mesh_normals_unit_length() {
        for flat in [false, true] {
            let mesh = generate_mesh(&sphere(2, flat));
            for normal in &mesh.normals {
                let length =
                    (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2]).sqrt();
                assert!((length - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_flat_mesh_replicates_face_normal() {
        let mesh = generate_mesh(&sphere(1, true));
        for corner_normals in mesh.normals.chunks(3) {
            assert_eq!(corner_normals[0], corner_normals[1]);
            assert_eq!(corner_normals[1], corner_normals[2]);
        }
    }

    #[test]
    fn test_mesh_consistency() {
        let sphere = sphere(2, false);

        // Generate twice with same input
        let mesh1 = generate_mesh(&sphere);
        let mesh2 = generate_mesh(&sphere);

        assert_eq!(mesh1.vertex_count(), mesh2.vertex_count());
        assert_eq!(mesh1.positions, mesh2.positions);
        assert_eq!(mesh1.normals, mesh2.normals);
    }
}
