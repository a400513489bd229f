//! Seed geometry for the three platonic solids
//!
//! Each solid is returned as a fixed list of triangles with circumradius
//! exactly 1, centered at the origin. Winding order is chosen so that face
//! normals point outward, which downstream backface culling and lighting
//! rely on.
//!
//! The coordinates are closed-form values (the icosahedron from the golden
//! ratio construction). They are evaluated in plain functions only because
//! `f64::sqrt` is not const-evaluable; nothing here is runtime-tunable.

use glam::DVec3;

use crate::config::PlatonicSolid;

/// Get the seed triangles for the given solid
///
/// # Example
///
/// ```rust
/// use platonic_sphere::{seed_triangles, PlatonicSolid};
///
/// let faces = seed_triangles(PlatonicSolid::Octahedron);
/// assert_eq!(faces.len(), 8);
/// ```
pub fn seed_triangles(solid: PlatonicSolid) -> Vec<[DVec3; 3]> {
    match solid {
        PlatonicSolid::Tetrahedron => tetrahedron(),
        PlatonicSolid::Octahedron => octahedron(),
        PlatonicSolid::Icosahedron => icosahedron(),
    }
}

fn faces_from(vertices: &[DVec3], faces: &[[usize; 3]]) -> Vec<[DVec3; 3]> {
    faces
        .iter()
        .map(|&[a, b, c]| [vertices[a], vertices[b], vertices[c]])
        .collect()
}

/// Regular tetrahedron: four alternate corners of a cube, scaled onto the
/// unit sphere. 4 faces.
fn tetrahedron() -> Vec<[DVec3; 3]> {
    let s = 1.0 / 3.0_f64.sqrt();
    let vertices = [
        DVec3::new(s, s, s),
        DVec3::new(s, -s, -s),
        DVec3::new(-s, s, -s),
        DVec3::new(-s, -s, s),
    ];
    faces_from(
        &vertices,
        &[[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]],
    )
}

/// Regular octahedron: the six axis unit vectors. 8 faces, one per octant.
fn octahedron() -> Vec<[DVec3; 3]> {
    let vertices = [
        DVec3::X,
        DVec3::NEG_X,
        DVec3::Y,
        DVec3::NEG_Y,
        DVec3::Z,
        DVec3::NEG_Z,
    ];
    faces_from(
        &vertices,
        &[
            [4, 0, 2],
            [4, 2, 1],
            [4, 1, 3],
            [4, 3, 0],
            [5, 2, 0],
            [5, 1, 2],
            [5, 3, 1],
            [5, 0, 3],
        ],
    )
}

/// Regular icosahedron from the golden ratio construction: the corners of
/// three mutually orthogonal golden rectangles. 12 vertices, 20 faces.
fn icosahedron() -> Vec<[DVec3; 3]> {
    // Half-edge a and phi*a, scaled so every vertex has norm 1.
    let a = 2.0 / (10.0 + 2.0 * 5.0_f64.sqrt()).sqrt();
    let b = 0.5 * (1.0 + 5.0_f64.sqrt()) * a;

    let vertices = [
        DVec3::new(-a, 0.0, b),
        DVec3::new(a, 0.0, b),
        DVec3::new(-a, 0.0, -b),
        DVec3::new(a, 0.0, -b),
        DVec3::new(0.0, b, a),
        DVec3::new(0.0, b, -a),
        DVec3::new(0.0, -b, a),
        DVec3::new(0.0, -b, -a),
        DVec3::new(b, a, 0.0),
        DVec3::new(-b, a, 0.0),
        DVec3::new(b, -a, 0.0),
        DVec3::new(-b, -a, 0.0),
    ];
    faces_from(
        &vertices,
        &[
            [0, 1, 4],
            [0, 4, 9],
            [9, 4, 5],
            [4, 8, 5],
            [4, 1, 8],
            [8, 1, 10],
            [8, 10, 3],
            [5, 8, 3],
            [5, 3, 2],
            [2, 3, 7],
            [7, 3, 10],
            [7, 10, 6],
            [7, 6, 11],
            [11, 6, 0],
            [0, 6, 1],
            [6, 10, 1],
            [9, 11, 0],
            [9, 2, 11],
            [9, 5, 2],
            [7, 11, 2],
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const EPSILON: f64 = 1e-9;

    fn outward(face: &[DVec3; 3]) -> bool {
        let [a, b, c] = *face;
        let normal = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        normal.dot(centroid) > 0.0
    }

    #[test]
    fn test_seed_face_counts() {
        assert_eq!(seed_triangles(PlatonicSolid::Tetrahedron).len(), 4);
        assert_eq!(seed_triangles(PlatonicSolid::Octahedron).len(), 8);
        assert_eq!(seed_triangles(PlatonicSolid::Icosahedron).len(), 20);
    }

    #[test]
    fn test_seed_vertices_on_unit_sphere() {
        for solid in PlatonicSolid::all() {
            for face in seed_triangles(solid) {
                for vertex in face {
                    let norm = vertex.length();
                    assert!(
                        (norm - 1.0).abs() < EPSILON,
                        "{} vertex {:?} has norm {}",
                        solid.name(),
                        vertex,
                        norm
                    );
                }
            }
        }
    }

    #[test]
    fn test_seed_winding_outward() {
        for solid in PlatonicSolid::all() {
            for (i, face) in seed_triangles(solid).iter().enumerate() {
                assert!(
                    outward(face),
                    "{} face {} is wound inward",
                    solid.name(),
                    i
                );
            }
        }
    }

    #[test]
    fn test_seed_faces_nondegenerate() {
        for solid in PlatonicSolid::all() {
            for face in seed_triangles(solid) {
                let [a, b, c] = face;
                let area = 0.5 * (b - a).cross(c - a).length();
                assert!(area > 0.1, "{} has a degenerate face", solid.name());
            }
        }
    }

    /// Every directed edge must appear exactly once, and its reverse exactly
    /// once, for the faces to form a closed surface with consistent winding.
    #[test]
    fn test_seed_edges_closed_surface() {
        for solid in PlatonicSolid::all() {
            let mut edges: HashMap<([u64; 3], [u64; 3]), usize> = HashMap::new();
            let key = |v: DVec3| [v.x.to_bits(), v.y.to_bits(), v.z.to_bits()];

            for face in seed_triangles(solid) {
                let [a, b, c] = face;
                for (from, to) in [(a, b), (b, c), (c, a)] {
                    *edges.entry((key(from), key(to))).or_insert(0) += 1;
                }
            }

            for ((from, to), count) in &edges {
                assert_eq!(*count, 1, "{}: duplicated directed edge", solid.name());
                assert_eq!(
                    edges.get(&(*to, *from)),
                    Some(&1),
                    "{}: edge without opposite-winding partner",
                    solid.name()
                );
            }
        }
    }

    #[test]
    fn test_icosahedron_golden_ratio_constants() {
        let a = 2.0 / (10.0 + 2.0 * 5.0_f64.sqrt()).sqrt();
        let b = 0.5 * (1.0 + 5.0_f64.sqrt()) * a;

        // b/a is the golden ratio and a^2 + b^2 = 1
        let phi = 0.5 * (1.0 + 5.0_f64.sqrt());
        assert!((b / a - phi).abs() < EPSILON);
        assert!((a * a + b * b - 1.0).abs() < EPSILON);
    }
}
