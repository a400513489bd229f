//! Recursive midpoint subdivision
//!
//! Splits each seed triangle into four children per level by connecting edge
//! midpoints, then emits leaf triangles with the shading the configuration
//! asks for. Each level quadruples the triangle count, so a seed face at
//! depth `n` yields exactly 4^n leaves.

use glam::DVec3;
use tracing::debug;

use crate::config::SphereConfig;
use crate::solids::seed_triangles;

/// Normals attached to a leaf triangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriangleShading {
    /// One normal shared by all three vertices (faceted look)
    Flat(DVec3),
    /// An independent normal per vertex (smooth look)
    PerVertex([DVec3; 3]),
}

/// A leaf triangle produced by the subdivision engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadedTriangle {
    /// Vertices in outward winding order
    pub vertices: [DVec3; 3],
    /// Face or per-vertex normals, depending on the shading mode
    pub shading: TriangleShading,
}

impl ShadedTriangle {
    /// Normal at vertex `i` (0..3); flat triangles report the face normal
    #[inline]
    pub fn normal_at(&self, i: usize) -> DVec3 {
        match self.shading {
            TriangleShading::Flat(normal) => normal,
            TriangleShading::PerVertex(normals) => normals[i],
        }
    }
}

/// Tessellate the configured solid into its full leaf triangle list
///
/// Produces `seed_face_count * 4^depth` triangles. The list is generated in
/// one pass and is meant to be computed once at startup; see
/// [`TessellatedSphere`](crate::TessellatedSphere) for the owning type.
pub fn tessellate(config: &SphereConfig) -> Vec<ShadedTriangle> {
    let mut triangles = Vec::with_capacity(config.expected_triangle_count());

    for seed in seed_triangles(config.solid) {
        subdivide(seed, 0, config, &mut triangles);
    }

    debug!(
        "tessellated {} at depth {}: {} triangles",
        config.solid.name(),
        config.depth,
        triangles.len()
    );
    triangles
}

/// Recursive midpoint subdivision of one triangle.
///
/// Depth is an explicit parameter with a hard terminal case at
/// `config.depth`, which the builder bounds at [`MAX_DEPTH`](crate::MAX_DEPTH),
/// so the recursion depth is bounded too.
fn subdivide(
    triangle: [DVec3; 3],
    depth: u32,
    config: &SphereConfig,
    out: &mut Vec<ShadedTriangle>,
) {
    if depth == config.depth {
        out.push(shade_leaf(triangle, config));
        return;
    }

    let [a, b, c] = triangle;
    let d = a.midpoint(b);
    let e = b.midpoint(c);
    let f = a.midpoint(c);

    subdivide([a, d, f], depth + 1, config, out);
    subdivide([d, b, e], depth + 1, config, out);
    subdivide([f, e, c], depth + 1, config, out);
    // The middle child is wound (F, D, E) to keep its siblings' orientation.
    subdivide([f, d, e], depth + 1, config, out);
}

/// Emit one leaf triangle with the configured shading.
fn shade_leaf(triangle: [DVec3; 3], config: &SphereConfig) -> ShadedTriangle {
    let [a, b, c] = triangle;

    if config.project_to_sphere {
        // Push the vertices onto the sphere surface.
        let a = a.normalize_or_zero();
        let b = b.normalize_or_zero();
        let c = c.normalize_or_zero();

        let shading = if config.flat_shading {
            TriangleShading::Flat(((a + b + c) / 3.0).normalize_or_zero())
        } else {
            // On the unit sphere the outward normal at a point is the point.
            TriangleShading::PerVertex([a, b, c])
        };
        ShadedTriangle {
            vertices: [a, b, c],
            shading,
        }
    } else {
        // Unprojected faces are genuinely flat; a single geometric normal
        // applies whatever the flat-shading flag says.
        let normal = (a - b).cross(b - c).normalize_or_zero();
        ShadedTriangle {
            vertices: triangle,
            shading: TriangleShading::Flat(normal),
        }
    }
}
