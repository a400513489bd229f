//! Tessellation configuration and builder
//!
//! This module provides the immutable configuration object consumed by the
//! mesh generator. A configuration is produced once from parsed arguments (or
//! builder calls) and then only ever read.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SphereError};

/// Hard upper bound on the subdivision depth.
///
/// Triangle count grows as 4^depth per seed face, so depth 7 and beyond risk
/// exhausting memory and frame time on commodity hardware. At depth 6 an
/// icosahedron already yields 81,920 triangles.
pub const MAX_DEPTH: u32 = 6;

/// The regular polyhedron used as the subdivision seed
///
/// Each solid is a fixed set of triangles with circumradius 1 centered at the
/// origin; deeper subdivision approaches the unit sphere from any of them.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatonicSolid {
    /// 4 seed faces; the coarsest starting point
    Tetrahedron,
    /// 8 seed faces
    Octahedron,
    /// 20 seed faces; the most uniform sphere approximation (default)
    Icosahedron,
}

impl PlatonicSolid {
    /// Number of triangular faces in the seed polyhedron
    pub fn seed_face_count(self) -> usize {
        match self {
            PlatonicSolid::Tetrahedron => 4,
            PlatonicSolid::Octahedron => 8,
            PlatonicSolid::Icosahedron => 20,
        }
    }

    /// Get a human-readable name for this solid
    pub fn name(self) -> &'static str {
        match self {
            PlatonicSolid::Tetrahedron => "Tetrahedron",
            PlatonicSolid::Octahedron => "Octahedron",
            PlatonicSolid::Icosahedron => "Icosahedron",
        }
    }

    /// Map a numeric selector (0, 1, 2) to a solid
    ///
    /// This is the mapping used by command-line front ends: 0 = tetrahedron,
    /// 1 = octahedron, 2 = icosahedron.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSolid` for any other index.
    pub fn from_index(index: u32) -> Result<Self> {
        match index {
            0 => Ok(PlatonicSolid::Tetrahedron),
            1 => Ok(PlatonicSolid::Octahedron),
            2 => Ok(PlatonicSolid::Icosahedron),
            other => Err(SphereError::UnknownSolid(other)),
        }
    }

    /// The numeric selector for this solid (inverse of [`from_index`])
    ///
    /// [`from_index`]: PlatonicSolid::from_index
    pub fn index(self) -> u32 {
        match self {
            PlatonicSolid::Tetrahedron => 0,
            PlatonicSolid::Octahedron => 1,
            PlatonicSolid::Icosahedron => 2,
        }
    }

    /// Iterate over all three solids
    pub fn all() -> [PlatonicSolid; 3] {
        [
            PlatonicSolid::Tetrahedron,
            PlatonicSolid::Octahedron,
            PlatonicSolid::Icosahedron,
        ]
    }
}

impl Default for PlatonicSolid {
    fn default() -> Self {
        PlatonicSolid::Icosahedron
    }
}

/// Configuration for sphere tessellation
///
/// The same configuration always produces the identical triangle list; there
/// is no hidden state. Construct it through [`SphereConfigBuilder`], which
/// validates the subdivision depth.
///
/// # Example
///
/// ```rust
/// use platonic_sphere::*;
///
/// let config = SphereConfigBuilder::new()
///     .solid(PlatonicSolid::Octahedron)
///     .depth(3)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.expected_triangle_count(), 8 * 64);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SphereConfig {
    /// Seed polyhedron to subdivide
    pub solid: PlatonicSolid,

    /// Subdivision depth (0 to [`MAX_DEPTH`] inclusive)
    ///
    /// Depth 0 returns the seed polyhedron unmodified (apart from shading).
    /// Each additional level splits every triangle into four.
    pub depth: u32,

    /// Project subdivided vertices onto the unit sphere
    ///
    /// When false the vertices stay on the flat faces of the seed polyhedron,
    /// producing a faceted low-poly look, and every triangle carries a single
    /// geometric face normal.
    pub project_to_sphere: bool,

    /// Use one face normal per triangle instead of per-vertex normals
    ///
    /// Only meaningful when `project_to_sphere` is set; unprojected triangles
    /// are genuinely flat and always use a single normal.
    pub flat_shading: bool,
}

impl SphereConfig {
    /// Total number of leaf triangles this configuration will generate
    ///
    /// Exactly `seed_face_count * 4^depth`. The worst legal case is the
    /// icosahedron at depth 6: 20 * 4096 = 81,920 triangles.
    #[inline]
    pub fn expected_triangle_count(&self) -> usize {
        self.solid.seed_face_count() * 4usize.pow(self.depth)
    }
}

impl Default for SphereConfig {
    fn default() -> Self {
        SphereConfigBuilder::new().build().unwrap()
    }
}

/// Builder for creating a [`SphereConfig`] with validation
///
/// # Example
///
/// ```rust
/// use platonic_sphere::*;
///
/// // Use defaults: icosahedron, depth 2, projected, smooth shading
/// let config = SphereConfigBuilder::new().build().unwrap();
/// assert_eq!(config.depth, 2);
///
/// // Customize
/// let config = SphereConfigBuilder::new()
///     .solid(PlatonicSolid::Tetrahedron)
///     .depth(4)
///     .unwrap()
///     .flat_shading(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SphereConfigBuilder {
    solid: PlatonicSolid,
    depth: u32,
    project_to_sphere: bool,
    flat_shading: bool,
}

impl SphereConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - solid: Icosahedron
    /// - depth: 2
    /// - project_to_sphere: true
    /// - flat_shading: false
    pub fn new() -> Self {
        Self {
            solid: PlatonicSolid::default(),
            depth: 2,
            project_to_sphere: true,
            flat_shading: false,
        }
    }

    /// Set the seed polyhedron
    pub fn solid(mut self, solid: PlatonicSolid) -> Self {
        self.solid = solid;
        self
    }

    /// Set the subdivision depth
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if depth exceeds [`MAX_DEPTH`]. The bound is a
    /// safety limit, not a mathematical one: every level quadruples the
    /// triangle count.
    pub fn depth(mut self, depth: u32) -> Result<Self> {
        if depth > MAX_DEPTH {
            return Err(SphereError::InvalidConfig(format!(
                "subdivision depth must be <= {} (got {})",
                MAX_DEPTH, depth
            )));
        }
        self.depth = depth;
        Ok(self)
    }

    /// Enable or disable projection of vertices onto the unit sphere
    pub fn project_to_sphere(mut self, project: bool) -> Self {
        self.project_to_sphere = project;
        self
    }

    /// Enable or disable single-normal-per-triangle shading
    pub fn flat_shading(mut self, flat: bool) -> Self {
        self.flat_shading = flat;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SphereConfig> {
        Ok(SphereConfig {
            solid: self.solid,
            depth: self.depth,
            project_to_sphere: self.project_to_sphere,
            flat_shading: self.flat_shading,
        })
    }
}

impl Default for SphereConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
