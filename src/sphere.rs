//! Tessellated sphere main structure

use crate::config::SphereConfig;
use crate::subdivide::{tessellate, ShadedTriangle};

/// A sphere approximation generated once from a [`SphereConfig`]
///
/// The full triangle list is computed at construction and is immutable for
/// the lifetime of the value; callers only ever read it. Regeneration means
/// constructing a new value from a new configuration.
///
/// # Examples
///
/// ```
/// use platonic_sphere::*;
///
/// let config = SphereConfigBuilder::new()
///     .depth(2)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let sphere = TessellatedSphere::generate(config);
/// assert_eq!(sphere.triangle_count(), 20 * 16);
/// ```
#[derive(Debug, Clone)]
pub struct TessellatedSphere {
    /// Configuration used to generate this sphere
    config: SphereConfig,

    /// All leaf triangles, in seed-face order
    triangles: Vec<ShadedTriangle>,
}

impl TessellatedSphere {
    /// Generate the full triangle list for `config`
    ///
    /// Infallible: the configuration is validated at build time, and the
    /// subdivision itself cannot fail for a valid configuration.
    pub fn generate(config: SphereConfig) -> Self {
        let triangles = tessellate(&config);
        Self { config, triangles }
    }

    /// Get the configuration used to generate this sphere
    #[inline]
    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    /// Get all leaf triangles as a slice
    #[inline]
    pub fn triangles(&self) -> &[ShadedTriangle] {
        &self.triangles
    }

    /// Get the number of leaf triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}
