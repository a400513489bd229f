//! Subdivided platonic solid sphere meshes
//!
//! Generates sphere-approximation triangle meshes by recursively subdividing
//! the faces of a regular polyhedron (tetrahedron, octahedron, or
//! icosahedron), optionally projecting the vertices onto the unit sphere.
//! The output is engine-agnostic vertex data, suitable for any renderer
//! (Bevy, Godot, wgpu, ...).
//!
//! # Quick Start
//!
//! ```rust
//! use platonic_sphere::*;
//!
//! // Configure the tessellation
//! let config = SphereConfigBuilder::new()
//!     .solid(PlatonicSolid::Icosahedron)
//!     .depth(3).unwrap()
//!     .build().unwrap();
//!
//! // Generate the triangle list once at startup
//! let sphere = TessellatedSphere::generate(config);
//!
//! // Produce render buffers
//! let mesh = generate_mesh(&sphere);
//! println!("Generated {} triangles", mesh.triangle_count());
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for the configuration types

// Modules
pub mod error;
pub mod config;
pub mod solids;
pub mod subdivide;
pub mod sphere;
pub mod mesh;
pub mod rotation;

// Re-export core types for convenience
pub use error::{SphereError, Result};
pub use config::{PlatonicSolid, SphereConfig, SphereConfigBuilder, MAX_DEPTH};
pub use solids::seed_triangles;
pub use subdivide::{tessellate, ShadedTriangle, TriangleShading};
pub use sphere::TessellatedSphere;
pub use mesh::{MeshData, generate_mesh};
pub use rotation::DragRotation;

// Re-export glam::DVec3 for convenience
pub use glam::DVec3;
