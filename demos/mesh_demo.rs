//! Demonstration of mesh generation

use platonic_sphere::*;

fn main() -> Result<()> {
    println!("Generating sphere mesh...");

    let config = SphereConfigBuilder::new()
        .solid(PlatonicSolid::Icosahedron)
        .depth(3)?
        .build()?;

    let sphere = TessellatedSphere::generate(config);
    let mesh = generate_mesh(&sphere);

    println!("\nMesh statistics:");
    println!("  Triangles: {}", mesh.triangle_count());
    println!("  Vertices: {}", mesh.vertex_count());
    println!("  Indices: {}", mesh.indices.len());

    // Memory estimate
    let mem_positions = mesh.positions.len() * 12; // 3 floats * 4 bytes
    let mem_normals = mesh.normals.len() * 12;
    let mem_indices = mesh.indices.len() * 4;
    let total = mem_positions + mem_normals + mem_indices;
    println!("\nMemory usage:");
    println!("  Positions: {} bytes", mem_positions);
    println!("  Normals: {} bytes", mem_normals);
    println!("  Indices: {} bytes", mem_indices);
    println!("  Total: {} bytes ({:.2} MB)", total, total as f32 / 1024.0 / 1024.0);

    // Flat-shaded variant of the same sphere
    let flat_config = SphereConfigBuilder::new()
        .solid(PlatonicSolid::Icosahedron)
        .depth(3)?
        .flat_shading(true)
        .build()?;
    let flat_mesh = generate_mesh(&TessellatedSphere::generate(flat_config));
    println!("\nFlat-shaded mesh: {} vertices", flat_mesh.vertex_count());

    // Unprojected polyhedron facets
    let facet_config = SphereConfigBuilder::new()
        .solid(PlatonicSolid::Icosahedron)
        .depth(3)?
        .project_to_sphere(false)
        .build()?;
    let facet_mesh = generate_mesh(&TessellatedSphere::generate(facet_config));
    println!("Unprojected facet mesh: {} triangles", facet_mesh.triangle_count());

    // All solids at every legal depth
    println!("\n=== Triangle counts per solid and depth ===");
    for solid in PlatonicSolid::all() {
        for depth in 0..=MAX_DEPTH {
            let config = SphereConfigBuilder::new()
                .solid(solid)
                .depth(depth)?
                .build()?;
            let sphere = TessellatedSphere::generate(config);

            println!(
                "{} depth {}: {} triangles",
                solid.name(),
                depth,
                sphere.triangle_count()
            );
        }
    }

    Ok(())
}
