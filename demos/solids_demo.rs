//! Demonstration of the seed geometry for all three platonic solids

use platonic_sphere::*;

fn main() {
    for solid in PlatonicSolid::all() {
        let faces = seed_triangles(solid);
        println!("=== {} ({} faces) ===", solid.name(), faces.len());

        let mut max_norm_error: f64 = 0.0;
        let mut min_dot = f64::INFINITY;
        for face in &faces {
            for vertex in face {
                max_norm_error = max_norm_error.max((vertex.length() - 1.0).abs());
            }
            let [a, b, c] = *face;
            let outward = (b - a).cross(c - a).dot((a + b + c) / 3.0);
            min_dot = min_dot.min(outward);
        }

        println!("  max |vertex norm - 1|: {:.2e}", max_norm_error);
        println!(
            "  winding: {}",
            if min_dot > 0.0 { "all outward" } else { "INWARD FACE FOUND" }
        );

        for (i, [a, b, c]) in faces.iter().enumerate().take(4) {
            println!(
                "  face {}: ({:+.3} {:+.3} {:+.3}) ({:+.3} {:+.3} {:+.3}) ({:+.3} {:+.3} {:+.3})",
                i, a.x, a.y, a.z, b.x, b.y, b.z, c.x, c.y, c.z
            );
        }
        if faces.len() > 4 {
            println!("  ... {} more", faces.len() - 4);
        }
        println!();
    }
}
