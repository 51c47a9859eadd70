use glam::Vec3;

use crate::types::Vertex;

/// Creates the box field the viewer flies over
pub fn create_demo_scene() -> Vec<Vertex> {
    let mut mesh = Vec::new();

    // Ground slab
    push_box(
        &mut mesh,
        Vec3::new(-600.0, -2.0, -600.0),
        Vec3::new(600.0, 0.0, 600.0),
        [0.24, 0.3, 0.22],
    );

    // Tower grid (16x16 = 256 towers) with deterministic height variation
    let towers: Vec<(Vec3, Vec3, [f32; 3])> = (-8..8)
        .flat_map(|x: i32| {
            (-8..8).map(move |z: i32| {
                let fx = x as f32 * 60.0;
                let fz = z as f32 * 60.0;
                let height = 12.0 + (x * 13 + z * 7).rem_euclid(9) as f32 * 10.0;
                let color = [
                    ((x + 8) as f32 / 16.0) * 0.6 + 0.3,
                    0.4,
                    ((z + 8) as f32 / 16.0) * 0.6 + 0.3,
                ];
                (
                    Vec3::new(fx - 8.0, 0.0, fz - 8.0),
                    Vec3::new(fx + 8.0, height, fz + 8.0),
                    color,
                )
            })
        })
        .collect();

    for (min, max, color) in towers {
        push_box(&mut mesh, min, max, color);
    }

    // Floating markers above the field, a visual reference for altitude
    for i in 0..24 {
        let angle = i as f32 * std::f32::consts::TAU / 24.0;
        let center = Vec3::new(angle.cos() * 350.0, 140.0, angle.sin() * 350.0);
        let half = Vec3::splat(4.0);
        push_box(
            &mut mesh,
            center - half,
            center + half,
            [0.9, 0.8, 0.2],
        );
    }

    mesh
}

/// Append the twelve triangles of an axis-aligned box.
fn push_box(mesh: &mut Vec<Vertex>, min: Vec3, max: Vec3, color: [f32; 3]) {
    let corners = [
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(max.x, max.y, max.z),
        Vec3::new(min.x, max.y, max.z),
    ];

    // Two triangles per face; the pipeline does not cull, so winding is
    // free to favor readability.
    const FACES: [[usize; 4]; 6] = [
        [0, 1, 2, 3], // -z
        [5, 4, 7, 6], // +z
        [4, 0, 3, 7], // -x
        [1, 5, 6, 2], // +x
        [4, 5, 1, 0], // -y
        [3, 2, 6, 7], // +y
    ];

    for [a, b, c, d] in FACES {
        for index in [a, b, c, a, c, d] {
            mesh.push(Vertex::new(corners[index].to_array(), color));
        }
    }
}
