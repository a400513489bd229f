//! Interactive viewer for subdivided platonic solid spheres
//!
//! Controls:
//! - Mouse drag: rotate the sphere
//! - R: reset rotation
//! - F: filled, lit
//! - G: filled, unlit
//! - L: wireframe
//! - M: wireframe, double-sided
//! - Q / Escape: quit

use std::time::{Duration, Instant};

use bevy::input::mouse::MouseMotion;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::pbr::wireframe::{WireframeConfig, WireframePlugin};
use bevy::prelude::*;
use bevy::render::render_resource::Face;
use bevy::window::WindowResolution;
use bevy::winit::{UpdateMode, WinitSettings};
use clap::error::ErrorKind;
use clap::Parser;
use platonic_sphere::{
    generate_mesh, DragRotation, MeshData, PlatonicSolid, SphereConfig, SphereConfigBuilder,
    TessellatedSphere, MAX_DEPTH,
};

/// Render a rotatable subdivided platonic solid sphere
#[derive(Parser, Debug)]
#[command(name = "sphere_viewer")]
struct Args {
    /// Subdivision depth (0 to 6)
    #[arg(short = 'n', default_value_t = 2, allow_negative_numbers = true)]
    depth: i64,

    /// Platonic solid: 0 = tetrahedron, 1 = octahedron, 2 = icosahedron
    #[arg(short = 'p', default_value_t = 2, allow_negative_numbers = true)]
    solid: i64,

    /// Disable sphere projection (render the flat polyhedron facets)
    #[arg(short = 't')]
    no_projection: bool,

    /// Flat (single-normal-per-triangle) shading
    #[arg(short = 'f')]
    flat_shading: bool,
}

/// Parse command-line arguments into a validated configuration.
///
/// Out-of-range depth or solid values report to stderr and exit 0; an
/// unrecognized flag prints usage and exits 1; `-h` prints usage and exits 0.
fn parse_config() -> SphereConfig {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    if args.depth < 0 || args.depth > MAX_DEPTH as i64 {
        eprintln!("only 0 <= n <= {} allowed.", MAX_DEPTH);
        std::process::exit(0);
    }
    let solid = u32::try_from(args.solid)
        .ok()
        .and_then(|index| PlatonicSolid::from_index(index).ok());
    let Some(solid) = solid else {
        eprintln!("only 0 <= p <= 2 allowed.");
        std::process::exit(0);
    };

    match SphereConfigBuilder::new()
        .solid(solid)
        .depth(args.depth as u32)
        .and_then(|builder| {
            builder
                .project_to_sphere(!args.no_projection)
                .flat_shading(args.flat_shading)
                .build()
        }) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(0);
        }
    }
}

#[derive(Resource)]
struct ViewerConfig(SphereConfig);

#[derive(Resource)]
struct SphereRotation(DragRotation);

#[derive(Resource)]
struct SphereMaterial(Handle<StandardMaterial>);

#[derive(Component)]
struct SphereMesh;

fn main() {
    let config = parse_config();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Subdivided Sphere".to_string(),
                resolution: WindowResolution::new(640, 480),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(WireframePlugin::default())
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_millis(100)),
        })
        .insert_resource(WireframeConfig {
            global: false,
            default_color: Color::WHITE,
        })
        .insert_resource(ViewerConfig(config))
        .insert_resource(SphereRotation(DragRotation::new()))
        .add_systems(Startup, setup)
        .add_systems(Update, (drag_rotate, apply_rotation, handle_keys))
        .run();
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ViewerConfig>,
) {
    let start = Instant::now();
    let sphere = TessellatedSphere::generate(config.0);
    let mesh_data = generate_mesh(&sphere);
    info!(
        "{} at depth {}: {} triangles in {:?}",
        config.0.solid.name(),
        config.0.depth,
        mesh_data.triangle_count(),
        start.elapsed()
    );

    let mesh_handle = meshes.add(mesh_data_to_bevy_mesh(mesh_data));
    let material_handle = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.4,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh_handle),
        MeshMaterial3d(material_handle.clone()),
        Transform::IDENTITY,
        SphereMesh,
    ));
    commands.insert_resource(SphereMaterial(material_handle));

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            ..default()
        },
        Transform::from_xyz(4.0, 4.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        affects_lightmapped_meshes: false,
    });

    info!("=== Controls ===");
    info!("Mouse drag: rotate | R: reset rotation");
    info!("F: fill lit | G: fill unlit | L: wireframe | M: wireframe double-sided");
    info!("Q / Escape: quit");
}

fn mesh_data_to_bevy_mesh(mesh_data: MeshData) -> Mesh {
    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        bevy::asset::RenderAssetUsages::default(),
    );

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, mesh_data.positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, mesh_data.normals);
    mesh.insert_indices(Indices::U32(mesh_data.indices));

    mesh
}

fn drag_rotate(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: MessageReader<MouseMotion>,
    windows: Query<&Window>,
    mut rotation: ResMut<SphereRotation>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    if mouse_button.pressed(MouseButton::Left) {
        for motion in mouse_motion.read() {
            rotation.0.drag(
                f64::from(motion.delta.x),
                f64::from(motion.delta.y),
                f64::from(window.width()),
                f64::from(window.height()),
            );
        }
    } else {
        mouse_motion.clear();
    }
}

fn apply_rotation(
    rotation: Res<SphereRotation>,
    mut query: Query<&mut Transform, With<SphereMesh>>,
) {
    if !rotation.is_changed() {
        return;
    }
    let Ok(mut transform) = query.single_mut() else {
        return;
    };
    *transform = Transform::from_matrix(rotation.0.matrix().as_mat4());
}

fn handle_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut rotation: ResMut<SphereRotation>,
    mut wireframe: ResMut<WireframeConfig>,
    material_handle: Res<SphereMaterial>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        rotation.0.reset();
    }
    if keyboard.just_pressed(KeyCode::KeyQ) || keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }

    // Leave the material asset untouched unless a render-mode key fired.
    if !keyboard.any_just_pressed([KeyCode::KeyF, KeyCode::KeyG, KeyCode::KeyL, KeyCode::KeyM]) {
        return;
    }
    let Some(material) = materials.get_mut(&material_handle.0) else {
        return;
    };

    if keyboard.just_pressed(KeyCode::KeyF) {
        wireframe.global = false;
        material.unlit = false;
        material.cull_mode = Some(Face::Back);
    }
    if keyboard.just_pressed(KeyCode::KeyG) {
        wireframe.global = false;
        material.unlit = true;
        material.cull_mode = Some(Face::Back);
    }
    if keyboard.just_pressed(KeyCode::KeyL) {
        wireframe.global = true;
        material.cull_mode = Some(Face::Back);
    }
    if keyboard.just_pressed(KeyCode::KeyM) {
        wireframe.global = true;
        material.cull_mode = None;
    }
}
