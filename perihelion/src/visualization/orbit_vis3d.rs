use bevy::prelude::*;
use bevy::log::LogPlugin;
use bevy::math::primitives::{Cuboid, Sphere};
use bevy::ecs::system::Local;
use log::info;

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec3;

/// Component tagging each sphere with its body index into the scenario's bodies
#[derive(Component)]
struct BodyIndex3(pub usize);

/// Orbit trail per planet, in world space
#[derive(Resource, Default)]
struct Trails(Vec<Vec<Vec3>>);

/// Distance of the camera from the origin along +Z
const CAMERA_DISTANCE: f32 = 1500.0;

/// Open a window and animate `scenario` until its end time
///
/// One integrator step runs per `FixedUpdate` tick at `engine.rate` Hz;
/// positions are copied to the spheres every frame.
pub fn run_3d(scenario: Scenario) {
    info!(
        "run_3d: starting Bevy 3D viewer with {} bodies at {} steps/s",
        scenario.markers.len(),
        scenario.engine.rate,
    );

    let planets = scenario.markers.len() - 1;

    App::new()
        .insert_resource(Time::<Fixed>::from_hz(scenario.engine.rate))
        .insert_resource(Trails(vec![Vec::new(); planets]))
        .insert_resource(scenario)
        // logging goes through env_logger
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .add_systems(Startup, setup_3d)
        .add_systems(FixedUpdate, physics_step_3d)
        .add_systems(Update, (sync_transforms_3d, draw_trails_3d))
        .run();
}

fn to_world(x: &NVec3, scale: f32) -> Vec3 {
    Vec3::new(x.x as f32, x.y as f32, x.z as f32) * scale
}

/// Startup system: spawn camera, light, and one sphere per body
fn setup_3d(mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scenario: Res<Scenario>,
) {
    // Looking down onto the orbital plane
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, -200.0, CAMERA_DISTANCE)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 1000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(100.0, 100.0, CAMERA_DISTANCE),
        ..Default::default()
    });

    spawn_axes(&mut commands, &mut meshes, &mut materials, scenario.engine.scale);

    let scale = scenario.engine.scale;
    let bodies = scenario.system.state.bodies();

    // Spawn one sphere per body, colored per marker
    for (i, (b, marker)) in bodies.iter().zip(scenario.markers.iter()).enumerate() {
        let [r, g, bl] = marker.color;

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(marker.radius as f32 * scale).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(r, g, bl),
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_translation(to_world(&b.x, scale)),
                ..Default::default()
            },
            BodyIndex3(i),
        ));
    }
}

/// Fixed-rate physics: record trail samples, then advance one step
fn physics_step_3d(
    mut scenario: ResMut<Scenario>,
    mut trails: ResMut<Trails>,
    mut finished: Local<bool>,
) {
    if scenario.is_finished() {
        if !*finished {
            info!("reached t_end = {} after simulated t = {:.3}", scenario.parameters.t_end, scenario.system.t);
            *finished = true;
        }
        return;
    }

    if scenario.engine.trail {
        let scale = scenario.engine.scale;
        let bodies = scenario.system.state.bodies();
        for (trail, b) in trails.0.iter_mut().zip(bodies.iter().skip(1)) {
            trail.push(to_world(&b.x, scale));
        }
    }

    scenario.advance();
}

fn sync_transforms_3d(
    scenario: Res<Scenario>,
    mut query: Query<(&BodyIndex3, &mut Transform)>,
) {
    let scale = scenario.engine.scale;
    let bodies = scenario.system.state.bodies();

    for (BodyIndex3(i), mut transform) in &mut query {
        if let Some(b) = bodies.get(*i) {
            transform.translation = to_world(&b.x, scale);
        }
    }
}

fn draw_trails_3d(trails: Res<Trails>, mut gizmos: Gizmos) {
    for trail in &trails.0 {
        gizmos.linestrip(trail.iter().copied(), Color::WHITE);
    }
}

// =========================================================================================
// Draw 3D axes for visual reference
// =========================================================================================

fn spawn_axes(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    scale: f32,
) {
    // Axis length and thickness, in *world* units
    let axis_len = 30.0 * scale;
    let axis_thickness = 0.009 * scale;

    let axes = [
        (Vec3::new(axis_len, axis_thickness, axis_thickness), Color::srgb(1.0, 0.0, 0.0)), // X, red
        (Vec3::new(axis_thickness, axis_len, axis_thickness), Color::srgb(0.0, 1.0, 0.0)), // Y, green
        (Vec3::new(axis_thickness, axis_thickness, axis_len), Color::srgb(0.0, 0.0, 1.0)), // Z, blue
    ];

    for (size, color) in axes {
        // Cuboid is centered at its transform origin, so this puts it crossing the world origin
        commands.spawn(PbrBundle {
            mesh: meshes.add(Cuboid::new(size.x, size.y, size.z).mesh()),
            material: materials.add(StandardMaterial {
                base_color: color,
                unlit: true,
                ..Default::default()
            }),
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..Default::default()
        });
    }
}
