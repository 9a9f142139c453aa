use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::body::Body;
use crate::camera::Viewport;
use crate::components::BodySprite;
use crate::resources::{ScenarioRequest, SimSettings};
use crate::simulation::Simulation;

/// Bundled system params used when switching scenarios.
#[derive(SystemParam)]
pub struct ScenarioParams<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub meshes: ResMut<'w, Assets<Mesh>>,
    pub materials: ResMut<'w, Assets<ColorMaterial>>,
    pub simulation: ResMut<'w, Simulation>,
}

/// Spawns one circle per body, indexed into the simulation's body list.
pub fn spawn_body_sprites(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    bodies: &[Body],
) {
    for (index, body) in bodies.iter().enumerate() {
        let sprite = BodySprite::for_body(index, body);
        commands.spawn((
            Mesh2d(meshes.add(Circle::new(sprite.radius(body.mass)))),
            MeshMaterial2d(materials.add(ColorMaterial::from(body.color))),
            Transform::from_translation(Vec3::new(0.0, 0.0, sprite.depth())),
            sprite,
        ));
    }
}

/// Spawns the camera and sprites for the scenario installed at launch.
pub fn setup_scene(params: ScenarioParams) {
    let ScenarioParams {
        mut commands,
        mut meshes,
        mut materials,
        simulation,
    } = params;

    commands.spawn(Camera2d);
    spawn_body_sprites(
        &mut commands,
        &mut meshes,
        &mut materials,
        simulation.bodies(),
    );
}

fn primary_viewport(windows: &Query<&Window, With<PrimaryWindow>>) -> Option<Viewport> {
    let window = windows.single().ok()?;
    match Viewport::new(f64::from(window.width()), f64::from(window.height())) {
        Ok(viewport) => Some(viewport),
        Err(err) => {
            debug!("skipping frame: {err}");
            None
        }
    }
}

/// Swaps in the requested scenario and rebuilds the body sprites.
pub fn apply_scenario_request(
    params: ScenarioParams,
    mut request: ResMut<ScenarioRequest>,
    sprites: Query<Entity, With<BodySprite>>,
) {
    let Some(kind) = request.pending.take() else {
        return;
    };

    let ScenarioParams {
        mut commands,
        mut meshes,
        mut materials,
        mut simulation,
    } = params;

    if let Err(err) = simulation.set_scenario(kind) {
        error!("failed to start scenario {kind}: {err}");
        return;
    }

    for entity in sprites.iter() {
        commands.entity(entity).despawn();
    }
    spawn_body_sprites(
        &mut commands,
        &mut meshes,
        &mut materials,
        simulation.bodies(),
    );

    info!(
        "started scenario {kind} with {} bodies",
        simulation.bodies().len()
    );
}

/// Runs one frame of physics for the current window size and moves the sprites.
pub fn advance_simulation(
    mut simulation: ResMut<Simulation>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut sprites: Query<(&BodySprite, &mut Transform, &MeshMaterial2d<ColorMaterial>)>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let Some(viewport) = primary_viewport(&windows) else {
        return;
    };

    let frame = simulation.advance_frame(viewport);

    for (sprite, mut transform, material) in sprites.iter_mut() {
        let Some(body) = frame.bodies.get(sprite.index) else {
            continue;
        };
        transform.translation = frame
            .camera
            .to_world(body.position, viewport)
            .extend(sprite.depth());
        if body.is_light()
            && let Some(mat) = materials.get_mut(&material.0)
        {
            mat.color = body.color;
        }
    }
}

/// Draws motion trails for every body when enabled in settings.
pub fn draw_trails(
    mut gizmos: Gizmos,
    simulation: Res<Simulation>,
    settings: Res<SimSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if !settings.show_trails {
        return;
    }
    let Some(viewport) = primary_viewport(&windows) else {
        return;
    };

    let camera = simulation.camera();
    for body in simulation.bodies() {
        if body.trail.len() >= 2 {
            gizmos.linestrip_2d(
                body.trail
                    .iter()
                    .map(|point| camera.to_world(*point, viewport)),
                body.color.with_alpha(0.3),
            );
        }
    }
}

/// Faint glow around every body and a white ring around the planet.
pub fn draw_body_outlines(
    mut gizmos: Gizmos,
    simulation: Res<Simulation>,
    windows: Query<&Window, With<PrimaryWindow>>,
    sprites: Query<&BodySprite>,
) {
    let Some(viewport) = primary_viewport(&windows) else {
        return;
    };

    let camera = simulation.camera();
    for sprite in sprites.iter() {
        let Some(body) = simulation.bodies().get(sprite.index) else {
            continue;
        };
        let center = Isometry2d::from_translation(camera.to_world(body.position, viewport));
        gizmos.circle_2d(
            center,
            sprite.glow_radius(body.mass),
            body.color.with_alpha(0.15),
        );
        if let Some(radius) = sprite.outline_radius(body.mass) {
            gizmos.circle_2d(center, radius, Color::WHITE);
        }
    }
}
