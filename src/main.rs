mod body;
mod camera;
mod components;
mod error;
mod forces;
mod integrator;
mod resources;
mod scenario;
mod simulation;
mod systems;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};
use clap::Parser;

use crate::error::SimResult;
use crate::resources::{ScenarioRequest, SimSettings};
use crate::simulation::Simulation;
use crate::systems::*;

#[derive(Parser, Debug)]
#[command(about = "Three stars and a planet under softened gravity")]
struct Args {
    /// Scenario to start with: figure-eight or chaotic-triangle.
    #[arg(short, long, default_value = "figure-eight")]
    scenario: String,

    /// Seed for the chaotic scenario's perturbation; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> SimResult<()> {
    let args = Args::parse();
    let mut simulation = match args.seed {
        Some(seed) => Simulation::with_seed(seed),
        None => Simulation::default(),
    };
    simulation.set_scenario_by_name(&args.scenario)?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Three-Body Problem".into(),
                resolution: WindowResolution::new(1280, 800),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(simulation)
        .init_resource::<ScenarioRequest>()
        .init_resource::<SimSettings>()
        .add_systems(EguiPrimaryContextPass, ui_controls)
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                apply_scenario_request,
                advance_simulation,
                draw_trails,
                draw_body_outlines,
            )
                .chain(),
        )
        .run();

    Ok(())
}
