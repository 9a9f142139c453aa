use bevy::prelude::*;

use crate::scenario::ScenarioKind;

// --- Simulation Defaults ---
/// Gravitational constant.
pub const DEFAULT_G: f64 = 1.0;
/// Distance softening to prevent singularities.
pub const SOFTENING: f64 = 0.15;
/// Fixed integration step.
pub const SIM_DT: f64 = 0.005;
/// Integration sub-steps taken per rendered frame.
pub const STEPS_PER_FRAME: usize = 3;
/// Maximum stored points per trail.
pub const TRAIL_LENGTH: usize = 1500;
/// Bodies lighter than this are planets rather than stars.
pub const LIGHT_MASS_THRESHOLD: f64 = 0.1;
/// Distance from origin past which heavy bodies are pulled back.
pub const BOUNDARY_RADIUS: f64 = 2.5;
/// Spring constant of the soft boundary.
pub const RESTORING_STRENGTH: f64 = 0.05;
/// Per-frame easing rate of the camera filter.
pub const CAMERA_LERP: f64 = 0.05;
/// Camera scale (pixels per sim unit) before the first frame.
pub const INITIAL_CAMERA_SCALE: f64 = 150.0;
/// Nearest-neighbour distance under which a planet reads as scorching.
pub const HOT_DISTANCE: f64 = 0.5;
/// Nearest-neighbour distance under which a planet reads as temperate.
pub const WARM_DISTANCE: f64 = 1.2;

// --- Palette ---
pub const STAR_COLORS: [Color; 3] = [
    Color::srgb(1.0, 0.267, 0.267),
    Color::srgb(1.0, 0.843, 0.0),
    Color::srgb(1.0, 0.647, 0.0),
];
pub const PLANET_COLOR: Color = Color::srgb(0.267, 0.533, 1.0);
pub const HOT_COLOR: Color = Color::srgb(1.0, 0.267, 0.267);
pub const WARM_COLOR: Color = Color::srgb(0.867, 0.867, 1.0);

/// Numeric parameters of one simulation (forces, stepping, camera).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig {
    pub g: f64,
    pub softening: f64,
    pub dt: f64,
    pub steps_per_frame: usize,
    pub boundary_radius: f64,
    pub restoring_strength: f64,
    pub camera_lerp: f64,
    pub initial_camera_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            g: DEFAULT_G,
            softening: SOFTENING,
            dt: SIM_DT,
            steps_per_frame: STEPS_PER_FRAME,
            boundary_radius: BOUNDARY_RADIUS,
            restoring_strength: RESTORING_STRENGTH,
            camera_lerp: CAMERA_LERP,
            initial_camera_scale: INITIAL_CAMERA_SCALE,
        }
    }
}

/// User-facing toggles that drive rendering.
#[derive(Resource)]
pub struct SimSettings {
    pub show_trails: bool,
    pub show_info: bool,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            show_trails: true,
            show_info: false,
        }
    }
}

/// Scenario switch requested by the UI, applied at the start of the next frame.
#[derive(Resource, Default)]
pub struct ScenarioRequest {
    pub pending: Option<ScenarioKind>,
}
