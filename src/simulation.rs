use bevy::prelude::Resource;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::body::{Body, update_light_colors};
use crate::camera::{CameraController, CameraTransform, Viewport};
use crate::error::SimResult;
use crate::forces::ForceField;
use crate::integrator::Integrator;
use crate::resources::SimConfig;
use crate::scenario::{ScenarioKind, validate_bodies};

/// What the renderer needs after a frame: the bodies and where to look.
pub struct Frame<'a> {
    pub bodies: &'a [Body],
    pub camera: CameraTransform,
}

/// One independent simulation: bodies, camera and random source.
#[derive(Resource)]
pub struct Simulation {
    bodies: Vec<Body>,
    scenario: Option<ScenarioKind>,
    field: ForceField,
    integrator: Integrator,
    camera: CameraController,
    rng: StdRng,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimConfig::default(), StdRng::from_os_rng())
    }
}

impl Simulation {
    pub fn new(config: SimConfig, rng: StdRng) -> Self {
        Self {
            bodies: Vec::new(),
            scenario: None,
            field: ForceField::from_config(&config),
            integrator: Integrator::from_config(&config),
            camera: CameraController::from_config(&config),
            rng,
        }
    }

    /// Reproducible simulation for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SimConfig::default(), StdRng::seed_from_u64(seed))
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn scenario(&self) -> Option<ScenarioKind> {
        self.scenario
    }

    pub fn camera(&self) -> CameraTransform {
        self.camera.transform()
    }

    /// Replaces every body with a fresh scenario. The camera is left as is.
    pub fn set_scenario(&mut self, kind: ScenarioKind) -> SimResult<()> {
        let bodies = kind.build(&mut self.rng)?;
        self.set_bodies(bodies)?;
        self.scenario = Some(kind);
        Ok(())
    }

    pub fn set_scenario_by_name(&mut self, name: &str) -> SimResult<()> {
        self.set_scenario(name.parse()?)
    }

    /// Installs a caller-built body list after validating it.
    pub fn set_bodies(&mut self, bodies: Vec<Body>) -> SimResult<()> {
        validate_bodies(&bodies)?;
        self.bodies = bodies;
        self.scenario = None;
        Ok(())
    }

    /// Sub-steps the physics, recolors planets and reframes the camera.
    pub fn advance_frame(&mut self, viewport: Viewport) -> Frame<'_> {
        self.integrator.advance_frame(&mut self.bodies, &self.field);
        update_light_colors(&mut self.bodies);
        let camera = self.camera.update(&self.bodies, viewport);
        Frame {
            bodies: &self.bodies,
            camera,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyClass;
    use crate::error::SimError;
    use crate::resources::{
        INITIAL_CAMERA_SCALE, PLANET_COLOR, STAR_COLORS, STEPS_PER_FRAME, TRAIL_LENGTH,
    };
    use bevy::math::{DVec2, dvec2};

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 720.0).expect("valid viewport")
    }

    #[test]
    fn new_simulation_is_empty_with_initial_camera() {
        let sim = Simulation::with_seed(0);
        assert!(sim.bodies().is_empty());
        assert_eq!(sim.scenario(), None);
        assert_eq!(sim.camera().scale, INITIAL_CAMERA_SCALE);
        assert_eq!(sim.camera().center, DVec2::ZERO);
    }

    #[test]
    fn figure_eight_is_deterministic() {
        let mut a = Simulation::with_seed(1);
        let mut b = Simulation::with_seed(2);
        a.set_scenario(ScenarioKind::FigureEight).expect("valid scenario");
        b.set_scenario(ScenarioKind::FigureEight).expect("valid scenario");

        for _ in 0..200 {
            a.advance_frame(viewport());
            b.advance_frame(viewport());
        }

        for (x, y) in a.bodies().iter().zip(b.bodies()) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.velocity, y.velocity);
            assert!(x.trail.iter().eq(y.trail.iter()));
        }
        assert_eq!(a.camera(), b.camera());
    }

    #[test]
    fn frame_reports_every_body_and_camera() {
        let mut sim = Simulation::with_seed(3);
        sim.set_scenario(ScenarioKind::FigureEight).expect("valid scenario");

        let frame = sim.advance_frame(viewport());
        assert_eq!(frame.bodies.len(), 4);
        assert_eq!(frame.bodies[0].class(), BodyClass::Heavy);
        assert_eq!(frame.bodies[3].class(), BodyClass::Light);
        assert!(frame.bodies.iter().all(|b| b.trail.len() == STEPS_PER_FRAME));
        assert!(frame.camera.scale > 0.0);
        assert!(frame.camera.scale < INITIAL_CAMERA_SCALE);
    }

    #[test]
    fn scenario_switch_discards_trails_but_keeps_camera() {
        let mut sim = Simulation::with_seed(4);
        sim.set_scenario(ScenarioKind::FigureEight).expect("valid scenario");
        for _ in 0..50 {
            sim.advance_frame(viewport());
        }
        let camera = sim.camera();

        sim.set_scenario(ScenarioKind::ChaoticTriangle).expect("valid scenario");

        assert_eq!(sim.scenario(), Some(ScenarioKind::ChaoticTriangle));
        assert_eq!(sim.bodies().len(), 4);
        assert!(sim.bodies().iter().all(|b| b.trail.len() <= 1));
        assert_eq!(sim.camera(), camera);
    }

    #[test]
    fn chaotic_triangle_depends_only_on_seed() {
        let mut a = Simulation::with_seed(42);
        let mut b = Simulation::with_seed(42);
        a.set_scenario(ScenarioKind::ChaoticTriangle).expect("valid scenario");
        b.set_scenario(ScenarioKind::ChaoticTriangle).expect("valid scenario");

        for _ in 0..20 {
            a.advance_frame(viewport());
            b.advance_frame(viewport());
        }
        for (x, y) in a.bodies().iter().zip(b.bodies()) {
            assert_eq!(x.position, y.position);
        }
    }

    #[test]
    fn rejected_body_list_keeps_previous_state() {
        let mut sim = Simulation::with_seed(5);
        sim.set_scenario(ScenarioKind::FigureEight).expect("valid scenario");

        let clash = vec![
            Body::new(dvec2(0.5, 0.5), DVec2::ZERO, 1.0, STAR_COLORS[0]),
            Body::new(dvec2(0.5, 0.5), DVec2::ZERO, 1.0, STAR_COLORS[1]),
        ];
        assert_eq!(
            sim.set_bodies(clash),
            Err(SimError::CoincidentBodies {
                first: 0,
                second: 1
            })
        );
        assert_eq!(sim.bodies().len(), 4);
        assert_eq!(sim.scenario(), Some(ScenarioKind::FigureEight));

        let zero_mass = vec![Body::new(DVec2::ZERO, DVec2::ZERO, 0.0, PLANET_COLOR)];
        assert!(matches!(
            sim.set_bodies(zero_mass),
            Err(SimError::InvalidMass { index: 0, .. })
        ));
        assert_eq!(sim.bodies().len(), 4);
    }

    #[test]
    fn scenario_can_be_chosen_by_name() {
        let mut sim = Simulation::with_seed(8);
        sim.set_scenario_by_name("chaotic").expect("known scenario");
        assert_eq!(sim.scenario(), Some(ScenarioKind::ChaoticTriangle));
        for _ in 0..10 {
            sim.advance_frame(viewport());
        }
        let positions: Vec<DVec2> = sim.bodies().iter().map(|b| b.position).collect();

        assert_eq!(
            sim.set_scenario_by_name("binary"),
            Err(SimError::UnknownScenario("binary".into()))
        );
        assert_eq!(sim.scenario(), Some(ScenarioKind::ChaoticTriangle));
        assert!(
            sim.bodies()
                .iter()
                .map(|b| b.position)
                .eq(positions.iter().copied())
        );
        assert!(sim.bodies().iter().all(|b| b.trail.len() == 10 * STEPS_PER_FRAME));
    }

    #[test]
    fn planet_is_recolored_each_frame() {
        let mut sim = Simulation::with_seed(6);
        sim.set_bodies(vec![
            Body::new(DVec2::ZERO, DVec2::ZERO, 1.0, STAR_COLORS[0]),
            Body::new(dvec2(0.3, 0.0), DVec2::ZERO, 0.0001, PLANET_COLOR),
        ])
        .expect("valid bodies");

        let frame = sim.advance_frame(viewport());
        assert_ne!(frame.bodies[1].color, PLANET_COLOR);
        assert_eq!(frame.bodies[0].color, STAR_COLORS[0]);
    }

    #[test]
    fn trails_stay_bounded_over_many_frames() {
        let mut sim = Simulation::with_seed(7);
        sim.set_scenario(ScenarioKind::ChaoticTriangle).expect("valid scenario");
        for _ in 0..600 {
            sim.advance_frame(viewport());
        }
        for body in sim.bodies() {
            assert_eq!(body.trail.len(), TRAIL_LENGTH);
            assert!(body.position.is_finite());
        }
    }
}
