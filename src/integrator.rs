use crate::body::Body;
use crate::forces::ForceField;
use crate::resources::SimConfig;

/// Fixed-step semi-implicit Euler, several sub-steps per rendered frame.
#[derive(Clone, Copy, Debug)]
pub struct Integrator {
    pub dt: f64,
    pub steps_per_frame: usize,
}

impl Default for Integrator {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

impl Integrator {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            dt: config.dt,
            steps_per_frame: config.steps_per_frame,
        }
    }

    /// Forces are evaluated for the whole list before any body moves.
    pub fn step(&self, bodies: &mut [Body], field: &ForceField) {
        let forces = field.forces(bodies);
        for (body, force) in bodies.iter_mut().zip(forces) {
            body.advance(force, self.dt);
        }
    }

    pub fn advance_frame(&self, bodies: &mut [Body], field: &ForceField) {
        for _ in 0..self.steps_per_frame {
            self.step(bodies, field);
        }
    }
}
