use bevy::math::DVec2;

use crate::body::Body;
use crate::resources::{LIGHT_MASS_THRESHOLD, SimConfig};

/// Softened pairwise gravity plus a soft confining wall for stars that
/// wander past the boundary radius.
#[derive(Clone, Copy, Debug)]
pub struct ForceField {
    pub g: f64,
    pub softening: f64,
    pub boundary_radius: f64,
    pub restoring_strength: f64,
}

impl Default for ForceField {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

impl ForceField {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            g: config.g,
            softening: config.softening,
            boundary_radius: config.boundary_radius,
            restoring_strength: config.restoring_strength,
        }
    }

    /// Gravitational pull on `a` towards `b`.
    ///
    /// Softening only enters the magnitude; the direction uses the raw
    /// separation, so it is undefined when the two positions coincide.
    pub fn pair_force(&self, a: &Body, b: &Body) -> DVec2 {
        let delta = b.position - a.position;
        let dist_sq = delta.length_squared();
        let dist = dist_sq.sqrt();
        let soft_dist_sq = dist_sq + self.softening * self.softening;
        let force_mag = self.g * (a.mass * b.mass) / soft_dist_sq;
        delta / dist * force_mag
    }

    /// Inward pull on a star outside the boundary radius; zero otherwise.
    pub fn boundary_force(&self, body: &Body) -> DVec2 {
        if body.mass <= LIGHT_MASS_THRESHOLD {
            return DVec2::ZERO;
        }
        let dist = body.position.length();
        if dist <= self.boundary_radius {
            return DVec2::ZERO;
        }
        let pull = (dist - self.boundary_radius) * self.restoring_strength;
        -(body.position / dist) * pull
    }

    /// One force per body, index-aligned with `bodies`.
    pub fn forces(&self, bodies: &[Body]) -> Vec<DVec2> {
        let mut forces = vec![DVec2::ZERO; bodies.len()];

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let force = self.pair_force(&bodies[i], &bodies[j]);
                forces[i] += force;
                forces[j] -= force;
            }
        }

        for (force, body) in forces.iter_mut().zip(bodies) {
            *force += self.boundary_force(body);
        }

        forces
    }
}
