use bevy::math::{DVec2, dvec2};
use rand::Rng;
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use crate::body::Body;
use crate::error::{SimError, SimResult};
use crate::resources::{PLANET_COLOR, STAR_COLORS};

/// Mass given to the planet in every scenario.
pub const PLANET_MASS: f64 = 0.0001;

/// Produces a fresh body list for a named initial configuration.
/// Randomised scenarios draw from `rng`. Every list still passes
/// [`validate_bodies`] before a simulation accepts it.
pub trait InitialConditions {
    fn bodies<R: Rng>(&self, rng: &mut R) -> Vec<Body>;
}

/// Chenciner–Montgomery figure-eight with a planet thrown in near the middle.
#[derive(Clone, Copy, Debug)]
pub struct FigureEight;

impl FigureEight {
    pub const POSITION: DVec2 = DVec2::new(0.97000436, -0.24308753);
    pub const VELOCITY: DVec2 = DVec2::new(0.4662036850, 0.4323657300);
}

impl InitialConditions for FigureEight {
    fn bodies<R: Rng>(&self, _rng: &mut R) -> Vec<Body> {
        let (p, v) = (Self::POSITION, Self::VELOCITY);
        vec![
            Body::new(p, v, 1.0, STAR_COLORS[0]),
            Body::new(-p, v, 1.0, STAR_COLORS[1]),
            Body::new(DVec2::ZERO, -2.0 * v, 1.0, STAR_COLORS[2]),
            // Offset so it never shares the origin with the third star.
            Body::new(dvec2(0.1, 0.1), dvec2(0.4, 0.1), PLANET_MASS, PLANET_COLOR),
        ]
    }
}

/// Equilateral triangle of stars with a random nudge to break the symmetry.
#[derive(Clone, Copy, Debug)]
pub struct ChaoticTriangle {
    pub radius: f64,
    pub perturbation: f64,
}

impl Default for ChaoticTriangle {
    fn default() -> Self {
        Self {
            radius: 1.0,
            perturbation: 0.15,
        }
    }
}

impl ChaoticTriangle {
    /// Speed of each star on the unperturbed circular orbit.
    pub fn orbital_speed(&self) -> f64 {
        (1.0 / (3f64.sqrt() * self.radius)).sqrt()
    }

    /// Unperturbed position and velocity of star `index`.
    pub fn ideal_state(&self, index: usize) -> (DVec2, DVec2) {
        let theta = index as f64 / 3.0 * TAU;
        let (sin, cos) = theta.sin_cos();
        let position = dvec2(cos, sin) * self.radius;
        let velocity = dvec2(-sin, cos) * self.orbital_speed();
        (position, velocity)
    }

    fn jitter<R: Rng>(&self, rng: &mut R) -> f64 {
        (rng.random::<f64>() - 0.5) * self.perturbation
    }
}

impl InitialConditions for ChaoticTriangle {
    fn bodies<R: Rng>(&self, rng: &mut R) -> Vec<Body> {
        let mut bodies: Vec<Body> = (0..3)
            .map(|i| {
                let (position, velocity) = self.ideal_state(i);
                let position = position + dvec2(self.jitter(rng), self.jitter(rng));
                let velocity = velocity + dvec2(self.jitter(rng), self.jitter(rng));
                Body::new(position, velocity, 1.0, STAR_COLORS[i])
            })
            .collect();

        bodies.push(Body::new(
            dvec2(0.1, 0.1),
            dvec2(0.2, 0.2),
            PLANET_MASS,
            PLANET_COLOR,
        ));
        bodies
    }
}

/// The selectable scenarios, parsed from names such as `figure-eight` or `chaotic`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    FigureEight,
    ChaoticTriangle,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 2] = [ScenarioKind::FigureEight, ScenarioKind::ChaoticTriangle];

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::FigureEight => "figure-eight",
            ScenarioKind::ChaoticTriangle => "chaotic-triangle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScenarioKind::FigureEight => "Figure-8",
            ScenarioKind::ChaoticTriangle => "Bound Chaos",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScenarioKind::FigureEight => {
                "A stable periodic orbit of three stars. \
                 The blue planet tries to survive near the center."
            }
            ScenarioKind::ChaoticTriangle => {
                "Red, yellow and orange stars against a blue planet. \
                 A broken triangle start keeps the chaos going for a long time."
            }
        }
    }

    /// Builds and validates the initial bodies for this scenario.
    pub fn build<R: Rng>(&self, rng: &mut R) -> SimResult<Vec<Body>> {
        let bodies = match self {
            ScenarioKind::FigureEight => FigureEight.bodies(rng),
            ScenarioKind::ChaoticTriangle => ChaoticTriangle::default().bodies(rng),
        };
        validate_bodies(&bodies)?;
        Ok(bodies)
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "figure-eight" | "figure8" | "figure-8" => Ok(ScenarioKind::FigureEight),
            "chaotic-triangle" | "chaotic" => Ok(ScenarioKind::ChaoticTriangle),
            _ => Err(SimError::UnknownScenario(s.to_string())),
        }
    }
}

/// Rejects lists that would put NaN into the integrator.
pub fn validate_bodies(bodies: &[Body]) -> SimResult<()> {
    for (index, body) in bodies.iter().enumerate() {
        if !(body.mass.is_finite() && body.mass > 0.0) {
            return Err(SimError::InvalidMass {
                index,
                mass: body.mass,
            });
        }
        if !body.position.is_finite() {
            return Err(SimError::NonFiniteState {
                index,
                field: "position",
            });
        }
        if !body.velocity.is_finite() {
            return Err(SimError::NonFiniteState {
                index,
                field: "velocity",
            });
        }
    }

    for first in 0..bodies.len() {
        for second in (first + 1)..bodies.len() {
            if bodies[first].position == bodies[second].position {
                return Err(SimError::CoincidentBodies { first, second });
            }
        }
    }

    Ok(())
}
