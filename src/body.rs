use bevy::math::DVec2;
use bevy::prelude::*;
use std::collections::VecDeque;

use crate::resources::{
    HOT_COLOR, HOT_DISTANCE, LIGHT_MASS_THRESHOLD, TRAIL_LENGTH, WARM_COLOR, WARM_DISTANCE,
};

/// Bounded history of past positions, oldest first.
#[derive(Clone, Debug)]
pub struct Trail {
    history: VecDeque<DVec2>,
    capacity: usize,
}

impl Default for Trail {
    fn default() -> Self {
        Self::with_capacity(TRAIL_LENGTH)
    }
}

impl Trail {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, point: DVec2) {
        self.history.push_back(point);
        if self.history.len() > self.capacity {
            self.history.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DVec2> + '_ {
        self.history.iter()
    }
}

/// Rendering and framing class, derived from mass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyClass {
    Light,
    Heavy,
}

/// How close a planet is to its nearest neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Temperature {
    Hot,
    Warm,
    Cold,
}

impl Temperature {
    pub fn from_distance(distance: f64) -> Self {
        if distance < HOT_DISTANCE {
            Temperature::Hot
        } else if distance < WARM_DISTANCE {
            Temperature::Warm
        } else {
            Temperature::Cold
        }
    }
}

/// A point mass in simulation space.
#[derive(Clone, Debug)]
pub struct Body {
    pub position: DVec2,
    pub velocity: DVec2,
    pub mass: f64,
    pub color: Color,
    pub base_color: Color,
    pub trail: Trail,
}

impl Body {
    pub fn new(position: DVec2, velocity: DVec2, mass: f64, color: Color) -> Self {
        Self {
            position,
            velocity,
            mass,
            color,
            base_color: color,
            trail: Trail::default(),
        }
    }

    pub fn is_light(&self) -> bool {
        self.mass < LIGHT_MASS_THRESHOLD
    }

    pub fn class(&self) -> BodyClass {
        if self.is_light() {
            BodyClass::Light
        } else {
            BodyClass::Heavy
        }
    }

    /// Semi-implicit Euler step: velocity first, then position from the new velocity.
    pub fn advance(&mut self, force: DVec2, dt: f64) {
        let acceleration = force / self.mass;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
        self.trail.push(self.position);
    }

    /// Recolors a planet by temperature. Stars keep their color.
    pub fn apply_temperature(&mut self, temperature: Temperature) {
        if !self.is_light() {
            return;
        }
        self.color = match temperature {
            Temperature::Hot => HOT_COLOR,
            Temperature::Warm => WARM_COLOR,
            Temperature::Cold => self.base_color,
        };
    }
}

/// Distance from `bodies[index]` to the closest other body, or infinity when alone.
pub fn nearest_neighbor_distance(bodies: &[Body], index: usize) -> f64 {
    let origin = bodies[index].position;
    bodies
        .iter()
        .enumerate()
        .filter(|(other, _)| *other != index)
        .map(|(_, body)| body.position.distance(origin))
        .fold(f64::INFINITY, f64::min)
}

/// Temperature-codes every light body by proximity to its nearest neighbour.
pub fn update_light_colors(bodies: &mut [Body]) {
    for index in 0..bodies.len() {
        if !bodies[index].is_light() {
            continue;
        }
        let temperature = Temperature::from_distance(nearest_neighbor_distance(bodies, index));
        bodies[index].apply_temperature(temperature);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{PLANET_COLOR, STAR_COLORS};
    use bevy::math::dvec2;

    fn planet_at(x: f64) -> Body {
        Body::new(dvec2(x, 0.0), DVec2::ZERO, 0.0001, PLANET_COLOR)
    }

    fn star_at(x: f64) -> Body {
        Body::new(dvec2(x, 0.0), DVec2::ZERO, 1.0, STAR_COLORS[0])
    }

    #[test]
    fn classification_is_derived_from_mass() {
        assert_eq!(planet_at(0.0).class(), BodyClass::Light);
        assert_eq!(star_at(0.0).class(), BodyClass::Heavy);

        let mut edge = star_at(0.0);
        edge.mass = LIGHT_MASS_THRESHOLD;
        assert!(!edge.is_light());
        edge.mass = 0.0999;
        assert!(edge.is_light());
    }

    #[test]
    fn advance_uses_updated_velocity_for_position() {
        let mut body = Body::new(DVec2::ZERO, dvec2(1.0, 0.0), 2.0, PLANET_COLOR);
        body.advance(dvec2(4.0, -2.0), 0.5);

        // v = (1, 0) + (2, -1) * 0.5 = (2, -0.5); x = v * 0.5
        assert_eq!(body.velocity, dvec2(2.0, -0.5));
        assert_eq!(body.position, dvec2(1.0, -0.25));
        assert_eq!(body.trail.len(), 1);
        assert_eq!(body.trail.iter().last().copied(), Some(body.position));
    }

    #[test]
    fn trail_never_exceeds_capacity() {
        let mut body = Body::new(DVec2::ZERO, dvec2(1.0, 1.0), 1.0, PLANET_COLOR);
        for _ in 0..(TRAIL_LENGTH * 2 + 7) {
            body.advance(DVec2::ZERO, 0.01);
            assert!(body.trail.len() <= TRAIL_LENGTH);
        }
        assert_eq!(body.trail.len(), TRAIL_LENGTH);
    }

    #[test]
    fn trail_evicts_oldest_after_capacity_plus_one_steps() {
        let mut body = Body::new(DVec2::ZERO, dvec2(1.0, 0.0), 1.0, PLANET_COLOR);
        let mut visited = Vec::new();
        for _ in 0..=TRAIL_LENGTH {
            body.advance(DVec2::ZERO, 0.01);
            visited.push(body.position);
        }

        assert_eq!(visited.len(), TRAIL_LENGTH + 1);
        let kept: Vec<DVec2> = body.trail.iter().copied().collect();
        assert_eq!(kept.len(), TRAIL_LENGTH);
        assert_eq!(kept.as_slice(), &visited[1..]);
        assert!(!kept.contains(&visited[0]));
    }

    #[test]
    fn temperature_thresholds_are_exclusive_upper_bounds() {
        assert_eq!(Temperature::from_distance(0.4999), Temperature::Hot);
        assert_eq!(Temperature::from_distance(0.5), Temperature::Warm);
        assert_eq!(Temperature::from_distance(1.1999), Temperature::Warm);
        assert_eq!(Temperature::from_distance(1.2), Temperature::Cold);
        assert_eq!(Temperature::from_distance(f64::INFINITY), Temperature::Cold);
    }

    #[test]
    fn planet_color_follows_nearest_neighbor() {
        let mut bodies = vec![star_at(0.0), planet_at(0.5)];
        update_light_colors(&mut bodies);
        assert_eq!(bodies[1].color, WARM_COLOR);

        bodies[1].position = dvec2(0.25, 0.0);
        update_light_colors(&mut bodies);
        assert_eq!(bodies[1].color, HOT_COLOR);

        bodies[1].position = dvec2(2.0, 0.0);
        update_light_colors(&mut bodies);
        assert_eq!(bodies[1].color, PLANET_COLOR);

        assert_eq!(bodies[0].color, STAR_COLORS[0]);
    }

    #[test]
    fn lone_planet_stays_cold() {
        let mut bodies = vec![planet_at(0.0)];
        update_light_colors(&mut bodies);
        assert_eq!(bodies[0].color, PLANET_COLOR);
    }

    #[test]
    fn stars_ignore_temperature() {
        let mut star = star_at(0.0);
        star.apply_temperature(Temperature::Hot);
        assert_eq!(star.color, STAR_COLORS[0]);
    }
}
