use bevy::prelude::*;

use crate::body::{Body, BodyClass};

/// On-screen radius of a planet, in pixels.
pub const PLANET_RADIUS: f32 = 4.0;
/// Smallest on-screen radius of a star, in pixels.
pub const MIN_STAR_RADIUS: f32 = 8.0;
/// Gap between a planet's disc and its white outline ring.
pub const OUTLINE_GAP: f32 = 1.0;
/// Glow halo radius as a multiple of the disc radius.
pub const GLOW_SCALE: f32 = 2.5;

/// Links a rendered circle to its body in the simulation list.
#[derive(Component, Clone, Copy, Debug)]
pub struct BodySprite {
    pub index: usize,
    pub class: BodyClass,
}

impl BodySprite {
    pub fn for_body(index: usize, body: &Body) -> Self {
        Self {
            index,
            class: body.class(),
        }
    }

    pub fn radius(&self, mass: f64) -> f32 {
        match self.class {
            BodyClass::Light => PLANET_RADIUS,
            BodyClass::Heavy => MIN_STAR_RADIUS.max(mass.sqrt() as f32 * 4.0),
        }
    }

    /// Radius of the white ring that keeps the tiny planet visible.
    pub fn outline_radius(&self, mass: f64) -> Option<f32> {
        match self.class {
            BodyClass::Light => Some(self.radius(mass) + OUTLINE_GAP),
            BodyClass::Heavy => None,
        }
    }

    pub fn glow_radius(&self, mass: f64) -> f32 {
        self.radius(mass) * GLOW_SCALE
    }

    /// Planets are drawn above stars.
    pub fn depth(&self) -> f32 {
        match self.class {
            BodyClass::Light => 1.0,
            BodyClass::Heavy => 0.0,
        }
    }
}
