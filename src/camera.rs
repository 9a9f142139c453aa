use bevy::math::{DVec2, Vec2, dvec2};

use crate::body::Body;
use crate::error::{SimError, SimResult};
use crate::resources::SimConfig;

/// Size of the drawing surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> SimResult<Self> {
        let valid = |d: f64| d.is_finite() && d > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SimError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> DVec2 {
        dvec2(self.width / 2.0, self.height / 2.0)
    }
}

/// Sim-to-screen mapping: `scale` pixels per sim unit around `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTransform {
    pub scale: f64,
    pub center: DVec2,
}

impl CameraTransform {
    /// Canvas-style pixel coordinates, y growing downwards.
    pub fn to_screen(&self, point: DVec2, viewport: Viewport) -> DVec2 {
        let offset = (point - self.center) * self.scale;
        let origin = viewport.center();
        dvec2(origin.x + offset.x, origin.y - offset.y)
    }

    /// Bevy 2D world coordinates for a camera sitting at the origin.
    pub fn to_world(&self, point: DVec2, viewport: Viewport) -> Vec2 {
        let screen = self.to_screen(point, viewport);
        let origin = viewport.center();
        dvec2(screen.x - origin.x, origin.y - screen.y).as_vec2()
    }
}

/// Keeps the stars on screen with an eased zoom and pan.
#[derive(Clone, Copy, Debug)]
pub struct CameraController {
    transform: CameraTransform,
    lerp: f64,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

impl CameraController {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            transform: CameraTransform {
                scale: config.initial_camera_scale,
                center: DVec2::ZERO,
            },
            lerp: config.camera_lerp,
        }
    }

    pub fn transform(&self) -> CameraTransform {
        self.transform
    }

    /// Ideal framing for the current positions, or `None` for an empty list.
    ///
    /// Stars are framed when any exist; otherwise every body is.
    pub fn target(bodies: &[Body], viewport: Viewport) -> Option<CameraTransform> {
        let has_heavy = bodies.iter().any(|b| !b.is_light());
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);

        for body in bodies.iter().filter(|b| !has_heavy || !b.is_light()) {
            min = min.min(body.position);
            max = max.max(body.position);
        }

        if !min.x.is_finite() {
            return None;
        }

        let size = max - min;
        let max_dim = size.x.max(size.y);
        let scale = viewport.width().min(viewport.height()) / (max_dim * 2.0 + 1.0);

        Some(CameraTransform {
            scale,
            center: (min + max) / 2.0,
        })
    }

    /// Eases the camera one frame towards the ideal framing.
    pub fn update(&mut self, bodies: &[Body], viewport: Viewport) -> CameraTransform {
        if let Some(target) = Self::target(bodies, viewport) {
            let current = &mut self.transform;
            current.scale += (target.scale - current.scale) * self.lerp;
            current.center += (target.center - current.center) * self.lerp;
        }
        self.transform
    }
}
