use std::f64::consts::PI;

use crate::math::{Ray, Vector3};

/// How far above or below its target, in degrees, the camera can orbit.
pub const MAX_ELEVATION: f64 = 89.;

/// The image a camera renders into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,

    /// Horizontal field of view, in radians.
    pub fov: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            fov: PI / 3.,
        }
    }
}

impl Viewport {
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Map a pixel (top-left is (0, 0)) to screen space, centered on the image with +y up
    /// and scaled by the field of view.
    pub fn screen_point(&self, x: f64, y: f64) -> (f64, f64) {
        let scale = (self.fov / 2.).tan();
        let sx = (2. * (x + 0.5) / self.width as f64 - 1.) * self.aspect_ratio() * scale;
        let sy = (1. - 2. * (y + 0.5) / self.height as f64) * scale;
        (sx, sy)
    }
}

/// The orthonormal frame a camera looks through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basis {
    pub forward: Vector3,
    pub right: Vector3,
    pub up: Vector3,
}

/// A pinhole camera looking from `position` at `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vector3,
    pub target: Vector3,
    pub up: Vector3,

    /// Degrees turned per unit of [`rotate`](Self::rotate).
    pub speed: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vector3::new(0., 0., 5.),
            target: Vector3::zero(),
            up: Vector3::up(),
            speed: 10.,
        }
    }
}

impl Camera {
    pub fn new(position: Vector3, target: Vector3, up: Vector3, speed: f64) -> Self {
        Self {
            position,
            target,
            up,
            speed,
        }
    }

    /// Derive the camera frame from its current position, target and up vector.
    pub fn basis(&self) -> Basis {
        let forward = (self.target - self.position).normalize();
        let right = forward.cross(self.up).normalize();
        let up = right.cross(forward).normalize();
        Basis { forward, right, up }
    }

    /// Build the primary ray through a pixel, where top-left of the image is (0, 0).
    pub fn ray_at(&self, x: f64, y: f64, viewport: &Viewport) -> Ray {
        let (sx, sy) = viewport.screen_point(x, y);
        let Basis { forward, right, up } = self.basis();
        Ray::new(
            self.position,
            (forward + right * sx + up * sy).normalize(),
        )
    }

    /// Move the camera, and what it looks at, along its forward axis.
    pub fn translate(&mut self, distance: f64) {
        let step = self.basis().forward * distance;
        self.position += step;
        self.target += step;
    }

    /// Orbit the camera around its target. `yaw` turns about the up vector and
    /// `pitch` about the camera's right axis, both scaled by `speed` degrees.
    ///
    /// Pitch stops [`MAX_ELEVATION`] degrees short of looking straight along `up`,
    /// where the camera basis would collapse.
    pub fn rotate(&mut self, yaw: f64, pitch: f64) {
        let up = self.up.normalize();
        let mut offset = self.position - self.target;

        offset = offset.rotate_about(up, (yaw * self.speed).to_radians());

        // positive pitch about `right` lowers the camera (it looks further up)
        let right = (-offset).cross(up).normalize();
        let elevation = offset.normalize().dot(up).clamp(-1., 1.).asin();
        let limit = MAX_ELEVATION.to_radians();
        let wanted = (elevation - (pitch * self.speed).to_radians()).clamp(-limit, limit);
        offset = offset.rotate_about(right, elevation - wanted);

        self.position = self.target + offset;
    }
}
