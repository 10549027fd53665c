use crate::{
    material::Material,
    math::{Ray, Vector3},
};

use super::{Hit, Intersect, SceneObject};

/// How close to a face a hit point has to be for that face to contribute to the normal.
pub const FACE_EPSILON: f64 = 0.0001;

/// An axis-aligned cube, centered on `position` with an edge length of `size`.
#[derive(Debug, Clone)]
pub struct Cuboid {
    pub position: Vector3,
    pub size: f64,
    pub material: Material,

    /// What kind of block this is. Only used by whoever builds the scene.
    pub block: String,
}

impl Cuboid {
    pub fn new(position: Vector3, size: f64, material: Material, block: impl Into<String>) -> Self {
        Self {
            position,
            size,
            material,
            block: block.into(),
        }
    }

    /// Build the outward normal for a point on (or very near) the surface.
    ///
    /// Points on an edge or a corner pick up every face they touch; a point that
    /// touches no face yields a zero normal.
    fn normal_at(&self, point: Vector3) -> Vector3 {
        let half = self.size * 0.5;
        let mut normal = Vector3::zero();

        for i in 0..3 {
            let (p, c) = (point.axis(i), self.position.axis(i));
            if p < c - half + FACE_EPSILON {
                *normal.axis_mut(i) = -1.;
            } else if p > c + half - FACE_EPSILON {
                *normal.axis_mut(i) = 1.;
            }
        }

        normal.normalize_or_zero()
    }
}

impl Intersect for Cuboid {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        // slab test in the cuboid's local frame; zero direction components
        // divide out to +-inf, which min/max below handle
        let ro = ray.origin - self.position;
        let half = Vector3::splat(self.size * 0.5);

        let t1 = (-half - ro) / ray.direction;
        let t2 = (half - ro) / ray.direction;

        let tn = f64::max(
            f64::max(t1.x.min(t2.x), t1.y.min(t2.y)),
            t1.z.min(t2.z),
        );
        let tf = f64::min(
            f64::min(t1.x.max(t2.x), t1.y.max(t2.y)),
            t1.z.max(t2.z),
        );

        // also rejects NaN
        if !(tn <= tf) {
            return None;
        }

        let t = if tn >= 0. {
            tn
        } else if tf >= 0. {
            tf
        } else {
            return None;
        };

        // a zero direction starting inside the box only "exits" at infinity
        if !t.is_finite() {
            return None;
        }

        let point = ray.along(t);
        Some(Hit::new(t, point, self.normal_at(point)))
    }
}

impl SceneObject for Cuboid {
    fn material(&self) -> &Material {
        &self.material
    }
}
