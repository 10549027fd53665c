mod cuboid;

use crate::{
    material::Material,
    math::{Ray, Vector3},
};

pub use cuboid::*;

/// The result of a ray intersection.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    /// Distance along the ray, in units of the ray direction's length.
    pub distance: f64,

    /// The world-space point that was struck.
    pub point: Vector3,

    /// The outward surface normal. Unit length, or zero for degenerate hits.
    pub normal: Vector3,
}

impl Hit {
    pub fn new(distance: f64, point: Vector3, normal: Vector3) -> Self {
        Self {
            distance,
            point,
            normal,
        }
    }
}

/// A trait that represents any type that can be intersected by a Ray.
pub trait Intersect {
    /// Find the intersection, if any, between the ray provided and this shape.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;
}

/// A trait that represents any type that is a scene object, and can thus be viewed in the final render.
pub trait SceneObject: Intersect + Send + Sync {
    /// Grab this scene object's material.
    fn material(&self) -> &Material;
}
