use crate::{
    material::Color,
    math::{Ray, Vector3},
    object::Hit,
    scene::Scene,
};

/// The result of the light's influence on a ray intersection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightShading {
    pub diffuse: f64,
    pub specular: f64,

    /// 1 when the point is fully lit, 0 when fully shadowed.
    pub shadow: f64,
}

impl LightShading {
    pub fn new(diffuse: f64, specular: f64, shadow: f64) -> Self {
        Self {
            diffuse,
            specular,
            shadow,
        }
    }
}

/// A point light, which emits in all directions from a position.
#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Vector3,
    pub intensity: f64,
    pub color: Color,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vector3::new(-1., 0., 10.),
            intensity: 1.5,
            color: Color::white(),
        }
    }
}

impl Light {
    pub fn new(position: Vector3, intensity: f64, color: Color) -> Self {
        Self {
            position,
            intensity,
            color,
        }
    }

    /// Shade a hit on the object at index `object` of the scene.
    pub fn shading(&self, ray: &Ray, hit: &Hit, object: usize, scene: &Scene) -> LightShading {
        let specular_exponent = scene.objects[object].material().specular_exponent;

        // vector pointing from hit to light pos
        let lvec = (self.position - hit.point).normalize();
        let view = (ray.origin - hit.point).normalize();
        let reflected = (-lvec).reflect(hit.normal);

        let shadow = scene.shadow(hit.point + hit.normal * scene.options.bias, lvec, object);

        let diffuse = hit.normal.dot(lvec).max(0.);
        let specular = view.dot(reflected).max(0.).powf(specular_exponent);

        LightShading::new(diffuse, specular, shadow)
    }
}
