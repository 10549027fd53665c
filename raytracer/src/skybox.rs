use crate::{material::Color, math::Ray};

/// Any type that can be used as a skybox for a scene.
pub trait Skybox: Send + Sync {
    /// The color a ray should produce for the skybox.
    fn ray_color(&self, ray: &Ray) -> Color;
}

/// A solid color skybox.
#[derive(Debug, Clone)]
pub struct Solid(pub Color);

impl Skybox for Solid {
    fn ray_color(&self, _: &Ray) -> Color {
        self.0
    }
}

/// A skybox split into hard horizontal bands by the ray's vertical direction:
/// dirt far below the horizon, a strip of grass just below it, sky everywhere else.
///
/// There is no blending between bands.
#[derive(Debug, Clone)]
pub struct Banded {
    pub dirt: Color,
    pub grass: Color,
    pub sky: Color,

    /// Below this vertical direction component, rays see dirt.
    pub dirt_below: f64,

    /// Below this (and above `dirt_below`), rays see grass.
    pub grass_below: f64,
}

impl Default for Banded {
    fn default() -> Self {
        Self {
            dirt: Color::new(139., 69., 19.),
            grass: Color::new(0., 100., 0.),
            sky: Color::new(173., 216., 230.),
            dirt_below: -0.35,
            grass_below: -0.1,
        }
    }
}

impl Skybox for Banded {
    fn ray_color(&self, ray: &Ray) -> Color {
        let y = ray.direction.y;
        if y < self.dirt_below {
            self.dirt
        } else if y < self.grass_below {
            self.grass
        } else {
            self.sky
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector3;

    fn looking(y: f64) -> Ray {
        Ray::new(Vector3::zero(), Vector3::new(0., y, -1.))
    }

    #[test]
    fn bands_split_on_vertical_component() {
        let sky = Banded::default();

        assert_eq!(sky.ray_color(&looking(-0.9)), sky.dirt);
        assert_eq!(sky.ray_color(&looking(-0.36)), sky.dirt);
        assert_eq!(sky.ray_color(&looking(-0.35)), sky.grass);
        assert_eq!(sky.ray_color(&looking(-0.2)), sky.grass);
        assert_eq!(sky.ray_color(&looking(-0.1)), sky.sky);
        assert_eq!(sky.ray_color(&looking(0.)), sky.sky);
        assert_eq!(sky.ray_color(&looking(0.8)), sky.sky);
    }

    #[test]
    fn solid_ignores_direction() {
        let sky = Solid(Color::new(1., 2., 3.));
        assert_eq!(sky.ray_color(&looking(-1.)), Color::new(1., 2., 3.));
    }
}
