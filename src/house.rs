//! The preset block scene: a small stone house with a glass window, a tree next to it,
//! and a brick chimney.

use raytracer::{
    camera::Camera,
    lighting::Light,
    material::{Color, Material},
    math::Vector3,
    object::{Cuboid, SceneObject},
    scene::Scene,
};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Stone,
    Grass,
    Brick,
    Wood,
    Glass,
}

impl Block {
    pub fn name(self) -> &'static str {
        match self {
            Self::Stone => "stone",
            Self::Grass => "grass",
            Self::Brick => "brick",
            Self::Wood => "wood",
            Self::Glass => "glass",
        }
    }

    pub fn material(self) -> Material {
        let (color, albedo, specular_albedo, specular_exponent, reflectivity, transparency) =
            match self {
                Self::Stone => (Color::new(125., 125., 125.), 0.8, 0.5, 25., 0.1, 0.),
                Self::Grass => (Color::new(0., 128., 0.), 0.7, 0.3, 10., 0.1, 0.),
                Self::Brick => (Color::new(100., 0., 0.), 0.8, 0.3, 15., 0.1, 0.),
                Self::Wood => (Color::new(139., 69., 19.), 0.7, 0.3, 20., 0.1, 0.),
                // reflectivity + transparency is over 1 here, which makes the window glow
                Self::Glass => (Color::white(), 0., 10., 1425., 0.2, 1.),
            };

        Material {
            color,
            albedo,
            specular_albedo,
            specular_exponent,
            reflectivity,
            transparency,
            refraction_index: 1.,
        }
    }
}

const FULL: f64 = 1.;
const CHIMNEY: f64 = 0.6;

#[rustfmt::skip]
const BLOCKS: &[(Block, [f64; 3], f64)] = &[
    // tree
    (Block::Wood, [4., -1., -1.5], FULL),
    (Block::Wood, [4., 0., -1.5], FULL),
    (Block::Wood, [4., 1., -1.5], FULL),
    (Block::Grass, [4., 2., -1.5], FULL),
    (Block::Grass, [3., 2., -1.5], FULL),
    (Block::Grass, [5., 2., -1.5], FULL),
    (Block::Grass, [4., 3., -1.5], FULL),

    // front wall, with a door gap and a glass window
    (Block::Grass, [1., -1., -1.5], FULL),
    (Block::Stone, [0., -1., -1.5], FULL),
    (Block::Stone, [-1., -1., -1.5], FULL),
    (Block::Stone, [-3., -1., -1.5], FULL),
    (Block::Grass, [-4., -1., -1.5], FULL),
    (Block::Stone, [0., 0., -1.5], FULL),
    (Block::Glass, [-1., 0., -1.5], FULL),
    (Block::Stone, [-3., 0., -1.5], FULL),
    (Block::Stone, [0., 1., -1.5], FULL),
    (Block::Stone, [-1., 1., -1.5], FULL),
    (Block::Stone, [-2., 1., -1.5], FULL),
    (Block::Stone, [-3., 1., -1.5], FULL),

    // side walls
    (Block::Stone, [0., -1., -2.5], FULL),
    (Block::Stone, [-3., -1., -2.5], FULL),
    (Block::Stone, [0., 0., -2.5], FULL),
    (Block::Stone, [-3., 0., -2.5], FULL),
    (Block::Stone, [0., 1., -2.5], FULL),
    (Block::Stone, [-3., 1., -2.5], FULL),
    (Block::Stone, [0., -1., -3.5], FULL),
    (Block::Stone, [-3., -1., -3.5], FULL),
    (Block::Stone, [0., 0., -3.5], FULL),
    (Block::Stone, [-3., 0., -3.5], FULL),
    (Block::Stone, [0., 1., -3.5], FULL),
    (Block::Stone, [-3., 1., -3.5], FULL),

    // back wall
    (Block::Stone, [0., -1., -4.5], FULL),
    (Block::Stone, [-1., -1., -4.5], FULL),
    (Block::Stone, [-2., -1., -4.5], FULL),
    (Block::Stone, [-3., -1., -4.5], FULL),
    (Block::Stone, [0., 0., -4.5], FULL),
    (Block::Stone, [-1., 0., -4.5], FULL),
    (Block::Stone, [-2., 0., -4.5], FULL),
    (Block::Stone, [-3., 0., -4.5], FULL),
    (Block::Stone, [0., 1., -4.5], FULL),
    (Block::Stone, [-1., 1., -4.5], FULL),
    (Block::Stone, [-2., 1., -4.5], FULL),
    (Block::Stone, [-3., 1., -4.5], FULL),

    // chimney
    (Block::Brick, [-3.2, 1.7, -1.5], CHIMNEY),
    (Block::Brick, [-3.2, 2., -1.5], CHIMNEY),
];

/// Build the house scene, lit by a white light in front of it and slightly to the left.
pub fn scene() -> Scene {
    let objects: Vec<Box<dyn SceneObject>> = BLOCKS
        .iter()
        .map(|&(block, [x, y, z], size)| {
            Box::new(Cuboid::new(
                Vector3::new(x, y, z),
                size,
                block.material(),
                block.name(),
            )) as Box<dyn SceneObject>
        })
        .collect();

    debug!(blocks = objects.len(), "built house scene");

    Scene::new(
        objects,
        Light::new(Vector3::new(-1., 0., 10.), 1.5, Color::white()),
    )
}

/// The camera the house is first seen from.
pub fn camera() -> Camera {
    Camera::new(Vector3::new(0., 0., 5.), Vector3::zero(), Vector3::up(), 10.)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_has_one_window() {
        assert_eq!(BLOCKS.len(), 45);
        assert_eq!(BLOCKS.iter().filter(|(b, ..)| *b == Block::Glass).count(), 1);
        assert_eq!(scene().objects.len(), 45);
    }

    #[test]
    fn only_glass_is_transparent() {
        for block in [Block::Stone, Block::Grass, Block::Brick, Block::Wood] {
            let m = block.material();
            assert_eq!(m.transparency, 0.);
            assert!(m.reflectivity + m.transparency <= 1.);
        }
        assert_eq!(Block::Glass.material().transparency, 1.);
    }

    #[test]
    fn looking_at_the_front_wall_hits_stone() {
        let scene = scene();
        let camera = camera();
        let ray = raytracer::math::Ray::new(camera.position, Vector3::new(0., 0., -1.));

        let (index, hit) = scene.cast_ray(&ray).unwrap();
        assert_eq!(BLOCKS[index].0, Block::Stone);
        assert_eq!(hit.normal, Vector3::new(0., 0., 1.));
    }
}
