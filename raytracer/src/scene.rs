use std::path::Path;

use rayon::prelude::*;
use tracing::debug;

use crate::{
    camera::{Camera, Viewport},
    lighting::Light,
    material::Color,
    math::{refract, Ray, Vector3},
    object::{Hit, Intersect, SceneObject},
    skybox::{self, Skybox},
};

/// The normal facing against the ray, and the index ratio to refract with.
///
/// Leaving an object (the ray runs along the outward normal) flips the normal
/// and inverts the ratio, so the ray exits instead of mirroring back inside.
fn refraction_side(ray: &Ray, hit: &Hit, refraction_index: f64) -> (Vector3, f64) {
    if ray.direction.dot(hit.normal) > 0. {
        (-hit.normal, 1. / refraction_index)
    } else {
        (hit.normal, refraction_index)
    }
}

/// Scene options. Defaults are provided.
#[derive(Debug, Clone)]
pub struct SceneOptions {
    /// The number of bounces after which a ray sees only the skybox.
    pub max_ray_depth: u32,

    /// How far spawned rays are pushed off the surface they start on.
    pub bias: f64,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            max_ray_depth: 3,
            bias: 0.0001,
        }
    }
}

/// A scene, which contains a list of objects and the light shining on them.
///
/// Nothing in here changes while rendering, so one scene can be shared by every
/// render thread.
pub struct Scene {
    pub objects: Vec<Box<dyn SceneObject>>,
    pub light: Light,
    pub skybox: Box<dyn Skybox>,
    pub options: SceneOptions,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            light: Light::default(),
            skybox: Box::new(skybox::Banded::default()),
            options: SceneOptions::default(),
        }
    }
}

impl Scene {
    pub fn new(objects: Vec<Box<dyn SceneObject>>, light: Light) -> Self {
        Self {
            objects,
            light,
            ..Default::default()
        }
    }

    /// Find the nearest object in front of the ray, by index into `objects`.
    pub fn cast_ray(&self, ray: &Ray) -> Option<(usize, Hit)> {
        let mut nearest: Option<(usize, Hit)> = None;

        // no acceleration structure, every object is tested for every ray
        for (i, object) in self.objects.iter().enumerate() {
            let hit = match object.intersect(ray) {
                Some(hit) if hit.distance > 0. => hit,
                _ => continue,
            };

            if nearest
                .as_ref()
                .map_or(true, |(_, best)| hit.distance < best.distance)
            {
                nearest = Some((i, hit));
            }
        }

        nearest
    }

    /// How much of the light reaches `origin`, from 1 (fully lit) to 0 (fully shadowed).
    ///
    /// This stops at the first occluder in scene order rather than the nearest one,
    /// and a closer occluder casts a lighter shadow. The object at index `exclude`
    /// (the surface being shaded) is skipped.
    pub fn shadow(&self, origin: Vector3, light_dir: Vector3, exclude: usize) -> f64 {
        let ray = Ray::new(origin, light_dir);
        let light_distance = (self.light.position - origin).magnitude();

        for (i, object) in self.objects.iter().enumerate() {
            if i == exclude {
                continue;
            }

            if let Some(hit) = object.intersect(&ray) {
                if hit.distance > 0. {
                    let ratio = (hit.distance / light_distance).min(1.);
                    return 1. - ratio;
                }
            }
        }

        1.
    }

    /// Trace out a ray that has already bounced `depth` times, getting its color.
    pub fn trace_ray(&self, ray: &Ray, depth: u32) -> Color {
        if depth >= self.options.max_ray_depth {
            return self.skybox.ray_color(ray);
        }

        let (index, hit) = match self.cast_ray(ray) {
            Some(r) => r,
            None => return self.skybox.ray_color(ray),
        };

        let material = self.objects[index].material();
        let bias = hit.normal * self.options.bias;
        let shading = self.light.shading(ray, &hit, index, self);

        let mut reflected = Color::black();
        if material.reflectivity > 0. {
            reflected = self.trace_ray(&ray.reflect(hit.point + bias, hit.normal), depth + 1);
        }

        // a zero direction (total internal reflection) still gets traced, and
        // ends up at the skybox
        let mut refracted = Color::black();
        if material.transparency > 0. {
            let (normal, eta) = refraction_side(ray, &hit, material.refraction_index);
            let direction = refract(ray.direction, normal, eta);
            refracted = self.trace_ray(
                &Ray::new(hit.point - normal * self.options.bias, direction),
                depth + 1,
            );
        }

        let intensity = self.light.intensity;
        let diffuse = material.color * (shading.diffuse * intensity * material.albedo);
        let specular = self.light.color * (shading.specular * intensity * material.specular_albedo);
        let local = (diffuse + specular) * shading.shadow;

        // reflectivity + transparency is not clamped to 1
        local * (1. - material.reflectivity - material.transparency)
            + reflected * material.reflectivity
            + refracted * material.transparency
    }

    /// Trace out a primary ray.
    pub fn trace(&self, ray: &Ray) -> Color {
        self.trace_ray(ray, 0)
    }

    /// Render the image out as a list of Colors, row by row from the top-left.
    pub fn render(&self, camera: &Camera, viewport: &Viewport) -> Vec<Color> {
        let width = viewport.width as usize;
        let height = viewport.height as usize;
        debug!(width, height, objects = self.objects.len(), "rendering");

        let mut pixels = vec![Color::black(); width * height];
        if width == 0 {
            return pixels;
        }

        // every pixel is independent, so rows are handed out to rayon's pool
        pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = self.trace(&camera.ray_at(x as f64, y as f64, viewport));
                }
            });

        pixels
    }

    /// Render into an 8-bit image, clamping each color.
    pub fn render_image(&self, camera: &Camera, viewport: &Viewport) -> image::RgbImage {
        let rendered = self.render(camera, viewport);
        let mut imgbuf: image::RgbImage = image::ImageBuffer::new(viewport.width, viewport.height);

        for (i, color) in rendered.into_iter().enumerate() {
            imgbuf.put_pixel(
                i as u32 % viewport.width,
                i as u32 / viewport.width,
                color.to_rgb(),
            );
        }

        imgbuf
    }

    /// Render the image out to the desired save file.
    pub fn render_to<P: AsRef<Path>>(
        &self,
        camera: &Camera,
        viewport: &Viewport,
        path: P,
        format: image::ImageFormat,
    ) -> image::ImageResult<()> {
        self.render_image(camera, viewport)
            .save_with_format(path, format)
    }
}
