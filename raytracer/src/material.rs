use std::ops::{Add, Mul};

/// An RGB color with channels in the 0-255 domain.
///
/// Channels are kept as `f64` and are allowed to leave that range while
/// shading; they are only clamped when converted into a pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const fn white() -> Self {
        Self::new(255., 255., 255.)
    }

    pub const fn black() -> Self {
        Self::new(0., 0., 0.)
    }

    /// Instantiate a new Color.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Clamp into the displayable range and quantize to 8 bits per channel.
    pub fn to_rgb(self) -> image::Rgb<u8> {
        // `as u8` maps NaN to 0
        let q = |c: f64| c.clamp(0., 255.) as u8;
        image::Rgb([q(self.r), q(self.g), q(self.b)])
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

/// A material for a scene object.
///
/// `reflectivity + transparency` is expected to stay at or below 1. This is
/// not enforced, and larger sums brighten the surface past its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// The base (diffuse) color.
    pub color: Color,

    /// Weight of the diffuse term.
    pub albedo: f64,

    /// Weight of the specular term.
    pub specular_albedo: f64,

    /// Shininess. Larger values give a tighter highlight.
    pub specular_exponent: f64,

    /// The reflectiveness (0 to 1) of this material.
    pub reflectivity: f64,

    /// The transparency of this object. At 1 the object is completely transparent, at 0 completely opaque.
    pub transparency: f64,

    /// The ratio of indices of refraction used when bending rays into this material.
    /// At 1, rays pass through unbent.
    pub refraction_index: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::white(),
            albedo: 1.,
            specular_albedo: 0.,
            specular_exponent: 1.,
            reflectivity: 0.,
            transparency: 0.,
            refraction_index: 1.,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_not_clamped() {
        let c = Color::new(200., 100., 0.) * 2. + Color::new(10., 10., 10.);
        assert_eq!(c, Color::new(410., 210., 10.));
    }

    #[test]
    fn component_multiplication() {
        let c = Color::new(2., 3., 4.) * Color::new(0.5, 2., 0.);
        assert_eq!(c, Color::new(1., 6., 0.));
    }

    #[test]
    fn clamps_only_on_output() {
        let rgb = Color::new(300., -20., 127.9).to_rgb();
        assert_eq!(rgb.0, [255, 0, 127]);
        assert_eq!(Color::new(f64::NAN, 0., 0.).to_rgb().0, [0, 0, 0]);
    }
}
