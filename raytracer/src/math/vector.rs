use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// A vector in 3D space.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Instantiate a new Vector3.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    pub const fn zero() -> Self {
        Self::splat(0.)
    }

    pub const fn up() -> Self {
        Self::new(0., 1., 0.)
    }

    /// Find the dot product between two Vector3s.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross two Vector3s.
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: -self.x * other.z + self.z * other.x,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Find the magnitude of this Vector3.
    pub fn magnitude(self) -> f64 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }

    /// Normalize this Vector3 by dividing it by its own magnitude.
    ///
    /// A zero-length vector produces NaN components.
    pub fn normalize(self) -> Self {
        self / self.magnitude()
    }

    /// Like [`normalize`](Self::normalize), but a vector with no usable length
    /// comes back as zero instead of NaN.
    pub fn normalize_or_zero(self) -> Self {
        let mag = self.magnitude();
        if mag > 0. && mag.is_finite() {
            self / mag
        } else {
            Self::zero()
        }
    }

    /// Mirror this vector about a normal.
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2. * self.dot(normal))
    }

    /// Rotate this vector about a unit axis by `angle` radians (Rodrigues' formula).
    pub fn rotate_about(self, axis: Self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        self * cos + axis.cross(self) * sin + axis * (axis.dot(self) * (1. - cos))
    }

    /// Get a component by axis index (0 = x, 1 = y, 2 = z).
    pub fn axis(self, i: usize) -> f64 {
        match i {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    pub fn axis_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => &mut self.z,
        }
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Div for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            z: self.z / rhs.z,
        }
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vector3, b: Vector3) -> bool {
        (a - b).magnitude() < 1e-9
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        let x = Vector3::new(1., 0., 0.);
        let y = Vector3::new(0., 1., 0.);
        assert_eq!(x.cross(y), Vector3::new(0., 0., 1.));
        assert_eq!(y.cross(x), Vector3::new(0., 0., -1.));
    }

    #[test]
    fn normalize_zero_vector() {
        assert!(Vector3::zero().normalize().x.is_nan());
        assert_eq!(Vector3::zero().normalize_or_zero(), Vector3::zero());
        assert_eq!(
            Vector3::new(0., 3., 4.).normalize_or_zero(),
            Vector3::new(0., 0.6, 0.8)
        );
    }

    #[test]
    fn reflect_flips_normal_component() {
        let v = Vector3::new(1., -1., 0.);
        assert_eq!(v.reflect(Vector3::up()), Vector3::new(1., 1., 0.));
    }

    #[test]
    fn rotate_quarter_turn_about_up() {
        let v = Vector3::new(0., 0., 1.);
        let r = v.rotate_about(Vector3::up(), std::f64::consts::FRAC_PI_2);
        assert!(close(r, Vector3::new(1., 0., 0.)));
    }

    #[test]
    fn division_by_zero_is_infinite() {
        let t = Vector3::new(1., -1., 0.) / Vector3::zero();
        assert_eq!(t.x, f64::INFINITY);
        assert_eq!(t.y, f64::NEG_INFINITY);
        assert!(t.z.is_nan());
    }
}
