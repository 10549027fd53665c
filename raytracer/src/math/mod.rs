mod ray;
mod vector;

pub use ray::*;
pub use vector::*;

/// Bend an incident direction through a surface using Snell's law, where `eta`
/// is the ratio of the indices of refraction (from over to) and `normal` must
/// face against the incident direction. With a normal on the same side as the
/// incident ray the result is mirrored back instead.
///
/// Under total internal reflection there is no transmitted ray, and a zero vector is returned.
pub fn refract(incident: Vector3, normal: Vector3, eta: f64) -> Vector3 {
    let cos_i = normal.dot(incident);
    let k = 1. - eta * eta * (1. - cos_i * cos_i);
    if k < 0. {
        return Vector3::zero();
    }

    incident * eta - normal * (eta * cos_i + k.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refract_with_unit_ratio_passes_straight_through() {
        let incident = Vector3::new(0., 0., -1.);
        let normal = Vector3::new(0., 0., 1.);
        assert_eq!(refract(incident, normal, 1.), incident);
    }

    #[test]
    fn refract_bends_toward_normal_entering_denser_medium() {
        let incident = Vector3::new(1., 0., -1.).normalize();
        let normal = Vector3::new(0., 0., 1.);
        let out = refract(incident, normal, 1. / 1.5);

        assert!((out.magnitude() - 1.).abs() < 1e-9);
        // the transmitted ray is closer to -normal than the incident one
        assert!(out.x < incident.x);
        assert!(out.z < 0.);
    }

    #[test]
    fn total_internal_reflection_yields_zero() {
        let incident = Vector3::new(1., 0., -0.1).normalize();
        let normal = Vector3::new(0., 0., 1.);
        assert_eq!(refract(incident, normal, 1.5), Vector3::zero());
    }
}
