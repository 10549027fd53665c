use std::str::FromStr;

use raytracer::camera::Camera;
use tracing::debug;

use crate::error::AppError;

/// One step of camera movement between two frames, standing in for a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraCommand {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl CameraCommand {
    pub fn apply(self, camera: &mut Camera) {
        match self {
            Self::Forward => camera.translate(1.),
            Self::Back => camera.translate(-1.),
            Self::Left => camera.rotate(-1., 0.),
            Self::Right => camera.rotate(1., 0.),
            Self::Up => camera.rotate(0., 1.),
            Self::Down => camera.rotate(0., -1.),
        }

        debug!(command = ?self, position = ?camera.position, "moved camera");
    }
}

impl FromStr for CameraCommand {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "forward" | "f" => Self::Forward,
            "back" | "b" => Self::Back,
            "left" | "l" => Self::Left,
            "right" | "r" => Self::Right,
            "up" | "u" => Self::Up,
            "down" | "d" => Self::Down,
            _ => return Err(AppError::UnknownCommand(s.to_owned())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_shorthands() {
        assert_eq!("forward".parse::<CameraCommand>().unwrap(), CameraCommand::Forward);
        assert_eq!(" Left ".parse::<CameraCommand>().unwrap(), CameraCommand::Left);
        assert_eq!("d".parse::<CameraCommand>().unwrap(), CameraCommand::Down);
        assert!(matches!(
            "jump".parse::<CameraCommand>(),
            Err(AppError::UnknownCommand(s)) if s == "jump"
        ));
    }

    #[test]
    fn forward_and_back_cancel_out() {
        let mut camera = Camera::default();
        CameraCommand::Forward.apply(&mut camera);
        assert_eq!(camera.position.z, 4.);

        CameraCommand::Back.apply(&mut camera);
        assert_eq!(camera, Camera::default());
    }

    #[test]
    fn turning_keeps_distance_to_target() {
        let mut camera = Camera::default();
        CameraCommand::Right.apply(&mut camera);
        CameraCommand::Up.apply(&mut camera);

        let distance = (camera.position - camera.target).magnitude();
        assert!((distance - 5.).abs() < 1e-9);
        assert_ne!(camera.position, Camera::default().position);
    }
}
