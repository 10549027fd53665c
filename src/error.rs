use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("{name} must be a number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("unknown camera command '{0}', expected one of forward, back, left, right, up, down")]
    UnknownCommand(String),

    #[error("the image must be at least 1x1, got {0}x{1}")]
    EmptyViewport(u32, u32),
}
