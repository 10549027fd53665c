mod config;
mod error;
mod house;
mod input;

use std::time::Instant;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::{
    config::{frame_path, Settings},
    error::AppError,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let matches = config::app().get_matches();

    if let Err(e) = Settings::from_matches(&matches).and_then(|settings| run(&settings)) {
        error!("Failed to render: {}", e);
        std::process::exit(1);
    }
}

fn run(settings: &Settings) -> Result<(), AppError> {
    let start_time = Instant::now();

    let mut scene = house::scene();
    scene.options.max_ray_depth = settings.max_ray_depth;
    let mut camera = house::camera();

    info!(
        "Scene constructed with {} blocks in {}s",
        scene.objects.len(),
        start_time.elapsed().as_secs_f32()
    );

    // the first frame is the starting view, then one more per camera move
    let moves = std::iter::once(None).chain(settings.commands.iter().copied().map(Some));
    for (frame, command) in moves.enumerate() {
        if let Some(command) = command {
            command.apply(&mut camera);
        }

        let now = Instant::now();
        let path = frame_path(&settings.output, frame);
        scene.render_to(&camera, &settings.viewport, &path, image::ImageFormat::Png)?;

        info!(
            "Frame {} written to {} in {}s",
            frame,
            path.display(),
            now.elapsed().as_secs_f32()
        );
    }

    info!("Operation complete in {}s", start_time.elapsed().as_secs_f32());
    Ok(())
}
