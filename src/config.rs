use std::path::{Path, PathBuf};

use clap::{App, Arg, ArgMatches};
use raytracer::camera::Viewport;

use crate::{error::AppError, input::CameraCommand};

/// Everything the command line decides about a run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub output: PathBuf,
    pub viewport: Viewport,
    pub max_ray_depth: u32,

    /// Camera moves, one extra frame rendered after each.
    pub commands: Vec<CameraCommand>,
}

pub fn app() -> App<'static, 'static> {
    App::new("Blocktrace")
        .version("0.1")
        .about("Ray traces a scene of cubic blocks into PNG frames")
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Where the first frame is written; later frames get a number appended")
                .default_value("render.png"),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("PIXELS")
                .default_value("1200"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("PIXELS")
                .default_value("600"),
        )
        .arg(
            Arg::with_name("fov")
                .long("fov")
                .value_name("DEGREES")
                .help("Horizontal field of view")
                .default_value("60"),
        )
        .arg(
            Arg::with_name("depth")
                .long("depth")
                .value_name("BOUNCES")
                .help("Reflection/refraction bounces before a ray only sees the sky")
                .default_value("3"),
        )
        .arg(
            Arg::with_name("moves")
                .short("m")
                .long("moves")
                .value_name("COMMANDS")
                .help("Comma separated camera moves (forward, back, left, right, up, down)")
                .use_delimiter(true)
                .multiple(true),
        )
}

fn number<T: std::str::FromStr>(matches: &ArgMatches, name: &'static str) -> Result<T, AppError> {
    let value = matches.value_of(name).unwrap_or_default();
    value.trim().parse().map_err(|_| AppError::InvalidNumber {
        name,
        value: value.to_owned(),
    })
}

impl Settings {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, AppError> {
        let width: u32 = number(matches, "width")?;
        let height: u32 = number(matches, "height")?;
        if width == 0 || height == 0 {
            return Err(AppError::EmptyViewport(width, height));
        }

        let fov: f64 = number(matches, "fov")?;
        let commands = matches
            .values_of("moves")
            .map(|values| {
                values
                    .filter(|v| !v.trim().is_empty())
                    .map(str::parse::<CameraCommand>)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            output: PathBuf::from(matches.value_of("output").unwrap_or("render.png")),
            viewport: Viewport {
                width,
                height,
                fov: fov.to_radians(),
            },
            max_ray_depth: number(matches, "depth")?,
            commands,
        })
    }
}

/// The path for a frame: the output path itself for the first one, then
/// `name-0001.ext`, `name-0002.ext`, ...
pub fn frame_path(output: &Path, frame: usize) -> PathBuf {
    if frame == 0 {
        return output.to_path_buf();
    }

    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "render".to_owned());
    let name = match output.extension() {
        Some(ext) => format!("{}-{:04}.{}", stem, frame, ext.to_string_lossy()),
        None => format!("{}-{:04}", stem, frame),
    };

    output.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(args: &[&str]) -> Result<Settings, AppError> {
        let matches = app().get_matches_from_safe(
            std::iter::once("blocktrace").chain(args.iter().copied()),
        );
        Settings::from_matches(&matches.unwrap())
    }

    #[test]
    fn defaults() {
        let s = settings(&[]).unwrap();

        assert_eq!(s.output, PathBuf::from("render.png"));
        assert_eq!((s.viewport.width, s.viewport.height), (1200, 600));
        assert!((s.viewport.fov - std::f64::consts::PI / 3.).abs() < 1e-12);
        assert_eq!(s.max_ray_depth, 3);
        assert!(s.commands.is_empty());
    }

    #[test]
    fn moves_are_comma_separated() {
        let s = settings(&["-m", "forward,left,left"]).unwrap();
        assert_eq!(
            s.commands,
            vec![CameraCommand::Forward, CameraCommand::Left, CameraCommand::Left]
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            settings(&["--width", "wide"]),
            Err(AppError::InvalidNumber { name: "width", .. })
        ));
        assert!(matches!(
            settings(&["--height", "0"]),
            Err(AppError::EmptyViewport(1200, 0))
        ));
        assert!(matches!(
            settings(&["-m", "forward,sideways"]),
            Err(AppError::UnknownCommand(_))
        ));
    }

    #[test]
    fn frame_paths_are_numbered() {
        let out = Path::new("out/house.png");
        assert_eq!(frame_path(out, 0), PathBuf::from("out/house.png"));
        assert_eq!(frame_path(out, 12), PathBuf::from("out/house-0012.png"));
        assert_eq!(frame_path(Path::new("house"), 1), PathBuf::from("house-0001"));
    }
}
