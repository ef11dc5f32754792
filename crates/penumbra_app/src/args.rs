// Command line parsing for the resolve host.

use std::path::PathBuf;

use glam::UVec2;

pub const USAGE: &str = "usage: penumbra_app <scene.json> [output.png] [--config <config.json>] \
                         [--width <px>] [--height <px>] [--scale <world units per px>]";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ArgsError {
    #[error("missing scene path\n{usage}", usage = USAGE)]
    MissingScene,
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },
    #[error("unexpected argument {0}\n{usage}", usage = USAGE)]
    Unexpected(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppArgs {
    pub scene: PathBuf,
    pub output: PathBuf,
    pub config: Option<PathBuf>,
    pub viewport: UVec2,
    /// Overrides the scene camera's scale.
    pub scale: Option<f32>,
}

impl AppArgs {
    pub const DEFAULT_OUTPUT: &'static str = "lit.png";
    pub const DEFAULT_VIEWPORT: UVec2 = UVec2::new(640, 360);

    pub fn parse(args: &[String]) -> Result<Self, ArgsError> {
        let mut positional = Vec::new();
        let mut config = None;
        let mut viewport = Self::DEFAULT_VIEWPORT;
        let mut scale = None;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--config" => config = Some(PathBuf::from(value(&mut iter, arg)?)),
                "--width" => viewport.x = parse_positive(arg, value(&mut iter, arg)?)?,
                "--height" => viewport.y = parse_positive(arg, value(&mut iter, arg)?)?,
                "--scale" => {
                    let raw = value(&mut iter, arg)?;
                    match raw.parse::<f32>() {
                        Ok(s) if s > 0.0 && s.is_finite() => scale = Some(s),
                        _ => return Err(invalid(arg, raw)),
                    }
                }
                flag if flag.starts_with("--") => {
                    return Err(ArgsError::Unexpected(flag.to_string()));
                }
                path => positional.push(PathBuf::from(path)),
            }
        }

        let mut positional = positional.into_iter();
        let scene = positional.next().ok_or(ArgsError::MissingScene)?;
        let output = positional
            .next()
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_OUTPUT));
        if let Some(extra) = positional.next() {
            return Err(ArgsError::Unexpected(extra.display().to_string()));
        }

        Ok(Self {
            scene,
            output,
            config,
            viewport,
            scale,
        })
    }
}

fn value<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> Result<&'a str, ArgsError> {
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}

fn parse_positive(flag: &str, raw: &str) -> Result<u32, ArgsError> {
    match raw.parse::<u32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(invalid(flag, raw)),
    }
}

fn invalid(flag: &str, raw: &str) -> ArgsError {
    ArgsError::InvalidValue {
        flag: flag.to_string(),
        value: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_scene_only() {
        let parsed = AppArgs::parse(&args(&["scene.json"])).unwrap();
        assert_eq!(parsed.scene, PathBuf::from("scene.json"));
        assert_eq!(parsed.output, PathBuf::from("lit.png"));
        assert_eq!(parsed.viewport, UVec2::new(640, 360));
        assert_eq!(parsed.config, None);
        assert_eq!(parsed.scale, None);
    }

    #[test]
    fn parse_all_options() {
        let parsed = AppArgs::parse(&args(&[
            "--width", "128", "scene.json", "--config", "lighting.json", "out.png", "--height",
            "64", "--scale", "0.25",
        ]))
        .unwrap();
        assert_eq!(parsed.output, PathBuf::from("out.png"));
        assert_eq!(parsed.config, Some(PathBuf::from("lighting.json")));
        assert_eq!(parsed.viewport, UVec2::new(128, 64));
        assert_eq!(parsed.scale, Some(0.25));
    }

    #[test]
    fn reject_missing_scene() {
        assert_eq!(AppArgs::parse(&[]).unwrap_err(), ArgsError::MissingScene);
    }

    #[test]
    fn reject_bad_values() {
        let err = AppArgs::parse(&args(&["scene.json", "--width", "0"])).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidValue { .. }));

        let err = AppArgs::parse(&args(&["scene.json", "--scale", "-1"])).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidValue { .. }));

        let err = AppArgs::parse(&args(&["scene.json", "--height"])).unwrap_err();
        assert_eq!(err, ArgsError::MissingValue("--height".to_string()));
    }

    #[test]
    fn reject_unknown_flag_and_extra_paths() {
        let err = AppArgs::parse(&args(&["scene.json", "--hdr"])).unwrap_err();
        assert_eq!(err, ArgsError::Unexpected("--hdr".to_string()));

        let err = AppArgs::parse(&args(&["a.json", "b.png", "c.png"])).unwrap_err();
        assert_eq!(err, ArgsError::Unexpected("c.png".to_string()));
    }
}
