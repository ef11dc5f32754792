use std::path::Path;

use penumbra_core::{LightingConfig, LightingError, init_compute_pool};
use penumbra_lighting::{LightingContext, LitFrame};
use penumbra_scene::Scene;

use crate::args::{AppArgs, ArgsError};

mod args;

#[derive(thiserror::Error, Debug)]
enum AppError {
    #[error(transparent)]
    Args(#[from] ArgsError),
    #[error(transparent)]
    Lighting(#[from] LightingError),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), AppError> {
    let args = AppArgs::parse(args)?;

    let config = match &args.config {
        Some(path) => LightingConfig::load(path)?,
        None => LightingConfig::default(),
    };
    init_compute_pool(config.threads);

    let mut scene = Scene::load(&args.scene)?;
    if let Some(scale) = args.scale {
        scene.camera.scale = scale;
    }

    // 1. Collect this frame's lights and occluders
    let (lights, field) = scene.prepare_frame(&config, args.viewport)?;
    let view = scene.camera.view(args.viewport);

    // 2. Resolve every pixel
    let frame = LightingContext::new(
        &view,
        lights.ambient,
        &lights.point_lights,
        &lights.spot_lights,
        &field,
    )
    .with_config(&config)
    .resolve_frame();

    // 3. Write the result
    save_png(&frame, &args.output)?;
    log::info!(
        "Wrote {}x{} frame to {}",
        frame.width,
        frame.height,
        args.output.display()
    );
    Ok(())
}

fn save_png(frame: &LitFrame, path: &Path) -> Result<(), LightingError> {
    let image = image::RgbaImage::from_raw(frame.width, frame.height, frame.to_rgba8())
        .ok_or_else(|| LightingError::image("frame size does not match its pixel buffer"))?;
    image.save(path).map_err(LightingError::image)
}
