pub use rayon;

pub mod camera;
pub mod config;
mod error;

pub use config::{DEFAULT_RAYMARCH_STEPS, LightingConfig, StorageCapability};
pub use error::LightingError;

/// Configures the global compute pool used by the resolve pass.
///
/// Rayon initializes itself globally the first time it is used, so this has
/// to run before any frame is resolved to have an effect.
pub fn init_compute_pool(threads: Option<usize>) {
    let mut builder =
        rayon::ThreadPoolBuilder::new().thread_name(|i| format!("penumbra-resolve-{i}"));
    if let Some(threads) = threads {
        builder = builder.num_threads(threads);
    }

    match builder.build_global() {
        Ok(()) => log::debug!("Compute pool ready with {} threads", rayon::current_num_threads()),
        Err(e) => log::warn!("Compute pool already initialized: {e}"),
    }
}
