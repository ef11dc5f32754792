use std::path::PathBuf;

/// Errors raised at the fallible edges of the lighting pipeline: light
/// validation, distance field construction and config or scene loading.
/// The per-pixel resolve itself never fails.
#[derive(thiserror::Error, Debug)]
pub enum LightingError {
    #[error("light radius must be strictly positive, got {radius}")]
    InvalidRadius { radius: f32 },

    #[error("spot light inner angle {inner} exceeds outer angle {outer}")]
    InvertedCone { inner: f32, outer: f32 },

    #[error("distance field expects {expected} texels, got {actual}")]
    FieldSize { expected: usize, actual: usize },

    #[error("distance field has no texels")]
    EmptyField,

    #[error("distance field bounds have zero or negative area")]
    DegenerateBounds,

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(String),
}

impl LightingError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LightingError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn image<T: ToString>(msg: T) -> Self {
        LightingError::Image(msg.to_string())
    }
}
