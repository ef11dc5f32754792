//! Per-pixel 2D lighting resolve.
//!
//! Combines an ambient term with point and spot lights, shadowed by sphere
//! tracing an occluder distance field.

pub mod attenuation;
pub mod distance_field;
pub mod light;
pub mod raymarch;
mod resolve;
pub mod spot;
mod storage;

pub use attenuation::attenuation;
pub use distance_field::{
    ConstantDistanceField, DistanceField, FieldBounds, FnDistanceField, GridDistanceField,
};
pub use light::{AmbientLight, PointLight, SpotLight};
pub use raymarch::raymarch;
pub use resolve::{LightingContext, LitFrame};
pub use spot::{effective_center, spot_mask};
pub use storage::LightList;
