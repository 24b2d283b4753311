pub mod angles;
pub mod config;
pub mod error;
pub mod frames;
pub mod grid;
pub mod model;
pub mod tables;

pub use config::SamplingConfig;
pub use error::{GeoMagError, GeoMagResult};
pub use grid::{FieldKind, Grid, index_for};
pub use model::{
    MagneticField, MagneticModel, magnetic_declination, magnetic_field_strength,
    magnetic_inclination,
};
