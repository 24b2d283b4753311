use crate::grid::FieldKind;
use thiserror::Error;

pub type GeoMagResult<T> = Result<T, GeoMagError>;

#[derive(Error, Debug)]
pub enum GeoMagError {
    /// Coordinates outside [-90, 90] latitude or [-180, 180] longitude
    #[error("coordinates out of domain: lat {lat}, lon {lon}")]
    OutOfDomain { lat: f32, lon: f32 },

    #[error("invalid sampling config: {0}")]
    InvalidConfig(String),

    /// A table does not have the shape its sampling config describes
    #[error("{field} table: expected {expected} values, found {actual}")]
    ShapeMismatch {
        field: FieldKind,
        expected: usize,
        actual: usize,
    },

    #[error("failed to access table file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse table file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize tables: {0}")]
    Serialize(#[from] toml::ser::Error),
}
