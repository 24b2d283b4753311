use crate::error::{GeoMagError, GeoMagResult};
use serde::{Deserialize, Serialize};

/// Largest absolute latitude accepted by a lookup, in degrees
pub const MAX_ABS_LAT: f32 = 90.0;
/// Largest absolute longitude accepted by a lookup, in degrees
pub const MAX_ABS_LON: f32 = 180.0;
/// Upper limit on the number of cells along one axis of a mesh
pub const MAX_CELLS_PER_AXIS: f32 = 100_000.0;

/// Geometry of a lat/lon sampling mesh.
///
/// Vertices sit every `resolution` degrees from `min_lat` to `max_lat` and
/// from `min_lon` to `max_lon`, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub min_lat: f32,
    pub max_lat: f32,
    pub min_lon: f32,
    pub max_lon: f32,
    pub resolution: f32,
}

impl SamplingConfig {
    /// Mesh of the compiled-in reference tables
    pub const REFERENCE: Self = Self {
        min_lat: -60.0,
        max_lat: 60.0,
        min_lon: -180.0,
        max_lon: 180.0,
        resolution: 10.0,
    };

    /// Number of grid rows (latitude vertices)
    pub fn lat_bands(&self) -> usize {
        Self::bands(self.min_lat, self.max_lat, self.resolution)
    }

    /// Number of grid columns (longitude vertices)
    pub fn lon_bands(&self) -> usize {
        Self::bands(self.min_lon, self.max_lon, self.resolution)
    }

    /// Latitude of the given row, in degrees
    pub fn row_lat(&self, row: usize) -> f32 {
        self.min_lat + row as f32 * self.resolution
    }

    /// Longitude of the given column, in degrees
    pub fn col_lon(&self, col: usize) -> f32 {
        self.min_lon + col as f32 * self.resolution
    }

    /// Check that the mesh is usable for interpolation.
    ///
    /// Each axis must span at least one full cell, be a whole number of cells
    /// wide (at most `MAX_CELLS_PER_AXIS`) and start on a multiple of the
    /// resolution.
    pub fn validate(&self) -> GeoMagResult<()> {
        let values = [
            self.min_lat,
            self.max_lat,
            self.min_lon,
            self.max_lon,
            self.resolution,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(GeoMagError::InvalidConfig(
                "bounds and resolution must be finite".to_string(),
            ));
        }
        if self.resolution <= 0.0 {
            return Err(GeoMagError::InvalidConfig(format!(
                "resolution must be positive, got {}",
                self.resolution
            )));
        }

        Self::validate_axis("latitude", self.min_lat, self.max_lat, self.resolution)?;
        Self::validate_axis("longitude", self.min_lon, self.max_lon, self.resolution)
    }

    fn validate_axis(name: &str, min: f32, max: f32, resolution: f32) -> GeoMagResult<()> {
        if max - min < resolution {
            return Err(GeoMagError::InvalidConfig(format!(
                "{name} range [{min}, {max}] is narrower than one {resolution} degree cell"
            )));
        }
        let cells = (max - min) / resolution;
        if cells > MAX_CELLS_PER_AXIS {
            return Err(GeoMagError::InvalidConfig(format!(
                "{name} range [{min}, {max}] holds {cells} cells at {resolution} degrees, \
                 limit is {MAX_CELLS_PER_AXIS}"
            )));
        }
        if (cells - cells.round()).abs() > 1e-4 {
            return Err(GeoMagError::InvalidConfig(format!(
                "{name} range [{min}, {max}] is not a multiple of {resolution} degrees"
            )));
        }
        // Lookups round down to multiples of the resolution, so the mesh must sit on them
        let offset = min / resolution;
        if (offset - offset.round()).abs() > 1e-4 {
            return Err(GeoMagError::InvalidConfig(format!(
                "{name} bound {min} is not aligned to {resolution} degrees"
            )));
        }
        Ok(())
    }

    fn bands(min: f32, max: f32, resolution: f32) -> usize {
        // Unvalidated meshes saturate instead of overflowing
        (((max - min) / resolution).round() as usize).saturating_add(1)
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}
