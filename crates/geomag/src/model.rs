// Geomagnetic lookup over the three field grids

use crate::config::SamplingConfig;
use crate::error::{GeoMagError, GeoMagResult};
use crate::grid::{FieldKind, Grid};
use crate::tables::{DECLINATION_TABLE, INCLINATION_TABLE, STRENGTH_TABLE};
use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

static REFERENCE_MODEL: OnceLock<MagneticModel> = OnceLock::new();

/// Magnetic declination at a position, in degrees (positive east)
pub fn magnetic_declination(lat: f32, lon: f32) -> f32 {
    MagneticModel::reference().sample(FieldKind::Declination, lat, lon)
}

/// Magnetic inclination at a position, in degrees (positive down)
pub fn magnetic_inclination(lat: f32, lon: f32) -> f32 {
    MagneticModel::reference().sample(FieldKind::Inclination, lat, lon)
}

/// Total field strength at a position, in centi-Tesla
pub fn magnetic_field_strength(lat: f32, lon: f32) -> f32 {
    MagneticModel::reference().sample(FieldKind::Strength, lat, lon)
}

/// All three field quantities at one position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagneticField {
    /// Degrees, positive east of true north
    pub declination: f32,
    /// Degrees, positive below the horizontal plane
    pub inclination: f32,
    /// Centi-Tesla
    pub strength: f32,
}

impl MagneticField {
    /// Field vector in the local North-East-Down frame, same unit as `strength`
    pub fn to_ned_vector(&self) -> Vec3 {
        let declination = self.declination.to_radians();
        let inclination = self.inclination.to_radians();

        let horizontal = self.strength * inclination.cos();
        Vec3::new(
            horizontal * declination.cos(),
            horizontal * declination.sin(),
            self.strength * inclination.sin(),
        )
    }
}

/// On-disk layout of a table file
#[derive(Debug, Serialize, Deserialize)]
struct TableFile {
    declination: Vec<Vec<i16>>,
    inclination: Vec<Vec<i16>>,
    strength: Vec<Vec<i16>>,
    sampling: SamplingConfig,
}

/// Declination, inclination and strength grids sharing one sampling mesh
#[derive(Debug, Clone)]
pub struct MagneticModel {
    config: SamplingConfig,
    declination: Grid,
    inclination: Grid,
    strength: Grid,
}

impl MagneticModel {
    /// Model built from the compiled-in tables, initialized on first use
    pub fn reference() -> &'static MagneticModel {
        REFERENCE_MODEL.get_or_init(|| {
            Self::from_reference_tables()
                .expect("compiled-in tables must match the reference sampling config")
        })
    }

    fn from_reference_tables() -> GeoMagResult<Self> {
        let config = SamplingConfig::REFERENCE;
        Self::new(
            Grid::from_table(FieldKind::Declination, config, &DECLINATION_TABLE)?,
            Grid::from_table(FieldKind::Inclination, config, &INCLINATION_TABLE)?,
            Grid::from_table(FieldKind::Strength, config, &STRENGTH_TABLE)?,
        )
    }

    /// Assemble a model from three grids
    ///
    /// # Arguments
    /// * `declination`, `inclination`, `strength` - Grids of the matching
    ///   kind, all on the same sampling mesh
    pub fn new(declination: Grid, inclination: Grid, strength: Grid) -> GeoMagResult<Self> {
        let config = *declination.config();

        for (grid, kind) in [
            (&declination, FieldKind::Declination),
            (&inclination, FieldKind::Inclination),
            (&strength, FieldKind::Strength),
        ] {
            if grid.kind() != kind {
                return Err(GeoMagError::InvalidConfig(format!(
                    "expected a {} grid, got {}",
                    kind,
                    grid.kind()
                )));
            }
            if *grid.config() != config {
                return Err(GeoMagError::InvalidConfig(format!(
                    "{} grid uses a different sampling mesh than declination",
                    kind
                )));
            }
        }

        debug!(
            "Magnetic model ready: {}x{} vertices every {} degrees",
            config.lat_bands(),
            config.lon_bands(),
            config.resolution
        );

        Ok(Self {
            config,
            declination,
            inclination,
            strength,
        })
    }

    /// Load a model from a TOML table file
    pub fn load_from_file(path: impl AsRef<Path>) -> GeoMagResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let file: TableFile = toml::from_str(&content)?;
        debug!("Loaded magnetic tables from {}", path.display());

        let config = file.sampling;
        Self::new(
            Grid::from_rows(FieldKind::Declination, config, &file.declination)?,
            Grid::from_rows(FieldKind::Inclination, config, &file.inclination)?,
            Grid::from_rows(FieldKind::Strength, config, &file.strength)?,
        )
    }

    /// Write the model as a TOML table file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> GeoMagResult<()> {
        let collect_rows =
            |grid: &Grid| -> Vec<Vec<i16>> { grid.rows().map(<[i16]>::to_vec).collect() };
        let file = TableFile {
            declination: collect_rows(&self.declination),
            inclination: collect_rows(&self.inclination),
            strength: collect_rows(&self.strength),
            sampling: self.config,
        };
        let content = toml::to_string_pretty(&file)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    pub fn grid(&self, kind: FieldKind) -> &Grid {
        match kind {
            FieldKind::Declination => &self.declination,
            FieldKind::Inclination => &self.inclination,
            FieldKind::Strength => &self.strength,
        }
    }

    /// Interpolated value of one quantity, `0.0` outside [-90, 90] / [-180, 180]
    pub fn sample(&self, kind: FieldKind, lat: f32, lon: f32) -> f32 {
        self.grid(kind).sample(lat, lon)
    }

    /// Interpolated value of one quantity, erroring outside the accepted range
    pub fn try_sample(&self, kind: FieldKind, lat: f32, lon: f32) -> GeoMagResult<f32> {
        self.grid(kind).try_sample(lat, lon)
    }

    /// All three quantities at one position
    pub fn field_at(&self, lat: f32, lon: f32) -> MagneticField {
        MagneticField {
            declination: self.declination.sample(lat, lon),
            inclination: self.inclination.sample(lat, lon),
            strength: self.strength.sample(lat, lon),
        }
    }
}
