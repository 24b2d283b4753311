// Grid storage and bilinear lookup (engine-agnostic)

use crate::config::{MAX_ABS_LAT, MAX_ABS_LON, SamplingConfig};
use crate::error::{GeoMagError, GeoMagResult};
use log::debug;
use std::borrow::Cow;
use std::fmt;

/// Physical quantity stored in a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Declination,
    Inclination,
    Strength,
}

impl FieldKind {
    pub const ALL: [FieldKind; 3] = [
        FieldKind::Declination,
        FieldKind::Inclination,
        FieldKind::Strength,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FieldKind::Declination => "declination",
            FieldKind::Inclination => "inclination",
            FieldKind::Strength => "strength",
        }
    }

    /// Unit of the stored samples
    pub fn unit(self) -> &'static str {
        match self {
            FieldKind::Declination | FieldKind::Inclination => "deg",
            FieldKind::Strength => "cT",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a coordinate to the index of the grid line at or below it
///
/// # Arguments
/// * `value` - Coordinate in degrees
/// * `min` - First grid line of the axis
/// * `max` - Last grid line of the axis
/// * `resolution` - Spacing between grid lines
///
/// # Returns
/// Index `i` such that both `i` and `i + 1` are valid grid lines. Values at
/// or beyond `max - resolution` all land on the penultimate line.
pub fn index_for(value: f32, min: f32, max: f32, resolution: f32) -> usize {
    // Keep one step of headroom so the next grid line is always in bounds
    let clamped = value.max(min).min(max - resolution);
    ((clamped - min) / resolution).floor() as usize
}

/// True when the coordinates are inside the accepted input range
pub fn in_domain(lat: f32, lon: f32) -> bool {
    (-MAX_ABS_LAT..=MAX_ABS_LAT).contains(&lat) && (-MAX_ABS_LON..=MAX_ABS_LON).contains(&lon)
}

/// One quantity sampled on a regular lat/lon mesh.
///
/// Values are stored row-major, rows from `min_lat` northwards and columns
/// from `min_lon` eastwards. Compiled-in tables are borrowed, tables read
/// from a file are owned.
#[derive(Debug, Clone)]
pub struct Grid {
    kind: FieldKind,
    config: SamplingConfig,
    lat_bands: usize,
    lon_bands: usize,
    values: Cow<'static, [i16]>,
}

impl Grid {
    /// Build a grid from row-major values
    ///
    /// # Arguments
    /// * `kind` - Quantity the values describe
    /// * `config` - Mesh geometry, must validate
    /// * `values` - Exactly `lat_bands * lon_bands` samples
    pub fn new(
        kind: FieldKind,
        config: SamplingConfig,
        values: impl Into<Cow<'static, [i16]>>,
    ) -> GeoMagResult<Self> {
        config.validate()?;
        let values = values.into();
        let lat_bands = config.lat_bands();
        let lon_bands = config.lon_bands();

        let expected = lat_bands.checked_mul(lon_bands).ok_or_else(|| {
            GeoMagError::InvalidConfig(format!(
                "{lat_bands}x{lon_bands} vertices do not fit in memory"
            ))
        })?;
        if values.len() != expected {
            return Err(GeoMagError::ShapeMismatch {
                field: kind,
                expected,
                actual: values.len(),
            });
        }

        Ok(Self {
            kind,
            config,
            lat_bands,
            lon_bands,
            values,
        })
    }

    /// Borrow a static 2-D table without copying it
    pub fn from_table<const ROWS: usize, const COLS: usize>(
        kind: FieldKind,
        config: SamplingConfig,
        table: &'static [[i16; COLS]; ROWS],
    ) -> GeoMagResult<Self> {
        Self::new(kind, config, table.as_flattened())
    }

    /// Build a grid from nested rows, checking every row length
    pub fn from_rows(
        kind: FieldKind,
        config: SamplingConfig,
        rows: &[Vec<i16>],
    ) -> GeoMagResult<Self> {
        config.validate()?;
        let lon_bands = config.lon_bands();
        if let Some(row) = rows.iter().find(|row| row.len() != lon_bands) {
            return Err(GeoMagError::ShapeMismatch {
                field: kind,
                expected: lon_bands,
                actual: row.len(),
            });
        }

        Self::new(kind, config, rows.concat())
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    pub fn lat_bands(&self) -> usize {
        self.lat_bands
    }

    pub fn lon_bands(&self) -> usize {
        self.lon_bands
    }

    /// Raw value at a grid vertex, `None` outside the grid
    pub fn value_at(&self, row: usize, col: usize) -> Option<i16> {
        if row >= self.lat_bands || col >= self.lon_bands {
            return None;
        }
        Some(self.values[row * self.lon_bands + col])
    }

    /// Rows from south to north
    pub fn rows(&self) -> impl Iterator<Item = &[i16]> {
        self.values.chunks(self.lon_bands)
    }

    /// Smallest and largest stored value
    pub fn value_range(&self) -> (i16, i16) {
        self.values
            .iter()
            .fold((i16::MAX, i16::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// Sample the grid at a geographic position using bilinear interpolation
    ///
    /// # Arguments
    /// * `lat` - Latitude in degrees, [-90, 90]
    /// * `lon` - Longitude in degrees, [-180, 180]
    ///
    /// # Returns
    /// Interpolated value in the grid's unit, or `0.0` when the position is
    /// outside the accepted range. Positions inside the range but beyond the
    /// table's own coverage are clamped onto the nearest cell.
    pub fn sample(&self, lat: f32, lon: f32) -> f32 {
        if !in_domain(lat, lon) {
            debug!(
                "{} lookup outside domain (lat {}, lon {}), returning 0",
                self.kind, lat, lon
            );
            return 0.0;
        }
        self.interpolate(lat, lon)
    }

    /// Like [`Grid::sample`], but reports out-of-range positions as an error
    pub fn try_sample(&self, lat: f32, lon: f32) -> GeoMagResult<f32> {
        if !in_domain(lat, lon) {
            return Err(GeoMagError::OutOfDomain { lat, lon });
        }
        Ok(self.interpolate(lat, lon))
    }

    fn interpolate(&self, lat: f32, lon: f32) -> f32 {
        let res = self.config.resolution;

        // South-west corner of the enclosing cell
        let min_lat = (lat / res).floor() * res;
        let min_lon = (lon / res).floor() * res;

        let row = index_for(min_lat, self.config.min_lat, self.config.max_lat, res);
        let col = index_for(min_lon, self.config.min_lon, self.config.max_lon, res);

        let sw = self.vertex(row, col);
        let se = self.vertex(row, col + 1);
        let ne = self.vertex(row + 1, col + 1);
        let nw = self.vertex(row + 1, col);

        let lat_t = ((lat - min_lat) / res).clamp(0.0, 1.0);
        let lon_t = ((lon - min_lon) / res).clamp(0.0, 1.0);

        // Longitude first, then latitude
        let south = sw + (se - sw) * lon_t;
        let north = nw + (ne - nw) * lon_t;
        south + (north - south) * lat_t
    }

    fn vertex(&self, row: usize, col: usize) -> f32 {
        self.values[row * self.lon_bands + col] as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Single 10x10 degree cell with corners SW=0, SE=10, NW=20, NE=30
    fn single_cell() -> Grid {
        let config = SamplingConfig {
            min_lat: 0.0,
            max_lat: 10.0,
            min_lon: 0.0,
            max_lon: 10.0,
            resolution: 10.0,
        };
        Grid::new(FieldKind::Strength, config, vec![0i16, 10, 20, 30]).unwrap()
    }

    /// Three by three cells, value = 100 * row + col
    fn small_grid() -> Grid {
        let config = SamplingConfig {
            min_lat: -10.0,
            max_lat: 20.0,
            min_lon: -20.0,
            max_lon: 10.0,
            resolution: 10.0,
        };
        let rows: Vec<Vec<i16>> = (0..4)
            .map(|row| (0..4).map(|col| 100 * row + col).collect())
            .collect();
        Grid::from_rows(FieldKind::Declination, config, &rows).unwrap()
    }

    #[rstest]
    #[case(-60.0, 0)]
    #[case(-55.0, 0)]
    #[case(-50.0, 1)]
    #[case(0.0, 6)]
    #[case(49.999, 10)]
    #[case(50.0, 11)]
    #[case(60.0, 11)] // upper bound pulled back one step
    #[case(90.0, 11)]
    #[case(-90.0, 0)]
    fn test_index_for_latitude(#[case] value: f32, #[case] expected: usize) {
        assert_eq!(index_for(value, -60.0, 60.0, 10.0), expected);
    }

    #[rstest]
    #[case(-180.0, 0)]
    #[case(0.0, 18)]
    #[case(170.0, 35)]
    #[case(180.0, 35)]
    fn test_index_for_longitude(#[case] value: f32, #[case] expected: usize) {
        assert_eq!(index_for(value, -180.0, 180.0, 10.0), expected);
    }

    #[test]
    fn test_index_for_upper_bound_aliases_penultimate_band() {
        assert_eq!(
            index_for(60.0, -60.0, 60.0, 10.0),
            index_for(50.0, -60.0, 60.0, 10.0)
        );
        assert_eq!(
            index_for(180.0, -180.0, 180.0, 10.0),
            index_for(170.0, -180.0, 180.0, 10.0)
        );
    }

    #[test]
    fn test_index_for_never_leaves_room_for_overflow() {
        let bands = 13;
        let mut value = -100.0;
        while value <= 100.0 {
            let index = index_for(value, -60.0, 60.0, 10.0);
            assert!(index + 1 < bands, "index {} for value {}", index, value);
            value += 0.25;
        }
    }

    #[rstest]
    #[case(0.0, 0.0, 0.0)] // SW corner
    #[case(0.0, 5.0, 5.0)] // south edge midpoint
    #[case(5.0, 0.0, 10.0)] // west edge midpoint
    #[case(5.0, 5.0, 15.0)] // cell centre
    #[case(2.5, 7.5, 12.5)]
    fn test_single_cell_interpolation(#[case] lat: f32, #[case] lon: f32, #[case] expected: f32) {
        let grid = single_cell();
        let value = grid.sample(lat, lon);
        assert!(
            (value - expected).abs() < 1e-5,
            "value was {}, expected {}",
            value,
            expected
        );
    }

    #[test]
    fn test_upper_edge_aliases_penultimate_row() {
        // At the last grid line the fraction is zero and the row index is
        // pulled back, so the lookup reads the south-west corner
        let grid = single_cell();
        assert_eq!(grid.sample(10.0, 10.0), 0.0);
        assert_eq!(grid.sample(10.0, 5.0), 5.0);
    }

    #[test]
    fn test_vertices_are_exact() {
        let grid = small_grid();
        // Interior vertices only: the last row and column alias their neighbours
        for row in 0..grid.lat_bands() - 1 {
            for col in 0..grid.lon_bands() - 1 {
                let lat = grid.config().row_lat(row);
                let lon = grid.config().col_lon(col);
                let expected = grid.value_at(row, col).unwrap() as f32;
                assert_eq!(grid.sample(lat, lon), expected, "at ({}, {})", lat, lon);
            }
        }
    }

    #[test]
    fn test_cell_midpoint_is_corner_mean() {
        let grid = small_grid();
        // Cell with SW corner at (0, -10): rows 1-2, cols 1-2
        let corners = [(1, 1), (1, 2), (2, 2), (2, 1)];
        let mean = corners
            .iter()
            .map(|&(r, c)| grid.value_at(r, c).unwrap() as f32)
            .sum::<f32>()
            / 4.0;
        assert!((grid.sample(5.0, -5.0) - mean).abs() < 1e-4);
    }

    #[rstest]
    #[case(90.001, 0.0)]
    #[case(-90.001, 0.0)]
    #[case(0.0, 180.001)]
    #[case(0.0, -180.001)]
    #[case(f32::NAN, 0.0)]
    #[case(0.0, f32::INFINITY)]
    fn test_out_of_domain_returns_zero(#[case] lat: f32, #[case] lon: f32) {
        let grid = small_grid();
        assert_eq!(grid.sample(lat, lon), 0.0);
        assert!(matches!(
            grid.try_sample(lat, lon),
            Err(GeoMagError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn test_try_sample_matches_sample_in_domain() {
        let grid = small_grid();
        assert_eq!(grid.try_sample(3.0, -7.0).unwrap(), grid.sample(3.0, -7.0));
    }

    #[test]
    fn test_positions_beyond_table_are_clamped() {
        let grid = small_grid();
        // South of the table: row index clamps to 0, fraction still applies
        let south = grid.sample(-90.0, -20.0);
        assert!(south.is_finite());
        assert_eq!(south, grid.value_at(0, 0).unwrap() as f32);
        // Far east of the table lands in the last column pair
        let east = grid.sample(-10.0, 180.0);
        assert_eq!(east, grid.value_at(0, 2).unwrap() as f32);
    }

    #[test]
    fn test_value_at_bounds() {
        let grid = small_grid();
        assert_eq!(grid.value_at(3, 3), Some(303));
        assert_eq!(grid.value_at(4, 0), None);
        assert_eq!(grid.value_at(0, 4), None);
        assert_eq!(grid.value_range(), (0, 303));
        assert_eq!(grid.rows().count(), 4);
    }

    #[test]
    fn test_wrong_value_count_rejected() {
        let err = Grid::new(FieldKind::Inclination, SamplingConfig::REFERENCE, vec![0i16; 10])
            .unwrap_err();
        assert!(matches!(
            err,
            GeoMagError::ShapeMismatch {
                field: FieldKind::Inclination,
                expected: 481,
                actual: 10,
            }
        ));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let config = SamplingConfig {
            min_lat: 0.0,
            max_lat: 10.0,
            min_lon: 0.0,
            max_lon: 10.0,
            resolution: 10.0,
        };
        let rows = vec![vec![1, 2, 3], vec![4]];
        assert!(matches!(
            Grid::from_rows(FieldKind::Strength, config, &rows),
            Err(GeoMagError::ShapeMismatch { expected: 2, actual: 3, .. })
        ));
    }

    #[test]
    fn test_field_kind_display() {
        assert_eq!(FieldKind::Declination.to_string(), "declination");
        assert_eq!(FieldKind::Strength.unit(), "cT");
    }
}
