//! Geographic coordinates and their mapping onto the OVATION grid.
//!
//! The OVATION aurora product is a flattened 2D array: longitude is the outer
//! dimension (360 columns, 0..359 east) and latitude the inner one (181 rows,
//! -90..90 shifted by +90). A coordinate is normalized to an integer grid
//! cell first, then flattened to a single index into that array.

use crate::error::AuroraError;

/// Columns of the OVATION grid (integer degrees of longitude).
pub const GRID_LON_CELLS: i32 = 360;
/// Rows of the OVATION grid (integer degrees of latitude, -90..=90).
pub const GRID_LAT_CELLS: i32 = 181;
/// Total number of cells in the flattened grid.
pub const GRID_CELLS: usize = (GRID_LON_CELLS * GRID_LAT_CELLS) as usize;

/// A geographic coordinate in degrees. Latitude first, longitude second,
/// everywhere in this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Validates ranges up front so the grid math below never has to.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, AuroraError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AuroraError::Config(format!(
                "Invalid latitude: {latitude}"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AuroraError::Config(format!(
                "Invalid longitude: {longitude}"
            )));
        }
        Ok(Coordinate {
            latitude,
            longitude,
        })
    }

    /// Rounds to the nearest whole degree and wraps longitude into [0, 360).
    /// Always succeeds; range checking happened at construction.
    pub fn grid_cell(&self) -> GridCell {
        let rlat = self.latitude.round() as i32;
        let mut rlon = self.longitude.round() as i32;
        if rlon < 0 {
            rlon += GRID_LON_CELLS;
        }
        GridCell {
            lat: rlat,
            lon: rlon,
        }
    }
}

/// A normalized cell reference: `lat` in [-90, 90], `lon` in [0, 360).
/// The +180 and -180 meridians both land on column 180 of the cyclic grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub lat: i32,
    pub lon: i32,
}

impl GridCell {
    /// Flat index into the OVATION coordinate list:
    /// longitude-major, latitude shifted into a non-negative offset.
    pub fn ovation_index(&self) -> usize {
        let index = (self.lon * GRID_LAT_CELLS + (90 + self.lat)) as usize;
        debug_assert!(index < GRID_CELLS);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(latitude: f64, longitude: f64) -> usize {
        Coordinate::new(latitude, longitude)
            .unwrap()
            .grid_cell()
            .ovation_index()
    }

    #[test]
    fn index_for_positive_longitude() {
        assert_eq!(index(52.7, 10.2), 1953);
    }

    #[test]
    fn negative_longitude_wraps_before_indexing() {
        assert_eq!(index(52.2, -10.4), 63492);
    }

    #[test]
    fn rounds_inputs_before_indexing() {
        assert_eq!(index(48.5, 12.49), index(49.0, 12.0));
        assert_eq!(index(48.49, 12.5), index(48.0, 13.0));
    }

    #[test]
    fn rounding_is_idempotent() {
        assert_eq!(index(52.7, 10.2), index(53.0, 10.0));
        assert_eq!(index(-89.4, 0.2), index(-89.0, 0.0));
    }

    #[test]
    fn meridian_boundary_maps_to_one_column() {
        assert_eq!(index(0.0, -180.0), index(0.0, 180.0));
        assert_eq!(index(-90.0, -180.0), 32580);
        assert_eq!(index(90.0, 180.0), 32760);
    }

    #[test]
    fn poles_anchor_the_index_range() {
        assert_eq!(index(-90.0, 0.0), 0);
        assert_eq!(index(90.0, -0.4), 180);
        assert!(index(90.0, 179.4) < GRID_CELLS);
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(Coordinate::new(90.1, 0.0).is_err());
        assert!(Coordinate::new(-90.1, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.1).is_err());
        assert!(Coordinate::new(0.0, -180.1).is_err());
        assert!(Coordinate::new(90.0, -180.0).is_ok());
    }
}
