#[cfg(feature = "serde")]
use serde::Serialize;

use super::{Coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// The rectangle between two parallels and two meridians (in decimal degrees).
///
/// This is what a Maidenhead locator actually denotes: not a point, but an area.
/// The edges are always valid latitudes and longitudes, the southern edge
/// is never north of the northern one and the western is never east of the eastern one.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CoordinateBounds {
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
}

impl CoordinateBounds {
    /// Construct the rectangle with the given opposite corners (in any order)
    pub fn new(corner: Coordinate, opposite: Coordinate) -> Self {
        let (lat1, lat2) = (corner.latitude(), opposite.latitude());
        let (lon1, lon2) = (corner.longitude(), opposite.longitude());
        Self {
            lat_min: lat1.min(lat2),
            lat_max: lat1.max(lat2),
            lon_min: lon1.min(lon2),
            lon_max: lon1.max(lon2),
        }
    }

    /// The edges must be valid and ordered
    pub(crate) fn from_edges(lat: (f64, f64), lon: (f64, f64)) -> Self {
        debug_assert!(MIN_LAT <= lat.0 && lat.0 <= lat.1 && lat.1 <= MAX_LAT);
        debug_assert!(MIN_LON <= lon.0 && lon.0 <= lon.1 && lon.1 <= MAX_LON);
        Self {
            lat_min: lat.0,
            lat_max: lat.1,
            lon_min: lon.0,
            lon_max: lon.1,
        }
    }

    /// The southern edge
    pub fn lat_min(&self) -> f64 {
        self.lat_min
    }

    /// The northern edge
    pub fn lat_max(&self) -> f64 {
        self.lat_max
    }

    /// The western edge
    pub fn lon_min(&self) -> f64 {
        self.lon_min
    }

    /// The eastern edge
    pub fn lon_max(&self) -> f64 {
        self.lon_max
    }

    /// The point equidistant from the opposite edges
    pub fn center(&self) -> Coordinate {
        let lat = (self.lat_min + self.lat_max) / 2.0;
        let lon = (self.lon_min + self.lon_max) / 2.0;
        // the mean of two valid values is between them
        Coordinate::new(lat, lon).expect("The center of valid bounds is a valid coordinate")
    }

    /// Is the point inside the rectangle or on its edge?
    pub fn contains(&self, point: Coordinate) -> bool {
        self.contains_approx(point, 0.0)
    }

    /// Is the point inside the rectangle, allowing it to stick out
    /// for the given number of degrees on every side?
    pub fn contains_approx(&self, point: Coordinate, tolerance: f64) -> bool {
        (self.lat_min - tolerance..=self.lat_max + tolerance).contains(&point.latitude())
            && (self.lon_min - tolerance..=self.lon_max + tolerance).contains(&point.longitude())
    }
}
