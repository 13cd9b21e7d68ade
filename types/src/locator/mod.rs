//! The Maidenhead locator system divides the globe into
//! 18x18 fields (20° of longitude by 10° of latitude), every field into
//! 10x10 squares (2° by 1°) and every square into 24x24 subsquares (5′ by 2.5′).
//! <https://en.wikipedia.org/wiki/Maidenhead_Locator_System>
//!
//! A subsquare is identified by the 6-character locator, e.g. `IO91WM`:
//! - field letters (longitude, latitude);
//! - square digits (longitude, latitude);
//! - subsquare letters (longitude, latitude).
//!
//! Internally the locator is stored as the number of subsquares
//! from the south-west corner of the grid (180°W, 90°S) along every axis,
//! so all the three levels are just the digits of a mixed-radix number.

use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use num_traits::ToPrimitive;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    coord::{Coordinate, CoordinateBounds, InvalidCoordinate, MIN_LAT, MIN_LON},
    utils::div_mod,
};

use self::consts::{
    CELLS_IN_AXIS, CELLS_IN_FIELD, FIELD_LETTERS, LAT_CELLS_IN_DEGREE, LON_CELLS_IN_DEGREE,
    SQUARES, SQUARE_DIGITS, SUBSQUARES, SUBSQUARE_LETTERS,
};
pub use self::{consts::LOCATOR_LEN, errors::InvalidGridSquare};

mod consts;
mod errors;

const LOCATOR_RE: &str = r"(?x)
    ^
    (?P<field>[A-R]{2})         # 20°x10° field
    (?P<square>[0-9]{2})        # 2°x1° square
    (?P<subsquare>[A-X]{2})     # 5′x2.5′ subsquare
    $
";

lazy_static! {
    static ref RE_LOCATOR: Regex = Regex::new(LOCATOR_RE).expect("Locator regex is valid");
}

/// Convert the latitude and longitude into the 6-character locator.
///
/// The points on the north pole and the 180th meridian belong
/// to the northernmost (easternmost) subsquares, so the result is always valid.
///
/// # Errors
/// The latitude or longitude is out of range, NaN or infinite.
pub fn encode(latitude: f64, longitude: f64) -> Result<GridSquare, InvalidCoordinate> {
    Coordinate::new(latitude, longitude).map(GridSquare::from)
}

/// Find the area denoted by the 6-character locator.
///
/// Only the canonical uppercase form is accepted,
/// use the [`GridSquare::parse_ignore_case`] for operator's input.
///
/// # Errors
/// The string has wrong length or some character is not allowed at its position.
pub fn decode(locator: &str) -> Result<CoordinateBounds, InvalidGridSquare> {
    locator.parse().map(GridSquare::bounds)
}

/// The 6-character Maidenhead locator (subsquare precision)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct GridSquare {
    lon: u16,
    lat: u16,
}

impl GridSquare {
    /// Parse the locator written in any case (e.g. the conventional `IO91wm`)
    ///
    /// # Errors
    /// The string has wrong length or some character is not allowed at its position.
    pub fn parse_ignore_case(s: &str) -> Result<Self, InvalidGridSquare> {
        s.to_ascii_uppercase().parse()
    }

    /// The area of the subsquare
    pub fn bounds(self) -> CoordinateBounds {
        let lon = axis_edges(self.lon, MIN_LON, LON_CELLS_IN_DEGREE);
        let lat = axis_edges(self.lat, MIN_LAT, LAT_CELLS_IN_DEGREE);
        CoordinateBounds::from_edges(lat, lon)
    }

    /// The middle of the subsquare
    pub fn center(self) -> Coordinate {
        self.bounds().center()
    }

    /// The 2-character locator of the field containing the subsquare
    pub fn field(self) -> String {
        self.to_string().chars().take(2).collect()
    }

    /// The 4-character locator of the square containing the subsquare
    pub fn square(self) -> String {
        self.to_string().chars().take(4).collect()
    }
}

/// Position of the subsquare along an axis shifted to start from zero
fn axis_cell(shifted_degrees: f64, cells_in_degree: f64) -> u16 {
    let cells = (shifted_degrees * cells_in_degree)
        .floor()
        .to_u16()
        .expect("Shifted coordinate is non-negative and not greater than a full turn");

    // the north pole and the 180th meridian are the edges of the last subsquare
    cells.min(CELLS_IN_AXIS - 1)
}

/// The western (southern) and the eastern (northern) edges of the subsquare
fn axis_edges(cell: u16, origin: f64, cells_in_degree: f64) -> (f64, f64) {
    let min = f64::from(cell) / cells_in_degree + origin;
    let max = f64::from(cell + 1) / cells_in_degree + origin;
    (min, max)
}

/// Split the subsquare position into (field, square, subsquare) indices
fn split_cell(cell: u16) -> (u16, u16, u16) {
    let (field, rest) = div_mod(cell, CELLS_IN_FIELD);
    let (square, subsquare) = div_mod(rest, SUBSQUARES);
    (field, square, subsquare)
}

fn join_cell(field: u16, square: u16, subsquare: u16) -> u16 {
    (field * SQUARES + square) * SUBSQUARES + subsquare
}

fn alphabet_char((first, _last): (char, char), index: u16) -> char {
    char::from_u32(u32::from(first) + u32::from(index)).expect("Index is within the alphabet")
}

/// Longitude and latitude indices of the two characters
fn pair_indices(pair: &str, (first, _last): (char, char)) -> (u16, u16) {
    let mut indices = pair.chars().map(|ch| {
        (u32::from(ch) - u32::from(first))
            .to_u16()
            .expect("The regex allows only the alphabet characters")
    });

    let lon = indices.next().expect("The regex captures two characters");
    let lat = indices.next().expect("The regex captures two characters");
    (lon, lat)
}

/// Find out why the string is not a valid locator
fn diagnose(s: &str) -> InvalidGridSquare {
    let len = s.chars().count();
    if len != LOCATOR_LEN {
        return InvalidGridSquare::Length(len);
    }

    let alphabets = [
        FIELD_LETTERS,
        FIELD_LETTERS,
        SQUARE_DIGITS,
        SQUARE_DIGITS,
        SUBSQUARE_LETTERS,
        SUBSQUARE_LETTERS,
    ];

    s.chars()
        .zip(alphabets)
        .position(|(ch, (first, last))| !(first..=last).contains(&ch))
        .map(|index| InvalidGridSquare::Character {
            position: index + 1,
            found: s.chars().nth(index).expect("Position is within the string"),
        })
        .expect("The regex rejects only the strings with a wrong character")
}

impl From<Coordinate> for GridSquare {
    fn from(coord: Coordinate) -> Self {
        let lon = axis_cell(coord.longitude() - MIN_LON, LON_CELLS_IN_DEGREE);
        let lat = axis_cell(coord.latitude() - MIN_LAT, LAT_CELLS_IN_DEGREE);
        Self { lon, lat }
    }
}

impl FromStr for GridSquare {
    type Err = InvalidGridSquare;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = RE_LOCATOR.captures(s).ok_or_else(|| diagnose(s))?;

        let (lon_field, lat_field) = pair_indices(&caps["field"], FIELD_LETTERS);
        let (lon_square, lat_square) = pair_indices(&caps["square"], SQUARE_DIGITS);
        let (lon_sub, lat_sub) = pair_indices(&caps["subsquare"], SUBSQUARE_LETTERS);

        Ok(Self {
            lon: join_cell(lon_field, lon_square, lon_sub),
            lat: join_cell(lat_field, lat_square, lat_sub),
        })
    }
}

impl TryFrom<String> for GridSquare {
    type Error = InvalidGridSquare;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GridSquare> for String {
    fn from(grid: GridSquare) -> Self {
        grid.to_string()
    }
}

impl fmt::Display for GridSquare {
    /// The alternate form `{:#}` writes the subsquare in lowercase (`IO91wm`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lon_field, lon_square, lon_sub) = split_cell(self.lon);
        let (lat_field, lat_square, lat_sub) = split_cell(self.lat);

        let mut sub_lon = alphabet_char(SUBSQUARE_LETTERS, lon_sub);
        let mut sub_lat = alphabet_char(SUBSQUARE_LETTERS, lat_sub);
        if f.alternate() {
            sub_lon.make_ascii_lowercase();
            sub_lat.make_ascii_lowercase();
        }

        write!(
            f,
            "{}{}{}{}{}{}",
            alphabet_char(FIELD_LETTERS, lon_field),
            alphabet_char(FIELD_LETTERS, lat_field),
            alphabet_char(SQUARE_DIGITS, lon_square),
            alphabet_char(SQUARE_DIGITS, lat_square),
            sub_lon,
            sub_lat,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::mem::size_of;

    use super::*;

    fn assert_encoded(lat: f64, lon: f64, expected: &str) {
        let grid = encode(lat, lon).unwrap();
        assert_eq!(grid.to_string(), expected, "({lat}, {lon})");
    }

    #[test]
    fn size_grid() {
        assert_eq!(size_of::<GridSquare>(), 4);
    }

    #[test]
    fn origin() {
        assert_encoded(0.0, 0.0, "JJ00AA");
    }

    #[test]
    fn reference_locators() {
        // central London
        assert_encoded(51.5074, -0.1278, "IO91WM");
        // Royal Observatory, Greenwich
        assert_encoded(51.4826, -0.0077, "IO91XL");
        // ARRL headquarters, W1AW
        assert_encoded(41.714_775, -72.727_26, "FN31PR");
        // Sydney
        assert_encoded(-33.8688, 151.2093, "QF56OD");
    }

    #[test]
    fn conventional_case() {
        let london = encode(51.5074, -0.1278).unwrap();
        assert_eq!(format!("{:#}", london), "IO91wm");
        assert!(format!("{:#}", london).eq_ignore_ascii_case("io91WM"));
    }

    #[test]
    fn corners_are_clamped() {
        assert_encoded(90.0, 180.0, "RR99XX");
        assert_encoded(-90.0, -180.0, "AA00AA");
        assert_encoded(90.0, -180.0, "AR09AX");
        assert_encoded(-90.0, 180.0, "RA90XA");
    }

    #[test]
    fn edge_of_field() {
        // exactly on the meridian between the I and J fields
        assert_encoded(0.0, -0.0, "JJ00AA");
        assert_encoded(0.0, -1e-9, "IJ90XA");
        assert_encoded(-1e-9, 0.0, "JI09AX");
    }

    #[test]
    #[should_panic(expected = "Latitude(91.0)")]
    fn too_far_north() {
        let _g = encode(91.0, 0.0).unwrap();
    }

    #[test]
    #[should_panic(expected = "Longitude(181.0)")]
    fn too_far_east() {
        let _g = encode(0.0, 181.0).unwrap();
    }

    #[test]
    #[should_panic(expected = "Longitude(NaN)")]
    fn nan_longitude() {
        let _g = encode(0.0, f64::NAN).unwrap();
    }

    #[test]
    #[should_panic(expected = "Latitude(-inf)")]
    fn infinite_latitude() {
        let _g = encode(f64::NEG_INFINITY, 0.0).unwrap();
    }

    #[test]
    fn field_and_square() {
        let london = encode(51.5074, -0.1278).unwrap();
        assert_eq!(london.field(), "IO");
        assert_eq!(london.square(), "IO91");
    }

    #[test]
    fn decode_first_subsquare() {
        let bounds = decode("AA00AA").unwrap();
        assert_eq!(
            bounds,
            CoordinateBounds::new(
                Coordinate::new(-90.0, -180.0).unwrap(),
                Coordinate::new(-90.0 + 1.0 / 24.0, -180.0 + 1.0 / 12.0).unwrap(),
            )
        );
    }

    #[test]
    fn decode_last_subsquare() {
        let bounds = decode("RR99XX").unwrap();
        assert_eq!(bounds.lat_max(), 90.0);
        assert_eq!(bounds.lon_max(), 180.0);
        assert!(bounds.lat_min() < 90.0);
        assert!(bounds.lon_min() < 180.0);
    }

    #[test]
    fn decode_london() {
        let bounds = decode("IO91WM").unwrap();
        let center = bounds.center();
        assert!((center.latitude() - 51.520_833).abs() < 1e-6);
        assert!((center.longitude() + 0.125).abs() < 1e-9);
        assert!(bounds.contains(Coordinate::new(51.5074, -0.1278).unwrap()));
    }

    #[test]
    fn parse_conventional_case() {
        let g = GridSquare::parse_ignore_case("io91Wm").unwrap();
        assert_eq!(g, "IO91WM".parse().unwrap());
    }

    #[test]
    fn string_conversions() {
        let g = GridSquare::try_from(String::from("FN31PR")).unwrap();
        assert_eq!(String::from(g), "FN31PR");
    }
}
