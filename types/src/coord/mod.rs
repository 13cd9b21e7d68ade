use std::{borrow::Cow, fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{locator::GridSquare, utils::StripChar};

pub use self::{
    bounds::CoordinateBounds,
    errors::{InvalidCoordinate, ParseCoordinateError},
};

mod bounds;
mod errors;

pub(crate) const MIN_LAT: f64 = -90.0;
pub(crate) const MAX_LAT: f64 = 90.0;
pub(crate) const MIN_LON: f64 = -180.0;
pub(crate) const MAX_LON: f64 = 180.0;

const DEGREE_SIGN: char = '°';

/// The point on the surface of the Earth, represented as the pair (latitude, longitude)
/// of decimal degrees.
///
/// The values are always finite and within the valid ranges:
/// `-90 <= lat <= 90` and `-180 <= lon <= 180`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "(f64, f64)", into = "(f64, f64)")
)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Construct a point from the given latitude and longitude in decimal degrees.
    ///
    /// # Errors
    /// The latitude or longitude is out of range, NaN or infinite.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidCoordinate> {
        if !(lat.is_finite() && (MIN_LAT..=MAX_LAT).contains(&lat)) {
            return Err(InvalidCoordinate::Latitude(lat));
        }

        if !(lon.is_finite() && (MIN_LON..=MAX_LON).contains(&lon)) {
            return Err(InvalidCoordinate::Longitude(lon));
        }

        Ok(Self { lat, lon })
    }

    /// Latitude in decimal degrees, positive to the north
    pub fn latitude(self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees, positive to the east
    pub fn longitude(self) -> f64 {
        self.lon
    }

    /// The 6-character Maidenhead locator of the subsquare containing the point
    pub fn grid_square(self) -> GridSquare {
        GridSquare::from(self)
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from(value: (f64, f64)) -> Result<Self, Self::Error> {
        let (lat, lon) = value;
        Self::new(lat, lon)
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(coord: Coordinate) -> Self {
        (coord.lat, coord.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Lat: {}, Lon: {}", self.lat, self.lon)
        } else {
            write!(f, "({}{DEGREE_SIGN},{}{DEGREE_SIGN})", self.lat, self.lon)
        }
    }
}

/// The direction which turns the unsigned degrees into positive or negative ones
trait Hemisphere: Sized {
    /// The hemisphere denoted by the letter (in any case)
    fn from_letter(c: char) -> Option<Self>;

    fn is_positive(&self) -> bool;
}

/// Implements simple two variants enum of the opposite hemispheres
macro_rules! hemisphere_enum {
    ($name:ident: $positive:ident and $negative:ident; parse from $pos_ch:literal:$neg_ch:literal) => {
        #[derive(Debug, Copy, Clone, PartialEq)]
        enum $name {
            $positive,
            $negative,
        }

        impl Hemisphere for $name {
            fn from_letter(c: char) -> Option<Self> {
                match c.to_ascii_uppercase() {
                    $pos_ch => Some(Self::$positive),
                    $neg_ch => Some(Self::$negative),
                    _ => None,
                }
            }

            fn is_positive(&self) -> bool {
                *self == Self::$positive
            }
        }
    };
}

hemisphere_enum!(Pole: North and South; parse from 'N':'S');
hemisphere_enum!(RotationalDirection: East and West; parse from 'E':'W');

/// Parse the decimal degrees with an optional degree sign at the end
fn parse_degrees(s: &str) -> Result<f64, ParseCoordinateError> {
    let s = s.trim();
    let s = s
        .strip_suffix_char(DEGREE_SIGN)
        .map_or_else(|| Cow::Borrowed(s), Cow::Owned);
    Ok(s.trim_end().parse()?)
}

fn with_hemisphere<H: Hemisphere>(s: &str, hemisphere: &H) -> Result<f64, ParseCoordinateError> {
    let degrees = parse_degrees(s)?;
    if degrees.is_sign_negative() {
        return Err(ParseCoordinateError::SignWithHemisphere);
    }

    Ok(if hemisphere.is_positive() {
        degrees
    } else {
        -degrees
    })
}

/// Parse one axis given either as signed degrees
/// or as unsigned degrees with the hemisphere letter before or after them.
fn parse_axis<H: Hemisphere>(s: &str) -> Result<f64, ParseCoordinateError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseCoordinateError::EmptyString);
    }

    if let Some((rest, last)) = s.split_last() {
        if let Some(hemisphere) = H::from_letter(last) {
            return with_hemisphere(&rest, &hemisphere);
        }
    }

    if let Some((first, rest)) = s.split_first() {
        if let Some(hemisphere) = H::from_letter(first) {
            return with_hemisphere(&rest, &hemisphere);
        }
    }

    parse_degrees(s)
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parse the `"<lat>, <lon>"` text.
    /// Without a comma the latitude and longitude should be separated by whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseCoordinateError::EmptyString);
        }

        let parts: Vec<_> = if s.contains(',') {
            s.split(',').collect()
        } else {
            s.split_whitespace().collect()
        };

        match parts.as_slice() {
            [lat, lon] => {
                let lat = parse_axis::<Pole>(lat)?;
                let lon = parse_axis::<RotationalDirection>(lon)?;
                Ok(Self::new(lat, lon)?)
            }
            _ => Err(ParseCoordinateError::PartsCount(parts.len())),
        }
    }
}
