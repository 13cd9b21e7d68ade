use std::{error::Error, fmt, num::ParseFloatError};

use crate::enum_trivial_from_impl;

use super::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// The latitude or longitude cannot be placed on the globe
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InvalidCoordinate {
    /// Latitude is not a finite number in range `[-90..90]`
    Latitude(f64),
    /// Longitude is not a finite number in range `[-180..180]`
    Longitude(f64),
}

impl fmt::Display for InvalidCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, value, min, max) = match self {
            Self::Latitude(value) => ("Latitude", value, MIN_LAT, MAX_LAT),
            Self::Longitude(value) => ("Longitude", value, MIN_LON, MAX_LON),
        };

        if value.is_finite() {
            write!(f, "{name} {value} is not in range [{min}..{max}]")
        } else {
            write!(f, "{name} should be a finite number, but {value} provided")
        }
    }
}

impl Error for InvalidCoordinate {}

/// The text cannot be read as a pair of latitude and longitude
#[derive(Debug)]
pub enum ParseCoordinateError {
    /// Nothing to parse
    EmptyString,
    /// Expected exactly two parts (latitude and longitude), but found another number
    PartsCount(usize),
    /// The degrees are not a decimal number
    Float(ParseFloatError),
    /// Both the hemisphere letter and the minus sign are given
    SignWithHemisphere,
    /// The number was parsed but is not a valid coordinate
    Range(InvalidCoordinate),
}

enum_trivial_from_impl!(ParseFloatError => ParseCoordinateError:Float);
enum_trivial_from_impl!(InvalidCoordinate => ParseCoordinateError:Range);

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate parsing failed: ")?;
        match self {
            Self::EmptyString => write!(f, "empty string provided"),
            Self::PartsCount(count) => {
                write!(f, "expected latitude and longitude, but {count} part(s) found")
            }
            Self::Float(inner) => write!(f, "{inner}"),
            Self::SignWithHemisphere => {
                write!(f, "negative degrees cannot be combined with a hemisphere")
            }
            Self::Range(inner) => write!(f, "{inner}"),
        }
    }
}

impl Error for ParseCoordinateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Float(inner) => Some(inner),
            Self::Range(inner) => Some(inner),
            _ => None,
        }
    }
}
