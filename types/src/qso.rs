//! The record of a contact (QSO) between two stations.
//!
//! The operator types the contact details in, while the location
//! of the other station comes from outside (e.g. a geocoding service)
//! and is only converted here into the Maidenhead locator.

use std::{error::Error, fmt};

use chrono::NaiveDateTime;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    coord::Coordinate,
    enum_trivial_from_impl,
    locator::{GridSquare, InvalidGridSquare},
};

/// Written in the log instead of the missing value
pub const NOT_AVAILABLE: &str = "N/A";

/// The format of the contact's date and time in the log
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The number of columns in the log record
pub const RECORD_LEN: usize = 10;

const FIELD_NAMES: [&str; 6] = ["callsign", "frequency", "mode", "report", "country", "town"];

/// The contact cannot be logged or read back from the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// The operator left the required field blank
    MissingField(&'static str),
    /// The log record has fewer columns than required
    IncompleteRecord(usize),
    /// The date and time in the log record cannot be read
    DateTime(String),
    /// The locator in the log record is malformed
    GridSquare(InvalidGridSquare),
}

enum_trivial_from_impl!(InvalidGridSquare => ContactError:GridSquare);

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(name) => write!(f, "All fields are required: {name} is empty"),
            Self::IncompleteRecord(len) => write!(
                f,
                "Incomplete log entry: {RECORD_LEN} fields expected, but {len} found"
            ),
            Self::DateTime(value) => {
                write!(f, "Log entry has malformed date/time {value:?}")
            }
            Self::GridSquare(inner) => write!(f, "Log entry has bad locator: {inner}"),
        }
    }
}

impl Error for ContactError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::GridSquare(inner) => Some(inner),
            Self::MissingField(_) | Self::IncompleteRecord(_) | Self::DateTime(_) => None,
        }
    }
}

/// The details the operator fills in for a contact
#[derive(Debug, Copy, Clone, Default)]
pub struct ContactForm<'a> {
    /// The other station's callsign
    pub callsign: &'a str,
    /// The frequency in MHz
    pub frequency: &'a str,
    /// The mode of transmission (SSB, CW, FT8, ...)
    pub mode: &'a str,
    /// The signal report (RST)
    pub report: &'a str,
    /// The other station's country
    pub country: &'a str,
    /// The other station's town
    pub town: &'a str,
}

impl<'a> ContactForm<'a> {
    fn fields(&self) -> [&'a str; 6] {
        [
            self.callsign,
            self.frequency,
            self.mode,
            self.report,
            self.country,
            self.town,
        ]
    }

    fn first_missing(&self) -> Option<&'static str> {
        self.fields()
            .iter()
            .zip(FIELD_NAMES)
            .find(|(value, _)| value.trim().is_empty())
            .map(|(_, name)| name)
    }
}

/// Where the other station is, as resolved by the external services
#[derive(Debug, Clone, PartialEq)]
pub struct LocationFix {
    /// The location of the town
    pub coordinate: Coordinate,
    /// The local time at the location, already formatted
    pub local_time: Option<String>,
    /// The short weather description at the location
    pub weather: Option<String>,
}

impl LocationFix {
    /// The location without any additional information
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            local_time: None,
            weather: None,
        }
    }
}

/// The grid square and the coordinates to show to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// The subsquare of the location
    pub grid_square: GridSquare,
    /// `Lat: <lat>, Lon: <lon>`
    pub coordinates: String,
}

impl Located {
    /// Derive the displayed values from the location
    pub fn from_fix(fix: &LocationFix) -> Self {
        let grid_square = fix.coordinate.grid_square();
        tracing::trace!(coordinate = %fix.coordinate, %grid_square, "Location resolved");
        Self {
            grid_square,
            coordinates: format!("{:#}", fix.coordinate),
        }
    }
}

/// The logged contact
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Contact {
    callsign: String,
    frequency: String,
    mode: String,
    report: String,
    country: String,
    town: String,
    grid_square: Option<GridSquare>,
    logged_at: NaiveDateTime,
    local_time: Option<String>,
    weather: Option<String>,
}

impl Contact {
    /// Log the contact at the given time.
    ///
    /// Without the location fix the grid square, the local time and the weather stay unknown.
    ///
    /// # Errors
    /// Some of the form's fields is blank.
    pub fn new(
        form: &ContactForm<'_>,
        logged_at: NaiveDateTime,
        fix: Option<&LocationFix>,
    ) -> Result<Self, ContactError> {
        if let Some(name) = form.first_missing() {
            tracing::debug!(field = name, "Contact rejected: required field is empty");
            return Err(ContactError::MissingField(name));
        }

        Ok(Self {
            grid_square: fix.map(|fix| Located::from_fix(fix).grid_square),
            logged_at,
            local_time: fix.and_then(|fix| optional(fix.local_time.as_deref()?)),
            weather: fix.and_then(|fix| optional(fix.weather.as_deref()?)),
            ..Self::filled_in(form, logged_at)
        })
    }

    /// Only the details typed in by the operator
    fn filled_in(form: &ContactForm<'_>, logged_at: NaiveDateTime) -> Self {
        Self {
            callsign: form.callsign.trim().to_string(),
            frequency: form.frequency.trim().to_string(),
            mode: form.mode.trim().to_string(),
            report: form.report.trim().to_string(),
            country: form.country.trim().to_string(),
            town: form.town.trim().to_string(),
            grid_square: None,
            logged_at,
            local_time: None,
            weather: None,
        }
    }

    /// Read the contact back from the log record.
    ///
    /// The columns after the [`RECORD_LEN`]-th one are ignored.
    ///
    /// # Errors
    /// - the record is too short;
    /// - some of the required columns is blank;
    /// - the locator is malformed;
    /// - the date and time cannot be parsed.
    pub fn from_record(record: &[&str]) -> Result<Self, ContactError> {
        let Some(columns) = record.get(..RECORD_LEN) else {
            tracing::debug!(columns = record.len(), "Log record rejected: missing fields");
            return Err(ContactError::IncompleteRecord(record.len()));
        };

        let form = ContactForm {
            callsign: columns[0],
            frequency: columns[1],
            mode: columns[2],
            report: columns[3],
            country: columns[4],
            town: columns[5],
        };
        if let Some(name) = form.first_missing() {
            tracing::debug!(field = name, "Log record rejected: required field is empty");
            return Err(ContactError::MissingField(name));
        }

        // tolerate locators typed by hand in the conventional case
        let grid_square = optional(columns[6])
            .map(|grid| GridSquare::parse_ignore_case(&grid))
            .transpose()?;

        let logged_at = NaiveDateTime::parse_from_str(columns[7].trim(), DATE_TIME_FORMAT)
            .map_err(|_| ContactError::DateTime(columns[7].to_string()))?;

        Ok(Self {
            grid_square,
            local_time: optional(columns[8]),
            weather: optional(columns[9]),
            ..Self::filled_in(&form, logged_at)
        })
    }

    /// The columns of the log record:
    /// callsign, frequency, mode, report, country, town,
    /// grid square, date/time, local time and weather.
    pub fn record(&self) -> [String; RECORD_LEN] {
        [
            self.callsign.clone(),
            self.frequency.clone(),
            self.mode.clone(),
            self.report.clone(),
            self.country.clone(),
            self.town.clone(),
            self.grid_square
                .map_or_else(|| NOT_AVAILABLE.to_string(), |grid| grid.to_string()),
            self.logged_at.format(DATE_TIME_FORMAT).to_string(),
            or_not_available(self.local_time.as_deref()),
            or_not_available(self.weather.as_deref()),
        ]
    }

    /// The other station's callsign
    pub fn callsign(&self) -> &str {
        &self.callsign
    }

    /// The other station's locator, if the location is known
    pub fn grid_square(&self) -> Option<GridSquare> {
        self.grid_square
    }

    /// When the contact was logged
    pub fn logged_at(&self) -> NaiveDateTime {
        self.logged_at
    }
}

/// The blank and [`NOT_AVAILABLE`] values are unknown
fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty() && value != NOT_AVAILABLE).then(|| value.to_string())
}

fn or_not_available(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_string()
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [callsign, frequency, mode, report, country, town, grid, date_time, local_time, weather] =
            self.record();
        write!(
            f,
            "Callsign: {callsign}, Frequency: {frequency} MHz, Mode: {mode}, Report: {report}, \
             Country: {country}, Town: {town}, Grid Square: {grid}, Date/Time: {date_time}, \
             Local Time: {local_time}, Weather: {weather}"
        )
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use chrono::NaiveDate;

    use super::*;

    fn contact() -> Contact {
        let form = ContactForm {
            callsign: "VK2XYZ",
            frequency: "21.200",
            mode: "SSB",
            report: "59",
            country: "Australia",
            town: "Sydney",
        };
        let logged_at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 0)
            .unwrap();
        let fix = LocationFix::new(Coordinate::new(-33.8688, 151.2093).unwrap());
        Contact::new(&form, logged_at, Some(&fix)).unwrap()
    }

    #[test]
    fn round_trip() {
        let contact = contact();
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["grid_square"], "QF56OD");
        assert_eq!(json["weather"], serde_json::Value::Null);

        let back: Contact = serde_json::from_value(json).unwrap();
        assert_eq!(back, contact);
    }

    #[test]
    fn bad_grid_square_is_rejected() {
        let mut json = serde_json::to_value(contact()).unwrap();
        json["grid_square"] = "ZZ99ZZ".into();

        let err = serde_json::from_value::<Contact>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid grid square"), "{err}");
    }
}
