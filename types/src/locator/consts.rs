/// The number of characters in the subsquare-precision locator
pub const LOCATOR_LEN: usize = 6;

pub(crate) const FIELDS: u16 = 18;
pub(crate) const SQUARES: u16 = 10;
pub(crate) const SUBSQUARES: u16 = 24;

pub(crate) const FIELD_LETTERS: (char, char) = ('A', 'R');
pub(crate) const SQUARE_DIGITS: (char, char) = ('0', '9');
pub(crate) const SUBSQUARE_LETTERS: (char, char) = ('A', 'X');

/// Subsquare cells in a field along any axis
pub(crate) const CELLS_IN_FIELD: u16 = SQUARES * SUBSQUARES;
/// Subsquare cells from pole to pole (or around the equator)
pub(crate) const CELLS_IN_AXIS: u16 = FIELDS * CELLS_IN_FIELD;

/// Subsquares are 5′ wide
pub(crate) const LON_CELLS_IN_DEGREE: f64 = 12.0;
/// Subsquares are 2.5′ high
pub(crate) const LAT_CELLS_IN_DEGREE: f64 = 24.0;
