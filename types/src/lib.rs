//! Maidenhead grid locator types and primitives for QSO logging
//!
//! ```
//! use qso_grid::{decode, encode};
//!
//! let london = encode(51.5074, -0.1278).unwrap();
//! assert_eq!(london.to_string(), "IO91WM");
//! assert_eq!(format!("{:#}", london), "IO91wm");
//!
//! let bounds = decode("IO91WM").unwrap();
//! assert!(bounds.lat_min() <= 51.5074 && 51.5074 <= bounds.lat_max());
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(invalid_html_tags)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

// only the serde round trips need it
#[cfg(all(test, not(feature = "serde")))]
use serde_json as _;

pub use coord::{Coordinate, CoordinateBounds, InvalidCoordinate, ParseCoordinateError};
pub use locator::{decode, encode, GridSquare, InvalidGridSquare, LOCATOR_LEN};
pub use qso::{
    Contact, ContactError, ContactForm, Located, LocationFix, DATE_TIME_FORMAT, NOT_AVAILABLE,
    RECORD_LEN,
};

mod coord;
mod locator;
mod qso;
mod utils;
