#![warn(missing_docs)]
//! Thin dense station observations so they can be plotted on a map without overlapping.
//!
//! Station locations are given in a planar, projected coordinate system along with a minimum
//! separation radius in the same unit. The result is a mask with one entry per station, `true`
//! for the stations to plot. When stations compete for the same space the one with the highest
//! priority, for example the most significant present weather code, is kept.
//!
//! Projecting latitude and longitude, and drawing the station models, are left to the caller.
//!
//! # Examples
//!
//! ```rust
//! use metfor::Km;
//! use point_density::{apply_mask, reduce_point_density_by_priority, Point};
//!
//! // Projected locations in meters.
//! let locations = [
//!     Point::new(0.0, 0.0),
//!     Point::new(60_000.0, 80_000.0),
//!     Point::new(500_000.0, 0.0),
//! ];
//! let weather_codes = [0, 95, 10];
//! let temperatures = [21.0, 18.5, 25.0];
//!
//! let mask = reduce_point_density_by_priority(&locations, Km(175.0), &weather_codes).unwrap();
//! assert_eq!(mask, vec![false, true, true]);
//!
//! let plotted = apply_mask(&temperatures, &mask).unwrap();
//! assert_eq!(plotted, vec![18.5, 25.0]);
//! ```

//
// API
//
pub use crate::{
    error::{ReductionError, Result},
    mask::{apply_mask, kept_count, kept_indices},
    point::Point,
    priority::Priority,
    radius::Radius,
    reduce::{
        reduce_point_density, reduce_point_density_by_priority, DensityReducer,
        DEFAULT_BRUTE_FORCE_THRESHOLD,
    },
};

//
// Internal use only
//
mod error;
mod grid;
mod mask;
mod point;
mod priority;
mod radius;
mod reduce;
