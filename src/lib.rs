// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Distance between two points on the [WGS-84](https://en.wikipedia.org/wiki/World_Geodetic_System)
//! ellipsoid.
//!
//! Distances are computed with the closed-form
//! [Andoyer-Lambert formula](https://en.wikipedia.org/wiki/Geographical_distance#Lambert's_formula_for_long_lines),
//! which corrects the spherical central angle for the flattening of the Earth. It is noticeably
//! more accurate than the haversine formula, while being much cheaper than iterative solvers
//! like Vincenty's. The two singular cases of the formula are handled separately:
//! antipodal points resolve to half of the meridian perimeter, and identical points to zero.
//!
//! # Example
//!
//! ```
//! let meters = geodistance::distance(50.06639, -5.71472, 58.64389, -3.07)
//!     .expect("coordinates are in range");
//! assert!((meters - 969_940.0).abs() < 1.0);
//!
//! let report = geodistance::report(50.06639, -5.71472, 58.64389, -3.07).unwrap();
//! assert_eq!(report.dist_km, 969.94);
//! ```

pub mod c;
mod distance;
mod ellipsoid;
mod error;
mod point;
mod report;

pub use distance::distance;
pub use ellipsoid::{Ellipsoid, WGS84};
pub use error::DistanceError;
pub use point::GeoPoint;
pub use report::{
    report, DistanceReport, COORDINATE_DECIMALS, DISTANCE_DECIMALS, METERS_PER_KILOMETER,
    METERS_PER_MILE,
};
