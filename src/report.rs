// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::point::round_to;
use crate::{DistanceError, GeoPoint, WGS84};

/// Number of meters in a kilometer.
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Number of meters in a [US survey mile](https://en.wikipedia.org/wiki/Mile#US_survey_mile),
/// 5280 survey feet of 1200/3937 meters each.
pub const METERS_PER_MILE: f64 = (1200.0 / 3937.0) * 5280.0;

/// Number of decimal places kept in [DistanceReport::source] and [DistanceReport::target].
pub const COORDINATE_DECIMALS: i32 = 8;

/// Number of decimal places kept in [DistanceReport::dist_km] and [DistanceReport::dist_mi].
pub const DISTANCE_DECIMALS: i32 = 2;

/// Human-facing summary of a [distance](crate::distance) computation:
/// the normalized input points and the distance between them
/// in kilometers and miles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct DistanceReport {
    /// First point, rounded to [COORDINATE_DECIMALS].
    pub source: GeoPoint,

    /// Second point, rounded to [COORDINATE_DECIMALS].
    pub target: GeoPoint,

    /// Distance in kilometers, rounded to [DISTANCE_DECIMALS].
    pub dist_km: f64,

    /// Distance in US survey miles, rounded to [DISTANCE_DECIMALS].
    pub dist_mi: f64,
}

impl DistanceReport {
    /// Computes the distance between `source` and `target` on [WGS84]
    /// and rounds everything for display.
    pub fn new(source: GeoPoint, target: GeoPoint) -> Result<Self, DistanceError> {
        let source = GeoPoint::new(source.lat, source.lon)?;
        let target = GeoPoint::new(target.lat, target.lon)?;
        Ok(Self::from_meters(source, target, WGS84.distance(source, target)))
    }

    /// Builds a report from an already computed distance, in meters.
    /// `meters` must be finite, as JSON has no representation for NaNs and infinities.
    pub(crate) fn from_meters(source: GeoPoint, target: GeoPoint, meters: f64) -> Self {
        debug_assert!(meters.is_finite());
        Self {
            source: source.rounded(COORDINATE_DECIMALS),
            target: target.rounded(COORDINATE_DECIMALS),
            dist_km: round_to(meters / METERS_PER_KILOMETER, DISTANCE_DECIMALS),
            dist_mi: round_to(meters / METERS_PER_MILE, DISTANCE_DECIMALS),
        }
    }

    /// Serializes the report into a single-line JSON object:
    /// `{"source":{"lat":…,"lon":…},"target":{"lat":…,"lon":…},"dist_km":…,"dist_mi":…}`.
    pub fn to_json(&self) -> String {
        format!(
            "{{\"source\":{{\"lat\":{},\"lon\":{}}},\"target\":{{\"lat\":{},\"lon\":{}}},\"dist_km\":{},\"dist_mi\":{}}}",
            self.source.lat,
            self.source.lon,
            self.target.lat,
            self.target.lon,
            self.dist_km,
            self.dist_mi,
        )
    }
}

/// Shorthand for [DistanceReport::new] taking raw coordinates.
pub fn report(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<DistanceReport, DistanceError> {
    DistanceReport::new(
        GeoPoint {
            lat: lat1,
            lon: lon1,
        },
        GeoPoint {
            lat: lat2,
            lon: lon2,
        },
    )
}
