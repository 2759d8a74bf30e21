// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::DistanceError;

/// A position on Earth, in degrees.
///
/// Points obtained from [GeoPoint::new] always satisfy `|lat| <= 90`
/// and `|lon| <= 180`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a new point, checking that both coordinates are in range.
    pub fn new(lat: f64, lon: f64) -> Result<Self, DistanceError> {
        let p = Self { lat, lon };
        if p.is_valid() {
            Ok(p)
        } else {
            Err(DistanceError::InvalidCoordinate { lat, lon })
        }
    }

    /// Returns true if `|lat| <= 90` and `|lon| <= 180`. NaNs are never valid.
    pub fn is_valid(&self) -> bool {
        self.lat.abs() <= 90.0 && self.lon.abs() <= 180.0
    }

    /// Returns the point with both coordinates rounded to `decimals` decimal places.
    pub fn rounded(&self, decimals: i32) -> Self {
        Self {
            lat: round_to(self.lat, decimals),
            lon: round_to(self.lon, decimals),
        }
    }
}

/// Rounds `x` to `decimals` decimal places, with halves rounded away from zero.
pub(crate) fn round_to(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale
}
