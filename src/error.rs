// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

/// Error conditions which may occur during [distance](crate::distance)
/// or when building a [GeoPoint](crate::GeoPoint).
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum DistanceError {
    /// Latitude is outside of [-90, 90], longitude is outside of [-180, 180],
    /// or either of them is not a number.
    #[error("invalid coordinate: lat {lat}, lon {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },
}
