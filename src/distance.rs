// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::f64::consts::PI;

use crate::ellipsoid::sq;
use crate::{DistanceError, Ellipsoid, GeoPoint, WGS84};

/// Calculates the distance between two lat-lon positions on the [WGS84] ellipsoid
/// using the [Andoyer-Lambert formula](https://en.wikipedia.org/wiki/Geographical_distance#Lambert's_formula_for_long_lines).
/// Returns the result in meters.
///
/// Fails with [DistanceError::InvalidCoordinate] if any latitude is outside of [-90, 90]
/// or any longitude is outside of [-180, 180].
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64, DistanceError> {
    let p1 = GeoPoint::new(lat1, lon1)?;
    let p2 = GeoPoint::new(lat2, lon2)?;
    Ok(WGS84.distance(p1, p2))
}

impl Ellipsoid {
    /// Calculates the distance between two points on this ellipsoid
    /// using the Andoyer-Lambert formula. Returns the result in meters.
    ///
    /// Both points must be [valid](GeoPoint::is_valid). The result for valid points
    /// is always finite and non-negative: antipodal points, for which the formula
    /// is singular, resolve to [Ellipsoid::meridian_half_perimeter], and identical
    /// points resolve to zero.
    pub fn distance(&self, p1: GeoPoint, p2: GeoPoint) -> f64 {
        // Half-angles are kept in degrees, so that quarter turns
        // get exact sines and cosines (see sin_cos_degrees).
        let (sin_f, cos_f) = sin_cos_degrees((p1.lat + p2.lat) * 0.5);
        let (sin_g, cos_g) = sin_cos_degrees((p1.lat - p2.lat) * 0.5);
        let (sin_l, cos_l) = sin_cos_degrees((p1.lon - p2.lon) * 0.5);

        let s = (sin_g * cos_l).hypot(cos_f * sin_l);
        let c = (cos_g * cos_l).hypot(sin_f * sin_l);
        let omega = s.atan2(c);
        let spherical = 2.0 * self.a * omega;

        // H1·sin²F·cos²G and H2·cos²F·sin²G, with the divisions by C² and S²
        // folded into ratios bounded by 1. Squaring S or C alone underflows
        // for points less than ~1e-152° apart.
        let r = s * c / omega;
        let h1 = (3.0 * r - 1.0) * 0.5 * sq(sin_f * cos_g / c);
        let h2 = (3.0 * r + 1.0) * 0.5 * sq(cos_f * sin_g / s);
        let d = spherical * (1.0 + self.f * (h1 - h2));

        log::trace!(
            "andoyer {:?} -> {:?}: S={} C={} omega={} R={} d={}",
            p1,
            p2,
            s,
            c,
            omega,
            r,
            d
        );

        if is_finite(d) {
            d
        } else if is_finite(r) {
            // C == 0: the points are antipodal
            log::debug!("{:?} and {:?} are antipodal", p1, p2);
            self.meridian_half_perimeter()
        } else {
            // S == 0 and omega == 0: the points are identical
            log::debug!("{:?} and {:?} are identical", p1, p2);
            0.0
        }
    }
}

/// Returns true for anything except NaNs and infinities.
#[inline]
#[allow(clippy::eq_op)]
fn is_finite(x: f64) -> bool {
    x - x == 0.0
}

/// Computes the sine and cosine of an angle given in degrees.
///
/// The angle is first reduced to [-45°, 45°] around the nearest multiple of 90°,
/// and only the remainder is converted to radians. Multiples of 90° thus produce
/// exact zeros and ones, which [f64::sin_cos] of `x * π / 180` can't deliver.
/// The function is odd-symmetric in the sine: `sin_cos_degrees(-x)` returns
/// `(-sin, cos)` of `sin_cos_degrees(x)` bit-for-bit.
fn sin_cos_degrees(x: f64) -> (f64, f64) {
    let r = x % 360.0;
    let q = (r / 90.0).round();
    let (s, c) = ((r - 90.0 * q) * (PI / 180.0)).sin_cos();
    match (q as i32).rem_euclid(4) {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    }
}
