// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::f64::consts::PI;

/// Shape of a reference ellipsoid of revolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Equatorial radius (semi-major axis), in meters.
    pub a: f64,

    /// Flattening, `(a - b) / a`.
    pub f: f64,
}

/// The [WGS-84](https://en.wikipedia.org/wiki/World_Geodetic_System) ellipsoid.
pub const WGS84: Ellipsoid = Ellipsoid {
    a: 6378137.0,
    f: 1.0 / 298.257223563,
};

impl Ellipsoid {
    /// Polar radius (semi-minor axis), in meters.
    pub fn b(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// Returns half of the meridian perimeter, in meters, which is also
    /// the length of the geodesic between two antipodal points.
    ///
    /// Uses [Ramanujan's second approximation](https://en.wikipedia.org/wiki/Ellipse#Circumference)
    /// of the perimeter of an ellipse, `π(a+b)(1 + 3h/(10 + √(4-3h)))`,
    /// where `h = ((a-b)/(a+b))²`.
    pub fn meridian_half_perimeter(&self) -> f64 {
        let b = self.b();
        let t = 3.0 * sq((self.a - b) / (self.a + b));
        PI * (self.a + b) * 0.5 * (1.0 + t / (10.0 + (4.0 - t).sqrt()))
    }
}

#[inline]
pub(crate) fn sq(x: f64) -> f64 {
    x * x
}
