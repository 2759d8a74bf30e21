// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub enum CDistanceResultType {
    Ok = 0,
    InvalidCoordinate = 1,
}

impl From<&DistanceError> for CDistanceResultType {
    fn from(value: &DistanceError) -> Self {
        match value {
            DistanceError::InvalidCoordinate { .. } => CDistanceResultType::InvalidCoordinate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct CDistanceResult {
    pub meters: f64,
    pub type_: CDistanceResultType,
}

impl CDistanceResult {
    fn ok(meters: f64) -> Self {
        CDistanceResult {
            meters,
            type_: CDistanceResultType::Ok,
        }
    }

    fn err(e: &DistanceError) -> Self {
        CDistanceResult {
            meters: f64::NAN,
            type_: e.into(),
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn geodistance_distance(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
) -> CDistanceResult {
    match distance(lat1, lon1, lat2, lon2) {
        Ok(meters) => CDistanceResult::ok(meters),
        Err(e) => CDistanceResult::err(&e),
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn geodistance_report(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    out_report: *mut DistanceReport,
) -> CDistanceResultType {
    match report(lat1, lon1, lat2, lon2) {
        Ok(r) => {
            if let Some(out_report) = out_report.as_mut() {
                *out_report = r;
            }
            CDistanceResultType::Ok
        }
        Err(e) => (&e).into(),
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn geodistance_meridian_half_perimeter() -> f64 {
    WGS84.meridian_half_perimeter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr::null_mut;

    #[test]
    fn distance_ok() {
        let r = geodistance_distance(90.0, 0.0, 90.0, 45.0);
        assert_eq!(r, CDistanceResult::ok(0.0));
    }

    #[test]
    fn distance_invalid_coordinate() {
        let r = geodistance_distance(0.0, 0.0, 0.0, 200.0);
        assert_eq!(r.type_, CDistanceResultType::InvalidCoordinate);
        assert!(r.meters.is_nan());
    }

    #[test]
    fn report_into_pointer() {
        let mut out = DistanceReport::from_meters(
            GeoPoint { lat: 0.0, lon: 0.0 },
            GeoPoint { lat: 0.0, lon: 0.0 },
            0.0,
        );
        let t = unsafe { geodistance_report(0.0, 0.0, 0.0, 180.0, &mut out) };
        assert_eq!(t, CDistanceResultType::Ok);
        assert_eq!(out.target.lon, 180.0);
        assert_eq!(out.dist_km, 20003.93);
    }

    #[test]
    fn report_null_pointer() {
        let t = unsafe { geodistance_report(0.0, 0.0, 1.0, 1.0, null_mut()) };
        assert_eq!(t, CDistanceResultType::Ok);

        let t = unsafe { geodistance_report(95.0, 0.0, 1.0, 1.0, null_mut()) };
        assert_eq!(t, CDistanceResultType::InvalidCoordinate);
    }

    #[test]
    fn meridian_half_perimeter() {
        assert_eq!(
            geodistance_meridian_half_perimeter(),
            WGS84.meridian_half_perimeter()
        );
    }
}
