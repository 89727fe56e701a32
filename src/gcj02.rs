// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The gcj02 module contains the offset between WGS-84 and GCJ-02 positions.
//!
//! GCJ-02 is derived from WGS-84 by an empirical, non-linear offset of a
//! few hundred metres that is only applied inside the China bounding box,
//! see [`inside_china`].
//!
//! The offset is calculated in metres by a fixed trigonometric polynomial and
//! converted to degrees using the radii of curvature of the Krasovsky 1940
//! ellipsoid.
//!
//! There is no closed form inverse. [`gcj02_to_wgs84`] evaluates the offset
//! at the GCJ-02 position and subtracts it, a first order approximation with
//! an error of a few metres. It is not refined.

#![allow(clippy::suboptimal_flops)]
#![allow(clippy::similar_names)]

use crate::china::inside_china;
use crate::{Ellipsoid, KRASOVSKY_1940_ELLIPSOID};
use core::f64::consts::PI;

/// Calculate the GCJ-02 offset at a position.
/// * `lng`, `lat` - the position in degrees.
/// * `ellipsoid` - the `Ellipsoid` used to convert the offset to degrees.
///
/// returns the longitude and latitude offsets in degrees.
#[must_use]
pub fn calculate_offset(lng: f64, lat: f64, ellipsoid: &Ellipsoid) -> (f64, f64) {
    let x = lng - 105.0;
    let y = lat - 35.0;

    let rad = lat / 180.0 * PI;
    let (meridian, prime_vertical) = ellipsoid.calculate_radii_of_curvature(libm::sin(rad));

    let mut d_lng = 20.0 * libm::sin(6.0 * x * PI) + 20.0 * libm::sin(2.0 * x * PI);
    let mut d_lat = d_lng;

    d_lng += 20.0 * libm::sin(x * PI) + 40.0 * libm::sin(x / 3.0 * PI);
    d_lng += 150.0 * libm::sin(x / 12.0 * PI) + 300.0 * libm::sin(x / 30.0 * PI);
    d_lng = d_lng * 2.0 / 3.0;
    d_lng += 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * libm::sqrt(libm::fabs(x));
    d_lng = (d_lng * 180.0) / (prime_vertical.0 * libm::cos(rad) * PI);

    d_lat += 20.0 * libm::sin(y * PI) + 40.0 * libm::sin(y / 3.0 * PI);
    d_lat += 160.0 * libm::sin(y / 12.0 * PI) + 320.0 * libm::sin(y * PI / 30.0);
    d_lat = d_lat * 2.0 / 3.0;
    d_lat += -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * libm::sqrt(libm::fabs(x));
    d_lat = (d_lat * 180.0) / (meridian.0 * PI);

    (d_lng, d_lat)
}

/// Offset a position by the GCJ-02 offset calculated at the position.
/// * `lng`, `lat` - the position in degrees.
///
/// returns the offset position in degrees.
#[must_use]
fn transform(lng: f64, lat: f64) -> (f64, f64) {
    let (d_lng, d_lat) = calculate_offset(lng, lat, &KRASOVSKY_1940_ELLIPSOID);
    (lng + d_lng, lat + d_lat)
}

/// Convert a WGS-84 position to GCJ-02.
/// Positions outside the China bounding box are returned unchanged.
/// * `lng`, `lat` - the WGS-84 position in degrees.
///
/// returns the GCJ-02 position in degrees.
///
/// # Examples
/// ```
/// use gpsconv::gcj02::wgs84_to_gcj02;
///
/// let (lng, lat) = wgs84_to_gcj02(116.308016, 40.035937);
/// assert!((lng - 116.314122).abs() < 0.00002);
/// assert!((lat - 40.037216).abs() < 0.0002);
///
/// // London is not offset
/// assert_eq!((-0.1276, 51.5072), wgs84_to_gcj02(-0.1276, 51.5072));
/// ```
#[must_use]
pub fn wgs84_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    if inside_china(lng, lat) {
        transform(lng, lat)
    } else {
        (lng, lat)
    }
}

/// Convert a GCJ-02 position to WGS-84, approximately.
/// Positions outside the China bounding box are returned unchanged.
/// * `lng`, `lat` - the GCJ-02 position in degrees.
///
/// returns the WGS-84 position in degrees.
#[must_use]
pub fn gcj02_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    if !inside_china(lng, lat) {
        return (lng, lat);
    }

    let (gcj_lng, gcj_lat) = transform(lng, lat);
    (lng * 2.0 - gcj_lng, lat * 2.0 - gcj_lat)
}
