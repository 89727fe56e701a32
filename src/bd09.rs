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

//! The bd09 module contains conversions between GCJ-02 and BD-09 positions.
//!
//! BD-09 perturbs a GCJ-02 position in polar coordinates about the origin
//! and then shifts it by a fixed amount. Unlike GCJ-02 it is applied
//! everywhere, not only inside the China bounding box.
//!
//! [`bd09_to_gcj02`] reverses the perturbation approximately, using the
//! BD-09 position in place of the unknown GCJ-02 position.

use crate::gcj02::{gcj02_to_wgs84, wgs84_to_gcj02};

/// The angular frequency of the BD-09 perturbation: π · 3000 / 180.
pub const X_PI: f64 = core::f64::consts::PI * 3000.0 / 180.0;

/// The longitude shift of BD-09 positions, in degrees.
const LNG_SHIFT: f64 = 0.0065;
/// The latitude shift of BD-09 positions, in degrees.
const LAT_SHIFT: f64 = 0.006;

/// Convert a GCJ-02 position to BD-09.
/// * `lng`, `lat` - the GCJ-02 position in degrees.
///
/// returns the BD-09 position in degrees.
///
/// # Examples
/// ```
/// use gpsconv::bd09::gcj02_to_bd09;
///
/// let (lng, lat) = gcj02_to_bd09(116.308016, 40.035937);
/// assert!((lng - 116.314490).abs() < 0.00002);
/// assert!((lat - 40.041968).abs() < 0.0002);
/// ```
#[must_use]
pub fn gcj02_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    let z = libm::sqrt(lng * lng + lat * lat) + 0.00002 * libm::sin(lat * X_PI);
    let theta = libm::atan2(lat, lng) + 0.000003 * libm::cos(lng * X_PI);
    (
        z * libm::cos(theta) + LNG_SHIFT,
        z * libm::sin(theta) + LAT_SHIFT,
    )
}

/// Convert a BD-09 position to GCJ-02, approximately.
/// * `lng`, `lat` - the BD-09 position in degrees.
///
/// returns the GCJ-02 position in degrees.
#[must_use]
pub fn bd09_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    let x = lng - LNG_SHIFT;
    let y = lat - LAT_SHIFT;
    let z = libm::sqrt(x * x + y * y) - 0.00002 * libm::sin(y * X_PI);
    let theta = libm::atan2(y, x) - 0.000003 * libm::cos(x * X_PI);
    (z * libm::cos(theta), z * libm::sin(theta))
}

/// Convert a WGS-84 position to BD-09, via GCJ-02.
/// * `lng`, `lat` - the WGS-84 position in degrees.
///
/// returns the BD-09 position in degrees.
#[must_use]
pub fn wgs84_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    let (gcj_lng, gcj_lat) = wgs84_to_gcj02(lng, lat);
    gcj02_to_bd09(gcj_lng, gcj_lat)
}

/// Convert a BD-09 position to WGS-84, via GCJ-02.
/// * `lng`, `lat` - the BD-09 position in degrees.
///
/// returns the WGS-84 position in degrees.
#[must_use]
pub fn bd09_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    let (gcj_lng, gcj_lat) = bd09_to_gcj02(lng, lat);
    gcj02_to_wgs84(gcj_lng, gcj_lat)
}
