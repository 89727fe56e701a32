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

//! The ellipsoid module contains types and functions for defining an ellipsoid
//! given its Semimajor axis (the equivalent of its radius) and flattening ratio.
//!
//! GCJ-02 offsets are scaled on the Krasovsky 1940 ellipsoid, while
//! great-circle distances use a sphere with the WGS-84 Semimajor axis.

#![allow(clippy::suboptimal_flops)]

pub mod krasovsky_1940;
pub mod wgs84;

pub use icao_units::si::Metres;

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use gpsconv::Metres;
/// use gpsconv::ellipsoid::{calculate_minor_axis, krasovsky_1940};
///
/// // The Krasovsky 1940 Semiminor axis measured in metres.
/// let b : Metres = Metres(6_356_863.018_773_047);
/// assert!((b.0 - calculate_minor_axis(krasovsky_1940::A, krasovsky_1940::F).0).abs() < 1e-6);
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use gpsconv::ellipsoid::{calculate_sq_eccentricity, krasovsky_1940};
///
/// // The Krasovsky 1940 sq_eccentricity.
/// assert_eq!(0.006_693_421_622_965_943, calculate_sq_eccentricity(krasovsky_1940::F));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(f: f64) -> f64 {
    f * (2.0 - f)
}

/// Calculate the radii of curvature of an ellipsoid at a latitude.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
/// * `sin_lat` - the sine of the geodetic latitude.
///
/// returns the meridian radius of curvature, `M`, and the prime vertical
/// radius of curvature, `N`.
#[must_use]
pub fn calculate_radii_of_curvature(a: Metres, e_2: f64, sin_lat: f64) -> (Metres, Metres) {
    let magic = 1.0 - e_2 * sin_lat * sin_lat;
    let sqrt_magic = libm::sqrt(magic);
    (
        Metres((a.0 * (1.0 - e_2)) / (magic * sqrt_magic)),
        Metres(a.0 / sqrt_magic),
    )
}
