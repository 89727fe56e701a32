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

//! The haversine module contains functions for calculating the great-circle
//! distance between a pair of positions on a sphere.

use crate::ellipsoid::{wgs84, Metres};
use core::f64::consts::PI;

/// Calculate the great-circle distance between a pair of positions using the
/// haversine formula.
/// * `lng1`, `lat1` - the first position in degrees.
/// * `lng2`, `lat2` - the second position in degrees.
/// * `radius` - the radius of the sphere.
///
/// returns the distance between the positions.
#[must_use]
pub fn calculate_haversine_distance(
    lng1: f64,
    lat1: f64,
    lng2: f64,
    lat2: f64,
    radius: Metres,
) -> Metres {
    let rad1 = lat1 / 180.0 * PI;
    let rad2 = lat2 / 180.0 * PI;

    let a = rad1 - rad2;
    let b = (lng1 - lng2) / 180.0 * PI;

    let sin_half_a = libm::sin(a / 2.0);
    let sin_half_b = libm::sin(b / 2.0);
    let s = sin_half_a * sin_half_a + libm::cos(rad1) * libm::cos(rad2) * sin_half_b * sin_half_b;

    Metres(2.0 * libm::asin(libm::sqrt(s)) * radius.0)
}

/// Calculate the distance in metres between a pair of positions on a sphere
/// with the WGS-84 Semimajor axis as its radius.
/// * `lng1`, `lat1` - the first position in degrees.
/// * `lng2`, `lat2` - the second position in degrees.
///
/// # Examples
/// ```
/// use gpsconv::haversine::distance_from;
///
/// let d = distance_from(1.0, 1.0, -1.0, -1.0);
/// assert!((d - 314_851.074_216_824).abs() < 0.1);
/// ```
#[must_use]
pub fn distance_from(lng1: f64, lat1: f64, lng2: f64, lat2: f64) -> f64 {
    calculate_haversine_distance(lng1, lat1, lng2, lat2, wgs84::A).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_distance_from() {
        assert!(is_within_tolerance(
            314851.074216824,
            distance_from(1.0, 1.0, -1.0, -1.0),
            0.1
        ));
        assert!(is_within_tolerance(
            12069547.1060307,
            distance_from(1.0, 1.0, 116.3080027, 40.0359261),
            0.1
        ));
        assert!(is_within_tolerance(
            314851.074216824,
            distance_from(-1.0, -1.0, 1.0, 1.0),
            0.1
        ));
    }

    #[test]
    fn test_distance_from_is_symmetric() {
        let positions = [
            (1.0, 1.0),
            (-1.0, -1.0),
            (116.3080027, 40.0359261),
            (-122.42, 37.77),
            (151.2093, -33.8688),
            (0.0, 90.0),
        ];
        for a in positions {
            for b in positions {
                assert_eq!(
                    distance_from(a.0, a.1, b.0, b.1),
                    distance_from(b.0, b.1, a.0, a.1)
                );
            }
            assert_eq!(0.0, distance_from(a.0, a.1, a.0, a.1));
        }
    }

    #[test]
    fn test_calculate_haversine_distance() {
        let half_circumference = PI * wgs84::A.0;
        assert!(is_within_tolerance(
            half_circumference,
            calculate_haversine_distance(0.0, 0.0, 180.0, 0.0, wgs84::A).0,
            1e-6
        ));
        assert!(is_within_tolerance(
            half_circumference,
            calculate_haversine_distance(0.0, 90.0, 0.0, -90.0, wgs84::A).0,
            1e-6
        ));

        // On a unit sphere the distance is the central angle
        assert!(is_within_tolerance(
            PI / 2.0,
            calculate_haversine_distance(0.0, 0.0, 90.0, 0.0, Metres(1.0)).0,
            1e-15
        ));
    }
}
