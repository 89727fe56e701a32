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

//! The china module contains the coarse bounding box used to decide whether
//! the GCJ-02 offset applies to a position.
//!
//! The box is a rectangle in degrees, not the border of China: it is only a
//! gate for applying or removing the offset.

/// The western limit of the box, in degrees of longitude.
pub const WEST: f64 = 72.004;
/// The eastern limit of the box, in degrees of longitude.
pub const EAST: f64 = 137.834_7;
/// The southern limit of the box, in degrees of latitude.
pub const SOUTH: f64 = 0.829_3;
/// The northern limit of the box, in degrees of latitude.
pub const NORTH: f64 = 55.827_1;

/// Whether a position is inside the China bounding box.
/// Positions exactly on a limit are inside.
/// * `lng`, `lat` - the position in degrees.
///
/// # Examples
/// ```
/// use gpsconv::china::inside_china;
///
/// assert!(inside_china(116.404, 39.915));
/// assert!(!inside_china(-122.42, 37.77));
/// ```
#[must_use]
pub fn inside_china(lng: f64, lat: f64) -> bool {
    let outside = lng < WEST || EAST < lng || lat < SOUTH || NORTH < lat;
    !outside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_china() {
        assert!(inside_china(116.308016, 40.035937));
        assert!(inside_china(72.01, 30.0));

        assert!(!inside_china(0.0, 0.0));
        assert!(!inside_china(-116.308016, 40.035937));
        assert!(!inside_china(116.308016, -40.035937));
    }

    #[test]
    fn test_inside_china_limits() {
        // the limits themselves are inside
        assert!(inside_china(WEST, 30.0));
        assert!(inside_china(EAST, 30.0));
        assert!(inside_china(100.0, SOUTH));
        assert!(inside_china(100.0, NORTH));
        assert!(inside_china(WEST, SOUTH));
        assert!(inside_china(EAST, NORTH));

        assert!(!inside_china(72.003_999, 30.0));
        assert!(!inside_china(137.834_701, 30.0));
        assert!(!inside_china(100.0, 0.829_299));
        assert!(!inside_china(100.0, 55.827_101));
    }

    #[test]
    fn test_inside_china_nan() {
        // NaN fails every comparison, so it is not rejected
        assert!(inside_china(f64::NAN, 30.0));
        assert!(inside_china(100.0, f64::NAN));
    }
}
