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

//! The `coordinate_system` module names the coordinate systems that positions
//! can be converted between.

use crate::{bd09, gcj02};
use core::fmt;
use core::str::FromStr;

/// A coordinate system used by GPS receivers and Chinese maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CoordinateSystem {
    /// The global GPS coordinate system.
    Wgs84,
    /// The offset coordinate system mandated for public maps in China.
    Gcj02,
    /// GCJ-02 with a further polar perturbation, used by Baidu maps.
    Bd09,
}

/// The error returned when a `CoordinateSystem` name is not recognised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown coordinate system, expected one of: wgs84, gcj02, bd09")]
pub struct ParseCoordinateSystemError;

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wgs84 => write!(f, "WGS-84"),
            Self::Gcj02 => write!(f, "GCJ-02"),
            Self::Bd09 => write!(f, "BD-09"),
        }
    }
}

impl FromStr for CoordinateSystem {
    type Err = ParseCoordinateSystemError;

    /// Parse a coordinate system name, ignoring ASCII case.
    /// Accepts both `wgs84` and `wgs-84` forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, CoordinateSystem); 6] = [
            ("wgs84", CoordinateSystem::Wgs84),
            ("wgs-84", CoordinateSystem::Wgs84),
            ("gcj02", CoordinateSystem::Gcj02),
            ("gcj-02", CoordinateSystem::Gcj02),
            ("bd09", CoordinateSystem::Bd09),
            ("bd-09", CoordinateSystem::Bd09),
        ];

        let name = s.trim();
        NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, system)| system)
            .ok_or(ParseCoordinateSystemError)
    }
}

/// Convert a position between coordinate systems.
/// * `lng`, `lat` - the position in degrees.
/// * `from` - the coordinate system of the position.
/// * `to` - the required coordinate system.
///
/// returns the position in the `to` coordinate system, in degrees.
///
/// # Examples
/// ```
/// use gpsconv::coordinate_system::{convert, CoordinateSystem};
/// use gpsconv::bd09::wgs84_to_bd09;
///
/// let bd = convert(116.404, 39.915, CoordinateSystem::Wgs84, CoordinateSystem::Bd09);
/// assert_eq!(wgs84_to_bd09(116.404, 39.915), bd);
/// ```
#[must_use]
pub fn convert(lng: f64, lat: f64, from: CoordinateSystem, to: CoordinateSystem) -> (f64, f64) {
    match (from, to) {
        (CoordinateSystem::Wgs84, CoordinateSystem::Gcj02) => gcj02::wgs84_to_gcj02(lng, lat),
        (CoordinateSystem::Gcj02, CoordinateSystem::Wgs84) => gcj02::gcj02_to_wgs84(lng, lat),
        (CoordinateSystem::Gcj02, CoordinateSystem::Bd09) => bd09::gcj02_to_bd09(lng, lat),
        (CoordinateSystem::Bd09, CoordinateSystem::Gcj02) => bd09::bd09_to_gcj02(lng, lat),
        (CoordinateSystem::Wgs84, CoordinateSystem::Bd09) => bd09::wgs84_to_bd09(lng, lat),
        (CoordinateSystem::Bd09, CoordinateSystem::Wgs84) => bd09::bd09_to_wgs84(lng, lat),
        (CoordinateSystem::Wgs84, CoordinateSystem::Wgs84)
        | (CoordinateSystem::Gcj02, CoordinateSystem::Gcj02)
        | (CoordinateSystem::Bd09, CoordinateSystem::Bd09) => (lng, lat),
    }
}
