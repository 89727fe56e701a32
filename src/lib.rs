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

//! gpsconv
//!
//! A library for converting positions between the coordinate systems used
//! by GPS receivers and Chinese maps:
//!
//! - [WGS-84](https://en.wikipedia.org/wiki/World_Geodetic_System), the
//!   global GPS coordinate system;
//! - [GCJ-02](https://en.wikipedia.org/wiki/Restrictions_on_geographic_data_in_China),
//!   the coordinate system mandated for public maps in China. It is derived
//!   from WGS-84 by a non-linear offset of a few hundred metres which is
//!   only applied inside a bounding box around China;
//! - BD-09, the coordinate system of Baidu maps, derived from GCJ-02 by a
//!   polar perturbation.
//!
//! The conversions from GCJ-02 to WGS-84 and from BD-09 to GCJ-02 are first
//! order approximations: they evaluate the forward formulae once at the
//! converted position and subtract the result. They are accurate to a few
//! metres in China and match the widely used reference algorithm.
//!
//! It also calculates the great-circle distance between a pair of positions
//! using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula)
//! on a sphere with the WGS-84 Semimajor axis as its radius.
//!
//! ## Design
//!
//! Every conversion is a pure function of the position: there is no shared
//! state, so the functions may be called from any thread.
//!
//! Positions are longitude first, then latitude, both in degrees.
//! They are not validated: out of range positions are simply evaluated
//! and may produce `NaN`.
//!
//! The conversions are available both as free functions on a pair of `f64`s,
//! in the `gcj02`, `bd09` and `haversine` modules, and as methods of the
//! [`Location`] value type.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`
//!   and the `Validate` trait;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod bd09;
pub mod china;
pub mod coordinate_system;
pub mod ellipsoid;
pub mod gcj02;
pub mod haversine;

pub use angle_sc::{Degrees, Validate};
pub use coordinate_system::{CoordinateSystem, ParseCoordinateSystemError};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

use core::fmt;
use lazy_static::lazy_static;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    #[must_use]
    pub fn new(a: Metres, f: f64) -> Self {
        Self {
            a,
            f,
            b: ellipsoid::calculate_minor_axis(a, f),
            e_2: ellipsoid::calculate_sq_eccentricity(f),
        }
    }

    /// Construct an `Ellipsoid` with the Krasovsky 1940 parameters.
    #[must_use]
    pub fn krasovsky_1940() -> Self {
        Self::new(ellipsoid::krasovsky_1940::A, ellipsoid::krasovsky_1940::F)
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::new(ellipsoid::wgs84::A, ellipsoid::wgs84::F)
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// Calculate the meridian and prime vertical radii of curvature.
    /// * `sin_lat` - the sine of the geodetic latitude.
    #[must_use]
    pub fn calculate_radii_of_curvature(&self, sin_lat: f64) -> (Metres, Metres) {
        ellipsoid::calculate_radii_of_curvature(self.a, self.e_2, sin_lat)
    }
}

lazy_static! {
    /// A static instance of the Krasovsky 1940 `Ellipsoid`.
    pub static ref KRASOVSKY_1940_ELLIPSOID: Ellipsoid = Ellipsoid::krasovsky_1940();

    /// A static instance of the WGS-84 `Ellipsoid`.
    pub static ref WGS84_ELLIPSOID: Ellipsoid = Ellipsoid::wgs84();
}

/// A GPS position: a longitude and latitude in degrees.
///
/// The coordinate system of the position is not recorded, it is implied by
/// the conversions applied to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    lng: Degrees,
    lat: Degrees,
}

impl Validate for Location {
    /// Test whether a `Location` is valid.
    /// Whether -180° <= `lng` <= 180° and -90° <= `lat` <= 90°.
    fn is_valid(&self) -> bool {
        (-180.0..=180.0).contains(&self.lng.0) && (-90.0..=90.0).contains(&self.lat.0)
    }
}

impl Location {
    /// Construct a `Location`.
    /// * `lng` - the longitude.
    /// * `lat` - the latitude.
    #[must_use]
    pub const fn new(lng: Degrees, lat: Degrees) -> Self {
        Self { lng, lat }
    }

    /// Accessor for the longitude.
    #[must_use]
    pub const fn lng(&self) -> Degrees {
        self.lng
    }

    /// Accessor for the latitude.
    #[must_use]
    pub const fn lat(&self) -> Degrees {
        self.lat
    }

    const fn from_pair(position: (f64, f64)) -> Self {
        Self::new(Degrees(position.0), Degrees(position.1))
    }

    /// Whether the `Location` is inside the China bounding box.
    #[must_use]
    pub fn inside_china(&self) -> bool {
        china::inside_china(self.lng.0, self.lat.0)
    }

    /// The great-circle distance to another `Location`.
    /// * `other` - the other `Location`.
    ///
    /// # Examples
    /// ```
    /// use gpsconv::{Degrees, Location, NauticalMiles};
    ///
    /// let a = Location::new(Degrees(1.0), Degrees(1.0));
    /// let b = Location::new(Degrees(-1.0), Degrees(-1.0));
    ///
    /// let distance = a.distance_from(&b);
    /// assert!((distance.0 - 314_851.074_216_824).abs() < 0.1);
    /// println!("distance: {:?}", NauticalMiles::from(distance));
    /// ```
    #[must_use]
    pub fn distance_from(&self, other: &Self) -> Metres {
        haversine::calculate_haversine_distance(
            self.lng.0,
            self.lat.0,
            other.lng.0,
            other.lat.0,
            ellipsoid::wgs84::A,
        )
    }

    /// Convert a WGS-84 `Location` to GCJ-02.
    #[must_use]
    pub fn wgs84_to_gcj02(&self) -> Self {
        Self::from_pair(gcj02::wgs84_to_gcj02(self.lng.0, self.lat.0))
    }

    /// Convert a GCJ-02 `Location` to WGS-84, approximately.
    #[must_use]
    pub fn gcj02_to_wgs84(&self) -> Self {
        Self::from_pair(gcj02::gcj02_to_wgs84(self.lng.0, self.lat.0))
    }

    /// Convert a GCJ-02 `Location` to BD-09.
    #[must_use]
    pub fn gcj02_to_bd09(&self) -> Self {
        Self::from_pair(bd09::gcj02_to_bd09(self.lng.0, self.lat.0))
    }

    /// Convert a BD-09 `Location` to GCJ-02, approximately.
    #[must_use]
    pub fn bd09_to_gcj02(&self) -> Self {
        Self::from_pair(bd09::bd09_to_gcj02(self.lng.0, self.lat.0))
    }

    /// Convert a WGS-84 `Location` to BD-09.
    #[must_use]
    pub fn wgs84_to_bd09(&self) -> Self {
        Self::from_pair(bd09::wgs84_to_bd09(self.lng.0, self.lat.0))
    }

    /// Convert a BD-09 `Location` to WGS-84, approximately.
    #[must_use]
    pub fn bd09_to_wgs84(&self) -> Self {
        Self::from_pair(bd09::bd09_to_wgs84(self.lng.0, self.lat.0))
    }

    /// Convert a `Location` between coordinate systems.
    /// * `from` - the coordinate system of the `Location`.
    /// * `to` - the required coordinate system.
    ///
    /// # Examples
    /// ```
    /// use gpsconv::{CoordinateSystem, Degrees, Location};
    ///
    /// let gps = Location::new(Degrees(116.404), Degrees(39.915));
    /// let baidu = gps.convert(CoordinateSystem::Wgs84, CoordinateSystem::Bd09);
    /// assert_eq!(gps.wgs84_to_bd09(), baidu);
    /// ```
    #[must_use]
    pub fn convert(&self, from: CoordinateSystem, to: CoordinateSystem) -> Self {
        Self::from_pair(coordinate_system::convert(
            self.lng.0, self.lat.0, from, to,
        ))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lng.0, self.lat.0)
    }
}

impl From<&LatLong> for Location {
    fn from(a: &LatLong) -> Self {
        Self::new(a.lon(), a.lat())
    }
}

impl From<&Location> for LatLong {
    fn from(a: &Location) -> Self {
        Self::new(a.lat, a.lng)
    }
}
