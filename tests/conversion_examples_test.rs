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

extern crate gpsconv;

use angle_sc::is_within_tolerance;
use gpsconv::{china, coordinate_system, CoordinateSystem, Degrees, Location};

const FILENAME: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/conversion_examples.csv");

/// The tolerance of the expected values, which are rounded to 10 decimal places.
const TOLERANCE: f64 = 1e-9;

type DataRecord = (String, String, f64, f64, f64, f64);

#[test]
fn test_conversion_examples() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;

    let mut count = 0;
    for result in rdr.deserialize::<DataRecord>() {
        let (from, to, lng, lat, expected_lng, expected_lat) = result?;
        let from: CoordinateSystem = from.parse()?;
        let to: CoordinateSystem = to.parse()?;

        let (result_lng, result_lat) = coordinate_system::convert(lng, lat, from, to);
        assert!(
            is_within_tolerance(expected_lng, result_lng, TOLERANCE),
            "{from} to {to} ({lng}, {lat}) longitude: {result_lng} expected: {expected_lng}"
        );
        assert!(
            is_within_tolerance(expected_lat, result_lat, TOLERANCE),
            "{from} to {to} ({lng}, {lat}) latitude: {result_lat} expected: {expected_lat}"
        );

        // the Location methods give identical results
        let location = Location::new(Degrees(lng), Degrees(lat)).convert(from, to);
        assert_eq!(result_lng, location.lng().0);
        assert_eq!(result_lat, location.lat().0);

        count += 1;
    }
    assert_eq!(60, count);

    Ok(())
}

#[test]
fn test_gcj02_identity_outside_china() {
    let mut lat = -89.5;
    while lat < 90.0 {
        let mut lng = -179.5;
        while lng < 180.0 {
            if !china::inside_china(lng, lat) {
                let location = Location::new(Degrees(lng), Degrees(lat));
                assert_eq!(location, location.wgs84_to_gcj02());
                assert_eq!(location, location.gcj02_to_wgs84());
            }
            lng += 2.5;
        }
        lat += 2.5;
    }
}

#[test]
fn test_wgs84_bd09_round_trip() {
    let mut lat = 18.0;
    while lat < 54.0 {
        let mut lng = 73.0;
        while lng < 136.0 {
            let location = Location::new(Degrees(lng), Degrees(lat));
            let baidu = location.wgs84_to_bd09();
            assert_eq!(location.wgs84_to_gcj02().gcj02_to_bd09(), baidu);

            let round_trip = baidu.bd09_to_wgs84();
            assert!(location.distance_from(&round_trip).0 < 6.0);
            lng += 1.5;
        }
        lat += 1.5;
    }
}
