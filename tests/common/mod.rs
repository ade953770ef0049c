#![allow(dead_code)]

use approx::assert_relative_eq;
use tlescope::elements::DerivedElements;
use tlescope::tle::RawTle;

pub const ISS_TITLE: &str = "ISS (ZARYA)             ";
pub const ISS_LINE1: &str = "1 25544U 98067A   22014.20078024 -.00001581  00000+0 -20061-4 0  9991";
pub const ISS_LINE2: &str = "2 25544  51.6452  19.1428 0006828  17.5887  10.3753 15.49476744321309";

pub fn iss_raw() -> RawTle {
    RawTle::new(ISS_TITLE, ISS_LINE1, ISS_LINE2)
}

pub fn assert_elements_close(actual: &DerivedElements, expected: &DerivedElements, epsilon: f64) {
    assert_relative_eq!(
        actual.semi_major_axis,
        expected.semi_major_axis,
        max_relative = epsilon
    );
    assert_relative_eq!(
        actual.eccentricity,
        expected.eccentricity,
        max_relative = epsilon
    );
    assert_relative_eq!(actual.period, expected.period, max_relative = epsilon);
    assert_relative_eq!(actual.inclination, expected.inclination, max_relative = epsilon);
    assert_relative_eq!(
        actual.ascending_node_longitude,
        expected.ascending_node_longitude,
        max_relative = epsilon
    );
    assert_relative_eq!(
        actual.periapsis_argument,
        expected.periapsis_argument,
        max_relative = epsilon
    );
    assert_relative_eq!(
        actual.mean_anomaly,
        expected.mean_anomaly,
        max_relative = epsilon
    );
    assert_relative_eq!(
        actual.eccentric_anomaly,
        expected.eccentric_anomaly,
        max_relative = epsilon
    );
}
