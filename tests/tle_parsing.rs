mod common;

use indoc::formatdoc;
use tlescope::diagnostics::{CollectingSink, Diagnostic};
use tlescope::tle::{parse_text, Classification, ParsedTle, RawTle};

use common::{iss_raw, ISS_LINE1, ISS_LINE2};

#[test]
fn test_iss_fields() {
    let tle = ParsedTle::parse(iss_raw());

    assert_eq!(tle.name(), "ISS (ZARYA)");
    assert_eq!(tle.line1.catalog_number, "25544");
    assert_eq!(tle.line1.classification, Classification::Unclassified);
    assert_eq!(tle.line1.international_designator.launch_year, 1998);
    assert_eq!(tle.line1.epoch.year, 2022);
    assert_eq!(tle.line1.epoch.day, 14.20078024);
    assert_eq!(tle.line2.inclination, 51.6452);
    assert_eq!(tle.line2.eccentricity, 0.0006828);
    assert_eq!(tle.line2.mean_motion, 15.49476744);
    assert_eq!(tle.line2.revolution_number, 32130);

    assert!(tle.is_clean());
    assert!(tle.checksum_valid());
}

#[test]
fn test_parse_catalog_text() {
    let text = formatdoc! {"
        {:<24}
        1 25544U 98067A   22014.20078024 -.00001581  00000+0 -20061-4 0  9991
        2 25544  51.6452  19.1428 0006828  17.5887  10.3753 15.49476744321309
        {:<24}
        1 35932U 09051B   22013.55765441  .00000268  00000+0  71136-4 0  9999
        2 35932  98.5837 225.0161 0007892 155.7494 204.4076 14.56655971653547
        ",
        "ISS (ZARYA)",
        "SWISSCUBE",
    };

    let sink = CollectingSink::new();
    let tles = parse_text(&text, &sink);

    assert!(sink.diagnostics().is_empty());
    assert_eq!(tles.len(), 2);

    let swisscube = &tles[1];
    assert_eq!(swisscube.name(), "SWISSCUBE");
    assert_eq!(swisscube.line1.international_designator.launch_year, 2009);
    assert_eq!(swisscube.line1.international_designator.launch_number, 51);
    assert_eq!(swisscube.line1.international_designator.launch_piece, "B");
    assert_eq!(swisscube.line1.bstar, 0.71136e-4);
    assert_eq!(swisscube.line2.eccentricity, 0.0007892);
    assert_eq!(swisscube.line2.revolution_number, 65354);
    assert!(swisscube.checksum_valid());
}

#[test]
fn test_corrupted_record_is_kept_with_diagnostics() {
    // mean motion column damaged
    let line2 = ISS_LINE2.replace("15.49476744", "15.4947674?");
    let sink = CollectingSink::new();
    let tle = ParsedTle::parse_with_sink(RawTle::new("ISS (ZARYA)", ISS_LINE1, line2), &sink);

    assert_eq!(tle.line2.mean_motion, 0.0);
    assert_eq!(tle.substituted_fields(), ["mean_motion"]);

    let diagnostics = sink.take();
    assert!(matches!(
        &diagnostics[0],
        Diagnostic::FieldParse { object, field: "mean_motion", .. } if object == "ISS (ZARYA)"
    ));
}
