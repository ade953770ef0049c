//! # Batch splitting of catalog text
//!
//! A catalog response is a flat list of lines in which each record occupies three
//! consecutive lines: a title padded to exactly 24 characters, then the two 69
//! character data lines. The title width is the record sentinel.
//!
//! ```text
//! ISS (ZARYA)
//! 1 25544U 98067A   22014.20078024 -.00001581  00000+0 -20061-4 0  9991
//! 2 25544  51.6452  19.1428 0006828  17.5887  10.3753 15.49476744321309
//! ```
//!
//! Lines that do not start a well-formed triple are skipped; order is preserved and
//! duplicates are kept.
use camino::Utf8Path;

use crate::constants::{TITLE_LEN, TLE_LINE_LEN};
use crate::tle::RawTle;
use crate::tlescope_errors::TlescopeError;

/// Group already split lines into records.
///
/// A line of exactly [`TITLE_LEN`] characters followed by two lines of
/// [`TLE_LINE_LEN`] characters forms one record, and scanning resumes after it.
/// Anything else is skipped one line at a time.
///
/// Arguments
/// -----------------
/// * `lines`: the catalog lines, without line terminators.
///
/// Return
/// ----------
/// * The recognized records, in input order.
pub fn split_records<S: AsRef<str>>(lines: &[S]) -> Vec<RawTle> {
    let mut records = Vec::with_capacity(lines.len() / 3);
    let mut i = 0;

    while i < lines.len() {
        let title = lines[i].as_ref();

        if title.len() == TITLE_LEN {
            let data = (lines.get(i + 1), lines.get(i + 2));
            if let (Some(line1), Some(line2)) = data {
                let (line1, line2) = (line1.as_ref(), line2.as_ref());
                if line1.len() == TLE_LINE_LEN && line2.len() == TLE_LINE_LEN {
                    records.push(RawTle::new(title, line1, line2));
                    i += 3;
                    continue;
                }
            }
        }

        i += 1;
    }

    records
}

/// Split a text blob of CRLF (or LF) terminated lines into records.
pub fn split_text(text: &str) -> Vec<RawTle> {
    let lines: Vec<&str> = text.lines().collect();
    split_records(&lines)
}

/// Read a file of catalog text and split it into records.
///
/// Return
/// ----------
/// * The records found in the file, or [`TlescopeError::IoError`] if it cannot be read.
pub fn read_tle_file(path: &Utf8Path) -> Result<Vec<RawTle>, TlescopeError> {
    let content = std::fs::read_to_string(path)?;
    Ok(split_text(&content))
}

#[cfg(test)]
mod batch_test {
    use super::*;

    const DATA: [(&str, &str, &str); 2] = [
        (
            "ISS (ZARYA)",
            "1 25544U 98067A   22014.20078024 -.00001581  00000+0 -20061-4 0  9991",
            "2 25544  51.6452  19.1428 0006828  17.5887  10.3753 15.49476744321309",
        ),
        (
            "SWISSCUBE",
            "1 35932U 09051B   22013.55765441  .00000268  00000+0  71136-4 0  9999",
            "2 35932  98.5837 225.0161 0007892 155.7494 204.4076 14.56655971653547",
        ),
    ];

    /// Catalog text as served: titles padded to 24 columns, CRLF terminated.
    fn catalog_text() -> String {
        DATA.iter()
            .map(|(title, l1, l2)| format!("{title:<24}\r\n{l1}\r\n{l2}\r\n"))
            .collect()
    }

    #[test]
    fn test_split_crlf_text() {
        let records = split_text(&catalog_text());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "ISS (ZARYA)");
        assert_eq!(records[1].name(), "SWISSCUBE");
        for r in &records {
            assert_eq!(r.title.len(), TITLE_LEN);
            assert_eq!(r.line1.len(), TLE_LINE_LEN);
            assert_eq!(r.line2.len(), TLE_LINE_LEN);
            assert!(r.is_well_formed());
        }
    }

    #[test]
    fn test_unrelated_lines_are_skipped() {
        let lines = [
            "garbage",
            "ISS (ZARYA)             ",
            "1 25544U 98067A   22014.20078024 -.00001581  00000+0 -20061-4 0  9991",
            "2 25544  51.6452  19.1428 0006828  17.5887  10.3753 15.49476744321309",
            "",
            "BROKEN RECORD           ",
            "1 too short",
            "SWISSCUBE               ",
            "1 35932U 09051B   22013.55765441  .00000268  00000+0  71136-4 0  9999",
            "2 35932  98.5837 225.0161 0007892 155.7494 204.4076 14.56655971653547",
            "DANGLING TITLE          ",
        ];

        let records = split_records(&lines);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "ISS (ZARYA)");
        assert_eq!(records[1].name(), "SWISSCUBE");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let doubled = catalog_text().repeat(2);
        let records = split_text(&doubled);
        assert_eq!(records.len(), 4);
        assert_eq!(records[0], records[2]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_text("").is_empty());
        assert!(split_records::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = read_tle_file(Utf8Path::new("does/not/exist.tle")).unwrap_err();
        assert!(matches!(err, TlescopeError::IoError(_)));
    }
}
