use hifitime::{Epoch, TimeScale, Unit};

use crate::constants::MJD;

/// Transformation from a two-line element epoch (year + fractional day of year) to an [`Epoch`]
///
/// Day `1.0` is January 1st at 00:00:00 UTC of `year`.
///
/// Argument
/// --------
/// * `year`: the four-digit epoch year
/// * `day_of_year`: the fractional day of the year, as found in columns 21–32 of line 1
///
/// Return
/// ------
/// * the epoch in the UTC time scale
pub fn tle_epoch_to_epoch(year: i32, day_of_year: f64) -> Epoch {
    let new_year = Epoch::from_gregorian(year, 1, 1, 0, 0, 0, 0, TimeScale::UTC);
    new_year + Unit::Day * (day_of_year - 1.0)
}

/// Transformation from an [`Epoch`] to modified julian date (MJD) in the UTC frame
pub fn epoch_to_mjd_utc(epoch: &Epoch) -> MJD {
    epoch.to_mjd_utc_days()
}

/// Calendar representation `YYYY-MM-DDTHH:MM:SS UTC` of an epoch, truncated to the second
pub fn iso_utc_from_epoch(epoch: &Epoch) -> String {
    let (y, m, d, hh, mm, ss, _) = epoch.to_gregorian_utc();
    format!("{y:04}-{m:02}-{d:02}T{hh:02}:{mm:02}:{ss:02} UTC")
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_first_day_is_new_year() {
        let epoch = tle_epoch_to_epoch(2022, 1.0);
        assert_eq!(iso_utc_from_epoch(&epoch), "2022-01-01T00:00:00 UTC");
        assert_abs_diff_eq!(epoch_to_mjd_utc(&epoch), 59580.0, epsilon = 1e-9);
    }

    #[test]
    fn test_iss_epoch() {
        let epoch = tle_epoch_to_epoch(2022, 14.20078024);
        assert_eq!(iso_utc_from_epoch(&epoch), "2022-01-14T04:49:07 UTC");
        assert_abs_diff_eq!(epoch_to_mjd_utc(&epoch), 59593.20078024, epsilon = 1e-7);
    }

    #[test]
    fn test_leap_year_end() {
        let epoch = tle_epoch_to_epoch(2020, 366.5);
        assert_eq!(iso_utc_from_epoch(&epoch), "2020-12-31T12:00:00 UTC");
    }
}
