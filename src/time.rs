use hifitime::Epoch;

use crate::constants::{EpochMillis, JulianCenturies, DAYS_PER_JULIAN_CENTURY, JD_J2000};

/// Transformation from an instant in milliseconds since the Unix epoch to a Julian Date (UTC).
///
/// Argument
/// --------
/// * `time_ms`: the instant, milliseconds since 1970-01-01T00:00:00 UTC
///
/// Return
/// ------
/// * the Julian Date of the instant, in days
pub fn julian_day(time_ms: EpochMillis) -> f64 {
    Epoch::from_unix_milliseconds(time_ms as f64).to_jde_utc_days()
}

/// Transformation from an instant in milliseconds since the Unix epoch to Julian centuries
/// elapsed since J2000.0.
///
/// This is the time variable of the polynomial orbital-element tables in
/// [`crate::ephemeris`] and of the lunar series in [`crate::coords`].
///
/// Argument
/// --------
/// * `time_ms`: the instant, milliseconds since 1970-01-01T00:00:00 UTC
///
/// Return
/// ------
/// * Julian centuries since J2000.0 (negative before 2000-01-01 12:00 UTC)
pub fn julian_centuries_since_j2000(time_ms: EpochMillis) -> JulianCenturies {
    (julian_day(time_ms) - JD_J2000) / DAYS_PER_JULIAN_CENTURY
}
