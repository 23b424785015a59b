//! Conversion between solar and lunisolar dates.
//!
//! Both directions go through the Julian Day Number: the solar side is pure
//! Gregorian arithmetic, the lunisolar side is an offset from the year's New
//! Year JDN walked through the month-length sequence of the embedded table.

use crate::table::{self, YearEntry};
use crate::types::{LunarDate, SolarDate};
use crate::Error;

/// Converts a solar date to the lunisolar date of the same day.
///
/// The hour carries over unchanged.
///
/// # Errors
/// Returns `Error::OutOfRange` when the day falls outside the embedded
/// table, i.e. before the lunisolar New Year of 1900 (1900-01-31) or after
/// the last day of lunisolar year 2100. The error carries the Gregorian
/// year of the input.
pub fn solar_to_lunar(solar: SolarDate) -> Result<LunarDate, Error> {
    let jdn = solar.jdn();
    let entry = year_containing(jdn, solar.year())?;
    let mut offset = jdn - entry.new_year_jdn();
    for month in entry.months() {
        let days = i64::from(month.days);
        if offset < days {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let day = (offset + 1) as u8;
            return LunarDate::new(entry.year(), month.month, day, month.leap)?
                .with_hour(solar.hour());
        }
        offset -= days;
    }
    // year_containing guarantees the offset lies within the year
    Err(Error::OutOfRange(solar.year()))
}

/// Converts a lunisolar date to the solar date of the same day.
///
/// The hour carries over unchanged. Inverse of [`solar_to_lunar`]:
/// `lunar_to_solar(solar_to_lunar(d)?) == Ok(d)` holds over the whole
/// supported range.
///
/// # Errors
/// Returns `Error::OutOfRange` when the lunisolar year is outside the
/// embedded table.
pub fn lunar_to_solar(lunar: LunarDate) -> Result<SolarDate, Error> {
    let entry = table::lookup(lunar.year())?;
    let mut offset: i64 = 0;
    for month in entry.months() {
        if month.month == lunar.month() && month.leap == lunar.is_leap_month() {
            let jdn = entry.new_year_jdn() + offset + i64::from(lunar.day()) - 1;
            return SolarDate::from_jdn(jdn)?.with_hour(lunar.hour());
        }
        offset += i64::from(month.days);
    }
    // a validated LunarDate always names a month of its year
    Err(Error::InvalidLunar {
        year: lunar.year(),
        month: lunar.month(),
        day: lunar.day(),
        leap: lunar.is_leap_month(),
    })
}

/// Finds the table entry whose year contains `jdn`.
///
/// Only the hinted Gregorian year and the one before it can qualify, since
/// a lunisolar New Year falls in late January or February.
fn year_containing(jdn: i64, hint: i32) -> Result<&'static YearEntry, Error> {
    for year in [hint, hint - 1] {
        if let Ok(entry) = table::lookup(year) {
            let offset = jdn - entry.new_year_jdn();
            if offset >= 0 && offset < i64::from(entry.days_in_year()) {
                return Ok(entry);
            }
        }
    }
    Err(Error::OutOfRange(hint))
}
