use crate::Error;
use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_MONTH_SUFFIX, LEAP_YEAR_CYCLE, MAX_HOUR, MAX_MONTH,
};
use crate::table;
use std::fmt;
use std::str::FromStr;

/// A validated Gregorian calendar date with an hour-of-day component.
///
/// The day is guaranteed to be valid for its year and month under the
/// Gregorian leap rule. The hour defaults to 0 and only matters for the
/// hour pillar; it never shifts the civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolarDate {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
}

impl SolarDate {
    /// Creates a new date with hour 0, validating all components.
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` if the year is before 1, the month is
    /// not in `1..=12`, or the day is out of range for the month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, Error> {
        if year < 1 || month == 0 || month > MAX_MONTH {
            return Err(Error::InvalidDate { year, month, day });
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::InvalidDate { year, month, day });
        }
        Ok(Self {
            year,
            month,
            day,
            hour: 0,
        })
    }

    /// Returns a copy of this date with the given hour of day.
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` if `hour` is not in `0..=23`.
    pub fn with_hour(self, hour: u8) -> Result<Self, Error> {
        if hour > MAX_HOUR {
            return Err(Error::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        Ok(Self { hour, ..self })
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns the hour of day (0..=23)
    #[inline]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the Julian Day Number of this date.
    ///
    /// The JDN is the neutral interchange point between the Gregorian and
    /// lunisolar sides of the crate.
    pub const fn jdn(self) -> i64 {
        jdn_from_gregorian(self.year, self.month, self.day)
    }

    /// Creates a date from a Julian Day Number (hour 0).
    ///
    /// Inverse of [`SolarDate::jdn`]: `SolarDate::from_jdn(d.jdn()) == Ok(d)`
    /// holds for every valid date with hour 0.
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` if the JDN falls before year 1.
    pub fn from_jdn(jdn: i64) -> Result<Self, Error> {
        let (year, month, day) = gregorian_from_jdn(jdn);
        Self::new(year, month, day)
    }

    /// Returns the ISO-8601 day of week, `1..=7` for Monday through Sunday.
    pub const fn day_of_week(self) -> u8 {
        (self.jdn().rem_euclid(7) + 1) as u8
    }

    /// Returns the ISO-8601 week number together with its week-based year,
    /// in `(year, week)` format.
    pub fn iso_week(self) -> (i32, u8) {
        // The ISO week of a date is the week of the Thursday nearest to it.
        let thursday = self.jdn() - i64::from(self.day_of_week()) + 4;
        let (year, _, _) = gregorian_from_jdn(thursday);
        let jan1 = jdn_from_gregorian(year, 1, 1);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let week = ((thursday - jan1) / 7 + 1) as u8;
        (year, week)
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for SolarDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_ymd(s)?;
        let month = parse_component(month)?;
        let day = parse_component(day)?;
        Self::new(parse_year(year)?, month, day)
    }
}

impl serde::Serialize for SolarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for SolarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A validated Chinese lunisolar calendar date.
///
/// The year is the lunisolar year number, i.e. the Gregorian year in which
/// that year's New Year falls. The day is guaranteed to fit the length of
/// its month in the embedded year table, and `leap` can only be set for the
/// month the table marks as that year's leap month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LunarDate {
    year: i32,
    month: u8,
    // leap sorts after the common month of the same number,
    // matching calendar order
    leap: bool,
    day: u8,
    hour: u8,
}

impl LunarDate {
    /// Creates a new lunar date with hour 0, validating against the
    /// embedded year table.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` if `year` is outside the table bounds,
    /// and `Error::InvalidLunar` if the month is not in `1..=12`, `leap` is
    /// set for a month the table does not mark as leap, or the day exceeds
    /// that month's length (29 or 30).
    pub fn new(year: i32, month: u8, day: u8, leap: bool) -> Result<Self, Error> {
        let entry = table::lookup(year)?;
        let invalid = Error::InvalidLunar {
            year,
            month,
            day,
            leap,
        };
        if month == 0 || month > MAX_MONTH {
            return Err(invalid);
        }
        if leap && entry.leap_month() != Some(month) {
            return Err(invalid);
        }
        let len = if leap {
            entry.leap_month_days()
        } else {
            entry.month_days(month)
        };
        if day == 0 || day > len {
            return Err(invalid);
        }
        Ok(Self {
            year,
            month,
            leap,
            day,
            hour: 0,
        })
    }

    /// Returns a copy of this date with the given hour of day.
    ///
    /// # Errors
    /// Returns `Error::InvalidLunar` if `hour` is not in `0..=23`.
    pub fn with_hour(self, hour: u8) -> Result<Self, Error> {
        if hour > MAX_HOUR {
            return Err(Error::InvalidLunar {
                year: self.year,
                month: self.month,
                day: self.day,
                leap: self.leap,
            });
        }
        Ok(Self { hour, ..self })
    }

    /// Returns the lunisolar year number
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12, without leap-month numbering)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of the lunar month (1..=30)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns `true` if this date falls in the year's leap month
    #[inline]
    pub const fn is_leap_month(self) -> bool {
        self.leap
    }

    /// Returns the hour of day (0..=23)
    #[inline]
    pub const fn hour(self) -> u8 {
        self.hour
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leap = if self.leap {
            LEAP_MONTH_SUFFIX.to_string()
        } else {
            String::new()
        };
        write!(
            f,
            "{:04}-{:02}{}-{:02}",
            self.year, self.month, leap, self.day
        )
    }
}

impl FromStr for LunarDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_ymd(s)?;
        let (month, leap) = match month.strip_suffix(LEAP_MONTH_SUFFIX) {
            Some(bare) => (bare, true),
            None => (month, false),
        };
        let month = parse_component(month)?;
        let day = parse_component(day)?;
        Self::new(parse_year(year)?, month, day, leap)
    }
}

impl serde::Serialize for LunarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for LunarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// --- helpers for bounds / validation ---

/// Gregorian leap year rule: divisible by 4 and not by 100, or by 400.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in the given Gregorian month, February adjusted by the leap rule.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Proleptic Gregorian date to Julian Day Number.
///
/// Relies on division truncating toward zero for the month shift, which is
/// what Rust's `/` does.
pub(crate) const fn jdn_from_gregorian(year: i32, month: u8, day: u8) -> i64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d
        - 32075
}

/// Julian Day Number to proleptic Gregorian `(year, month, day)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn gregorian_from_jdn(jdn: i64) -> (i32, u8, u8) {
    let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
    (year as i32, month as u8, day as u8)
}

fn split_ymd(s: &str) -> Result<(&str, &str, &str), Error> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidFormat(s.to_owned()));
    }
    let mut parts = trimmed.split(DATE_SEPARATOR);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d), None) => Ok((y, m, d)),
        _ => Err(Error::InvalidFormat(s.to_owned())),
    }
}

fn parse_year(s: &str) -> Result<i32, Error> {
    s.trim()
        .parse::<i32>()
        .map_err(|_| Error::InvalidFormat(s.to_owned()))
}

fn parse_component(s: &str) -> Result<u8, Error> {
    s.trim()
        .parse::<u8>()
        .map_err(|_| Error::InvalidFormat(s.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_new_valid() {
        assert!(SolarDate::new(2024, 1, 1).is_ok());
        assert!(SolarDate::new(2024, 2, 29).is_ok());
        assert!(SolarDate::new(2024, 12, 31).is_ok());
        assert!(SolarDate::new(1, 1, 1).is_ok());
    }

    #[test]
    fn test_solar_new_invalid() {
        assert!(matches!(
            SolarDate::new(2023, 2, 30),
            Err(Error::InvalidDate {
                year: 2023,
                month: 2,
                day: 30
            })
        ));
        assert!(SolarDate::new(2024, 0, 1).is_err());
        assert!(SolarDate::new(2024, 13, 1).is_err());
        assert!(SolarDate::new(2024, 4, 31).is_err());
        assert!(SolarDate::new(2024, 1, 0).is_err());
        assert!(SolarDate::new(0, 1, 1).is_err());
        assert!(SolarDate::new(-5, 1, 1).is_err());
    }

    #[test]
    fn test_solar_hour() {
        let date = SolarDate::new(2024, 3, 15).unwrap();
        assert_eq!(date.hour(), 0);
        assert_eq!(date.with_hour(23).unwrap().hour(), 23);
        assert!(date.with_hour(24).is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2400));
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(days_in_month(2023, month), expected[month as usize]);
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_jdn_known_values() {
        assert_eq!(SolarDate::new(2000, 1, 1).unwrap().jdn(), 2_451_545);
        assert_eq!(SolarDate::new(1970, 1, 1).unwrap().jdn(), 2_440_588);
        assert_eq!(SolarDate::new(2021, 9, 8).unwrap().jdn(), 2_459_466);
        assert_eq!(SolarDate::new(1900, 1, 31).unwrap().jdn(), 2_415_051);
    }

    #[test]
    fn test_from_jdn_known_values() {
        assert_eq!(
            SolarDate::from_jdn(2_451_545).unwrap(),
            SolarDate::new(2000, 1, 1).unwrap()
        );
        assert_eq!(
            SolarDate::from_jdn(2_440_588).unwrap(),
            SolarDate::new(1970, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_jdn_round_trip_full_range() {
        // every day from 1900-01-01 through 2100-12-31
        let start = SolarDate::new(1900, 1, 1).unwrap().jdn();
        let end = SolarDate::new(2100, 12, 31).unwrap().jdn();
        for jdn in start..=end {
            let date = SolarDate::from_jdn(jdn).unwrap();
            assert_eq!(date.jdn(), jdn, "{date}");
        }
    }

    #[test]
    fn test_day_of_week() {
        // 2000-01-01 was a Saturday
        assert_eq!(SolarDate::new(2000, 1, 1).unwrap().day_of_week(), 6);
        // 1970-01-01 was a Thursday
        assert_eq!(SolarDate::new(1970, 1, 1).unwrap().day_of_week(), 4);
        // 2021-09-08 was a Wednesday
        assert_eq!(SolarDate::new(2021, 9, 8).unwrap().day_of_week(), 3);
    }

    #[test]
    fn test_iso_week() {
        assert_eq!(SolarDate::new(2000, 1, 1).unwrap().iso_week(), (1999, 52));
        assert_eq!(SolarDate::new(1981, 1, 1).unwrap().iso_week(), (1981, 1));
        assert_eq!(SolarDate::new(1982, 1, 1).unwrap().iso_week(), (1981, 53));
        assert_eq!(SolarDate::new(2021, 9, 8).unwrap().iso_week(), (2021, 36));
    }

    #[test]
    fn test_solar_display_and_parse() {
        let date = SolarDate::new(2024, 3, 15).unwrap();
        assert_eq!(date.to_string(), "2024-03-15");
        assert_eq!("2024-03-15".parse::<SolarDate>().unwrap(), date);
        assert_eq!("2024-3-15".parse::<SolarDate>().unwrap(), date);
    }

    #[test]
    fn test_solar_parse_errors() {
        assert!(matches!(
            "".parse::<SolarDate>(),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-03".parse::<SolarDate>(),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-03-15-1".parse::<SolarDate>(),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-XX-15".parse::<SolarDate>(),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(
            "2023-02-30".parse::<SolarDate>(),
            Err(Error::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_solar_ordering() {
        let a = SolarDate::new(2024, 3, 15).unwrap();
        let b = SolarDate::new(2024, 3, 16).unwrap();
        let c = SolarDate::new(2024, 4, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_solar_serde() {
        let date = SolarDate::new(2024, 3, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2024-03-15""#);
        let parsed: SolarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let result: Result<SolarDate, _> = serde_json::from_str(r#""2023-02-30""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_lunar_new_valid() {
        // lunar 2023-01-01 is solar 2023-01-22
        assert!(LunarDate::new(2023, 1, 1, false).is_ok());
        // 2017 has a leap sixth month of 30 days
        assert!(LunarDate::new(2017, 6, 30, true).is_ok());
    }

    #[test]
    fn test_lunar_new_invalid() {
        // 2017's leap month is the sixth, not the fifth
        assert!(matches!(
            LunarDate::new(2017, 5, 1, true),
            Err(Error::InvalidLunar { .. })
        ));
        // 2023's leap month is the second
        assert!(LunarDate::new(2023, 2, 1, true).is_ok());
        assert!(LunarDate::new(2023, 3, 1, true).is_err());
        // month/day bounds
        assert!(LunarDate::new(2023, 13, 1, false).is_err());
        assert!(LunarDate::new(2023, 0, 1, false).is_err());
        assert!(LunarDate::new(2023, 1, 0, false).is_err());
        assert!(LunarDate::new(2023, 1, 31, false).is_err());
    }

    #[test]
    fn test_lunar_out_of_range() {
        assert!(matches!(
            LunarDate::new(1899, 1, 1, false),
            Err(Error::OutOfRange(1899))
        ));
        assert!(matches!(
            LunarDate::new(2101, 1, 1, false),
            Err(Error::OutOfRange(2101))
        ));
    }

    #[test]
    fn test_lunar_display_and_parse() {
        let date = LunarDate::new(2017, 6, 1, true).unwrap();
        assert_eq!(date.to_string(), "2017-06L-01");
        assert_eq!("2017-06L-01".parse::<LunarDate>().unwrap(), date);

        let date = LunarDate::new(2023, 1, 1, false).unwrap();
        assert_eq!(date.to_string(), "2023-01-01");
        assert_eq!("2023-01-01".parse::<LunarDate>().unwrap(), date);
    }

    #[test]
    fn test_lunar_ordering() {
        // the leap sixth month follows the common sixth month
        let common = LunarDate::new(2017, 6, 29, false).unwrap();
        let leap = LunarDate::new(2017, 6, 1, true).unwrap();
        let seventh = LunarDate::new(2017, 7, 1, false).unwrap();
        assert!(common < leap);
        assert!(leap < seventh);
    }

    #[test]
    fn test_lunar_serde() {
        let date = LunarDate::new(2017, 6, 15, true).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2017-06L-15""#);
        let parsed: LunarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
