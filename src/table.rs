//! Embedded lunisolar year table.
//!
//! One `u32` per year in the liblunar/calendar.js encoding: the low nibble
//! is the leap month index (0 = none), bit 16 says the leap month is long
//! (30 days), and bits 15..4 are long-month flags for months 1..=12. The
//! table is fixed reference data, not recomputed from new-moon ephemerides,
//! so results stay consistent with the published calendar.

use crate::Error;
use crate::consts::{MAX_TABLE_YEAR, MIN_TABLE_YEAR};
use once_cell::sync::Lazy;

/// JDN of 1900-01-31, the lunisolar New Year's Day of the first table year.
const EPOCH_NEW_YEAR_JDN: i64 = 2_415_051;

const LEAP_MONTH_MASK: u32 = 0xf;
const LEAP_LONG_BIT: u32 = 0x10000;
const MONTH_BITS_MASK: u32 = 0xfff0;

/// Days in a 12-month year if every month were short.
const BASE_YEAR_DAYS: u16 = 12 * 29;

#[rustfmt::skip]
static YEAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900-1909
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910-1919
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920-1929
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930-1939
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940-1949
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950-1959
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960-1969
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6, // 1970-1979
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980-1989
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990-1999
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000-2009
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010-2019
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020-2029
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030-2039
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040-2049
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050-2059
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060-2069
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070-2079
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080-2089
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090-2099
    0x0d520,                                                                                  // 2100
];

/// One decoded month of a lunisolar year, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthEntry {
    /// Month number 1..=12 (a leap month repeats its namesake's number)
    pub month: u8,
    /// `true` for the intercalary month
    pub leap: bool,
    /// Length in days, 29 or 30
    pub days: u8,
}

/// One lunisolar year of the embedded table.
#[derive(Debug, Clone, Copy)]
pub struct YearEntry {
    year: i32,
    info: u32,
    new_year_jdn: i64,
}

impl YearEntry {
    /// Returns the Gregorian/lunisolar year number of this entry
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the JDN of this year's lunisolar New Year's Day
    #[inline]
    pub const fn new_year_jdn(&self) -> i64 {
        self.new_year_jdn
    }

    /// Returns the leap month index, or `None` for a 12-month year
    pub const fn leap_month(&self) -> Option<u8> {
        let month = (self.info & LEAP_MONTH_MASK) as u8;
        if month == 0 { None } else { Some(month) }
    }

    /// Length of the leap month in days; only meaningful when
    /// [`YearEntry::leap_month`] is `Some`.
    pub const fn leap_month_days(&self) -> u8 {
        if self.info & LEAP_LONG_BIT != 0 { 30 } else { 29 }
    }

    /// Length in days of the regular month `1..=12`
    pub const fn month_days(&self, month: u8) -> u8 {
        debug_assert!(month >= 1 && month <= 12);
        if self.info & (LEAP_LONG_BIT >> month) != 0 {
            30
        } else {
            29
        }
    }

    /// Total number of days in the year (353..=355, or 383..=385 with a
    /// leap month).
    pub const fn days_in_year(&self) -> u16 {
        let leap = if self.leap_month().is_some() {
            self.leap_month_days() as u16
        } else {
            0
        };
        BASE_YEAR_DAYS + (self.info & MONTH_BITS_MASK).count_ones() as u16 + leap
    }

    /// Returns the year's 12 or 13 months in calendar order, the leap month
    /// directly after its namesake.
    pub fn months(&self) -> Vec<MonthEntry> {
        let mut months = Vec::with_capacity(13);
        for month in 1..=12 {
            months.push(MonthEntry {
                month,
                leap: false,
                days: self.month_days(month),
            });
            if self.leap_month() == Some(month) {
                months.push(MonthEntry {
                    month,
                    leap: true,
                    days: self.leap_month_days(),
                });
            }
        }
        months
    }
}

static TABLE: Lazy<Vec<YearEntry>> = Lazy::new(|| {
    let mut new_year_jdn = EPOCH_NEW_YEAR_JDN;
    YEAR_INFO
        .iter()
        .enumerate()
        .map(|(i, &info)| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let entry = YearEntry {
                year: MIN_TABLE_YEAR + i as i32,
                info,
                new_year_jdn,
            };
            new_year_jdn += i64::from(entry.days_in_year());
            entry
        })
        .collect()
});

/// Looks up the table entry for a lunisolar year.
///
/// # Errors
/// Returns `Error::OutOfRange` for years outside
/// `MIN_TABLE_YEAR..=MAX_TABLE_YEAR` (1900..=2100).
pub fn lookup(year: i32) -> Result<&'static YearEntry, Error> {
    if !(MIN_TABLE_YEAR..=MAX_TABLE_YEAR).contains(&year) {
        return Err(Error::OutOfRange(year));
    }
    #[allow(clippy::cast_sign_loss)]
    Ok(&TABLE[(year - MIN_TABLE_YEAR) as usize])
}
