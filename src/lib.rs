//! Chinese lunisolar calendar conversion for the years 1900 through 2100.
//!
//! The crate converts between Gregorian dates ([`SolarDate`]) and Chinese
//! lunisolar dates ([`LunarDate`]) through an embedded year table, computes
//! the four sexagenary pillars and the zodiac animal, and renders dates
//! through liblunar-style `%(TOKEN)` templates.
//!
//! ```
//! use lunisolar::{LunisolarDate, SolarDate};
//!
//! let date = LunisolarDate::from_solar(SolarDate::new(2024, 2, 10)?)?;
//! assert_eq!(date.lunar().to_string(), "2024-01-01");
//! assert_eq!(date.strftime("%(NIAN)年%(YUE)月%(RI)"), "二〇二四年正月初一");
//! assert_eq!(date.zodiac(), "龙");
//! assert_eq!(date.festival(), Some("春节"));
//! # Ok::<(), lunisolar::Error>(())
//! ```

pub mod consts;
mod convert;
mod format;
mod prelude;
pub mod sexagenary;
pub mod table;
mod types;

pub use convert::{lunar_to_solar, solar_to_lunar};
pub use sexagenary::{Pillars, Sexagenary};
pub use types::{LunarDate, SolarDate, days_in_month, is_leap_year};

/// All the ways a date can fail to exist or to parse.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The components do not name a Gregorian calendar day, or the hour is
    /// not in `0..=23`.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    /// The components do not name a day of the embedded lunisolar table,
    /// or the hour is not in `0..=23`.
    #[error("invalid lunisolar date {year:04}-{month:02}{}-{day:02}", if *leap { "L" } else { "" })]
    InvalidLunar {
        year: i32,
        month: u8,
        day: u8,
        leap: bool,
    },

    /// The year falls outside the embedded table.
    #[error("year {0} is outside the supported range 1900..=2100")]
    OutOfRange(i32),

    /// The string is not a `YYYY-MM-DD` (or `YYYY-MML-DD`) date.
    #[error("unrecognized date string {0:?}")]
    InvalidFormat(String),
}

/// A day seen through both calendars at once.
///
/// Built from either side, it carries the solar and lunisolar views of the
/// same day (and hour) and is the entry point for the derived values:
/// pillars, zodiac, festival, template rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunisolarDate {
    solar: SolarDate,
    lunar: LunarDate,
}

impl LunisolarDate {
    /// Builds the combined view from a solar date.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` when the day is not covered by the
    /// embedded table.
    pub fn from_solar(solar: SolarDate) -> Result<Self, Error> {
        let lunar = solar_to_lunar(solar)?;
        Ok(Self { solar, lunar })
    }

    /// Builds the combined view from a lunisolar date.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` when the year is not covered by the
    /// embedded table.
    pub fn from_lunar(lunar: LunarDate) -> Result<Self, Error> {
        let solar = lunar_to_solar(lunar)?;
        Ok(Self { solar, lunar })
    }

    /// Returns the solar view of this day
    #[inline]
    pub const fn solar(&self) -> SolarDate {
        self.solar
    }

    /// Returns the lunisolar view of this day
    #[inline]
    pub const fn lunar(&self) -> LunarDate {
        self.lunar
    }

    /// Returns the four sexagenary pillars of this day and hour.
    pub fn pillars(&self) -> Pillars {
        Pillars::new(self.lunar, self.solar.jdn())
    }

    /// Returns the zodiac animal of the lunisolar year.
    pub const fn zodiac(&self) -> &'static str {
        sexagenary::zodiac_for_year(self.lunar.year())
    }

    /// Returns the festival of this day, if any. Lunisolar festivals win
    /// over solar ones when both fall on the same day.
    pub fn festival(&self) -> Option<&'static str> {
        format::festival(self)
    }

    /// Expands a liblunar-style template, e.g.
    /// `"%(YUE)月%(RI) %(jieri)"`. Unrecognized tokens are left in place.
    pub fn strftime(&self, template: &str) -> String {
        format::render(self, template)
    }
}

impl std::fmt::Display for LunisolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.solar, self.lunar)
    }
}
