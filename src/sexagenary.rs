//! Sexagenary (ganzhi) cycle arithmetic.
//!
//! The four pillars come from four independent counters: the lunisolar year
//! number, the month count since lunar 1900-01, the Julian Day Number (the
//! day pillar runs continuously over days and ignores month boundaries),
//! and the two-hour shichen slot combined with the day stem.

use crate::consts::{
    BRANCH_COUNT, BRANCH_NAMES, SEXAGENARY_CYCLE, STEM_COUNT, STEM_NAMES, ZODIAC_NAMES,
};
use crate::prelude::*;
use crate::types::LunarDate;

/// Year-pillar epoch: the sexagenary cycle is traditionally anchored so
/// that 2697 BC (astronomical -2696) opens a cycle with 甲子.
const YEAR_EPOCH_OFFSET: i64 = 2696;

/// Month-pillar epoch: lunar 1900-01 is 戊寅, the 15th term.
const MONTH_EPOCH_OFFSET: i64 = 14;

/// Day-pillar epoch offset against the JDN.
const DAY_EPOCH_OFFSET: i64 = 49;

/// A term of the 60-cycle, `1..=60` (1 is 甲子, 60 is 癸亥).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Into)]
#[display(fmt = "{}{}", "self.stem_name()", "self.branch_name()")]
pub struct Sexagenary(u8);

impl Sexagenary {
    /// Maps a 0-based cycle counter onto the 60-cycle.
    ///
    /// This is the single arithmetic rule behind all four pillars:
    /// `(counter mod 60) + 1`, with the per-pillar epoch offset already
    /// folded into `counter`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_cycle(counter: i64) -> Self {
        Self(counter.rem_euclid(SEXAGENARY_CYCLE as i64) as u8 + 1)
    }

    /// Returns the cycle index, `1..=60`
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the heavenly stem index, `1..=10`
    #[inline]
    pub const fn stem(self) -> u8 {
        (self.0 - 1) % STEM_COUNT + 1
    }

    /// Returns the earthly branch index, `1..=12`
    #[inline]
    pub const fn branch(self) -> u8 {
        (self.0 - 1) % BRANCH_COUNT + 1
    }

    /// Returns the stem character (甲..癸)
    pub const fn stem_name(self) -> &'static str {
        STEM_NAMES[(self.stem() - 1) as usize]
    }

    /// Returns the branch character (子..亥)
    pub const fn branch_name(self) -> &'static str {
        BRANCH_NAMES[(self.branch() - 1) as usize]
    }

    /// Returns the two-character cycle name, e.g. 甲子
    pub fn name(self) -> String {
        let mut name = String::with_capacity(6);
        name.push_str(self.stem_name());
        name.push_str(self.branch_name());
        name
    }
}

/// The four sexagenary pillars of one date and hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pillars {
    pub year: Sexagenary,
    pub month: Sexagenary,
    pub day: Sexagenary,
    pub hour: Sexagenary,
}

impl Pillars {
    /// Computes all four pillars for a lunisolar date and the JDN of the
    /// same day.
    pub fn new(lunar: LunarDate, jdn: i64) -> Self {
        let day = day_pillar(jdn);
        Self {
            year: year_pillar(lunar.year()),
            month: month_pillar(lunar.year(), lunar.month()),
            day,
            hour: hour_pillar(day, lunar.hour()),
        }
    }
}

/// Year pillar of a lunisolar year.
pub const fn year_pillar(lunar_year: i32) -> Sexagenary {
    Sexagenary::from_cycle(lunar_year.rem_euclid(60) as i64 + YEAR_EPOCH_OFFSET)
}

/// Month pillar of a lunisolar month.
///
/// Months are counted consecutively from lunar 1900-01; a leap month keeps
/// the pillar of its namesake month.
pub const fn month_pillar(lunar_year: i32, month: u8) -> Sexagenary {
    let count = (lunar_year - 1900) as i64 * 12 + (month - 1) as i64;
    Sexagenary::from_cycle(count + MONTH_EPOCH_OFFSET)
}

/// Day pillar, a continuous 60-cycle over the Julian Day Number.
pub const fn day_pillar(jdn: i64) -> Sexagenary {
    Sexagenary::from_cycle(jdn + DAY_EPOCH_OFFSET)
}

/// The 0-based shichen slot of an hour of day. Slot 0 (子) covers
/// 23:00 through 00:59, so hour 23 wraps into the next slot cycle while
/// staying on the same civil day.
pub const fn hour_branch(hour: u8) -> u8 {
    (hour + 1) / 2 % BRANCH_COUNT
}

/// Hour pillar from the day pillar and the hour of day.
///
/// The stem follows the five-rats rule: the 子-hour stem repeats with the
/// day stem in cycles of five, which collapses to a single 60-cycle lookup
/// keyed on `(day stem mod 5, hour branch)`.
pub const fn hour_pillar(day: Sexagenary, hour: u8) -> Sexagenary {
    let start = ((day.stem() - 1) % 5) as i64 * BRANCH_COUNT as i64;
    Sexagenary::from_cycle(start + hour_branch(hour) as i64)
}

/// Zodiac animal of a lunisolar year, from the year pillar's branch.
pub const fn zodiac_for_year(lunar_year: i32) -> &'static str {
    ZODIAC_NAMES[(year_pillar(lunar_year).branch() - 1) as usize]
}
