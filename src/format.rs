//! liblunar-compatible `%(TOKEN)` template rendering.
//!
//! Tokens are resolved through a static map instead of a conditional chain,
//! so adding a spelling is one table line. The casing convention follows
//! liblunar: uppercase spellings render Chinese numerals or names,
//! lowercase spellings render Arabic numerals. Unrecognized tokens pass
//! through unchanged.

use crate::LunisolarDate;
use crate::consts::{BRANCH_NAMES, DIGIT_NAMES, LEAP_PREFIX, LUNAR_MONTH_NAMES};
use crate::sexagenary::{Pillars, hour_branch, zodiac_for_year};
use crate::table;
use phf::phf_map;

/// A recognized template token, keyed by its spelling in [`TOKENS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    SolarYear,
    SolarYearCn,
    SolarMonth,
    SolarMonthCn,
    SolarDay,
    SolarDayCn,
    SolarHour,
    SolarHourCn,
    LunarYear,
    LunarYearCn,
    LunarMonth,
    LunarMonthCn,
    LunarDay,
    LunarDayCn,
    Shichen,
    ShichenCn,
    YearPillar,
    MonthPillar,
    DayPillar,
    HourPillar,
    Zodiac,
    Festival,
}

/// Token spellings per the liblunar format grammar. The `Y8` family is the
/// bazi spelling of the same pillars the `Y60` family renders.
static TOKENS: phf::Map<&'static str, Token> = phf_map! {
    "year" => Token::SolarYear,
    "YEAR" => Token::SolarYearCn,
    "month" => Token::SolarMonth,
    "MONTH" => Token::SolarMonthCn,
    "day" => Token::SolarDay,
    "DAY" => Token::SolarDayCn,
    "hour" => Token::SolarHour,
    "HOUR" => Token::SolarHourCn,
    "nian" => Token::LunarYear,
    "NIAN" => Token::LunarYearCn,
    "yue" => Token::LunarMonth,
    "YUE" => Token::LunarMonthCn,
    "ri" => Token::LunarDay,
    "RI" => Token::LunarDayCn,
    "shi" => Token::Shichen,
    "SHI" => Token::ShichenCn,
    "Y60" => Token::YearPillar,
    "M60" => Token::MonthPillar,
    "D60" => Token::DayPillar,
    "H60" => Token::HourPillar,
    "Y8" => Token::YearPillar,
    "M8" => Token::MonthPillar,
    "D8" => Token::DayPillar,
    "H8" => Token::HourPillar,
    "shengxiao" => Token::Zodiac,
    "jieri" => Token::Festival,
};

/// Solar festivals keyed by `month * 100 + day`.
static SOLAR_FESTIVALS: phf::Map<u16, &'static str> = phf_map! {
    101u16 => "元旦",
    214u16 => "情人节",
    308u16 => "妇女节",
    312u16 => "植树节",
    401u16 => "愚人节",
    501u16 => "劳动节",
    504u16 => "青年节",
    601u16 => "儿童节",
    701u16 => "建党节",
    801u16 => "建军节",
    910u16 => "教师节",
    1001u16 => "国庆节",
    1225u16 => "圣诞节",
};

/// Lunar festivals keyed by `month * 100 + day`. New Year's Eve is not
/// here: it is the last day of the twelfth month, which can be the 29th or
/// the 30th depending on the year.
static LUNAR_FESTIVALS: phf::Map<u16, &'static str> = phf_map! {
    101u16 => "春节",
    115u16 => "元宵节",
    505u16 => "端午节",
    707u16 => "七夕",
    715u16 => "中元节",
    815u16 => "中秋节",
    909u16 => "重阳节",
    1208u16 => "腊八节",
};

const NEW_YEAR_EVE: &str = "除夕";

/// Expands every recognized `%(TOKEN)` in `template`.
///
/// Unrecognized tokens and unterminated `%(` sequences are copied through
/// literally.
pub(crate) fn render(date: &LunisolarDate, template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("%(") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find(')') else {
            out.push_str(&rest[start..]);
            return out;
        };
        match TOKENS.get(&after[..end]) {
            Some(&token) => {
                out.push_str(&expand(date, token));
                rest = &after[end + 1..];
            }
            None => {
                out.push_str("%(");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Looks up the festival of a day: lunar festivals first, then the New
/// Year's Eve rule, then solar festivals.
pub(crate) fn festival(date: &LunisolarDate) -> Option<&'static str> {
    let lunar = date.lunar();
    if !lunar.is_leap_month() {
        let key = u16::from(lunar.month()) * 100 + u16::from(lunar.day());
        if let Some(&name) = LUNAR_FESTIVALS.get(&key) {
            return Some(name);
        }
        if lunar.month() == 12 {
            // last day of the lunar year
            if let Ok(entry) = table::lookup(lunar.year()) {
                if lunar.day() == entry.month_days(12) {
                    return Some(NEW_YEAR_EVE);
                }
            }
        }
    }
    let solar = date.solar();
    let key = u16::from(solar.month()) * 100 + u16::from(solar.day());
    SOLAR_FESTIVALS.get(&key).copied()
}

fn expand(date: &LunisolarDate, token: Token) -> String {
    let solar = date.solar();
    let lunar = date.lunar();
    let pillars = || Pillars::new(lunar, solar.jdn());
    match token {
        Token::SolarYear => solar.year().to_string(),
        Token::SolarYearCn => chinese_year(solar.year()),
        Token::SolarMonth => solar.month().to_string(),
        Token::SolarMonthCn => chinese_number(u16::from(solar.month())),
        Token::SolarDay => solar.day().to_string(),
        Token::SolarDayCn => chinese_number(u16::from(solar.day())),
        Token::SolarHour => solar.hour().to_string(),
        Token::SolarHourCn => chinese_number(u16::from(solar.hour())),
        Token::LunarYear => lunar.year().to_string(),
        Token::LunarYearCn => chinese_year(lunar.year()),
        Token::LunarMonth => {
            if lunar.is_leap_month() {
                format!("{LEAP_PREFIX}{}", lunar.month())
            } else {
                lunar.month().to_string()
            }
        }
        Token::LunarMonthCn => lunar_month_name(lunar.month(), lunar.is_leap_month()),
        Token::LunarDay => lunar.day().to_string(),
        Token::LunarDayCn => lunar_day_name(lunar.day()),
        Token::Shichen => (hour_branch(solar.hour()) + 1).to_string(),
        Token::ShichenCn => BRANCH_NAMES[hour_branch(solar.hour()) as usize].to_owned(),
        Token::YearPillar => pillars().year.name(),
        Token::MonthPillar => pillars().month.name(),
        Token::DayPillar => pillars().day.name(),
        Token::HourPillar => pillars().hour.name(),
        Token::Zodiac => zodiac_for_year(lunar.year()).to_owned(),
        Token::Festival => festival(date).unwrap_or_default().to_owned(),
    }
}

/// Renders a year digit by digit, e.g. 2024 as 二〇二四.
fn chinese_year(year: i32) -> String {
    let digits = year.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() * 3 + 1);
    if year < 0 {
        out.push('-');
    }
    for digit in digits.bytes() {
        out.push_str(DIGIT_NAMES[usize::from(digit - b'0')]);
    }
    out
}

/// Renders a number below 100 in spoken form, e.g. 15 as 十五 and 31 as
/// 三十一.
fn chinese_number(n: u16) -> String {
    debug_assert!(n < 100);
    let (tens, ones) = (n / 10, n % 10);
    let mut out = String::with_capacity(9);
    match tens {
        0 => {}
        1 => out.push('十'),
        _ => {
            out.push_str(DIGIT_NAMES[usize::from(tens)]);
            out.push('十');
        }
    }
    if ones != 0 || n == 0 {
        out.push_str(DIGIT_NAMES[usize::from(ones)]);
    }
    out
}

/// The month name without the 月 suffix: 正, 二..十, 冬, 腊, with a 闰
/// prefix on leap months.
fn lunar_month_name(month: u8, leap: bool) -> String {
    debug_assert!((1..=12).contains(&month));
    let mut out = String::with_capacity(9);
    if leap {
        out.push_str(LEAP_PREFIX);
    }
    out.push_str(LUNAR_MONTH_NAMES[usize::from(month) - 1]);
    out
}

/// The day name: 初一 through 初十, 十一 through 十九, 二十, 廿一 through
/// 廿九, 三十.
fn lunar_day_name(day: u8) -> String {
    debug_assert!((1..=30).contains(&day));
    let mut out = String::with_capacity(6);
    match day {
        1..=10 => out.push('初'),
        11..=19 => out.push('十'),
        20 => out.push('二'),
        21..=29 => out.push('廿'),
        _ => out.push('三'),
    }
    let ones = day % 10;
    if ones == 0 {
        out.push('十');
    } else {
        out.push_str(DIGIT_NAMES[usize::from(ones)]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SolarDate;

    fn day(year: i32, month: u8, day: u8) -> LunisolarDate {
        LunisolarDate::from_solar(SolarDate::new(year, month, day).unwrap()).unwrap()
    }

    #[test]
    fn test_chinese_year() {
        assert_eq!(chinese_year(2024), "二〇二四");
        assert_eq!(chinese_year(1900), "一九〇〇");
        assert_eq!(chinese_year(2000), "二〇〇〇");
    }

    #[test]
    fn test_chinese_number() {
        assert_eq!(chinese_number(0), "〇");
        assert_eq!(chinese_number(3), "三");
        assert_eq!(chinese_number(10), "十");
        assert_eq!(chinese_number(15), "十五");
        assert_eq!(chinese_number(20), "二十");
        assert_eq!(chinese_number(31), "三十一");
    }

    #[test]
    fn test_lunar_month_name() {
        assert_eq!(lunar_month_name(1, false), "正");
        assert_eq!(lunar_month_name(6, true), "闰六");
        assert_eq!(lunar_month_name(11, false), "冬");
        assert_eq!(lunar_month_name(12, false), "腊");
    }

    #[test]
    fn test_lunar_day_name() {
        for (day, expected) in [
            (1, "初一"),
            (10, "初十"),
            (11, "十一"),
            (19, "十九"),
            (20, "二十"),
            (21, "廿一"),
            (29, "廿九"),
            (30, "三十"),
        ] {
            assert_eq!(lunar_day_name(day), expected);
        }
    }

    #[test]
    fn test_render_solar_arabic() {
        let date = day(2024, 3, 15);
        assert_eq!(
            date.strftime("%(year)年%(month)月%(day)日"),
            "2024年3月15日"
        );
    }

    #[test]
    fn test_render_solar_chinese() {
        let date = day(2024, 3, 15);
        assert_eq!(
            date.strftime("%(YEAR)年%(MONTH)月%(DAY)日"),
            "二〇二四年三月十五日"
        );
    }

    #[test]
    fn test_render_lunar() {
        // 2024-02-10 is lunar 2024 正月初一
        let date = day(2024, 2, 10);
        assert_eq!(
            date.strftime("%(NIAN)年%(YUE)月%(RI)"),
            "二〇二四年正月初一"
        );
        assert_eq!(date.strftime("%(nian)/%(yue)/%(ri)"), "2024/1/1");
    }

    #[test]
    fn test_render_leap_month() {
        let date = day(2017, 7, 23);
        assert_eq!(date.strftime("%(YUE)月%(RI)"), "闰六月初一");
        assert_eq!(date.strftime("%(yue)"), "闰6");
    }

    #[test]
    fn test_render_pillars() {
        // 2000-01-01: 己卯 year, 丙子 month, 戊午 day, 壬子 hour (hour 0)
        let date = day(2000, 1, 1);
        assert_eq!(
            date.strftime("%(Y60)年%(M60)月%(D60)日%(H60)时"),
            "己卯年丙子月戊午日壬子时"
        );
        // the bazi spellings render the same pillars
        assert_eq!(
            date.strftime("%(Y8)%(M8)%(D8)%(H8)"),
            date.strftime("%(Y60)%(M60)%(D60)%(H60)")
        );
    }

    #[test]
    fn test_render_shichen() {
        let date = LunisolarDate::from_solar(
            SolarDate::new(2010, 4, 2).unwrap().with_hour(18).unwrap(),
        )
        .unwrap();
        assert_eq!(date.strftime("%(SHI)时"), "酉时");
        assert_eq!(date.strftime("%(shi)"), "10");
        assert_eq!(date.strftime("%(hour)"), "18");
    }

    #[test]
    fn test_render_zodiac() {
        assert_eq!(day(2024, 2, 10).strftime("属%(shengxiao)"), "属龙");
        assert_eq!(day(2023, 6, 1).strftime("%(shengxiao)"), "兔");
    }

    #[test]
    fn test_render_festival() {
        assert_eq!(day(2024, 2, 10).strftime("%(jieri)"), "春节");
        assert_eq!(day(2024, 10, 1).strftime("%(jieri)"), "国庆节");
        assert_eq!(day(2024, 3, 14).strftime("%(jieri)"), "");
    }

    #[test]
    fn test_unrecognized_token_passes_through() {
        let date = day(2024, 3, 15);
        assert_eq!(date.strftime("%(bogus)"), "%(bogus)");
        assert_eq!(date.strftime("a %(bogus) b %(year)"), "a %(bogus) b 2024");
    }

    #[test]
    fn test_unterminated_token_passes_through() {
        let date = day(2024, 3, 15);
        assert_eq!(date.strftime("%(year"), "%(year");
        assert_eq!(date.strftime("100%"), "100%");
    }

    #[test]
    fn test_festival_lookup() {
        // lunar festival
        assert_eq!(day(2024, 2, 24).festival(), Some("元宵节")); // lunar 1-15
        // solar festival
        assert_eq!(day(2024, 1, 1).festival(), Some("元旦"));
        // New Year's Eve: 2023's twelfth month has 30 days
        assert_eq!(day(2024, 2, 9).festival(), Some("除夕"));
        // plain day
        assert_eq!(day(2024, 3, 14).festival(), None);
    }

    #[test]
    fn test_lunar_precedence_over_solar() {
        // 2012-04-01: solar 愚人节, lunar 2012-03-11 (no lunar festival)
        assert_eq!(day(2012, 4, 1).festival(), Some("愚人节"));
    }
}
