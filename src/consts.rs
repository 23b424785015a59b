/// First year covered by the embedded lunisolar table (inclusive)
pub const MIN_TABLE_YEAR: i32 = 1900;

/// Last year covered by the embedded lunisolar table (inclusive)
pub const MAX_TABLE_YEAR: i32 = 2100;

/// Maximum valid month (December / the twelfth lunar month)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Maximum valid hour of day
pub const MAX_HOUR: u8 = 23;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Length of the stem-branch cycle
pub const SEXAGENARY_CYCLE: u8 = 60;
/// Number of heavenly stems (天干)
pub const STEM_COUNT: u8 = 10;
/// Number of earthly branches (地支)
pub const BRANCH_COUNT: u8 = 12;

/// The ten heavenly stems, 甲 through 癸 (index 0 is 甲)
pub const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// The twelve earthly branches, 子 through 亥 (index 0 is 子)
pub const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Zodiac animals, indexed by earthly branch (子 is 鼠)
pub const ZODIAC_NAMES: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// Chinese digits 〇 through 九, used for digit-wise year rendering
pub const DIGIT_NAMES: [&str; 10] = ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Lunar month names without the trailing 月 (index 0 is 正)
pub const LUNAR_MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

/// Prefix marking a leap lunar month
pub const LEAP_PREFIX: &str = "闰";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Suffix marking a leap month in the textual lunar date form (`2017-06L-01`)
pub const LEAP_MONTH_SUFFIX: char = 'L';
