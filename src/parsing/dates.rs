//! Day boundaries: Korean date labels and date-change detection.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Weekday names indexed by days since Sunday.
pub const KOREAN_WEEKDAYS: [&str; 7] = [
    "일요일", "월요일", "화요일", "수요일", "목요일", "금요일", "토요일",
];

// "2025년 10월 31일 금요일" -> (2025, 10, 31)
static BANNER_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})년 (\d{1,2})월 (\d{1,2})일").unwrap());

/// Extracts the calendar date from a Korean date string such as
/// `"2025년 10월 31일 금요일"`.
///
/// Returns `None` when the pattern is missing or the date doesn't exist.
pub fn parse_banner_date(text: &str) -> Option<NaiveDate> {
    let caps = BANNER_DATE.captures(text)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `YYYY-MM-DD` key for a Korean date string, zero-padded from its digits.
///
/// Unlike [`parse_banner_date`] this doesn't check the calendar, so a
/// banner such as `"2024년 2월 30일"` still keys its messages.
pub fn banner_date_key(text: &str) -> Option<String> {
    let caps = BANNER_DATE.captures(text)?;
    Some(format!("{}-{:0>2}-{:0>2}", &caps[1], &caps[2], &caps[3]))
}

/// Formats a date as `"YYYY년 M월 D일 <weekday>"`, without leading zeros.
///
/// ```
/// use chrono::NaiveDate;
/// use kakaopack::parsing::korean_date_label;
///
/// let date = NaiveDate::from_ymd_opt(2025, 12, 12).unwrap();
/// assert_eq!(korean_date_label(date), "2025년 12월 12일 금요일");
/// ```
pub fn korean_date_label(date: NaiveDate) -> String {
    let weekday = KOREAN_WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    format!(
        "{}년 {}월 {}일 {}",
        date.year(),
        date.month(),
        date.day(),
        weekday
    )
}

/// Canonical `YYYY-MM-DD` key for a date.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Tracks the most recently emitted day so that exactly one separator is
/// produced per run of same-day messages.
#[derive(Debug, Default)]
pub struct DateMarkerEmitter {
    last_key: Option<String>,
}

impl DateMarkerEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `key` and returns `true` if it differs from the previous one.
    pub fn observe(&mut self, key: &str) -> bool {
        if self.last_key.as_deref() == Some(key) {
            return false;
        }
        self.last_key = Some(key.to_string());
        true
    }

    /// The last emitted date key, if any.
    pub fn last_key(&self) -> Option<&str> {
        self.last_key.as_deref()
    }
}
