//! 12-hour 오전/오후 time normalization.

use std::str::FromStr;

/// Korean AM/PM marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// 오전 (AM)
    Am,
    /// 오후 (PM)
    Pm,
}

impl FromStr for Meridiem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "오전" => Ok(Meridiem::Am),
            "오후" => Ok(Meridiem::Pm),
            _ => Err(format!("Unknown meridiem: '{s}'. Expected 오전 or 오후")),
        }
    }
}

/// Converts a 12-hour clock reading to 24-hour `(hour, minute)`.
///
/// Hours outside 1–12 and minutes outside 0–59 are rejected.
///
/// ```
/// use kakaopack::parsing::{Meridiem, to_24_hour};
///
/// assert_eq!(to_24_hour(12, 0, Meridiem::Am), Some((0, 0)));
/// assert_eq!(to_24_hour(1, 5, Meridiem::Pm), Some((13, 5)));
/// assert_eq!(to_24_hour(13, 0, Meridiem::Pm), None);
/// ```
pub fn to_24_hour(hour: u32, minute: u32, meridiem: Meridiem) -> Option<(u32, u32)> {
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let hour = match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Pm, h) if h < 12 => h + 12,
        (_, h) => h,
    };

    Some((hour, minute))
}

/// Normalizes raw `"오후"` + `"1:05"` strings into `"13:05"`.
///
/// Returns `None` if the marker, the `h:mm` shape, or the range is invalid.
pub fn normalize_time(meridiem: &str, clock: &str) -> Option<String> {
    let meridiem = meridiem.parse::<Meridiem>().ok()?;
    let (hour, minute) = clock.split_once(':')?;
    let (hour, minute) = to_24_hour(hour.parse().ok()?, minute.parse().ok()?, meridiem)?;
    Some(format!("{hour:02}:{minute:02}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_table() {
        assert_eq!(normalize_time("오전", "12:00").as_deref(), Some("00:00"));
        assert_eq!(normalize_time("오후", "12:00").as_deref(), Some("12:00"));
        assert_eq!(normalize_time("오후", "1:05").as_deref(), Some("13:05"));
        assert_eq!(normalize_time("오전", "11:59").as_deref(), Some("11:59"));
    }

    #[test]
    fn test_am_passthrough() {
        assert_eq!(normalize_time("오전", "9:07").as_deref(), Some("09:07"));
        assert_eq!(normalize_time("오전", "1:00").as_deref(), Some("01:00"));
    }

    #[test]
    fn test_pm_late_evening() {
        assert_eq!(normalize_time("오후", "11:59").as_deref(), Some("23:59"));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(to_24_hour(0, 30, Meridiem::Am), None);
        assert_eq!(to_24_hour(13, 0, Meridiem::Pm), None);
        assert_eq!(to_24_hour(10, 60, Meridiem::Am), None);
        assert!(normalize_time("오후", "24:00").is_none());
    }

    #[test]
    fn test_malformed_input_rejected() {
        assert!(normalize_time("AM", "1:00").is_none());
        assert!(normalize_time("오전", "100").is_none());
        assert!(normalize_time("오전", "a:bc").is_none());
    }

    #[test]
    fn test_meridiem_from_str() {
        assert_eq!("오전".parse::<Meridiem>().unwrap(), Meridiem::Am);
        assert_eq!("오후".parse::<Meridiem>().unwrap(), Meridiem::Pm);
        assert!("정오".parse::<Meridiem>().is_err());
    }
}
