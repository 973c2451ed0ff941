//! Other-party name inference from CSV export filenames.
//!
//! KakaoTalk names CSV exports `KakaoTalk_Chat_<name>_<YYYY-MM-DD-HH-mm-ss>.csv`.
//! The name itself may contain underscores, so everything between `Chat`
//! and the first date-like token belongs to it.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static DATE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap());

/// Returns the other-party name encoded in `filename`, or `None` if the
/// filename doesn't follow the KakaoTalk pattern.
///
/// ```
/// use kakaopack::parsing::other_party_from_filename;
///
/// assert_eq!(
///     other_party_from_filename("KakaoTalk_Chat_김_수민_2025-12-12-15-11-12.csv").as_deref(),
///     Some("김_수민"),
/// );
/// assert_eq!(other_party_from_filename("export.csv"), None);
/// ```
pub fn other_party_from_filename(filename: &str) -> Option<String> {
    let stem = file_stem(filename);
    let parts: Vec<&str> = stem.split('_').collect();

    if parts.len() < 3 || parts[0] != "KakaoTalk" || parts[1] != "Chat" {
        return None;
    }

    match parts.iter().position(|p| DATE_TOKEN.is_match(p)) {
        Some(idx) if idx > 2 => Some(parts[2..idx].join("_")),
        Some(_) => None,
        None => Some(parts[2].to_string()),
    }
}

/// Final path component with a `.csv` or `.txt` extension removed.
///
/// Any other dot belongs to the display name.
fn file_stem(filename: &str) -> &str {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    match name.rsplit_once('.') {
        Some((stem, ext)) if ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("txt") => {
            stem
        }
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_filename() {
        assert_eq!(
            other_party_from_filename("KakaoTalk_Chat_김수민_2025-12-12-15-11-12.csv").as_deref(),
            Some("김수민")
        );
    }

    #[test]
    fn test_name_with_underscores() {
        assert_eq!(
            other_party_from_filename("KakaoTalk_Chat_team_alpha_2024-01-02-03-04-05.csv")
                .as_deref(),
            Some("team_alpha")
        );
    }

    #[test]
    fn test_no_date_token_falls_back_to_third_token() {
        assert_eq!(
            other_party_from_filename("KakaoTalk_Chat_지수_backup.csv").as_deref(),
            Some("지수")
        );
    }

    #[test]
    fn test_date_right_after_chat_is_unresolved() {
        assert_eq!(
            other_party_from_filename("KakaoTalk_Chat_2025-12-12-15-11-12.csv"),
            None
        );
    }

    #[test]
    fn test_non_kakao_filename() {
        assert_eq!(other_party_from_filename("chat.csv"), None);
        assert_eq!(other_party_from_filename("Kakao_Chat_지수_2024-01-01.csv"), None);
        assert_eq!(other_party_from_filename("KakaoTalk_Chat.csv"), None);
        assert_eq!(other_party_from_filename(""), None);
    }

    #[test]
    fn test_directory_components_ignored() {
        assert_eq!(
            other_party_from_filename("/home/me/KakaoTalk_Chat_Bob_2024-06-01-10-00-00.csv")
                .as_deref(),
            Some("Bob")
        );
    }

    #[test]
    fn test_dots_in_name_preserved() {
        assert_eq!(
            other_party_from_filename("KakaoTalk_Chat_Mr.Kim_2024-06-01-10-00-00.csv").as_deref(),
            Some("Mr.Kim")
        );
        assert_eq!(file_stem("KakaoTalk_Chat_Mr.Kim_backup"), "KakaoTalk_Chat_Mr.Kim_backup");
    }

    #[test]
    fn test_only_known_extensions_stripped() {
        assert_eq!(other_party_from_filename("KakaoTalk_Chat_Mr.Kim").as_deref(), Some("Mr.Kim"));
        assert_eq!(
            other_party_from_filename("KakaoTalk_Chat_Mr.Kim.CSV").as_deref(),
            Some("Mr.Kim")
        );
        assert_eq!(file_stem("KakaoTalk_Chat_지수.txt"), "KakaoTalk_Chat_지수");
        assert_eq!(file_stem("KakaoTalk_Chat_J.Lee"), "KakaoTalk_Chat_J.Lee");
    }
}
